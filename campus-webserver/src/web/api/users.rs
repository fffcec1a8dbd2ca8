use super::*;

#[get("/users/current")]
pub fn get_current_user(auth: Auth) -> Result<json::CurrentUser> {
    let account = auth.account()?;
    Ok(Json(json::CurrentUser {
        user: account.login().to_owned(),
        nombre: account.display_name().to_owned(),
    }))
}

#[post("/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Json<json::Success> {
    cookies.remove_private(COOKIE_USER_KEY);
    Json(json::Success { success: true })
}
