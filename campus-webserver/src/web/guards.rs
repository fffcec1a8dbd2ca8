use std::collections::HashMap;

use rocket::{
    self,
    request::{FromRequest, Outcome, Request},
};
use serde_json::Value as JsonValue;

use campus_application::error::AppError;
use campus_core::usecases::Error as ParameterError;

pub const COOKIE_USER_KEY: &str = "user";

// Attributes of the CAS payload that may carry a human
// readable name, in order of preference.
const DISPLAY_NAME_ATTRIBUTES: [&str; 3] = ["displayName", "cn", "nombre"];

type Result<T> = std::result::Result<T, AppError>;

/// The payload of a successful CAS authentication.
#[derive(Debug, Deserialize)]
struct CasUser {
    user: String,
    #[serde(default)]
    attributes: HashMap<String, JsonValue>,
}

fn attribute_text(value: &JsonValue) -> Option<&str> {
    match value {
        JsonValue::String(text) => Some(text.trim()).filter(|t| !t.is_empty()),
        // Multi-valued attributes
        JsonValue::Array(values) => values.iter().find_map(attribute_text),
        _ => None,
    }
}

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    login: String,
    display_name: String,
}

impl Account {
    pub fn login(&self) -> &str {
        &self.login
    }

    /// The name that is recorded as the actor of mutations.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    fn from_cas_payload(payload: &str) -> Option<Self> {
        let CasUser { user, attributes } = serde_json::from_str(payload)
            .inspect_err(|err| debug!("Invalid CAS payload in session cookie: {err}"))
            .ok()?;
        let login = user.trim();
        if login.is_empty() {
            return None;
        }
        let display_name = DISPLAY_NAME_ATTRIBUTES
            .iter()
            .find_map(|key| attributes.get(*key).and_then(attribute_text))
            .unwrap_or(login)
            .to_owned();
        Some(Self {
            login: login.to_owned(),
            display_name,
        })
    }
}

#[derive(Debug)]
pub struct Auth {
    account: Option<Account>,
}

impl Auth {
    pub fn account(&self) -> Result<&Account> {
        self.account
            .as_ref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    fn account_from_cookie(request: &Request) -> Option<Account> {
        request
            .cookies()
            .get_private(COOKIE_USER_KEY)
            .and_then(|cookie| Account::from_cas_payload(cookie.value()))
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let account = Self::account_from_cookie(request);
        Outcome::Success(Self { account })
    }
}
