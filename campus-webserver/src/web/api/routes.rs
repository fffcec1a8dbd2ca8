use super::*;

fn success_message(route: &Route, operation: HistoryOperation) -> json::SuccessMessage {
    json::SuccessMessage {
        success: true,
        message: usecases::history_message(SubjectKind::Route, operation, &route.name),
    }
}

#[post("/routes/aprobar", data = "<params>")]
pub fn post_approve_route(
    db: sqlite::Connections,
    auth: Auth,
    params: JsonResult<json::RouteIdParam>,
) -> Result<json::SuccessMessage> {
    let route_id: RouteId = required_id(params?.into_inner().id_ruta)?;
    let account = auth.account()?;
    let route = flows::approve_route(&db, route_id, account.display_name())?;
    Ok(Json(success_message(&route, HistoryOperation::Approve)))
}

#[post("/routes/devolver-espera", data = "<params>")]
pub fn post_return_route(
    db: sqlite::Connections,
    auth: Auth,
    params: JsonResult<json::RouteIdParam>,
) -> Result<json::SuccessMessage> {
    let route_id: RouteId = required_id(params?.into_inner().id_ruta)?;
    let account = auth.account()?;
    let route = flows::return_route_to_construction(&db, route_id, account.display_name())?;
    Ok(Json(success_message(
        &route,
        HistoryOperation::ReturnToConstruction,
    )))
}

#[get("/routes/historico?<id_ruta>&<limit>&<offset>")]
pub fn get_route_history(
    db: sqlite::Connections,
    id_ruta: Option<IdValue>,
    limit: Option<&str>,
    offset: Option<&str>,
) -> Result<json::RouteHistory> {
    let query = HistoryQuery {
        subject_id: id_ruta.map(RouteId::from),
        pagination: pagination(offset, limit)?,
    };
    let page = usecases::query_history(&db.shared()?, &query)?;
    Ok(Json(json::RouteHistory {
        success: true,
        data: page.records.into_iter().map(Into::into).collect(),
        count: page.total_count,
    }))
}

#[post("/routes", format = "application/json", data = "<new_route>")]
pub fn post_route(
    db: sqlite::Connections,
    auth: Auth,
    new_route: JsonResult<json::NewRoute>,
) -> Result<json::Route> {
    let new_route = from_json::new_route(new_route?.into_inner());
    let account = auth.account()?;
    let route = flows::create_route(&db, new_route, account.display_name())?;
    Ok(Json(route.into()))
}

#[get("/routes?<id_campus>")]
pub fn get_routes(db: sqlite::Connections, id_campus: Option<IdValue>) -> Result<Vec<json::Route>> {
    let routes = usecases::list_routes(&db.shared()?, id_campus.map(CampusId::from))?;
    Ok(Json(routes.into_iter().map(Into::into).collect()))
}

#[get("/routes/<id>", rank = 2)]
pub fn get_route(db: sqlite::Connections, id: IdValue) -> Result<json::Route> {
    let route = usecases::get_route(&db.shared()?, id.into())?;
    Ok(Json(route.into()))
}

#[put("/routes/<id>", format = "application/json", data = "<route>")]
pub fn put_route(
    db: sqlite::Connections,
    auth: Auth,
    id: IdValue,
    route: JsonResult<json::NewRoute>,
) -> Result<json::Route> {
    let route = from_json::new_route(route?.into_inner());
    let account = auth.account()?;
    let route = flows::update_route(&db, id.into(), route, account.display_name())?;
    Ok(Json(route.into()))
}

#[delete("/routes/<id>")]
pub fn delete_route(db: sqlite::Connections, auth: Auth, id: IdValue) -> Result<json::Success> {
    let account = auth.account()?;
    flows::delete_route(&db, id.into(), account.display_name())?;
    Ok(Json(json::Success { success: true }))
}
