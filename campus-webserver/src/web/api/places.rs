use super::*;

#[post("/places/approve", data = "<params>")]
pub fn post_approve_place(
    db: sqlite::Connections,
    auth: Auth,
    params: JsonResult<json::ApprovePlace>,
) -> Result<json::Success> {
    let json::ApprovePlace { id, nombre_lugar } = params?.into_inner();
    let place_id: PlaceId = required_id(id)?;
    let account = auth.account()?;
    flows::approve_place(
        &db,
        place_id,
        account.display_name(),
        nombre_lugar.as_deref(),
    )?;
    Ok(Json(json::Success { success: true }))
}

#[post("/places/devolver-espera", data = "<params>")]
pub fn post_return_place(
    db: sqlite::Connections,
    auth: Auth,
    params: JsonResult<json::PlaceIdParam>,
) -> Result<json::SuccessMessage> {
    let place_id: PlaceId = required_id(params?.into_inner().id)?;
    let account = auth.account()?;
    let place = flows::return_place_to_construction(&db, place_id, account.display_name())?;
    let message = usecases::history_message(
        SubjectKind::Place,
        HistoryOperation::ReturnToConstruction,
        &place.name,
    );
    Ok(Json(json::SuccessMessage {
        success: true,
        message,
    }))
}

#[get("/places/historico?<id_ubicacion>&<limit>&<offset>")]
pub fn get_place_history(
    db: sqlite::Connections,
    id_ubicacion: Option<IdValue>,
    limit: Option<&str>,
    offset: Option<&str>,
) -> Result<json::PlaceHistory> {
    let query = HistoryQuery {
        subject_id: id_ubicacion.map(PlaceId::from),
        pagination: pagination(offset, limit)?,
    };
    let usecases::HistoryPage {
        records,
        total_count,
    } = usecases::query_history(&db.shared()?, &query)?;
    Ok(Json(json::PlaceHistory {
        success: true,
        data: records.into_iter().map(Into::into).collect(),
        count: total_count,
        params: json::PlaceHistoryParams {
            id_ubicacion,
            limit: query.pagination.limit,
            offset: query.pagination.offset,
        },
    }))
}

#[post("/places", format = "application/json", data = "<new_place>")]
pub fn post_place(
    db: sqlite::Connections,
    auth: Auth,
    new_place: JsonResult<json::NewPlace>,
) -> Result<json::Place> {
    let new_place = from_json::new_place(new_place?.into_inner());
    let account = auth.account()?;
    let place = flows::create_place(&db, new_place, account.display_name())?;
    Ok(Json(place.into()))
}

#[get("/places?<id_campus>")]
pub fn get_places(db: sqlite::Connections, id_campus: Option<IdValue>) -> Result<Vec<json::Place>> {
    let places = usecases::list_places(&db.shared()?, id_campus.map(CampusId::from))?;
    Ok(Json(places.into_iter().map(Into::into).collect()))
}

#[get("/places/<id>", rank = 2)]
pub fn get_place(db: sqlite::Connections, id: IdValue) -> Result<json::Place> {
    let place = usecases::get_place(&db.shared()?, id.into())?;
    Ok(Json(place.into()))
}

#[put("/places/<id>", format = "application/json", data = "<place>")]
pub fn put_place(
    db: sqlite::Connections,
    auth: Auth,
    id: IdValue,
    place: JsonResult<json::NewPlace>,
) -> Result<json::Place> {
    let place = from_json::new_place(place?.into_inner());
    let account = auth.account()?;
    let place = flows::update_place(&db, id.into(), place, account.display_name())?;
    Ok(Json(place.into()))
}

#[delete("/places/<id>")]
pub fn delete_place(db: sqlite::Connections, auth: Auth, id: IdValue) -> Result<json::Success> {
    let account = auth.account()?;
    flows::delete_place(&db, id.into(), account.display_name())?;
    Ok(Json(json::Success { success: true }))
}
