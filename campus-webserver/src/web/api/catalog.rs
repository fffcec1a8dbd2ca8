use super::*;

pub(crate) fn load_place_types(
    db: &sqlite::Connections,
) -> result::Result<Vec<json::PlaceType>, ApiError> {
    let place_types = usecases::all_place_types(&db.shared()?)?;
    debug!("Loaded {} place types", place_types.len());
    Ok(place_types.into_iter().map(Into::into).collect())
}

pub(crate) fn load_route_types(
    db: &sqlite::Connections,
) -> result::Result<Vec<json::RouteType>, ApiError> {
    let route_types = usecases::all_route_types(&db.shared()?)?;
    debug!("Loaded {} route types", route_types.len());
    Ok(route_types.into_iter().map(Into::into).collect())
}

#[get("/campus")]
pub fn get_campuses(db: sqlite::Connections) -> Result<Vec<json::Campus>> {
    let campuses = usecases::all_campuses(&db.shared()?)?;
    Ok(Json(campuses.into_iter().map(Into::into).collect()))
}

#[get("/places/tipos")]
pub fn get_place_types(
    db: sqlite::Connections,
    cache: &State<PlaceTypesCache>,
) -> Result<Vec<json::PlaceType>> {
    let place_types = cache.get(|| load_place_types(&db))?;
    Ok(Json(place_types))
}

#[get("/routes/tipos")]
pub fn get_route_types(
    db: sqlite::Connections,
    cache: &State<RouteTypesCache>,
) -> Result<Vec<json::RouteType>> {
    let route_types = cache.get(|| load_route_types(&db))?;
    Ok(Json(route_types))
}
