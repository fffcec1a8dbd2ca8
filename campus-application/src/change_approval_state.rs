use super::*;

pub fn approve_place(
    connections: &sqlite::Connections,
    place_id: PlaceId,
    actor: &str,
    subject_name_hint: Option<&str>,
) -> Result<Place> {
    let place = connections.exclusive()?.transaction(|conn| {
        usecases::approve_place(conn, place_id, actor, subject_name_hint)
    })?;
    info!("{actor} approved place {place_id}");
    Ok(place)
}

pub fn return_place_to_construction(
    connections: &sqlite::Connections,
    place_id: PlaceId,
    actor: &str,
) -> Result<Place> {
    let place = connections
        .exclusive()?
        .transaction(|conn| usecases::return_place_to_construction(conn, place_id, actor))?;
    info!("{actor} returned place {place_id} to construction");
    Ok(place)
}

pub fn approve_route(
    connections: &sqlite::Connections,
    route_id: RouteId,
    actor: &str,
) -> Result<Route> {
    let route = connections
        .exclusive()?
        .transaction(|conn| usecases::approve_route(conn, route_id, actor))?;
    info!("{actor} approved route {route_id}");
    Ok(route)
}

pub fn return_route_to_construction(
    connections: &sqlite::Connections,
    route_id: RouteId,
    actor: &str,
) -> Result<Route> {
    let route = connections
        .exclusive()?
        .transaction(|conn| usecases::return_route_to_construction(conn, route_id, actor))?;
    info!("{actor} returned route {route_id} to construction");
    Ok(route)
}
