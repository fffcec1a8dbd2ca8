use super::*;

pub fn create_route(
    connections: &sqlite::Connections,
    new_route: usecases::NewRoute,
    actor: &str,
) -> Result<Route> {
    let route = connections
        .exclusive()?
        .transaction(|conn| usecases::create_route(conn, new_route, actor))
        .inspect_err(|err| {
            warn!("Failed to create route: {err}");
        })?;
    Ok(route)
}
