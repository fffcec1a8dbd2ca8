use super::*;

pub fn delete_route(connections: &sqlite::Connections, id: RouteId, actor: &str) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_route(conn, id, actor))?;
    info!("{actor} deleted route {id}");
    Ok(())
}
