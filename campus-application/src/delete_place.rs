use super::*;

pub fn delete_place(connections: &sqlite::Connections, id: PlaceId, actor: &str) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_place(conn, id, actor))?;
    info!("{actor} deleted place {id}");
    Ok(())
}
