use super::*;

pub fn create_place(
    connections: &sqlite::Connections,
    new_place: usecases::NewPlace,
    actor: &str,
) -> Result<Place> {
    let place = connections
        .exclusive()?
        .transaction(|conn| usecases::create_place(conn, new_place, actor))
        .inspect_err(|err| {
            warn!("Failed to create place: {err}");
        })?;
    Ok(place)
}
