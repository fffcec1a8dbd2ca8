use super::*;

pub fn update_route(
    connections: &sqlite::Connections,
    id: RouteId,
    update_route: usecases::UpdateRoute,
    actor: &str,
) -> Result<Route> {
    let route = connections
        .exclusive()?
        .transaction(|conn| usecases::update_route(conn, id, update_route, actor))
        .inspect_err(|err| {
            warn!("Failed to update route {id}: {err}");
        })?;
    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn replace_route_places() {
        let fixture = BackendFixture::new();
        let a = fixture.create_place("A");
        let b = fixture.create_place("B");
        let route = fixture.create_route("Ruta", vec![a.id]);
        let updated = flows::update_route(
            &fixture.db_connections,
            route.id,
            usecases::UpdateRoute {
                name: "Ruta Larga".into(),
                campus_id: Some(fixture.campus_id),
                geometry: LINE.into(),
                place_ids: vec![b.id, a.id],
                ..Default::default()
            },
            "Ana",
        )
        .unwrap();
        assert_eq!(vec![a.id, b.id], updated.place_ids);
        assert_eq!(ApprovalState::Pending, updated.location.state);

        // Unknown places abort the whole update
        let err = flows::update_route(
            &fixture.db_connections,
            route.id,
            usecases::UpdateRoute {
                name: "Otra".into(),
                campus_id: Some(fixture.campus_id),
                geometry: LINE.into(),
                place_ids: vec![PlaceId::new(12345)],
                ..Default::default()
            },
            "Ana",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Place(_)))
        ));
        let page = fixture.route_history(Some(route.id), Pagination::default());
        assert_eq!(2, page.total_count);
        assert_eq!(Some("Ruta Larga"), page.records[0].subject_name.as_deref());
    }
}
