use super::{create_route::prepare_route_data, prelude::*};

pub type UpdateRoute = super::NewRoute;

/// Replaces all fields of an existing route including the
/// set of its places. The approval state remains unchanged.
pub fn update_route<R>(repo: &R, id: RouteId, update: UpdateRoute, actor: &str) -> Result<Route>
where
    R: RouteRepo + PlaceRepo + CampusRepo + CatalogRepo + HistoryRepo<RouteId>,
{
    super::check_actor(actor)?;
    let _ = repo.get_route(id)?;
    let data = prepare_route_data(repo, update)?;
    repo.update_route(id, &data)?;
    log::info!(
        "Updated route {id} '{}' with {} places",
        data.name,
        data.place_ids.len()
    );
    record_history(repo, HistoryOperation::Update, actor, id, &data.name)?;
    Ok(repo.get_route(id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use campus_entities::builders::*;

    #[test]
    fn replace_places() {
        let db = MockDb::with_campus("Andrés Bello");
        for id in [1, 2, 3] {
            db.places
                .borrow_mut()
                .push(Place::build().id(id).campus(1).finish());
        }
        db.routes
            .borrow_mut()
            .push(Route::build().id(1).campus(1).places(vec![1, 2]).finish());
        let route = update_route(
            &db,
            RouteId::new(1),
            UpdateRoute {
                name: "Nueva".into(),
                campus_id: Some(CampusId::new(1)),
                geometry: r#"{"type":"LineString","coordinates":[]}"#.into(),
                place_ids: vec![PlaceId::new(3)],
                ..Default::default()
            },
            "Ana",
        )
        .unwrap();
        assert_eq!(vec![PlaceId::new(3)], route.place_ids);
        assert_eq!(
            HistoryOperation::Update,
            db.route_history.borrow()[0].operation
        );
    }
}
