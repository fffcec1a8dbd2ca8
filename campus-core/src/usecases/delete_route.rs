use super::prelude::*;

pub fn delete_route<R>(repo: &R, id: RouteId, actor: &str) -> Result<()>
where
    R: RouteRepo + HistoryRepo<RouteId>,
{
    super::check_actor(actor)?;
    let route = repo.get_route(id)?;
    repo.delete_route(id)?;
    log::info!("Deleted route {id} '{}'", route.name);
    record_history(repo, HistoryOperation::Delete, actor, id, &route.name)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use campus_entities::builders::*;

    #[test]
    fn delete_route_but_keep_places() {
        let db = MockDb::default();
        db.places.borrow_mut().push(Place::build().id(1).finish());
        db.routes
            .borrow_mut()
            .push(Route::build().id(2).name("Norte").places(vec![1]).finish());
        delete_route(&db, RouteId::new(2), "Ana").unwrap();
        assert!(db.routes.borrow().is_empty());
        assert_eq!(1, db.places.borrow().len());
        assert_eq!(
            "Ruta \"Norte\" eliminada",
            db.route_history.borrow()[0].message
        );
    }

    #[test]
    fn delete_unknown_route() {
        let db = MockDb::default();
        let res = delete_route(&db, RouteId::new(2), "Ana");
        assert!(matches!(res, Err(Error::Repo(RepoError::NotFound))));
    }
}
