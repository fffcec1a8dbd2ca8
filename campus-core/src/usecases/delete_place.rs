use super::prelude::*;

/// Deletes a place together with its location.
///
/// The history of the place is kept.
pub fn delete_place<R>(repo: &R, id: PlaceId, actor: &str) -> Result<()>
where
    R: PlaceRepo + HistoryRepo<PlaceId>,
{
    super::check_actor(actor)?;
    let place = repo.get_place(id)?;
    repo.delete_place(id).inspect_err(|err| {
        if let RepoError::Integrity(msg) = err {
            log::info!("Refused to delete place {id}: {msg}");
        }
    })?;
    log::info!("Deleted place {id} '{}'", place.name);
    record_history(repo, HistoryOperation::Delete, actor, id, &place.name)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use campus_entities::builders::*;

    #[test]
    fn delete_and_record() {
        let db = MockDb::default();
        db.places
            .borrow_mut()
            .push(Place::build().id(4).name("Gimnasio").finish());
        delete_place(&db, PlaceId::new(4), "Ana").unwrap();
        assert!(db.places.borrow().is_empty());
        let history = db.place_history.borrow();
        assert_eq!(HistoryOperation::Delete, history[0].operation);
        assert_eq!(PlaceId::new(4), history[0].subject_id);
    }

    #[test]
    fn refuse_to_delete_place_of_a_route() {
        let db = MockDb::default();
        db.places
            .borrow_mut()
            .push(Place::build().id(4).name("Gimnasio").finish());
        db.routes
            .borrow_mut()
            .push(Route::build().id(1).places(vec![4]).finish());
        let res = delete_place(&db, PlaceId::new(4), "Ana");
        assert!(matches!(res, Err(Error::Repo(RepoError::Integrity(_)))));
        assert_eq!(1, db.places.borrow().len());
        assert!(db.place_history.borrow().is_empty());
    }
}
