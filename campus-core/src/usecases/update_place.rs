use super::{create_place::prepare_place_data, prelude::*};

pub type UpdatePlace = super::NewPlace;

/// Replaces all fields of an existing place including its
/// images. The approval state remains unchanged.
pub fn update_place<R>(repo: &R, id: PlaceId, update: UpdatePlace, actor: &str) -> Result<Place>
where
    R: PlaceRepo + CampusRepo + CatalogRepo + HistoryRepo<PlaceId>,
{
    super::check_actor(actor)?;
    // Verify existence before validating
    let _ = repo.get_place(id)?;
    let data = prepare_place_data(repo, update)?;
    repo.update_place(id, &data)?;
    log::info!("Updated place {id} '{}'", data.name);
    record_history(repo, HistoryOperation::Update, actor, id, &data.name)?;
    Ok(repo.get_place(id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use campus_entities::builders::*;

    #[test]
    fn replace_images_and_keep_state() {
        let db = MockDb::with_campus("Andrés Bello");
        db.places.borrow_mut().push(
            Place::build()
                .id(1)
                .name("Casino")
                .campus(1)
                .state(ApprovalState::Approved)
                .images(vec!["a.png", "b.png"])
                .finish(),
        );
        let place = update_place(
            &db,
            PlaceId::new(1),
            UpdatePlace {
                name: "Casino Central".into(),
                campus_id: Some(CampusId::new(1)),
                geometry: r#"{"type":"Point","coordinates":[1,2]}"#.into(),
                images: vec!["c.png".into()],
                ..Default::default()
            },
            "Ana",
        )
        .unwrap();
        assert_eq!("Casino Central", place.name);
        assert_eq!(vec!["c.png"], place.images);
        assert_eq!(ApprovalState::Approved, place.location.state);
        let history = db.place_history.borrow();
        assert_eq!(HistoryOperation::Update, history[0].operation);
        assert_eq!("Lugar \"Casino Central\" actualizado", history[0].message);
    }

    #[test]
    fn update_unknown_place() {
        let db = MockDb::with_campus("Andrés Bello");
        let res = update_place(&db, PlaceId::new(1), UpdatePlace::default(), "Ana");
        assert!(matches!(res, Err(Error::Repo(RepoError::NotFound))));
        assert!(db.place_history.borrow().is_empty());
    }
}
