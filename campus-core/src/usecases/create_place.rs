use super::prelude::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewPlace {
    pub name          : String,
    pub campus_id     : Option<CampusId>,
    pub place_type_id : Option<PlaceTypeId>,
    pub geometry      : String,
    pub description   : Option<String>,
    pub images        : Vec<String>,
}

pub(crate) fn prepare_place_data<R>(repo: &R, place: NewPlace) -> Result<PlaceData>
where
    R: CampusRepo + CatalogRepo,
{
    let NewPlace {
        name,
        campus_id,
        place_type_id,
        geometry,
        description,
        images,
    } = place;
    let name = super::prepare_name(&name)?;
    let campus_id = campus_id.ok_or(Error::Campus)?;
    super::check_campus(repo, campus_id)?;
    if let Some(type_id) = place_type_id {
        if !repo.all_place_types()?.iter().any(|t| t.id == type_id) {
            return Err(Error::PlaceType);
        }
    }
    let geometry = super::prepare_geometry(geometry)?;
    let images = images
        .into_iter()
        .map(|url| {
            if validate::is_valid_image_url(&url) {
                Ok(url.trim().to_owned())
            } else {
                Err(Error::ImageUrl)
            }
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(PlaceData {
        name,
        campus_id,
        place_type_id,
        geometry,
        description: super::optional_text(description),
        images,
    })
}

pub fn create_place<R>(repo: &R, new_place: NewPlace, actor: &str) -> Result<Place>
where
    R: PlaceRepo + CampusRepo + CatalogRepo + HistoryRepo<PlaceId>,
{
    super::check_actor(actor)?;
    let data = prepare_place_data(repo, new_place)?;
    let id = repo.create_place(&data)?;
    log::info!("Created place {id} '{}'", data.name);
    record_history(repo, HistoryOperation::Create, actor, id, &data.name)?;
    Ok(repo.get_place(id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    const POINT: &str = r#"{"type":"Point","coordinates":[-72.6,-38.7]}"#;

    fn new_place(name: &str) -> NewPlace {
        NewPlace {
            name: name.into(),
            campus_id: Some(CampusId::new(1)),
            geometry: POINT.into(),
            ..Default::default()
        }
    }

    #[test]
    fn create_pending_place_with_history() {
        let db = MockDb::with_campus("Andrés Bello");
        let place = create_place(
            &db,
            NewPlace {
                images: vec![" https://example.org/a.png ".into()],
                description: Some("  ".into()),
                ..new_place(" Biblioteca ")
            },
            "Ana",
        )
        .unwrap();
        assert_eq!("Biblioteca", place.name);
        assert_eq!(ApprovalState::Pending, place.location.state);
        assert_eq!(None, place.location.description);
        assert_eq!(vec!["https://example.org/a.png"], place.images);
        let history = db.place_history.borrow();
        assert_eq!(1, history.len());
        assert_eq!(place.id, history[0].subject_id);
        assert_eq!(HistoryOperation::Create, history[0].operation);
    }

    #[test]
    fn reject_invalid_places() {
        let db = MockDb::with_campus("Andrés Bello");
        assert!(matches!(
            create_place(&db, new_place(""), "Ana"),
            Err(Error::Name)
        ));
        assert!(matches!(
            create_place(
                &db,
                NewPlace {
                    geometry: "{}".into(),
                    ..new_place("x")
                },
                "Ana"
            ),
            Err(Error::Geometry)
        ));
        assert!(matches!(
            create_place(
                &db,
                NewPlace {
                    campus_id: Some(CampusId::new(2)),
                    ..new_place("x")
                },
                "Ana"
            ),
            Err(Error::Campus)
        ));
        assert!(matches!(
            create_place(
                &db,
                NewPlace {
                    place_type_id: Some(PlaceTypeId::new(9)),
                    ..new_place("x")
                },
                "Ana"
            ),
            Err(Error::PlaceType)
        ));
        assert!(matches!(
            create_place(
                &db,
                NewPlace {
                    images: vec!["".into()],
                    ..new_place("x")
                },
                "Ana"
            ),
            Err(Error::ImageUrl)
        ));
        assert!(db.places.borrow().is_empty());
        assert!(db.place_history.borrow().is_empty());
    }
}
