use super::*;

pub fn update_place(
    connections: &sqlite::Connections,
    id: PlaceId,
    update_place: usecases::UpdatePlace,
    actor: &str,
) -> Result<Place> {
    let place = connections
        .exclusive()?
        .transaction(|conn| usecases::update_place(conn, id, update_place, actor))
        .inspect_err(|err| {
            warn!("Failed to update place {id}: {err}");
        })?;
    Ok(place)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn invalid_campus_leaves_place_untouched() {
        let fixture = BackendFixture::new();
        let place = flows::create_place(
            &fixture.db_connections,
            usecases::NewPlace {
                images: vec!["a.png".into()],
                ..fixture.new_place("Gimnasio")
            },
            "Ana",
        )
        .unwrap();
        let err = flows::update_place(
            &fixture.db_connections,
            place.id,
            usecases::UpdatePlace {
                campus_id: Some(CampusId::new(999)),
                images: vec!["b.png".into()],
                ..fixture.new_place("Gimnasio Nuevo")
            },
            "Ana",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Campus))
        ));
        let unchanged = fixture.try_get_place(place.id).unwrap();
        assert_eq!("Gimnasio", unchanged.name);
        assert_eq!(vec!["a.png"], unchanged.images);
    }

    #[test]
    fn failed_update_is_rolled_back_completely() {
        let fixture = BackendFixture::new();
        let place = flows::create_place(
            &fixture.db_connections,
            usecases::NewPlace {
                images: vec!["a.png".into(), "b.png".into()],
                ..fixture.new_place("Gimnasio")
            },
            "Ana",
        )
        .unwrap();
        fixture.reject_place_history();
        let err = flows::update_place(
            &fixture.db_connections,
            place.id,
            usecases::UpdatePlace {
                images: vec!["c.png".into()],
                geometry: r#"{"type":"Point","coordinates":[1,2]}"#.into(),
                ..fixture.new_place("Gimnasio Nuevo")
            },
            "Luis",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::HistoryNotRecorded(_)))
        ));
        let unchanged = fixture.try_get_place(place.id).unwrap();
        assert_eq!(place, unchanged);
        assert_eq!("Gimnasio", unchanged.name);
        assert_eq!(vec!["a.png", "b.png"], unchanged.images);
        assert_eq!(place.location.geometry, unchanged.location.geometry);
        assert_eq!(
            1,
            fixture
                .place_history(Some(place.id), Pagination::default())
                .total_count
        );
    }

    #[test]
    fn update_replaces_images() {
        let fixture = BackendFixture::new();
        let place = flows::create_place(
            &fixture.db_connections,
            usecases::NewPlace {
                images: vec!["a.png".into(), "b.png".into()],
                ..fixture.new_place("Gimnasio")
            },
            "Ana",
        )
        .unwrap();
        let updated = flows::update_place(
            &fixture.db_connections,
            place.id,
            usecases::UpdatePlace {
                images: vec!["c.png".into()],
                ..fixture.new_place("Gimnasio Techado")
            },
            "Luis",
        )
        .unwrap();
        assert_eq!(vec!["c.png"], updated.images);
        let page = fixture.place_history(Some(place.id), Pagination::default());
        assert_eq!(HistoryOperation::Update, page.records[0].entry.operation);
        assert_eq!(Some("Gimnasio Techado"), page.records[0].subject_name.as_deref());
    }
}
