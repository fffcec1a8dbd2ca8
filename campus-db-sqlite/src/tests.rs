use super::*;
use campus_core::{entities::*, repositories::*, RepoError};

const POINT: &str = r#"{"type":"Point","coordinates":[-72.6,-38.7]}"#;

fn init_connections() -> Connections {
    let _ = env_logger::builder().is_test(true).try_init();
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    connections
}

fn place_data(campus_id: CampusId, name: &str) -> PlaceData {
    PlaceData {
        name: name.into(),
        campus_id,
        place_type_id: None,
        geometry: POINT.to_string().into(),
        description: None,
        images: vec![],
    }
}

fn history_entry<S>(subject_id: S, by: &str, at: Timestamp) -> NewHistoryEntry<S> {
    NewHistoryEntry {
        subject_id,
        activity: Activity { at, by: by.into() },
        operation: HistoryOperation::Approve,
        message: format!("entry of {by}"),
    }
}

#[test]
fn create_and_load_place() {
    let connections = init_connections();
    let db = connections.shared().unwrap();
    let campus_id = db.create_campus("Andrés Bello").unwrap();
    let type_id = db.create_place_type("Biblioteca").unwrap();
    let place_id = db
        .create_place(&PlaceData {
            place_type_id: Some(type_id),
            description: Some("Sala de lectura".into()),
            images: vec!["b.png".into(), "a.png".into()],
            ..place_data(campus_id, "Biblioteca Central")
        })
        .unwrap();
    let place = db.get_place(place_id).unwrap();
    assert_eq!("Biblioteca Central", place.name);
    assert_eq!(campus_id, place.campus_id);
    assert_eq!(Some(type_id), place.place_type_id);
    assert_eq!(POINT, place.location.geometry.as_str());
    assert_eq!(Some("Sala de lectura"), place.location.description.as_deref());
    assert_eq!(ApprovalState::Pending, place.location.state);
    // Images keep their order
    assert_eq!(vec!["b.png", "a.png"], place.images);
    assert_eq!(
        ApprovalState::Pending,
        db.get_approval_state(place.location.id).unwrap()
    );
}

#[test]
fn update_place_replaces_images_but_keeps_state() {
    let connections = init_connections();
    let db = connections.shared().unwrap();
    let campus_id = db.create_campus("Andrés Bello").unwrap();
    let place_id = db
        .create_place(&PlaceData {
            images: vec!["a.png".into(), "b.png".into()],
            ..place_data(campus_id, "Casino")
        })
        .unwrap();
    let location_id = db.get_place(place_id).unwrap().location.id;
    assert_eq!(
        1,
        db.change_approval_state(location_id, ApprovalState::Approved)
            .unwrap()
    );
    db.update_place(
        place_id,
        &PlaceData {
            images: vec!["c.png".into()],
            ..place_data(campus_id, "Casino Central")
        },
    )
    .unwrap();
    let place = db.get_place(place_id).unwrap();
    assert_eq!("Casino Central", place.name);
    assert_eq!(vec!["c.png"], place.images);
    assert_eq!(location_id, place.location.id);
    assert_eq!(ApprovalState::Approved, place.location.state);
}

#[test]
fn change_state_of_missing_location() {
    let connections = init_connections();
    let db = connections.shared().unwrap();
    assert_eq!(
        0,
        db.change_approval_state(LocationId::new(999_999), ApprovalState::Approved)
            .unwrap()
    );
    assert!(matches!(
        db.get_approval_state(LocationId::new(999_999)),
        Err(RepoError::NotFound)
    ));
}

#[test]
fn place_of_a_route_cannot_be_deleted() {
    let connections = init_connections();
    let db = connections.shared().unwrap();
    let campus_id = db.create_campus("Andrés Bello").unwrap();
    let p1 = db.create_place(&place_data(campus_id, "A")).unwrap();
    let p2 = db.create_place(&place_data(campus_id, "B")).unwrap();
    let route_id = db
        .create_route(&RouteData {
            name: "Ruta".into(),
            campus_id,
            route_type_id: None,
            geometry: r#"{"type":"LineString","coordinates":[]}"#.to_string().into(),
            description: None,
            place_ids: vec![p1, p2],
        })
        .unwrap();
    assert_eq!(vec![p1, p2], db.get_route(route_id).unwrap().place_ids);
    assert!(matches!(
        db.delete_place(p1),
        Err(RepoError::Integrity(_))
    ));
    assert!(db.get_place(p1).is_ok());

    db.delete_route(route_id).unwrap();
    assert!(matches!(db.get_route(route_id), Err(RepoError::NotFound)));
    db.delete_place(p1).unwrap();
    assert!(matches!(db.get_place(p1), Err(RepoError::NotFound)));
    assert_eq!(1, db.all_places(Some(campus_id)).unwrap().len());
}

#[test]
fn unknown_campus_violates_foreign_key() {
    let connections = init_connections();
    let db = connections.shared().unwrap();
    assert!(matches!(
        db.create_place(&place_data(CampusId::new(42), "A")),
        Err(RepoError::Integrity(_))
    ));
}

#[test]
fn history_is_ordered_and_paginated() {
    let connections = init_connections();
    let db = connections.shared().unwrap();
    let campus_id = db.create_campus("Andrés Bello").unwrap();
    let place_id = db.create_place(&place_data(campus_id, "Aula")).unwrap();
    let t0 = Timestamp::now().as_millis();
    for i in 0..5 {
        let at = Timestamp::try_from_millis(t0 + i).unwrap();
        db.add_history_entry(&history_entry(place_id, &format!("user{i}"), at))
            .unwrap();
    }
    // Same millisecond as the last entry, but inserted later
    let at = Timestamp::try_from_millis(t0 + 4).unwrap();
    db.add_history_entry(&history_entry(PlaceId::new(999), "other", at))
        .unwrap();

    let all = db
        .query_history(&HistoryQuery::<PlaceId> {
            subject_id: None,
            pagination: Pagination::default(),
        })
        .unwrap();
    assert_eq!(6, all.len());
    assert_eq!("other", all[0].entry.activity.by);
    assert_eq!("user4", all[1].entry.activity.by);
    assert!(all[0].subject_name.is_none());
    assert_eq!(Some("Aula"), all[1].subject_name.as_deref());
    assert_eq!(Some("Andrés Bello"), all[1].campus_name.as_deref());

    let query = HistoryQuery {
        subject_id: Some(place_id),
        pagination: Pagination {
            offset: Some(0),
            limit: Some(2),
        },
    };
    let page = db.query_history(&query).unwrap();
    let actors: Vec<_> = page.iter().map(|r| r.entry.activity.by.as_str()).collect();
    assert_eq!(vec!["user4", "user3"], actors);
    assert_eq!(5, db.count_history(Some(place_id)).unwrap());
    assert_eq!(6, HistoryRepo::<PlaceId>::count_history(&db, None).unwrap());

    // OFFSET without LIMIT
    let page = db
        .query_history(&HistoryQuery {
            subject_id: Some(place_id),
            pagination: Pagination {
                offset: Some(3),
                limit: None,
            },
        })
        .unwrap();
    let actors: Vec<_> = page.iter().map(|r| r.entry.activity.by.as_str()).collect();
    assert_eq!(vec!["user1", "user0"], actors);
}

#[test]
fn route_history_is_separate() {
    let connections = init_connections();
    let db = connections.shared().unwrap();
    db.add_history_entry(&history_entry(RouteId::new(1), "Ana", Timestamp::now()))
        .unwrap();
    assert_eq!(1, db.count_history(Some(RouteId::new(1))).unwrap());
    assert_eq!(0, db.count_history(Some(PlaceId::new(1))).unwrap());
    let records = db
        .query_history(&HistoryQuery {
            subject_id: Some(RouteId::new(1)),
            pagination: Pagination::default(),
        })
        .unwrap();
    assert_eq!(1, records.len());
    assert_eq!(HistoryOperation::Approve, records[0].entry.operation);
    assert!(records[0].subject_name.is_none());
}

#[test]
fn rollback_failed_transaction() {
    let connections = init_connections();
    let campus_id = connections
        .shared()
        .unwrap()
        .create_campus("Andrés Bello")
        .unwrap();
    let res = connections.exclusive().unwrap().transaction(|conn| {
        conn.create_place(&place_data(campus_id, "A"))?;
        Err::<(), _>(RepoError::NotFound)
    });
    assert!(matches!(res, Err(uc::Error::Repo(RepoError::NotFound))));
    assert!(connections
        .shared()
        .unwrap()
        .all_places(None)
        .unwrap()
        .is_empty());
}
