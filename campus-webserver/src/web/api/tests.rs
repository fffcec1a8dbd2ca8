pub mod prelude {

    use crate::web::{self, api, sqlite};

    pub use crate::{
        adapters::json,
        core::{prelude::*, usecases},
        web::{
            tests::prelude::{LocalResponse as Response, *},
            PlaceTypesCache, RouteTypesCache,
        },
    };
    pub use campus_application::prelude as flows;

    pub const CAMPUS_NAME: &str = "Andrés Bello";

    pub const POINT: &str = r#"{"type":"Point","coordinates":[-72.6,-38.7]}"#;
    pub const LINE: &str = r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#;

    pub struct Fixture {
        pub db: sqlite::Connections,
        pub campus_id: CampusId,
    }

    impl Fixture {
        pub fn create_place(&self, name: &str) -> PlaceId {
            let new_place = usecases::NewPlace {
                name: name.into(),
                campus_id: Some(self.campus_id),
                geometry: POINT.into(),
                ..Default::default()
            };
            flows::create_place(&self.db, new_place, "Ana").unwrap().id
        }

        pub fn create_route(&self, name: &str, place_ids: Vec<PlaceId>) -> RouteId {
            let new_route = usecases::NewRoute {
                name: name.into(),
                campus_id: Some(self.campus_id),
                geometry: LINE.into(),
                place_ids,
                ..Default::default()
            };
            flows::create_route(&self.db, new_route, "Ana").unwrap().id
        }

        /// Stores a route without any history entries.
        pub fn seed_route(&self, name: &str) -> RouteId {
            let data = RouteData {
                name: name.into(),
                campus_id: self.campus_id,
                route_type_id: None,
                geometry: LINE.to_string().into(),
                description: None,
                place_ids: vec![],
            };
            self.db.shared().unwrap().create_route(&data).unwrap()
        }

        pub fn create_place_type(&self, name: &str) -> PlaceTypeId {
            self.db.shared().unwrap().create_place_type(name).unwrap()
        }

        pub fn create_route_type(&self, name: &str) -> RouteTypeId {
            self.db.shared().unwrap().create_route_type(name).unwrap()
        }

        pub fn place_state(&self, id: PlaceId) -> ApprovalState {
            self.db.shared().unwrap().get_place(id).unwrap().location.state
        }

        /// Lets every following insert into the history of
        /// places fail.
        pub fn reject_place_history(&self) {
            self.db
                .exclusive()
                .unwrap()
                .batch_execute(
                    "CREATE TRIGGER reject_place_history BEFORE INSERT ON place_history
                     BEGIN SELECT RAISE(ABORT, 'disk full'); END;",
                )
                .unwrap();
        }

        pub fn place_history_count(&self, id: PlaceId) -> u64 {
            self.db.shared().unwrap().count_history(Some(id)).unwrap()
        }
    }

    pub fn setup() -> (Client, Fixture) {
        let (client, db) = web::tests::rocket_test_setup(vec![("/", api::routes())]);
        let campus_id = db.shared().unwrap().create_campus(CAMPUS_NAME).unwrap();
        (client, Fixture { db, campus_id })
    }

    /// A session cookie with the payload of a CAS login.
    pub fn user_cookie(login: &str, display_name: &str) -> Cookie<'static> {
        let payload = serde_json::json!({
            "user": login,
            "attributes": {
                "displayName": display_name,
            },
        });
        Cookie::new("user", payload.to_string())
    }

    pub fn test_json(r: &Response) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }
}

use self::prelude::*;

#[test]
fn static_paths_take_precedence_over_ids() {
    let (client, fixture) = setup();
    let place_id = fixture.create_place("Biblioteca");
    let res = client.get("/places/tipos").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let res = client.get("/places/historico").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let res = client.get(format!("/places/{place_id}")).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let res = client.get("/routes/historico").dispatch();
    assert_eq!(res.status(), Status::Ok);
}

#[test]
fn unknown_place_is_not_found() {
    let (client, _) = setup();
    let res = client.get("/places/42").dispatch();
    assert_eq!(res.status(), Status::NotFound);
    test_json(&res);
    assert_eq!(
        r#"{"error":"El recurso solicitado no existe"}"#,
        res.into_string().unwrap()
    );
}
