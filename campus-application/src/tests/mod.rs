pub mod prelude {

    pub const POINT: &str = r#"{"type":"Point","coordinates":[-72.6,-38.7]}"#;
    pub const LINE: &str = r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#;

    pub use campus_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub campus_id: CampusId,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            campus_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            let campus_id = db_connections
                .shared()
                .unwrap()
                .create_campus("Andrés Bello")
                .unwrap();
            Self {
                db_connections,
                campus_id,
            }
        }

        pub fn new_place(&self, name: &str) -> usecases::NewPlace {
            usecases::NewPlace {
                name: name.into(),
                campus_id: Some(self.campus_id),
                geometry: POINT.into(),
                ..Default::default()
            }
        }

        pub fn create_place(&self, name: &str) -> Place {
            flows::create_place(&self.db_connections, self.new_place(name), "Ana").unwrap()
        }

        pub fn create_route(&self, name: &str, place_ids: Vec<PlaceId>) -> Route {
            flows::create_route(
                &self.db_connections,
                usecases::NewRoute {
                    name: name.into(),
                    campus_id: Some(self.campus_id),
                    geometry: LINE.into(),
                    place_ids,
                    ..Default::default()
                },
                "Ana",
            )
            .unwrap()
        }

        /// Lets every following insert into the history of
        /// places fail.
        pub fn reject_place_history(&self) {
            self.db_connections
                .exclusive()
                .unwrap()
                .batch_execute(
                    "CREATE TRIGGER reject_place_history BEFORE INSERT ON place_history
                     BEGIN SELECT RAISE(ABORT, 'disk full'); END;",
                )
                .unwrap();
        }

        pub fn try_get_place(&self, id: PlaceId) -> Option<Place> {
            match self.db_connections.shared().unwrap().get_place(id) {
                Ok(x) => Some(x),
                Err(RepoError::NotFound) => None,
                x => x.map(|_| None).unwrap(),
            }
        }

        pub fn place_history(
            &self,
            id: Option<PlaceId>,
            pagination: Pagination,
        ) -> usecases::HistoryPage<PlaceId> {
            let db = self.db_connections.shared().unwrap();
            usecases::query_history(
                &db,
                &HistoryQuery {
                    subject_id: id,
                    pagination,
                },
            )
            .unwrap()
        }

        pub fn route_history(
            &self,
            id: Option<RouteId>,
            pagination: Pagination,
        ) -> usecases::HistoryPage<RouteId> {
            let db = self.db_connections.shared().unwrap();
            usecases::query_history(
                &db,
                &HistoryQuery {
                    subject_id: id,
                    pagination,
                },
            )
            .unwrap()
        }
    }
}
