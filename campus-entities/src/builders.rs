pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{place_builder::*, route_builder::*};

const DEFAULT_GEOMETRY: &str = r#"{"type":"Point","coordinates":[0.0,0.0]}"#;

fn default_location() -> crate::location::GeographicLocation {
    crate::location::GeographicLocation {
        id: 0.into(),
        geometry: DEFAULT_GEOMETRY.to_string().into(),
        description: None,
        state: Default::default(),
    }
}

pub mod place_builder {

    use super::*;
    use crate::{approval::*, id::*, place::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: IdValue) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn campus(mut self, campus_id: IdValue) -> Self {
            self.place.campus_id = campus_id.into();
            self
        }
        pub fn location_id(mut self, id: IdValue) -> Self {
            self.place.location.id = id.into();
            self
        }
        pub fn geometry(mut self, geometry: &str) -> Self {
            self.place.location.geometry = geometry.to_string().into();
            self
        }
        pub fn state(mut self, state: ApprovalState) -> Self {
            self.place.location.state = state;
            self
        }
        pub fn images(mut self, images: Vec<impl Into<String>>) -> Self {
            self.place.images = images.into_iter().map(Into::into).collect();
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> PlaceBuild {
            PlaceBuild {
                place: Place {
                    id: 0.into(),
                    name: "".into(),
                    campus_id: 0.into(),
                    place_type_id: None,
                    location: default_location(),
                    images: vec![],
                },
            }
        }
    }
}

pub mod route_builder {

    use super::*;
    use crate::{approval::*, id::*, route::*};

    #[derive(Debug)]
    pub struct RouteBuild {
        route: Route,
    }

    impl RouteBuild {
        pub fn id(mut self, id: IdValue) -> Self {
            self.route.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.route.name = name.into();
            self
        }
        pub fn campus(mut self, campus_id: IdValue) -> Self {
            self.route.campus_id = campus_id.into();
            self
        }
        pub fn location_id(mut self, id: IdValue) -> Self {
            self.route.location.id = id.into();
            self
        }
        pub fn state(mut self, state: ApprovalState) -> Self {
            self.route.location.state = state;
            self
        }
        pub fn places(mut self, place_ids: Vec<IdValue>) -> Self {
            self.route.place_ids = place_ids.into_iter().map(Into::into).collect();
            self
        }
        pub fn finish(self) -> Route {
            self.route
        }
    }

    impl Builder for Route {
        type Build = RouteBuild;
        fn build() -> RouteBuild {
            RouteBuild {
                route: Route {
                    id: 0.into(),
                    name: "".into(),
                    campus_id: 0.into(),
                    route_type_id: None,
                    location: default_location(),
                    place_ids: vec![],
                },
            }
        }
    }
}
