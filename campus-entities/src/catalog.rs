use crate::id::{PlaceTypeId, RouteTypeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceType {
    pub id: PlaceTypeId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteType {
    pub id: RouteTypeId,
    pub name: String,
}
