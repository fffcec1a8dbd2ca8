use crate::{id::*, location::GeographicLocation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub id: RouteId,
    pub name: String,
    pub campus_id: CampusId,
    pub route_type_id: Option<RouteTypeId>,
    pub location: GeographicLocation,
    // Membership only, the order is not significant
    pub place_ids: Vec<PlaceId>,
}

impl Route {
    pub fn contains_place(&self, place_id: PlaceId) -> bool {
        self.place_ids.contains(&place_id)
    }
}
