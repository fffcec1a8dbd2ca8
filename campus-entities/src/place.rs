use crate::{id::*, location::GeographicLocation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub campus_id: CampusId,
    pub place_type_id: Option<PlaceTypeId>,
    pub location: GeographicLocation,
    // URLs of the images, in display order
    pub images: Vec<String>,
}
