use crate::{approval::ApprovalState, id::LocationId};

/// Geometry of a place or a route as GeoJSON text.
///
/// The contents are validated by the use cases before
/// storing them, the entity only carries them around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoJson(String);

impl GeoJson {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for GeoJson {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<GeoJson> for String {
    fn from(from: GeoJson) -> Self {
        from.0
    }
}

/// Shared geometry and approval state record that is
/// exclusively owned by a single place or route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeographicLocation {
    pub id: LocationId,
    pub geometry: GeoJson,
    pub description: Option<String>,
    pub state: ApprovalState,
}
