// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("El recurso solicitado no existe")]
    NotFound,
    #[error("El recurso ya existe")]
    AlreadyExists,
    // Violation of a referential constraint with a
    // message that is presented to the user.
    #[error("{0}")]
    Integrity(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    // No limit means all remaining rows
    pub limit: Option<u64>,
}

pub trait CampusRepo {
    fn create_campus(&self, name: &str) -> Result<CampusId>;
    fn get_campus(&self, id: CampusId) -> Result<Campus>;
    fn all_campuses(&self) -> Result<Vec<Campus>>;
}

pub trait CatalogRepo {
    fn create_place_type(&self, name: &str) -> Result<PlaceTypeId>;
    fn all_place_types(&self) -> Result<Vec<PlaceType>>;

    fn create_route_type(&self, name: &str) -> Result<RouteTypeId>;
    fn all_route_types(&self) -> Result<Vec<RouteType>>;
}

pub trait LocationRepo {
    fn get_approval_state(&self, id: LocationId) -> Result<ApprovalState>;

    // Unconditional update that returns the number of
    // affected rows, i.e. 0 if the location doesn't exist.
    fn change_approval_state(&self, id: LocationId, state: ApprovalState) -> Result<usize>;
}

/// Mutable contents of a place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceData {
    pub name: String,
    pub campus_id: CampusId,
    pub place_type_id: Option<PlaceTypeId>,
    pub geometry: GeoJson,
    pub description: Option<String>,
    pub images: Vec<String>,
}

pub trait PlaceRepo {
    fn get_place(&self, id: PlaceId) -> Result<Place>;
    fn all_places(&self, campus_id: Option<CampusId>) -> Result<Vec<Place>>;

    // Creates the place together with its location in
    // the initial approval state.
    fn create_place(&self, data: &PlaceData) -> Result<PlaceId>;

    // Replaces all fields including the images, the
    // approval state of the location remains unchanged.
    fn update_place(&self, id: PlaceId, data: &PlaceData) -> Result<()>;

    // Deletes the place together with its location.
    // Fails with Error::Integrity if the place is still
    // referenced by a route.
    fn delete_place(&self, id: PlaceId) -> Result<()>;
}

/// Mutable contents of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteData {
    pub name: String,
    pub campus_id: CampusId,
    pub route_type_id: Option<RouteTypeId>,
    pub geometry: GeoJson,
    pub description: Option<String>,
    pub place_ids: Vec<PlaceId>,
}

pub trait RouteRepo {
    fn get_route(&self, id: RouteId) -> Result<Route>;
    fn all_routes(&self, campus_id: Option<CampusId>) -> Result<Vec<Route>>;

    fn create_route(&self, data: &RouteData) -> Result<RouteId>;

    // Replaces all fields including the place membership.
    fn update_route(&self, id: RouteId, data: &RouteData) -> Result<()>;

    fn delete_route(&self, id: RouteId) -> Result<()>;
}

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct HistoryQuery<S> {
    // None: The history of all subjects
    pub subject_id: Option<S>,
    pub pagination: Pagination,
}

/// Append-only audit log of a single kind of subject.
pub trait HistoryRepo<S: HistorySubject> {
    fn add_history_entry(&self, entry: &NewHistoryEntry<S>) -> Result<HistoryEntryId>;

    // Most recent entries first
    fn query_history(&self, query: &HistoryQuery<S>) -> Result<Vec<HistoryRecord<S>>>;

    fn count_history(&self, subject_id: Option<S>) -> Result<u64>;
}
