use crate::{entities::*, repositories::*, RepoError};

mod change_approval_state;
mod create_place;
mod create_route;
mod delete_place;
mod delete_route;
mod error;
mod query_history;
mod record_history;
mod update_place;
mod update_route;


type Result<T> = std::result::Result<T, Error>;

pub use self::{
    change_approval_state::*, create_place::*, create_route::*, delete_place::*, delete_route::*,
    error::Error, query_history::*, record_history::*, update_place::*, update_route::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use super::record_history::record_history;
    pub use crate::{entities::*, repositories::*, util::validate, RepoError};
}

pub fn get_place<R: PlaceRepo>(repo: &R, id: PlaceId) -> Result<Place> {
    Ok(repo.get_place(id)?)
}

pub fn list_places<R: PlaceRepo>(repo: &R, campus_id: Option<CampusId>) -> Result<Vec<Place>> {
    Ok(repo.all_places(campus_id)?)
}

pub fn get_route<R: RouteRepo>(repo: &R, id: RouteId) -> Result<Route> {
    Ok(repo.get_route(id)?)
}

pub fn list_routes<R: RouteRepo>(repo: &R, campus_id: Option<CampusId>) -> Result<Vec<Route>> {
    Ok(repo.all_routes(campus_id)?)
}

pub fn all_campuses<R: CampusRepo>(repo: &R) -> Result<Vec<Campus>> {
    Ok(repo.all_campuses()?)
}

pub fn all_place_types<R: CatalogRepo>(repo: &R) -> Result<Vec<PlaceType>> {
    Ok(repo.all_place_types()?)
}

pub fn all_route_types<R: CatalogRepo>(repo: &R) -> Result<Vec<RouteType>> {
    Ok(repo.all_route_types()?)
}

// Trims the text and drops it if nothing remains
fn optional_text(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

fn check_actor(actor: &str) -> Result<()> {
    if !crate::util::validate::is_valid_actor_name(actor) {
        return Err(Error::Actor);
    }
    Ok(())
}

fn check_campus<R: CampusRepo>(repo: &R, campus_id: CampusId) -> Result<()> {
    match repo.get_campus(campus_id) {
        Ok(_) => Ok(()),
        Err(RepoError::NotFound) => {
            log::warn!("Campus {campus_id} does not exist");
            Err(Error::Campus)
        }
        Err(err) => Err(err.into()),
    }
}

fn prepare_name(name: &str) -> Result<String> {
    if !crate::util::validate::is_valid_name(name) {
        return Err(Error::Name);
    }
    Ok(name.trim().to_owned())
}

fn prepare_geometry(geometry: String) -> Result<GeoJson> {
    crate::util::validate::geometry(&geometry)?;
    Ok(geometry.into())
}
