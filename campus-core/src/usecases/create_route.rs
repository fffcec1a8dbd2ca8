use super::prelude::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewRoute {
    pub name          : String,
    pub campus_id     : Option<CampusId>,
    pub route_type_id : Option<RouteTypeId>,
    pub geometry      : String,
    pub description   : Option<String>,
    pub place_ids     : Vec<PlaceId>,
}

pub(crate) fn prepare_route_data<R>(repo: &R, route: NewRoute) -> Result<RouteData>
where
    R: PlaceRepo + CampusRepo + CatalogRepo,
{
    let NewRoute {
        name,
        campus_id,
        route_type_id,
        geometry,
        description,
        mut place_ids,
    } = route;
    let name = super::prepare_name(&name)?;
    let campus_id = campus_id.ok_or(Error::Campus)?;
    super::check_campus(repo, campus_id)?;
    if let Some(type_id) = route_type_id {
        if !repo.all_route_types()?.iter().any(|t| t.id == type_id) {
            return Err(Error::RouteType);
        }
    }
    let geometry = super::prepare_geometry(geometry)?;
    place_ids.sort_unstable();
    place_ids.dedup();
    for place_id in &place_ids {
        match repo.get_place(*place_id) {
            Ok(_) => {}
            Err(RepoError::NotFound) => return Err(Error::Place(*place_id)),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(RouteData {
        name,
        campus_id,
        route_type_id,
        geometry,
        description: super::optional_text(description),
        place_ids,
    })
}

pub fn create_route<R>(repo: &R, new_route: NewRoute, actor: &str) -> Result<Route>
where
    R: RouteRepo + PlaceRepo + CampusRepo + CatalogRepo + HistoryRepo<RouteId>,
{
    super::check_actor(actor)?;
    let data = prepare_route_data(repo, new_route)?;
    let id = repo.create_route(&data)?;
    log::info!(
        "Created route {id} '{}' with {} places",
        data.name,
        data.place_ids.len()
    );
    record_history(repo, HistoryOperation::Create, actor, id, &data.name)?;
    Ok(repo.get_route(id)?)
}
