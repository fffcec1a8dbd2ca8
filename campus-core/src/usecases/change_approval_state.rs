use super::prelude::*;

fn history_operation(target: ApprovalState) -> Result<HistoryOperation> {
    match target {
        ApprovalState::Approved => Ok(HistoryOperation::Approve),
        ApprovalState::ReturnedToConstruction => Ok(HistoryOperation::ReturnToConstruction),
        ApprovalState::Pending => Err(Error::InvalidTransition),
    }
}

/// Sets the approval state of a location.
///
/// The update is not conditioned on the current state, i.e.
/// repeating a transition succeeds again. Only the explicit
/// transition targets are accepted. Returns the prior state.
pub fn change_approval_state<R>(
    repo: &R,
    location_id: LocationId,
    target: ApprovalState,
) -> Result<ApprovalState>
where
    R: LocationRepo,
{
    if !target.is_transition_target() {
        return Err(Error::InvalidTransition);
    }
    let prior = repo.get_approval_state(location_id)?;
    if prior != ApprovalState::Pending {
        log::warn!(
            "Changing approval state of location {location_id} from {prior:?} instead of {:?} to {target:?}",
            ApprovalState::Pending
        );
    }
    let count = repo.change_approval_state(location_id, target)?;
    if count == 0 {
        log::warn!("Location {location_id} vanished during transition to {target:?}");
        return Err(RepoError::NotFound.into());
    }
    debug_assert_eq!(1, count);
    log::info!("Changed approval state of location {location_id} from {prior:?} to {target:?}");
    Ok(prior)
}

fn transition_place<R>(
    repo: &R,
    place_id: PlaceId,
    actor: &str,
    target: ApprovalState,
    subject_name_hint: Option<&str>,
) -> Result<Place>
where
    R: PlaceRepo + LocationRepo + HistoryRepo<PlaceId>,
{
    super::check_actor(actor)?;
    let operation = history_operation(target)?;
    let mut place = repo.get_place(place_id).inspect_err(|err| {
        if matches!(err, RepoError::NotFound) {
            log::warn!("Place {place_id} not found");
        }
    })?;
    change_approval_state(repo, place.location.id, target)?;
    place.location.state = target;
    let subject_name = subject_name_hint
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(&place.name);
    record_history(repo, operation, actor, place_id, subject_name)?;
    Ok(place)
}

fn transition_route<R>(
    repo: &R,
    route_id: RouteId,
    actor: &str,
    target: ApprovalState,
) -> Result<Route>
where
    R: RouteRepo + LocationRepo + HistoryRepo<RouteId>,
{
    super::check_actor(actor)?;
    let operation = history_operation(target)?;
    let mut route = repo.get_route(route_id).inspect_err(|err| {
        if matches!(err, RepoError::NotFound) {
            log::warn!("Route {route_id} not found");
        }
    })?;
    change_approval_state(repo, route.location.id, target)?;
    route.location.state = target;
    record_history(repo, operation, actor, route_id, &route.name)?;
    Ok(route)
}

/// Approves a place and records the approval.
///
/// The optional name is only used for the history message
/// and defaults to the stored name of the place.
pub fn approve_place<R>(
    repo: &R,
    place_id: PlaceId,
    actor: &str,
    subject_name_hint: Option<&str>,
) -> Result<Place>
where
    R: PlaceRepo + LocationRepo + HistoryRepo<PlaceId>,
{
    transition_place(repo, place_id, actor, ApprovalState::Approved, subject_name_hint)
}

pub fn return_place_to_construction<R>(repo: &R, place_id: PlaceId, actor: &str) -> Result<Place>
where
    R: PlaceRepo + LocationRepo + HistoryRepo<PlaceId>,
{
    transition_place(
        repo,
        place_id,
        actor,
        ApprovalState::ReturnedToConstruction,
        None,
    )
}

pub fn approve_route<R>(repo: &R, route_id: RouteId, actor: &str) -> Result<Route>
where
    R: RouteRepo + LocationRepo + HistoryRepo<RouteId>,
{
    transition_route(repo, route_id, actor, ApprovalState::Approved)
}

pub fn return_route_to_construction<R>(repo: &R, route_id: RouteId, actor: &str) -> Result<Route>
where
    R: RouteRepo + LocationRepo + HistoryRepo<RouteId>,
{
    transition_route(repo, route_id, actor, ApprovalState::ReturnedToConstruction)
}
