use std::{fmt::Display, result};

use campus_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::{CookieJar, Status},
    post, put,
    response::{self, Responder},
    routes, State,
};

use super::{guards::*, sqlite, PlaceTypesCache, RouteTypesCache};
use crate::{
    adapters::json::{self, from_json},
    core::{prelude::*, usecases},
};
use campus_application::prelude as flows;
use campus_core::usecases::Error as ParameterError;

mod catalog;
mod catchers;
mod error;
mod places;
mod routes;
mod users;

pub use self::{catchers::catchers, error::Error as ApiError};

pub(crate) use self::catalog::{load_place_types, load_route_types};

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<rocket::Route> {
    routes![
        // ---   places   --- //
        places::post_approve_place,
        places::post_return_place,
        places::get_place_history,
        places::post_place,
        places::get_places,
        places::get_place,
        places::put_place,
        places::delete_place,
        // ---   routes   --- //
        routes::post_approve_route,
        routes::post_return_route,
        routes::get_route_history,
        routes::post_route,
        routes::get_routes,
        routes::get_route,
        routes::put_route,
        routes::delete_route,
        // ---   catalog   --- //
        catalog::get_campuses,
        catalog::get_place_types,
        catalog::get_route_types,
        // ---   users   --- //
        users::get_current_user,
        users::post_logout,
    ]
}

// Both numbers and numeric strings are accepted as ids
fn required_id<T: From<IdValue>>(id: Option<json::IdParam>) -> result::Result<T, ParameterError> {
    id.as_ref()
        .and_then(json::IdParam::value)
        .map(T::from)
        .ok_or(ParameterError::MissingId)
}

// Malformed numbers are rejected instead of widening the query
fn pagination(
    offset: Option<&str>,
    limit: Option<&str>,
) -> result::Result<Pagination, ParameterError> {
    let parse = |value: Option<&str>| {
        value
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| value.parse::<u64>().map_err(|_| ParameterError::Pagination))
            .transpose()
    };
    Ok(Pagination {
        offset: parse(offset)?,
        limit: parse(limit)?,
    })
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let boundary_error = JsonErrorResponse {
        error: err.to_string(),
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
