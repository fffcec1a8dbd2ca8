use rocket::{catch, catchers, Catcher, Request};

use super::{error::INTERNAL_ERROR_MESSAGE, Json, JsonErrorResponse, Status};

type ErrorResponse = (Status, Json<JsonErrorResponse>);

fn error_response(status: Status, message: &str) -> ErrorResponse {
    let error = JsonErrorResponse {
        error: message.to_owned(),
    };
    (status, Json(error))
}

#[catch(400)]
fn bad_request() -> ErrorResponse {
    error_response(Status::BadRequest, "Solicitud inválida")
}

#[catch(401)]
fn unauthorized() -> ErrorResponse {
    error_response(Status::Unauthorized, "Usuario no autenticado")
}

#[catch(404)]
fn not_found(req: &Request) -> ErrorResponse {
    debug!("No route for {} {}", req.method(), req.uri());
    error_response(Status::NotFound, "Recurso no encontrado")
}

#[catch(422)]
fn unprocessable_entity() -> ErrorResponse {
    error_response(Status::UnprocessableEntity, "Solicitud inválida")
}

#[catch(500)]
fn internal_server_error() -> ErrorResponse {
    error_response(Status::InternalServerError, INTERNAL_ERROR_MESSAGE)
}

#[catch(default)]
fn any_other(status: Status, _req: &Request) -> ErrorResponse {
    error_response(status, status.reason().unwrap_or(INTERNAL_ERROR_MESSAGE))
}

pub fn catchers() -> Vec<Catcher> {
    catchers![
        bad_request,
        unauthorized,
        not_found,
        unprocessable_entity,
        internal_server_error,
        any_other,
    ]
}
