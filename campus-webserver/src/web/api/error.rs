use super::json_error_response;
use anyhow::anyhow;
use campus_application::error::{AppError, BError};
pub use campus_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

pub(super) const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => {
                debug!("Failed to read JSON request body: {err}");
                Self::OtherWithStatus(anyhow!("Solicitud inválida"), Status::BadRequest)
            }
            JsonError::Parse(_str, err) => {
                debug!("Failed to parse JSON request body: {err}");
                Self::OtherWithStatus(anyhow!("JSON inválido: {err}"), Status::BadRequest)
            }
        }
    }
}

fn app_error_status(err: &AppError) -> Status {
    match err {
        AppError::Business(BError::Parameter(err)) => match err {
            ParameterError::Unauthorized => Status::Unauthorized,
            ParameterError::HistoryNotRecorded(_) | ParameterError::Repo(_) => {
                Status::InternalServerError
            }
            _ => Status::BadRequest,
        },
        AppError::Business(BError::Repo(err)) => match err {
            RepoError::NotFound => Status::NotFound,
            RepoError::AlreadyExists | RepoError::Integrity(_) => Status::BadRequest,
            RepoError::Other(_) => Status::InternalServerError,
        },
        AppError::Other(_) => Status::InternalServerError,
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                let status = app_error_status(&err);
                if status != Status::InternalServerError {
                    return json_error_response(req, &err, status);
                }
                error!("Error: {err}");
                match err {
                    AppError::Business(BError::Parameter(
                        err @ ParameterError::HistoryNotRecorded(_),
                    )) => json_error_response(req, &err, status),
                    _ => json_error_response(req, &INTERNAL_ERROR_MESSAGE, status),
                }
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &INTERNAL_ERROR_MESSAGE, Status::InternalServerError)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}
