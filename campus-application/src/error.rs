use campus_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use thiserror::Error;

pub use campus_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        match err {
            // Unwrap repository errors to handle them uniformly
            ParameterError::Repo(err) => AppError::Business(BError::Repo(err)),
            err => AppError::Business(BError::Parameter(err)),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
