use crate::{entities::PlaceId, repositories, util::validate::GeometryInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("ID requerido")]
    MissingId,
    #[error("Nombre inválido")]
    Name,
    #[error("Geometría inválida")]
    Geometry,
    #[error("URL de imagen inválida")]
    ImageUrl,
    #[error("Campus desconocido")]
    Campus,
    #[error("Tipo de lugar desconocido")]
    PlaceType,
    #[error("Tipo de ruta desconocido")]
    RouteType,
    #[error("Lugar desconocido: {0}")]
    Place(PlaceId),
    #[error("Transición de estado no permitida")]
    InvalidTransition,
    #[error("Usuario inválido")]
    Actor,
    #[error("Usuario no autenticado")]
    Unauthorized,
    #[error("Parámetros de paginación inválidos")]
    Pagination,
    // The audit record of a mutation could not be written,
    // the mutation must not be committed.
    #[error("No se pudo registrar el histórico")]
    HistoryNotRecorded(#[source] repositories::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<GeometryInvalidation> for Error {
    fn from(_: GeometryInvalidation) -> Self {
        Self::Geometry
    }
}
