use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[cfg(feature = "entity-conversions")]
mod conv;

/// Numeric identifiers are accepted either as JSON numbers
/// or as strings containing a number.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(untagged)]
pub enum IdParam {
    Number(i64),
    Text(String),
}

impl IdParam {
    pub fn value(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct PlaceIdParam {
    pub id: Option<IdParam>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ApprovePlace {
    pub id: Option<IdParam>,
    #[serde(rename = "nombreLugar", skip_serializing_if = "Option::is_none")]
    pub nombre_lugar: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct RouteIdParam {
    pub id_ruta: Option<IdParam>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewPlace {
    #[serde(default)]
    pub nombre        : String,
    pub id_campus     : Option<i64>,
    #[serde(default)]
    pub id_tipo_lugar : Option<i64>,
    #[serde(default)]
    pub geometria     : JsonValue,
    #[serde(default)]
    pub descripcion   : Option<String>,
    #[serde(default)]
    pub imagenes      : Vec<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewRoute {
    #[serde(default)]
    pub nombre       : String,
    pub id_campus    : Option<i64>,
    #[serde(default)]
    pub id_tipo_ruta : Option<i64>,
    #[serde(default)]
    pub geometria    : JsonValue,
    #[serde(default)]
    pub descripcion  : Option<String>,
    #[serde(default)]
    pub lugares      : Vec<i64>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Place {
    pub id             : i64,
    pub nombre         : String,
    pub id_campus      : i64,
    pub id_tipo_lugar  : Option<i64>,
    pub id_geografia   : i64,
    pub geometria      : JsonValue,
    pub descripcion    : Option<String>,
    pub id_estado      : i16,
    pub imagenes       : Vec<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Route {
    pub id           : i64,
    pub nombre       : String,
    pub id_campus    : i64,
    pub id_tipo_ruta : Option<i64>,
    pub id_geografia : i64,
    pub geometria    : JsonValue,
    pub descripcion  : Option<String>,
    pub id_estado    : i16,
    pub lugares      : Vec<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Campus {
    pub id: i64,
    pub nombre: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct PlaceType {
    pub id: i64,
    pub nombre: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct RouteType {
    pub id: i64,
    pub nombre: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub enum HistoryOperation {
    #[serde(rename = "CREAR")]
    Create,
    #[serde(rename = "ACTUALIZAR")]
    Update,
    #[serde(rename = "ELIMINAR")]
    Delete,
    #[serde(rename = "APROBAR")]
    Approve,
    #[serde(rename = "DEVOLVER")]
    ReturnToConstruction,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct PlaceHistoryEntry {
    pub id            : i64,
    pub id_ubicacion  : i64,
    pub usuario       : String,
    pub accion        : HistoryOperation,
    pub mensaje       : String,
    /// Unix timestamp in milliseconds
    pub fecha         : i64,
    pub nombre_lugar  : Option<String>,
    pub nombre_campus : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct RouteHistoryEntry {
    pub id            : i64,
    pub id_ruta       : i64,
    pub usuario       : String,
    pub accion        : HistoryOperation,
    pub mensaje       : String,
    /// Unix timestamp in milliseconds
    pub fecha         : i64,
    pub nombre_ruta   : Option<String>,
    pub nombre_campus : Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct PlaceHistoryParams {
    pub id_ubicacion: Option<i64>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct PlaceHistory {
    pub success: bool,
    pub data: Vec<PlaceHistoryEntry>,
    pub count: u64,
    pub params: PlaceHistoryParams,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct RouteHistory {
    pub success: bool,
    pub data: Vec<RouteHistoryEntry>,
    pub count: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct Success {
    pub success: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SuccessMessage {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct CurrentUser {
    pub user: String,
    pub nombre: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    pub error: String,
}
