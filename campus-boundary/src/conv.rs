use super::*;
use campus_entities as e;

impl From<e::history::HistoryOperation> for HistoryOperation {
    fn from(from: e::history::HistoryOperation) -> Self {
        use e::history::HistoryOperation as E;
        match from {
            E::Create => Self::Create,
            E::Update => Self::Update,
            E::Delete => Self::Delete,
            E::Approve => Self::Approve,
            E::ReturnToConstruction => Self::ReturnToConstruction,
        }
    }
}

impl From<HistoryOperation> for e::history::HistoryOperation {
    fn from(from: HistoryOperation) -> Self {
        use HistoryOperation as B;
        match from {
            B::Create => Self::Create,
            B::Update => Self::Update,
            B::Delete => Self::Delete,
            B::Approve => Self::Approve,
            B::ReturnToConstruction => Self::ReturnToConstruction,
        }
    }
}

impl From<e::history::PlaceHistoryRecord> for PlaceHistoryEntry {
    fn from(from: e::history::PlaceHistoryRecord) -> Self {
        let e::history::HistoryRecord {
            entry,
            subject_name,
            campus_name,
        } = from;
        let e::history::HistoryEntry {
            id,
            subject_id,
            activity,
            operation,
            message,
        } = entry;
        Self {
            id: id.into(),
            id_ubicacion: subject_id.into(),
            usuario: activity.by,
            accion: operation.into(),
            mensaje: message,
            fecha: activity.at.as_millis(),
            nombre_lugar: subject_name,
            nombre_campus: campus_name,
        }
    }
}

impl From<e::history::RouteHistoryRecord> for RouteHistoryEntry {
    fn from(from: e::history::RouteHistoryRecord) -> Self {
        let e::history::HistoryRecord {
            entry,
            subject_name,
            campus_name,
        } = from;
        let e::history::HistoryEntry {
            id,
            subject_id,
            activity,
            operation,
            message,
        } = entry;
        Self {
            id: id.into(),
            id_ruta: subject_id.into(),
            usuario: activity.by,
            accion: operation.into(),
            mensaje: message,
            fecha: activity.at.as_millis(),
            nombre_ruta: subject_name,
            nombre_campus: campus_name,
        }
    }
}

// Geometries are validated before they are stored. Malformed
// legacy data is passed through as a JSON string.
fn geometry_value(geometry: e::location::GeoJson) -> JsonValue {
    let geometry = String::from(geometry);
    serde_json::from_str(&geometry).unwrap_or(JsonValue::String(geometry))
}

impl From<e::place::Place> for Place {
    fn from(from: e::place::Place) -> Self {
        let e::place::Place {
            id,
            name,
            campus_id,
            place_type_id,
            location,
            images,
        } = from;
        let e::location::GeographicLocation {
            id: location_id,
            geometry,
            description,
            state,
        } = location;
        Self {
            id: id.into(),
            nombre: name,
            id_campus: campus_id.into(),
            id_tipo_lugar: place_type_id.map(Into::into),
            id_geografia: location_id.into(),
            geometria: geometry_value(geometry),
            descripcion: description,
            id_estado: state.into(),
            imagenes: images,
        }
    }
}

impl From<e::route::Route> for Route {
    fn from(from: e::route::Route) -> Self {
        let e::route::Route {
            id,
            name,
            campus_id,
            route_type_id,
            location,
            place_ids,
        } = from;
        let e::location::GeographicLocation {
            id: location_id,
            geometry,
            description,
            state,
        } = location;
        Self {
            id: id.into(),
            nombre: name,
            id_campus: campus_id.into(),
            id_tipo_ruta: route_type_id.map(Into::into),
            id_geografia: location_id.into(),
            geometria: geometry_value(geometry),
            descripcion: description,
            id_estado: state.into(),
            lugares: place_ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::campus::Campus> for Campus {
    fn from(from: e::campus::Campus) -> Self {
        let e::campus::Campus { id, name } = from;
        Self {
            id: id.into(),
            nombre: name,
        }
    }
}

impl From<e::catalog::PlaceType> for PlaceType {
    fn from(from: e::catalog::PlaceType) -> Self {
        let e::catalog::PlaceType { id, name } = from;
        Self {
            id: id.into(),
            nombre: name,
        }
    }
}

impl From<e::catalog::RouteType> for RouteType {
    fn from(from: e::catalog::RouteType) -> Self {
        let e::catalog::RouteType { id, name } = from;
        Self {
            id: id.into(),
            nombre: name,
        }
    }
}
