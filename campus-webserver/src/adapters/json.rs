pub use campus_boundary::*;

use crate::core::{entities as e, usecases};
use serde_json::Value as JsonValue;

pub mod from_json {
    //! JSON -> Use case parameters

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_place(p: NewPlace) -> usecases::NewPlace {
        let NewPlace {
            nombre,
            id_campus,
            id_tipo_lugar,
            geometria,
            descripcion,
            imagenes,
        } = p;
        usecases::NewPlace {
            name: nombre,
            campus_id: id_campus.map(e::CampusId::from),
            place_type_id: id_tipo_lugar.map(e::PlaceTypeId::from),
            geometry: geometry_text(geometria),
            description: descripcion,
            images: imagenes,
        }
    }

    pub fn new_route(r: NewRoute) -> usecases::NewRoute {
        let NewRoute {
            nombre,
            id_campus,
            id_tipo_ruta,
            geometria,
            descripcion,
            lugares,
        } = r;
        usecases::NewRoute {
            name: nombre,
            campus_id: id_campus.map(e::CampusId::from),
            route_type_id: id_tipo_ruta.map(e::RouteTypeId::from),
            geometry: geometry_text(geometria),
            description: descripcion,
            place_ids: lugares.into_iter().map(e::PlaceId::from).collect(),
        }
    }

    // Clients either send the GeoJSON object itself or its
    // serialized text.
    fn geometry_text(geometry: JsonValue) -> String {
        match geometry {
            JsonValue::Null => String::new(),
            JsonValue::String(text) => text,
            value => value.to_string(),
        }
    }

}
