use serde_json::Value;
use thiserror::Error;

const MAX_NAME_LEN: usize = 200;

// Members of the GeoJSON `type` that are accepted as geometry
const GEOJSON_TYPES: &[&str] = &[
    "Point",
    "MultiPoint",
    "LineString",
    "MultiLineString",
    "Polygon",
    "MultiPolygon",
    "GeometryCollection",
    "Feature",
    "FeatureCollection",
];

pub fn is_valid_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= MAX_NAME_LEN
}

pub fn is_valid_actor_name(actor: &str) -> bool {
    !actor.trim().is_empty()
}

pub fn is_valid_image_url(url: &str) -> bool {
    let url = url.trim();
    !url.is_empty() && !url.chars().any(char::is_whitespace)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryInvalidation {
    #[error("Not a JSON object")]
    NoObject,
    #[error("Missing or unsupported GeoJSON type")]
    Type,
}

pub fn geometry(geojson: &str) -> Result<(), GeometryInvalidation> {
    let value: Value = serde_json::from_str(geojson).map_err(|_| GeometryInvalidation::NoObject)?;
    let object = value.as_object().ok_or(GeometryInvalidation::NoObject)?;
    match object.get("type").and_then(Value::as_str) {
        Some(t) if GEOJSON_TYPES.contains(&t) => Ok(()),
        _ => Err(GeometryInvalidation::Type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(is_valid_name("Biblioteca Central"));
        assert!(!is_valid_name("   "));
        assert!(!is_valid_name(&"x".repeat(MAX_NAME_LEN + 1)));
    }

    #[test]
    fn valid_geometries() {
        assert!(geometry(r#"{"type":"Point","coordinates":[-72.6,-38.7]}"#).is_ok());
        assert!(geometry(r#"{"type":"Feature","geometry":null,"properties":{}}"#).is_ok());
    }

    #[test]
    fn invalid_geometries() {
        assert_eq!(Err(GeometryInvalidation::NoObject), geometry("[1,2]"));
        assert_eq!(Err(GeometryInvalidation::NoObject), geometry("not json"));
        assert_eq!(Err(GeometryInvalidation::Type), geometry(r#"{"type":"Circle"}"#));
        assert_eq!(Err(GeometryInvalidation::Type), geometry(r#"{"coordinates":[]}"#));
    }

    #[test]
    fn image_urls() {
        assert!(is_valid_image_url("https://example.org/a.png"));
        assert!(!is_valid_image_url(""));
        assert!(!is_valid_image_url("https://example.org/a b.png"));
    }
}
