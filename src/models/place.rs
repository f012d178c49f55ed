// src/models/place.rs
// DOCUMENTATION: Place record and wire DTOs
// PURPOSE: Serialization models for the remote places service

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A place as served by the remote service
/// DOCUMENTATION: Immutable value type keyed by `id`. Never mutated locally;
/// fields the client does not know about are kept in `extra` so the record
/// passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Opaque identifier assigned by the server
    pub id: String,

    /// Display name
    pub title: String,

    /// Image reference (path or URL)
    #[serde(default)]
    pub image: Value,

    #[serde(default)]
    pub description: String,

    /// Any other attributes the server sends
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Place {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: Value::Null,
            description: String::new(),
            extra: Map::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<Value>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Envelope for GET /places and GET /user-places
#[derive(Debug, Serialize, Deserialize)]
pub struct PlacesResponse {
    pub places: Vec<Place>,
}

/// Body for PUT /user-places
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPlaceRequest {
    pub place_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_place_keeps_unknown_fields() {
        let raw = json!({
            "id": "p1",
            "title": "Forest Waterfall",
            "image": { "src": "forest-waterfall.jpg", "alt": "A waterfall" },
            "description": "A tranquil waterfall",
            "lat": 44.5588,
            "lon": -80.344
        });

        let place: Place = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(place.id, "p1");
        assert_eq!(place.title, "Forest Waterfall");
        assert_eq!(place.extra.get("lat"), Some(&json!(44.5588)));

        assert_eq!(serde_json::to_value(&place).unwrap(), raw);
    }

    #[test]
    fn test_place_optional_display_fields_default() {
        let place: Place = serde_json::from_value(json!({ "id": "p2", "title": "Beach" })).unwrap();
        assert_eq!(place.description, "");
        assert!(place.image.is_null());
        assert!(place.extra.is_empty());
    }

    #[test]
    fn test_add_request_uses_camel_case() {
        let body = serde_json::to_value(AddPlaceRequest { place_id: "p3".to_string() }).unwrap();
        assert_eq!(body, json!({ "placeId": "p3" }));
    }
}
