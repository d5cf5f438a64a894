use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::geo::Coordinates;

pub const DEFAULT_OSM_TYPE: &str = "node";

/// Raw Overpass element: a node carries `lat`/`lon`, ways and relations
/// queried with `out center` carry a `center`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsmElement {
    #[serde(rename = "type", default = "default_osm_type")]
    pub osm_type: String,
    pub id: Option<i64>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<Coordinates>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

fn default_osm_type() -> String {
    DEFAULT_OSM_TYPE.to_string()
}

impl OsmElement {
    /// Node coordinates only.
    pub fn position(&self) -> Option<Coordinates> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }

    /// Node coordinates, falling back to the way/relation center.
    pub fn position_or_center(&self) -> Option<Coordinates> {
        self.position().or(self.center)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendedPlace {
    /// `{osm_type}/{osm_id}`
    pub place_id: String,
    pub name: String,
    pub category: String,
    /// Kilometers from the viewer, two decimals.
    pub distance: f64,
    pub lat: f64,
    pub lon: f64,
    pub opening_hours: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub osm_type: String,
    pub osm_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlaceContact {
    pub phone: String,
    pub website: String,
    pub email: String,
    pub instagram: String,
    pub facebook: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlaceDetails {
    pub id: String,
    pub osm_type: String,
    pub osm_id: Option<i64>,
    pub name: String,
    pub category: String,
    pub lat: f64,
    pub lon: f64,
    pub opening_hours: String,
    pub cuisine: String,
    pub wheelchair: String,
    pub takeaway: String,
    pub delivery: String,
    pub smoking: String,
    pub toilets: String,
    pub contact: PlaceContact,
    pub image: String,
    pub maps_url: String,
    pub tags: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_overpass_node() {
        let json = r#"{
            "type": "node",
            "id": 42,
            "lat": 18.52,
            "lon": 73.85,
            "tags": {"amenity": "cafe", "name": "Blue Tokai"}
        }"#;
        let element: OsmElement = serde_json::from_str(json).unwrap();
        assert_eq!(element.osm_type, "node");
        assert_eq!(element.id, Some(42));
        assert_eq!(element.position(), Some(Coordinates::new(18.52, 73.85)));
        assert_eq!(element.tags.get("amenity").map(String::as_str), Some("cafe"));
    }

    #[test]
    fn way_falls_back_to_center() {
        let json = r#"{"type": "way", "id": 7, "center": {"lat": 1.5, "lon": 2.5}}"#;
        let element: OsmElement = serde_json::from_str(json).unwrap();
        assert_eq!(element.position(), None);
        assert_eq!(element.position_or_center(), Some(Coordinates::new(1.5, 2.5)));
        assert!(element.tags.is_empty());
    }

    #[test]
    fn missing_type_defaults_to_node() {
        let element: OsmElement = serde_json::from_str(r#"{"lat": 1.0, "lon": 2.0}"#).unwrap();
        assert_eq!(element.osm_type, DEFAULT_OSM_TYPE);
        assert_eq!(element.id, None);
    }
}
