pub mod overpass;

use async_trait::async_trait;

use crate::{
    models::{mood::Mood, places::OsmElement},
    utils::geo::Coordinates,
};

/// Upstream provider of tagged points of interest.
///
/// Implementations are best-effort: an unreachable provider yields an empty
/// list or `None` rather than an error.
#[async_trait]
pub trait PlaceSource: Send + Sync {
    async fn fetch_places(&self, mood: Mood, origin: Coordinates, radius_m: u32)
        -> Vec<OsmElement>;

    async fn fetch_element(&self, osm_type: &str, osm_id: i64) -> Option<OsmElement>;
}
