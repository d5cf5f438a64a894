use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams, Default, Clone)]
pub struct PlaceDetailsQuery {
    /// OSM element type: node, way or relation
    #[serde(rename = "type")]
    pub osm_type: Option<String>,
    /// OSM element id
    pub id: Option<i64>,
    /// Latitude to use when the element has no coordinates
    pub lat: Option<f64>,
    /// Longitude to use when the element has no coordinates
    pub lon: Option<f64>,
    /// Display name to use when the element has no name tag
    pub name: Option<String>,
    /// Category to use when the element has no category tags
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RemoveFavoriteQuery {
    /// Place id in `{osm_type}/{osm_id}` form
    pub place_id: String,
}

#[derive(Debug, Deserialize, IntoParams, Default)]
pub struct ProfileQuery {
    /// User looking at the profile; private profiles are only shown to their owner
    pub viewer_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, IntoParams, Default)]
pub struct UserSearchQuery {
    /// Username or name fragment, at least two characters
    pub q: Option<String>,
}
