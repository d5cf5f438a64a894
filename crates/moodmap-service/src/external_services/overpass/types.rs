use serde::Deserialize;

use crate::models::places::OsmElement;

#[derive(Debug, Deserialize, Default)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OsmElement>,
}
