pub struct RedisKeys;

impl RedisKeys {
    pub const PLACE_DETAILS_PREFIX: &'static str = "place:";

    // 10 minutes
    pub const PLACE_DETAILS_TTL: u64 = 600;

    pub fn get_place_details_key(osm_type: &str, osm_id: i64) -> String {
        format!("{}{}/{}", Self::PLACE_DETAILS_PREFIX, osm_type, osm_id)
    }
}
