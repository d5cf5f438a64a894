use crate::{models::mood::Mood, utils::geo::Coordinates};

/// Element types Overpass can look up by id.
pub const OSM_ELEMENT_TYPES: [&str; 3] = ["node", "way", "relation"];

pub const SEARCH_RESULT_LIMIT: u32 = 160;

/// Node selectors per mood, without the `around` filter.
fn mood_selectors(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Work => &[
            r#"["amenity"="coworking_space"]"#,
            r#"["office"="coworking"]"#,
            r#"["amenity"="cafe"]"#,
        ],
        Mood::Date => &[
            r#"["amenity"="cafe"]"#,
            r#"["amenity"="restaurant"]"#,
            r#"["amenity"="cafe"]["outdoor_seating"="yes"]"#,
            r#"["amenity"="restaurant"]["outdoor_seating"="yes"]"#,
            r#"["amenity"="cafe"]["internet_access"="yes"]"#,
            r#"["amenity"="restaurant"]["internet_access"="yes"]"#,
        ],
        Mood::QuickBite => &[r#"["amenity"="fast_food"]"#],
        // no cafes for budget
        Mood::Budget => &[
            r#"["amenity"="restaurant"]"#,
            r#"["amenity"="fast_food"]"#,
            r#"["amenity"="food_court"]"#,
        ],
    }
}

/// Union query over every selector for `mood` within `radius_m` of `origin`.
pub fn build_mood_query(mood: Mood, origin: Coordinates, radius_m: u32) -> String {
    let blocks: String = mood_selectors(mood)
        .iter()
        .map(|selector| {
            format!(
                "node{}(around:{},{},{});",
                selector, radius_m, origin.lat, origin.lon
            )
        })
        .collect();

    format!(
        "[out:json][timeout:30];\n(\n  {}\n);\nout {};",
        blocks, SEARCH_RESULT_LIMIT
    )
}

/// Single element lookup; `None` for types Overpass cannot address by id.
pub fn build_element_query(osm_type: &str, osm_id: i64) -> Option<String> {
    let osm_type = osm_type.trim().to_lowercase();
    if !OSM_ELEMENT_TYPES.contains(&osm_type.as_str()) {
        return None;
    }
    Some(format!(
        "[out:json][timeout:25];\n(\n  {}({});\n);\nout center tags;",
        osm_type, osm_id
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_bite_query_has_single_block() {
        let query = build_mood_query(Mood::QuickBite, Coordinates::new(18.5, 73.85), 4000);
        assert_eq!(
            query,
            "[out:json][timeout:30];\n(\n  node[\"amenity\"=\"fast_food\"](around:4000,18.5,73.85);\n);\nout 160;"
        );
    }

    #[test]
    fn budget_query_never_asks_for_cafes() {
        let query = build_mood_query(Mood::Budget, Coordinates::new(18.5, 73.85), 6500);
        assert!(!query.contains("cafe"));
        assert_eq!(query.matches("around:6500").count(), 3);
        assert!(query.contains(r#"node["amenity"="food_court"]"#));
    }

    #[test]
    fn work_query_includes_coworking() {
        let query = build_mood_query(Mood::Work, Coordinates::new(1.0, 2.0), 6000);
        assert!(query.contains(r#"node["amenity"="coworking_space"](around:6000,1,2);"#));
        assert!(query.contains(r#"node["office"="coworking"]"#));
    }

    #[test]
    fn date_query_has_six_blocks() {
        let query = build_mood_query(Mood::Date, Coordinates::new(1.0, 2.0), 4500);
        assert_eq!(query.matches("node[").count(), 6);
    }

    #[test]
    fn element_query_validates_type() {
        assert_eq!(
            build_element_query("Way", 123).as_deref(),
            Some("[out:json][timeout:25];\n(\n  way(123);\n);\nout center tags;")
        );
        assert!(build_element_query("area", 1).is_none());
    }
}
