use crate::models::mood::Mood;

use super::{
    keywords::{DATE_BAD_KEYWORDS, DATE_KEYWORDS, EXPENSIVE_KEYWORDS, WORK_KEYWORDS},
    tags::{PlaceTags, CAFE, FAST_FOOD, FOOD_COURT, RESTAURANT},
};

/// Mood gate applied before scoring. A place rejected here never reaches the
/// results, so moods cannot leak into each other however a place scores.
pub fn passes_hard_filter(mood: Mood, tags: &PlaceTags) -> bool {
    let amenity = tags.amenity();

    match mood {
        Mood::QuickBite => amenity == FAST_FOOD,
        Mood::Budget => {
            [RESTAURANT, FAST_FOOD, FOOD_COURT].contains(&amenity.as_str())
                && !tags.name_matches(EXPENSIVE_KEYWORDS)
        }
        Mood::Date => {
            if ![CAFE, RESTAURANT].contains(&amenity.as_str()) {
                return false;
            }
            if tags.name_matches(DATE_BAD_KEYWORDS) {
                return false;
            }
            tags.name_matches(DATE_KEYWORDS)
                || tags.is_yes("outdoor_seating")
                || tags.is_yes("wheelchair")
        }
        Mood::Work => {
            if tags.is_coworking() {
                return true;
            }
            amenity == CAFE && (tags.has_wifi() || tags.name_matches(WORK_KEYWORDS))
        }
    }
}
