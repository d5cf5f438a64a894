use crate::models::mood::Mood;

use super::{
    keywords::{BUDGET_KEYWORDS, DATE_BAD_KEYWORDS, DATE_KEYWORDS, EXPENSIVE_KEYWORDS, WORK_KEYWORDS},
    tags::{PlaceTags, CAFE, FAST_FOOD, FOOD_COURT, RESTAURANT},
};

/// Upper distance bound (km) and score for each band; anything farther gets
/// `BEYOND_BANDS_SCORE`.
const DISTANCE_BANDS: [(f64, i32); 5] = [(0.3, 18), (0.8, 14), (1.5, 10), (2.5, 6), (4.0, 2)];
const BEYOND_BANDS_SCORE: i32 = -2;

pub fn distance_score(distance_km: f64) -> i32 {
    DISTANCE_BANDS
        .iter()
        .find(|(limit, _)| distance_km <= *limit)
        .map(|(_, score)| *score)
        .unwrap_or(BEYOND_BANDS_SCORE)
}

/// Bonuses for tags that make a place easier to visit, independent of mood.
fn completeness_score(tags: &PlaceTags) -> i32 {
    let mut score = 0;
    if tags.has("opening_hours") {
        score += 2;
    }
    if tags.has_website() {
        score += 2;
    }
    if tags.has_phone() {
        score += 1;
    }
    if tags.has_wifi() {
        score += 5;
    }
    score
}

fn mood_score(mood: Mood, tags: &PlaceTags) -> i32 {
    let amenity = tags.amenity();
    let amenity = amenity.as_str();
    let mut score = 0;

    match mood {
        Mood::Work => {
            if tags.is_coworking() {
                score += 60;
            }
            if amenity == CAFE {
                score += 16;
            }
            if tags.name_matches(WORK_KEYWORDS) {
                score += 14;
            }
            if amenity == FAST_FOOD {
                score -= 40;
            }
        }
        Mood::Date => {
            if amenity == CAFE {
                score += 18;
            }
            if amenity == RESTAURANT {
                score += 14;
            }
            if tags.is_yes("outdoor_seating") {
                score += 14;
            }
            if tags.name_matches(DATE_KEYWORDS) {
                score += 12;
            }
            if tags.name_matches(DATE_BAD_KEYWORDS) {
                score -= 25;
            }
            if amenity == FAST_FOOD {
                score -= 60;
            }
        }
        Mood::QuickBite => {
            if amenity == FAST_FOOD {
                score += 30;
            } else {
                score -= 70;
            }
        }
        Mood::Budget => {
            match amenity {
                FAST_FOOD => score += 12,
                RESTAURANT => score += 10,
                FOOD_COURT => score += 14,
                _ => {}
            }
            if tags.name_matches(BUDGET_KEYWORDS) {
                score += 22;
            }
            if tags.name_matches(EXPENSIVE_KEYWORDS) {
                score -= 18;
            }
        }
    }

    score
}

/// Relevance of a place for `mood` at `distance_km` from the viewer.
pub fn score_place(mood: Mood, tags: &PlaceTags, distance_km: f64) -> i32 {
    distance_score(distance_km) + completeness_score(tags) + mood_score(mood, tags)
}
