//! Mood-based place ranking: hard filter, score, deduplicate, sort.
//!
//! Everything here is pure and deterministic over the upstream element order;
//! fetching lives in `services::recommendation_service`.

pub mod filter;
pub mod keywords;
pub mod scoring;
pub mod tags;

use std::{cmp::Ordering, collections::HashSet};

use tracing::debug;

use crate::{
    models::{
        mood::Mood,
        places::{OsmElement, RecommendedPlace},
    },
    utils::{
        geo::{round_to, Coordinates},
        text::title_case,
    },
};

use filter::passes_hard_filter;
use keywords::GENERIC_NAMES;
use scoring::score_place;
use tags::PlaceTags;

pub const MAX_RESULTS: usize = 30;

/// Generic or missing names are only worth showing when this close (km).
pub const GENERIC_NAME_MAX_DISTANCE_KM: f64 = 1.2;

struct ScoredPlace {
    score: i32,
    place: RecommendedPlace,
}

fn category_of(tags: &PlaceTags) -> String {
    ["amenity", "leisure", "office"]
        .iter()
        .map(|key| tags.get(key))
        .find(|value| !value.is_empty())
        .unwrap_or("place")
        .to_string()
}

fn is_generic_name(name: &str) -> bool {
    let name = name.trim().to_lowercase();
    name.is_empty() || GENERIC_NAMES.contains(&name.as_str())
}

/// Ranks raw elements for `mood` around `origin`, best first, at most
/// [`MAX_RESULTS`] entries.
pub fn rank_places(mood: Mood, origin: Coordinates, elements: &[OsmElement]) -> Vec<RecommendedPlace> {
    let mut seen = HashSet::new();
    let mut scored = Vec::new();

    for (index, element) in elements.iter().enumerate() {
        let Some(position) = element.position_or_center() else {
            continue;
        };

        let tags = PlaceTags::new(&element.tags);
        if !passes_hard_filter(mood, &tags) {
            continue;
        }

        let osm_id = element.id.unwrap_or(index as i64);
        let place_id = format!("{}/{}", element.osm_type, osm_id);
        if !seen.insert(place_id.clone()) {
            continue;
        }

        let distance = round_to(origin.distance_km(&position), 2);
        let category = category_of(&tags);
        let name = match element.tags.get("name") {
            Some(name) => name.clone(),
            None => title_case(&category),
        };

        if is_generic_name(&name) && distance > GENERIC_NAME_MAX_DISTANCE_KM {
            continue;
        }

        let score = score_place(mood, &tags, distance);
        scored.push(ScoredPlace {
            score,
            place: RecommendedPlace {
                place_id,
                name,
                category,
                distance,
                lat: position.lat,
                lon: position.lon,
                opening_hours: element.tags.get("opening_hours").cloned(),
                phone: element
                    .tags
                    .get("phone")
                    .or_else(|| element.tags.get("contact:phone"))
                    .cloned(),
                website: element
                    .tags
                    .get("website")
                    .or_else(|| element.tags.get("contact:website"))
                    .cloned(),
                osm_type: element.osm_type.clone(),
                osm_id,
            },
        });
    }

    scored.sort_by(|a, b| {
        b.score.cmp(&a.score).then_with(|| {
            a.place
                .distance
                .partial_cmp(&b.place.distance)
                .unwrap_or(Ordering::Equal)
        })
    });

    debug!(
        "Ranked {} of {} elements for mood {}",
        scored.len(),
        elements.len(),
        mood
    );

    scored
        .into_iter()
        .take(MAX_RESULTS)
        .map(|s| s.place)
        .collect()
}
