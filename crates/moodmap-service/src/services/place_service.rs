use std::{collections::HashMap, sync::Arc};

use tracing::{debug, instrument};

use crate::{
    apis::api_models::query::PlaceDetailsQuery,
    external_services::PlaceSource,
    models::places::{PlaceContact, PlaceDetails},
    utils::{
        errors::app_error::AppError,
        geo::Coordinates,
        redis_keys::RedisKeys,
        text::{clean_tag_value, title_case},
    },
};

use super::cache_service::PlaceCache;

const CATEGORY_KEYS: [&str; 6] = ["amenity", "shop", "tourism", "leisure", "office", "building"];

const ATTRIBUTE_SUBSET: [&str; 8] = [
    "brand",
    "operator",
    "level",
    "addr:street",
    "addr:housenumber",
    "addr:postcode",
    "addr:city",
    "addr:state",
];

/// (substring of the category, image search keyword), first match wins.
const IMAGE_KEYWORDS: [(&str, &str); 17] = [
    ("cafe", "cafe"),
    ("restaurant", "restaurant"),
    ("fast", "street+food"),
    ("hospital", "hospital"),
    ("school", "campus"),
    ("college", "campus"),
    ("university", "campus"),
    ("gym", "gym"),
    ("park", "park"),
    ("hotel", "hotel"),
    ("mall", "shopping"),
    ("shop", "shopping"),
    ("bank", "bank"),
    ("atm", "bank"),
    ("pharmacy", "pharmacy"),
    ("cinema", "cinema"),
    ("theatre", "cinema"),
];

pub struct PlaceService {
    source: Arc<dyn PlaceSource>,
    cache: Arc<dyn PlaceCache>,
}

impl PlaceService {
    pub fn new(source: Arc<dyn PlaceSource>, cache: Arc<dyn PlaceCache>) -> Self {
        Self { source, cache }
    }

    #[instrument(skip(self))]
    pub async fn get_details(&self, query: &PlaceDetailsQuery) -> Result<PlaceDetails, AppError> {
        let osm_type = query
            .osm_type
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .unwrap_or_default();

        let cache_key = match query.id {
            Some(osm_id) if !osm_type.is_empty() => {
                Some(RedisKeys::get_place_details_key(&osm_type, osm_id))
            }
            _ => None,
        };

        if let Some(key) = &cache_key {
            if let Some(cached) = self.cache.get_place(key).await {
                debug!("Place details cache hit for {}", key);
                return Ok(cached);
            }
        }

        let element = match query.id {
            Some(osm_id) if !osm_type.is_empty() => {
                self.source.fetch_element(&osm_type, osm_id).await
            }
            _ => None,
        };

        let (tags, element_position) = match element {
            Some(element) => {
                let position = element.position_or_center();
                (element.tags, position)
            }
            None => (HashMap::new(), None),
        };

        let fallback_position = match (query.lat, query.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        };
        let position = element_position
            .or(fallback_position)
            .ok_or_else(|| AppError::BadRequest("Missing coordinates".to_string()))?;

        let details = build_place_details(&osm_type, query.id, &tags, position, query);

        if let Some(key) = &cache_key {
            self.cache
                .set_place(key, &details, RedisKeys::PLACE_DETAILS_TTL)
                .await;
        }

        Ok(details)
    }
}

fn tag<'a>(tags: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    tags.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn first_tag<'a>(tags: &'a HashMap<String, String>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| tag(tags, key))
}

pub fn pick_category(tags: &HashMap<String, String>, fallback: Option<&str>) -> String {
    first_tag(tags, &CATEGORY_KEYS)
        .or_else(|| fallback.map(str::trim).filter(|c| !c.is_empty()))
        .unwrap_or("place")
        .to_string()
}

fn contact_field(tags: &HashMap<String, String>, keys: &[&str]) -> String {
    clean_tag_value(first_tag(tags, keys))
}

pub fn extract_contact(tags: &HashMap<String, String>) -> PlaceContact {
    PlaceContact {
        phone: contact_field(tags, &["phone", "contact:phone", "mobile", "contact:mobile"]),
        website: contact_field(tags, &["website", "contact:website", "url", "contact:url"]),
        email: contact_field(tags, &["email", "contact:email"]),
        instagram: contact_field(tags, &["contact:instagram", "instagram"]),
        facebook: contact_field(tags, &["contact:facebook", "facebook"]),
    }
}

pub fn fallback_image(category: &str) -> String {
    let category = category.to_lowercase();
    let keyword = IMAGE_KEYWORDS
        .iter()
        .find(|(needle, _)| category.contains(needle))
        .map(|(_, keyword)| *keyword)
        .unwrap_or("city");
    format!("https://source.unsplash.com/1200x600/?{}", keyword)
}

pub fn resolve_image(tags: &HashMap<String, String>, category: &str) -> String {
    match tag(tags, "image") {
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => url.to_string(),
        _ => fallback_image(category),
    }
}

pub fn maps_url(position: Coordinates) -> String {
    format!("https://www.google.com/maps?q={},{}", position.lat, position.lon)
}

pub fn build_place_details(
    osm_type: &str,
    osm_id: Option<i64>,
    tags: &HashMap<String, String>,
    position: Coordinates,
    query: &PlaceDetailsQuery,
) -> PlaceDetails {
    let category = pick_category(tags, query.category.as_deref());
    let name = tag(tags, "name")
        .or_else(|| query.name.as_deref().map(str::trim).filter(|n| !n.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| title_case(&category));

    let id = match osm_id {
        Some(osm_id) if !osm_type.is_empty() => format!("{}/{}", osm_type, osm_id),
        _ => String::new(),
    };
    let attribute = |key: &str| clean_tag_value(tag(tags, key));

    PlaceDetails {
        id,
        osm_type: osm_type.to_string(),
        osm_id,
        image: resolve_image(tags, &category),
        name,
        lat: position.lat,
        lon: position.lon,
        opening_hours: attribute("opening_hours"),
        cuisine: attribute("cuisine"),
        wheelchair: attribute("wheelchair"),
        takeaway: attribute("takeaway"),
        delivery: attribute("delivery"),
        smoking: attribute("smoking"),
        toilets: attribute("toilets"),
        contact: extract_contact(tags),
        maps_url: maps_url(position),
        tags: ATTRIBUTE_SUBSET
            .iter()
            .map(|key| (key.to_string(), attribute(*key)))
            .collect(),
        category,
    }
}
