use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use crate::{models::places::PlaceDetails, utils::time::get_current_time};

use super::redis_service::RedisService;

/// Short-lived store for assembled place details. Failures are logged and
/// reported as misses.
#[async_trait]
pub trait PlaceCache: Send + Sync {
    async fn get_place(&self, key: &str) -> Option<PlaceDetails>;
    async fn set_place(&self, key: &str, details: &PlaceDetails, ttl_seconds: u64);
}

#[async_trait]
impl PlaceCache for RedisService {
    async fn get_place(&self, key: &str) -> Option<PlaceDetails> {
        self.get_cached(key).await.unwrap_or_else(|e| {
            warn!("Failed to read place cache {}: {}", key, e);
            None
        })
    }

    async fn set_place(&self, key: &str, details: &PlaceDetails, ttl_seconds: u64) {
        if let Err(e) = self.set_cached(key, details, ttl_seconds).await {
            warn!("Failed to write place cache {}: {}", key, e);
        }
    }
}

/// Per-process cache used when no redis is configured.
#[derive(Default)]
pub struct MemoryPlaceCache {
    entries: RwLock<HashMap<String, (i64, PlaceDetails)>>,
}

impl MemoryPlaceCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlaceCache for MemoryPlaceCache {
    async fn get_place(&self, key: &str) -> Option<PlaceDetails> {
        let now = get_current_time();
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some((expires_at, details)) if now < *expires_at => return Some(details.clone()),
                Some(_) => {}
                None => return None,
            }
        }
        self.entries.write().await.remove(key);
        None
    }

    async fn set_place(&self, key: &str, details: &PlaceDetails, ttl_seconds: u64) {
        let now = get_current_time();
        let mut entries = self.entries.write().await;
        entries.retain(|_, (expires_at, _)| now < *expires_at);
        entries.insert(key.to_string(), (now + ttl_seconds as i64, details.clone()));
    }
}

#[cfg(test)]
mod tests {
    use crate::models::places::PlaceContact;

    use super::*;

    fn details() -> PlaceDetails {
        PlaceDetails {
            id: "node/1".to_string(),
            osm_type: "node".to_string(),
            osm_id: Some(1),
            name: "Blue Tokai".to_string(),
            category: "cafe".to_string(),
            lat: 18.52,
            lon: 73.85,
            opening_hours: String::new(),
            cuisine: String::new(),
            wheelchair: String::new(),
            takeaway: String::new(),
            delivery: String::new(),
            smoking: String::new(),
            toilets: String::new(),
            contact: PlaceContact::default(),
            image: String::new(),
            maps_url: String::new(),
            tags: HashMap::new(),
        }
    }

    #[tokio::test]
    async fn returns_fresh_entries() {
        let cache = MemoryPlaceCache::new();
        cache.set_place("place:node/1", &details(), 600).await;
        assert_eq!(cache.get_place("place:node/1").await, Some(details()));
        assert_eq!(cache.get_place("place:node/2").await, None);
    }

    #[tokio::test]
    async fn expired_entries_are_evicted() {
        let cache = MemoryPlaceCache::new();
        cache.set_place("place:node/1", &details(), 0).await;
        assert_eq!(cache.get_place("place:node/1").await, None);
        assert!(cache.entries.read().await.is_empty());
    }

    #[tokio::test]
    async fn writes_sweep_other_expired_entries() {
        let cache = MemoryPlaceCache::new();
        cache.set_place("place:node/1", &details(), 0).await;
        cache.set_place("place:node/2", &details(), 0).await;
        cache.set_place("place:node/3", &details(), 600).await;

        let entries = cache.entries.read().await;
        assert_eq!(entries.len(), 1);
        assert!(entries.contains_key("place:node/3"));
    }
}
