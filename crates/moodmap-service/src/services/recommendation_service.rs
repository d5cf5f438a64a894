use std::{sync::Arc, time::Duration};

use tracing::{info, instrument};

use crate::{
    external_services::PlaceSource,
    models::{mood::Mood, places::RecommendedPlace},
    ranking::rank_places,
    utils::{errors::app_error::AppError, geo::Coordinates},
};

/// Pause before the single retry after an empty upstream answer.
pub const EMPTY_RESULT_RETRY_DELAY: Duration = Duration::from_millis(700);

pub struct RecommendationService {
    source: Arc<dyn PlaceSource>,
    retry_delay: Duration,
}

impl RecommendationService {
    pub fn new(source: Arc<dyn PlaceSource>) -> Self {
        Self {
            source,
            retry_delay: EMPTY_RESULT_RETRY_DELAY,
        }
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    #[instrument(skip(self))]
    pub async fn recommend(
        &self,
        mood: Mood,
        origin: Coordinates,
    ) -> Result<Vec<RecommendedPlace>, AppError> {
        if !origin.is_valid() {
            return Err(AppError::BadRequest(format!(
                "Invalid coordinates: {}, {}",
                origin.lat, origin.lon
            )));
        }

        let radius = mood.search_radius_m();
        let mut elements = self.source.fetch_places(mood, origin, radius).await;
        if elements.is_empty() {
            info!("Empty place list for mood {}, retrying once", mood);
            tokio::time::sleep(self.retry_delay).await;
            elements = self.source.fetch_places(mood, origin, radius).await;
        }

        Ok(rank_places(mood, origin, &elements))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;

    use crate::models::places::OsmElement;

    use super::*;

    /// Serves queued responses in order, then empty lists.
    struct ScriptedSource {
        responses: std::sync::Mutex<Vec<Vec<OsmElement>>>,
        calls: AtomicUsize,
        radii: std::sync::Mutex<Vec<u32>>,
    }

    impl ScriptedSource {
        fn new(mut responses: Vec<Vec<OsmElement>>) -> Self {
            responses.reverse();
            Self {
                responses: std::sync::Mutex::new(responses),
                calls: AtomicUsize::new(0),
                radii: std::sync::Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PlaceSource for ScriptedSource {
        async fn fetch_places(
            &self,
            _mood: Mood,
            _origin: Coordinates,
            radius_m: u32,
        ) -> Vec<OsmElement> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.radii.lock().unwrap().push(radius_m);
            self.responses.lock().unwrap().pop().unwrap_or_default()
        }

        async fn fetch_element(&self, _osm_type: &str, _osm_id: i64) -> Option<OsmElement> {
            None
        }
    }

    fn burger_joint() -> OsmElement {
        OsmElement {
            osm_type: "node".to_string(),
            id: Some(5),
            lat: Some(18.5210),
            lon: Some(73.8567),
            center: None,
            tags: HashMap::from([
                ("amenity".to_string(), "fast_food".to_string()),
                ("name".to_string(), "Burger King".to_string()),
            ]),
        }
    }

    const ORIGIN: Coordinates = Coordinates {
        lat: 18.5204,
        lon: 73.8567,
    };

    #[tokio::test]
    async fn retries_once_after_empty_result() {
        let source = Arc::new(ScriptedSource::new(vec![vec![], vec![burger_joint()]]));
        let service =
            RecommendationService::new(source.clone()).with_retry_delay(Duration::ZERO);

        let places = service.recommend(Mood::QuickBite, ORIGIN).await.unwrap();

        assert_eq!(places.len(), 1);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn gives_up_after_second_empty_result() {
        let source = Arc::new(ScriptedSource::new(vec![]));
        let service =
            RecommendationService::new(source.clone()).with_retry_delay(Duration::ZERO);

        let places = service.recommend(Mood::Budget, ORIGIN).await.unwrap();

        assert!(places.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn no_retry_when_first_call_has_data() {
        let source = Arc::new(ScriptedSource::new(vec![vec![burger_joint()]]));
        let service = RecommendationService::new(source.clone());

        service.recommend(Mood::QuickBite, ORIGIN).await.unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(*source.radii.lock().unwrap(), vec![4000]);
    }

    #[tokio::test]
    async fn rejects_invalid_coordinates_without_fetching() {
        let source = Arc::new(ScriptedSource::new(vec![]));
        let service = RecommendationService::new(source.clone());

        let result = service
            .recommend(Mood::Work, Coordinates::new(f64::NAN, 73.0))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }
}
