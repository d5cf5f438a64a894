pub mod query;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::{debug, instrument, warn};

use crate::{
    models::{mood::Mood, places::OsmElement},
    utils::{errors::app_error::AppError, geo::Coordinates},
};

use super::PlaceSource;
use query::{build_element_query, build_mood_query};
use types::OverpassResponse;

pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
pub const FALLBACK_OVERPASS_URLS: [&str; 2] = [
    "https://overpass.kumi.systems/api/interpreter",
    "https://overpass.nchc.org.tw/api/interpreter",
];

pub const USER_AGENT: &str = "MoodMap/1.0 (contact: moodmap)";
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(28);
pub const ELEMENT_TIMEOUT: Duration = Duration::from_secs(22);

/// Overpass API client that walks a static mirror list until one answers
/// with a well-formed, non-empty element list.
pub struct OverpassService {
    client: Client,
    mirrors: Vec<String>,
}

impl OverpassService {
    /// `primary_url` replaces the default first mirror when set.
    pub fn new(primary_url: Option<String>) -> Result<Self, AppError> {
        let primary = primary_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_OVERPASS_URL.to_string());

        let mut mirrors = vec![primary];
        mirrors.extend(FALLBACK_OVERPASS_URLS.iter().map(|url| url.to_string()));
        Self::with_mirrors(mirrors)
    }

    pub fn with_mirrors(mirrors: Vec<String>) -> Result<Self, AppError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, mirrors })
    }

    pub fn mirrors(&self) -> &[String] {
        &self.mirrors
    }

    async fn post_query(
        &self,
        url: &str,
        query: &str,
        timeout: Duration,
    ) -> Result<Vec<OsmElement>, MirrorError> {
        let response = self
            .client
            .post(url)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded; charset=UTF-8",
            )
            .header(header::CACHE_CONTROL, "no-cache")
            .timeout(timeout)
            .body(query.to_string())
            .send()
            .await?;

        let text = response.text().await?;
        let text = text.trim();
        // Overloaded mirrors answer with an HTML error page, often with 200.
        if text.is_empty() || text.starts_with('<') {
            return Err(MirrorError::NotJson);
        }

        let parsed: OverpassResponse = serde_json::from_str(text)?;
        if parsed.elements.is_empty() {
            return Err(MirrorError::Empty);
        }
        Ok(parsed.elements)
    }

    /// Tries each mirror in order; `None` when every mirror failed.
    async fn query_mirrors(&self, query: &str, timeout: Duration) -> Option<Vec<OsmElement>> {
        for url in &self.mirrors {
            match self.post_query(url, query, timeout).await {
                Ok(elements) => {
                    debug!("Overpass mirror {} returned {} elements", url, elements.len());
                    return Some(elements);
                }
                Err(e) => warn!("Overpass mirror {} failed: {}", url, e),
            }
        }
        None
    }
}

#[derive(Debug, thiserror::Error)]
enum MirrorError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("response was not JSON")]
    NotJson,
    #[error("no elements")]
    Empty,
}

#[async_trait]
impl PlaceSource for OverpassService {
    #[instrument(skip(self))]
    async fn fetch_places(
        &self,
        mood: Mood,
        origin: Coordinates,
        radius_m: u32,
    ) -> Vec<OsmElement> {
        let query = build_mood_query(mood, origin, radius_m);
        self.query_mirrors(&query, SEARCH_TIMEOUT)
            .await
            .unwrap_or_default()
    }

    #[instrument(skip(self))]
    async fn fetch_element(&self, osm_type: &str, osm_id: i64) -> Option<OsmElement> {
        let query = build_element_query(osm_type, osm_id)?;
        self.query_mirrors(&query, ELEMENT_TIMEOUT)
            .await
            .and_then(|elements| elements.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{
        matchers::{body_string_contains, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    const CAFE_RESPONSE: &str = r#"{
        "version": 0.6,
        "elements": [
            {"type": "node", "id": 11, "lat": 18.52, "lon": 73.85,
             "tags": {"amenity": "cafe", "name": "Third Wave Coffee"}}
        ]
    }"#;

    async fn mirror(status: u16, body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/interpreter"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    fn service(servers: &[&MockServer]) -> OverpassService {
        OverpassService::with_mirrors(
            servers
                .iter()
                .map(|s| format!("{}/api/interpreter", s.uri()))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn configured_url_goes_first() {
        let service = OverpassService::new(Some(" http://localhost:9000 ".to_string())).unwrap();
        assert_eq!(service.mirrors()[0], "http://localhost:9000");
        assert_eq!(service.mirrors().len(), 3);

        let service = OverpassService::new(Some(String::new())).unwrap();
        assert_eq!(service.mirrors()[0], DEFAULT_OVERPASS_URL);
    }

    #[tokio::test]
    async fn falls_through_html_and_empty_mirrors() {
        let html = mirror(200, "<html><body>rate limited</body></html>").await;
        let empty = mirror(200, r#"{"elements": []}"#).await;
        let good = mirror(200, CAFE_RESPONSE).await;

        let elements = service(&[&html, &empty, &good])
            .fetch_places(Mood::Work, Coordinates::new(18.52, 73.85), 6000)
            .await;

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].id, Some(11));
    }

    #[tokio::test]
    async fn html_inside_tag_values_is_fine() {
        let body = r#"{"elements": [{"type": "node", "id": 1, "lat": 1.0, "lon": 2.0,
            "tags": {"website": "https://example.com/menu.html"}}]}"#;
        let server = mirror(200, body).await;
        let elements = service(&[&server])
            .fetch_places(Mood::Work, Coordinates::new(1.0, 2.0), 6000)
            .await;
        assert_eq!(elements.len(), 1);
    }

    #[tokio::test]
    async fn skips_malformed_json() {
        let broken = mirror(200, "{\"elements\": [").await;
        let good = mirror(200, CAFE_RESPONSE).await;

        let elements = service(&[&broken, &good])
            .fetch_places(Mood::Work, Coordinates::new(18.52, 73.85), 6000)
            .await;
        assert_eq!(elements.len(), 1);
    }

    #[tokio::test]
    async fn empty_when_every_mirror_fails() {
        let down = mirror(504, "").await;
        let elements = service(&[&down])
            .fetch_places(Mood::Date, Coordinates::new(18.52, 73.85), 4500)
            .await;
        assert!(elements.is_empty());
    }

    #[tokio::test]
    async fn sends_the_mood_query_as_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains(r#"node["amenity"="fast_food"](around:4000,"#))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string(CAFE_RESPONSE))
            .expect(1)
            .mount(&server)
            .await;

        let service = OverpassService::with_mirrors(vec![server.uri()]).unwrap();
        let elements = service
            .fetch_places(Mood::QuickBite, Coordinates::new(18.52, 73.85), 4000)
            .await;
        assert_eq!(elements.len(), 1);
    }

    #[tokio::test]
    async fn fetches_first_element_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("way(77);"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"elements": [{"type": "way", "id": 77, "center": {"lat": 1.0, "lon": 2.0},
                    "tags": {"amenity": "restaurant"}}]}"#,
            ))
            .mount(&server)
            .await;

        let service = OverpassService::with_mirrors(vec![server.uri()]).unwrap();
        let element = service.fetch_element("way", 77).await.unwrap();
        assert_eq!(element.osm_type, "way");
        assert_eq!(element.position_or_center(), Some(Coordinates::new(1.0, 2.0)));
    }

    #[tokio::test]
    async fn unknown_element_type_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(CAFE_RESPONSE))
            .expect(0)
            .mount(&server)
            .await;

        let service = OverpassService::with_mirrors(vec![server.uri()]).unwrap();
        assert!(service.fetch_element("area", 1).await.is_none());
    }
}
