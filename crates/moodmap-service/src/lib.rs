use apis::setup_routes;
use axum::Router;
use external_services::{overpass::OverpassService, PlaceSource};
use repositories::{favorite_repository::FavoriteRepository, user_repository::UserRepository};
use services::{
    cache_service::{MemoryPlaceCache, PlaceCache},
    favorite_service::FavoriteService,
    place_service::PlaceService,
    recommendation_service::RecommendationService,
    redis_service::RedisService,
    user_service::UserService,
};
use sqlx::postgres::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use utils::errors::app_error::AppError;

pub mod apis;
pub mod external_services;
pub mod models;
pub mod ranking;
pub mod repositories;
pub mod services;
pub mod settings;
pub mod utils;

pub struct AppState {
    pub recommendation_service: RecommendationService,
    pub place_service: PlaceService,
    pub favorite_service: FavoriteService,
    pub user_service: UserService,
}

pub async fn setup_database(database_url: &str) -> Result<Arc<PgPool>, sqlx::Error> {
    let pool = PgPool::connect(database_url).await?;
    Ok(Arc::new(pool))
}

pub async fn setup_place_cache(
    settings: &settings::Settings,
) -> Result<Arc<dyn PlaceCache>, AppError> {
    match settings.redis_url.as_deref().filter(|url| !url.is_empty()) {
        Some(redis_url) => {
            info!("Caching place details in redis");
            Ok(Arc::new(RedisService::new(redis_url).await?))
        }
        None => {
            info!("REDIS_URL not set, caching place details in memory");
            Ok(Arc::new(MemoryPlaceCache::new()))
        }
    }
}

pub async fn setup_router(
    settings: &settings::Settings,
) -> Result<Router, Box<dyn std::error::Error>> {
    let db = setup_database(&settings.database_url).await?;
    let source = Arc::new(OverpassService::new(settings.overpass_url.clone())?);
    let cache = setup_place_cache(settings).await?;
    let router = setup_routes();

    Ok(router
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(build_state(db, source, cache))))
}

pub fn build_state(
    db: Arc<PgPool>,
    source: Arc<dyn PlaceSource>,
    cache: Arc<dyn PlaceCache>,
) -> AppState {
    let user_repository = Arc::new(UserRepository::new(db.clone()));
    let favorite_repository = Arc::new(FavoriteRepository::new(db));

    AppState {
        recommendation_service: RecommendationService::new(source.clone()),
        place_service: PlaceService::new(source, cache),
        favorite_service: FavoriteService::new(favorite_repository.clone()),
        user_service: UserService::new(user_repository, favorite_repository),
    }
}

pub fn init_tracing(settings: &settings::Settings) {
    let env = settings.environment.clone().unwrap_or("DEV".to_string());
    let level = match env.as_str() {
        "PROD" => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_ansi(env != "PROD")
        .init();
}
