use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable};

use crate::AppState;

pub mod api_models;
pub mod place_handlers;
pub mod recommendation_handlers;
pub mod user_handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "MoodMap API"),
    tags(
        (name = "recommendations", description = "Mood-based place recommendations"),
        (name = "places", description = "Place details"),
        (name = "users", description = "Profiles, favorites and mood")
    )
)]
pub struct ApiDoc;

pub fn setup_routes() -> Router<Arc<AppState>> {
    let api_doc = ApiDoc::openapi();

    let recommendation_router =
        OpenApiRouter::new().routes(routes!(recommendation_handlers::recommend_places));

    let place_router = OpenApiRouter::new().routes(routes!(place_handlers::get_place_details));

    let user_router = OpenApiRouter::new()
        .routes(routes!(
            user_handlers::list_favorites,
            user_handlers::add_favorite,
            user_handlers::remove_favorite
        ))
        .routes(routes!(user_handlers::get_mood, user_handlers::set_mood))
        .routes(routes!(user_handlers::get_profile))
        .routes(routes!(user_handlers::update_username))
        .routes(routes!(user_handlers::update_privacy))
        .routes(routes!(user_handlers::search_users));

    let router = OpenApiRouter::with_openapi(api_doc)
        .nest("/recommendations", recommendation_router)
        .nest("/places", place_router)
        .nest("/users", user_router);

    let (api_router, api_openapi) = OpenApiRouter::new()
        .nest("/api/v1", router)
        .split_for_parts();

    Router::new()
        .merge(Scalar::with_url("/docs", api_openapi))
        .merge(api_router)
}
