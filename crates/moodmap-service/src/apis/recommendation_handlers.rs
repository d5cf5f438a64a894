use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    apis::api_models::request::{parse_mood, RecommendRequest},
    models::places::RecommendedPlace,
    utils::{
        errors::{app_error::AppError, error_payload::ErrorPayload},
        geo::Coordinates,
    },
    AppState,
};

pub const TAG: &str = "recommendations";

/// Rank nearby places for a mood
#[utoipa::path(
    post,
    tag = TAG,
    path = "/",
    operation_id = "recommendPlaces",
    responses(
        (status = 200, description = "Places ranked best first, at most 30", body = Vec<RecommendedPlace>),
        (status = 400, description = "Unknown mood or missing coordinates", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    request_body = RecommendRequest
)]
pub(super) async fn recommend_places(
    State(app_state): State<Arc<AppState>>,
    Json(body): Json<RecommendRequest>,
) -> Result<(StatusCode, Json<Vec<RecommendedPlace>>), AppError> {
    let mood = parse_mood(body.mood.as_deref())?;

    let origin = match (body.latitude, body.longitude) {
        (Some(lat), Some(lon)) => Coordinates::new(lat, lon),
        _ => {
            return Err(AppError::BadRequest(
                "latitude and longitude are required".to_string(),
            ))
        }
    };

    let places = app_state
        .recommendation_service
        .recommend(mood, origin)
        .await?;
    Ok((StatusCode::OK, Json(places)))
}
