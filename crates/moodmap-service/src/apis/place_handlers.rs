use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    apis::api_models::query::PlaceDetailsQuery,
    models::places::PlaceDetails,
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};

pub const TAG: &str = "places";

/// Get details for a single place
#[utoipa::path(
    get,
    tag = TAG,
    path = "/details",
    operation_id = "getPlaceDetails",
    responses(
        (status = 200, description = "Place details", body = PlaceDetails),
        (status = 400, description = "No coordinates for the place", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(PlaceDetailsQuery)
)]
pub(super) async fn get_place_details(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<PlaceDetailsQuery>,
) -> Result<(StatusCode, Json<PlaceDetails>), AppError> {
    let details = app_state.place_service.get_details(&query).await?;
    Ok((StatusCode::OK, Json(details)))
}
