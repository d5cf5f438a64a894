use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    apis::api_models::{
        query::{ProfileQuery, RemoveFavoriteQuery, UserSearchQuery},
        request::{
            parse_mood, AddFavoriteRequest, SetMoodRequest, UpdatePrivacyRequest,
            UpdateUsernameRequest,
        },
    },
    models::{
        favorites::FavoriteResponse,
        users::{UserMoodResponse, UserProfileResponse, UserSummary},
    },
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};

const TAG: &str = "users";

/// List a user's favorite places, newest first
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{id}/favorites",
    operation_id = "listFavorites",
    responses(
        (status = 200, description = "Favorite places", body = Vec<FavoriteResponse>),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "User ID")
    )
)]
pub(super) async fn list_favorites(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let favorites = app_state.favorite_service.list_favorites(user_id).await?;
    Ok((StatusCode::OK, Json(favorites)))
}

/// Save a place to a user's favorites
#[utoipa::path(
    post,
    tag = TAG,
    path = "/{id}/favorites",
    operation_id = "addFavorite",
    responses(
        (status = 200, description = "Favorite saved, or already present"),
        (status = 400, description = "Missing place_id", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = AddFavoriteRequest
)]
pub(super) async fn add_favorite(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<AddFavoriteRequest>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .favorite_service
        .add_favorite(user_id, body.into())
        .await?;
    Ok(StatusCode::OK)
}

/// Remove a place from a user's favorites
#[utoipa::path(
    delete,
    tag = TAG,
    path = "/{id}/favorites",
    operation_id = "removeFavorite",
    responses(
        (status = 200, description = "Favorite removed"),
        (status = 400, description = "Missing place_id", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "User ID"),
        RemoveFavoriteQuery
    )
)]
pub(super) async fn remove_favorite(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<RemoveFavoriteQuery>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .favorite_service
        .remove_favorite(user_id, &query.place_id)
        .await?;
    Ok(StatusCode::OK)
}

/// Get a user's current mood
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{id}/mood",
    operation_id = "getMood",
    responses(
        (status = 200, description = "Current mood", body = UserMoodResponse),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "User ID")
    )
)]
pub(super) async fn get_mood(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let mood = app_state.user_service.get_mood(user_id).await?;
    Ok((StatusCode::OK, Json(mood)))
}

/// Set a user's current mood
#[utoipa::path(
    put,
    tag = TAG,
    path = "/{id}/mood",
    operation_id = "setMood",
    responses(
        (status = 200, description = "Mood updated", body = UserMoodResponse),
        (status = 400, description = "Missing or unknown mood", body = ErrorPayload),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = SetMoodRequest
)]
pub(super) async fn set_mood(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<SetMoodRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mood = parse_mood(body.mood.as_deref())?;
    let mood = app_state.user_service.set_mood(user_id, mood).await?;
    Ok((StatusCode::OK, Json(mood)))
}

/// Get a user's profile
///
/// Mood and favorites are omitted for private profiles unless `viewer_id` is
/// the profile owner.
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{id}",
    operation_id = "getProfile",
    responses(
        (status = 200, description = "User profile", body = UserProfileResponse),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "User ID"),
        ProfileQuery
    )
)]
pub(super) async fn get_profile(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<ProfileQuery>,
) -> Result<impl IntoResponse, AppError> {
    let profile = app_state
        .user_service
        .get_profile(user_id, query.viewer_id)
        .await?;
    Ok((StatusCode::OK, Json(profile)))
}

/// Change a user's username
#[utoipa::path(
    put,
    tag = TAG,
    path = "/{id}/username",
    operation_id = "updateUsername",
    responses(
        (status = 200, description = "Username updated", body = UserSummary),
        (status = 400, description = "Invalid username", body = ErrorPayload),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 409, description = "Username already taken", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUsernameRequest
)]
pub(super) async fn update_username(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdateUsernameRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state
        .user_service
        .update_username(user_id, &body.username)
        .await?;
    Ok((StatusCode::OK, Json(user)))
}

/// Make a profile private or public
#[utoipa::path(
    put,
    tag = TAG,
    path = "/{id}/privacy",
    operation_id = "updatePrivacy",
    responses(
        (status = 200, description = "Privacy updated", body = UserSummary),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdatePrivacyRequest
)]
pub(super) async fn update_privacy(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdatePrivacyRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state
        .user_service
        .set_privacy(user_id, body.is_private)
        .await?;
    Ok((StatusCode::OK, Json(user)))
}

/// Search users by username or name
#[utoipa::path(
    get,
    tag = TAG,
    path = "/search",
    operation_id = "searchUsers",
    responses(
        (status = 200, description = "Up to 10 matching users", body = Vec<UserSummary>),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(UserSearchQuery)
)]
pub(super) async fn search_users(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<UserSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let users = app_state
        .user_service
        .search_users(query.q.as_deref())
        .await?;
    Ok((StatusCode::OK, Json(users)))
}
