use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    models::{favorites::NewFavorite, mood::Mood},
    utils::errors::app_error::AppError,
};

/// Missing and unknown moods are both a bad request.
pub fn parse_mood(mood: Option<&str>) -> Result<Mood, AppError> {
    mood.ok_or_else(|| AppError::BadRequest("mood is required".to_string()))?
        .parse::<Mood>()
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct RecommendRequest {
    /// One of work, date, quick_bite, budget
    pub mood: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct AddFavoriteRequest {
    pub place_id: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl From<AddFavoriteRequest> for NewFavorite {
    fn from(request: AddFavoriteRequest) -> Self {
        NewFavorite {
            place_id: request.place_id,
            name: request.name,
            category: request.category,
            lat: request.lat,
            lon: request.lon,
        }
    }
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct SetMoodRequest {
    /// One of work, date, quick_bite, budget
    pub mood: Option<String>,
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct UpdateUsernameRequest {
    #[serde(default)]
    pub username: String,
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct UpdatePrivacyRequest {
    #[serde(default)]
    pub is_private: bool,
}
