use crate::models::favorites::FavoriteResponse;
use crate::models::mood::Mood;
use crate::models::users::{normalize_username, UserMoodResponse, UserProfileResponse, UserSummary};
use crate::repositories::favorite_repository::FavoriteRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::app_error::AppError;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub const MIN_SEARCH_LEN: usize = 2;

#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<UserRepository>,
    favorite_repository: Arc<FavoriteRepository>,
}

impl UserService {
    pub fn new(
        user_repository: Arc<UserRepository>,
        favorite_repository: Arc<FavoriteRepository>,
    ) -> Self {
        Self {
            user_repository,
            favorite_repository,
        }
    }

    pub async fn get_mood(&self, user_id: Uuid) -> Result<UserMoodResponse, AppError> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| user_not_found(user_id))?;
        Ok(user.into())
    }

    pub async fn set_mood(&self, user_id: Uuid, mood: Mood) -> Result<UserMoodResponse, AppError> {
        let updated = self
            .user_repository
            .update_current_mood(user_id, mood)
            .await?;
        if !updated {
            return Err(user_not_found(user_id));
        }

        info!("User {} switched mood to {}", user_id, mood);
        Ok(UserMoodResponse { user_id, mood })
    }

    pub async fn get_profile(
        &self,
        user_id: Uuid,
        viewer_id: Option<Uuid>,
    ) -> Result<UserProfileResponse, AppError> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| user_not_found(user_id))?;

        let favorites = if user.is_visible_to(viewer_id) {
            let favorites = self.favorite_repository.list_by_user(user_id).await?;
            Some(favorites.into_iter().map(FavoriteResponse::from).collect())
        } else {
            None
        };

        Ok(UserProfileResponse::new(user, favorites))
    }

    pub async fn update_username(&self, user_id: Uuid, raw: &str) -> Result<UserSummary, AppError> {
        let username = normalize_username(raw)
            .ok_or_else(|| AppError::BadRequest("Invalid username".to_string()))?;

        if let Some(existing) = self.user_repository.find_by_username(&username).await? {
            if existing.id != user_id {
                return Err(username_taken());
            }
        }

        let user = self
            .user_repository
            .update_username(user_id, &username)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db) if db.is_unique_violation() => username_taken(),
                e => AppError::DatabaseError(e),
            })?
            .ok_or_else(|| user_not_found(user_id))?;

        info!("User {} renamed to {}", user_id, username);
        Ok(user.into())
    }

    pub async fn set_privacy(&self, user_id: Uuid, is_private: bool) -> Result<UserSummary, AppError> {
        let user = self
            .user_repository
            .update_privacy(user_id, is_private)
            .await?
            .ok_or_else(|| user_not_found(user_id))?;
        Ok(user.into())
    }

    /// Short or empty terms return nothing without touching the database.
    pub async fn search_users(&self, q: Option<&str>) -> Result<Vec<UserSummary>, AppError> {
        let Some(term) = search_term(q) else {
            return Ok(vec![]);
        };

        let users = self.user_repository.search(&term).await?;
        Ok(users.into_iter().map(UserSummary::from).collect())
    }
}

fn search_term(q: Option<&str>) -> Option<String> {
    let term = q?.trim().to_lowercase();
    (term.chars().count() >= MIN_SEARCH_LEN).then_some(term)
}

fn user_not_found(user_id: Uuid) -> AppError {
    AppError::NotFound(format!("User {} not found", user_id))
}

fn username_taken() -> AppError {
    AppError::Conflict("Username already taken".to_string())
}
