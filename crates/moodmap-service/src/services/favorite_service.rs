use crate::models::favorites::{FavoriteResponse, NewFavorite};
use crate::repositories::favorite_repository::FavoriteRepository;
use crate::utils::errors::app_error::AppError;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct FavoriteService {
    favorite_repository: Arc<FavoriteRepository>,
}

impl FavoriteService {
    pub fn new(favorite_repository: Arc<FavoriteRepository>) -> Self {
        Self {
            favorite_repository,
        }
    }

    pub async fn list_favorites(&self, user_id: Uuid) -> Result<Vec<FavoriteResponse>, AppError> {
        let favorites = self.favorite_repository.list_by_user(user_id).await?;
        Ok(favorites.into_iter().map(FavoriteResponse::from).collect())
    }

    pub async fn add_favorite(&self, user_id: Uuid, favorite: NewFavorite) -> Result<(), AppError> {
        let favorite = validate_new_favorite(favorite)?;
        self.favorite_repository.add(user_id, &favorite).await?;
        Ok(())
    }

    pub async fn remove_favorite(&self, user_id: Uuid, place_id: &str) -> Result<(), AppError> {
        let place_id = place_id.trim();
        if place_id.is_empty() {
            return Err(AppError::BadRequest("place_id is required".to_string()));
        }
        self.favorite_repository.remove(user_id, place_id).await?;
        Ok(())
    }
}

fn validate_new_favorite(mut favorite: NewFavorite) -> Result<NewFavorite, AppError> {
    favorite.place_id = favorite.place_id.trim().to_string();
    if favorite.place_id.is_empty() {
        return Err(AppError::BadRequest("place_id is required".to_string()));
    }
    Ok(favorite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_id_is_required() {
        let result = validate_new_favorite(NewFavorite {
            place_id: "   ".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn place_id_is_trimmed() {
        let favorite = validate_new_favorite(NewFavorite {
            place_id: " node/42 ".to_string(),
            name: Some("Blue Tokai".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(favorite.place_id, "node/42");
        assert_eq!(favorite.name.as_deref(), Some("Blue Tokai"));
    }
}
