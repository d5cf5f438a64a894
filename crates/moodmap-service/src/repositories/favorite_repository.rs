use crate::models::favorites::{Favorite, NewFavorite};
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub struct FavoriteRepository {
    db: Arc<PgPool>,
}

impl FavoriteRepository {
    pub fn new(db: Arc<PgPool>) -> Self {
        FavoriteRepository { db }
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Favorite>, sqlx::Error> {
        let query = r#"
        SELECT user_id, place_id, name, category, lat, lon, created_at
        FROM public.favorite
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#;
        sqlx::query_as::<_, Favorite>(query)
            .bind(user_id)
            .fetch_all(self.db.as_ref())
            .await
    }

    /// Saving an already-favorited place leaves the existing row untouched.
    pub async fn add(&self, user_id: Uuid, favorite: &NewFavorite) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO public.favorite (user_id, place_id, name, category, lat, lon, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (user_id, place_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(&favorite.place_id)
        .bind(&favorite.name)
        .bind(&favorite.category)
        .bind(favorite.lat)
        .bind(favorite.lon)
        .bind(Utc::now())
        .execute(self.db.as_ref())
        .await?;

        Ok(())
    }

    pub async fn remove(&self, user_id: Uuid, place_id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM public.favorite WHERE user_id = $1 AND place_id = $2")
            .bind(user_id)
            .bind(place_id)
            .execute(self.db.as_ref())
            .await?;

        Ok(())
    }
}
