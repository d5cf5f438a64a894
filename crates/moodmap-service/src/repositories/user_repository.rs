use crate::models::{mood::Mood, users::User};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub const SEARCH_LIMIT: i64 = 10;

pub struct UserRepository {
    db: Arc<PgPool>,
}

impl UserRepository {
    pub fn new(db: Arc<PgPool>) -> Self {
        UserRepository { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        let query = r#"
        SELECT id, username, name, is_private, current_mood, profile_pic
        FROM public.user
        WHERE id = $1
        "#;
        sqlx::query_as::<_, User>(query)
            .bind(id)
            .fetch_optional(self.db.as_ref())
            .await
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        let query = r#"
        SELECT id, username, name, is_private, current_mood, profile_pic
        FROM public.user
        WHERE username = $1
        "#;
        sqlx::query_as::<_, User>(query)
            .bind(username)
            .fetch_optional(self.db.as_ref())
            .await
    }

    /// Case-insensitive substring match on username or name. Exact username
    /// matches come first, then username prefixes, then by name.
    pub async fn search(&self, term: &str) -> Result<Vec<User>, sqlx::Error> {
        let query = r#"
        SELECT id, username, name, is_private, current_mood, profile_pic
        FROM public.user
        WHERE lower(username) LIKE $1 OR lower(name) LIKE $1
        ORDER BY
            CASE WHEN lower(username) = $2 THEN 0 ELSE 1 END,
            CASE WHEN lower(username) LIKE $3 THEN 0 ELSE 1 END,
            name ASC
        LIMIT $4
        "#;
        sqlx::query_as::<_, User>(query)
            .bind(format!("%{}%", term))
            .bind(term)
            .bind(format!("{}%", term))
            .bind(SEARCH_LIMIT)
            .fetch_all(self.db.as_ref())
            .await
    }

    /// Returns `false` when no user has this id.
    pub async fn update_current_mood(&self, id: Uuid, mood: Mood) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE public.user SET current_mood = $1 WHERE id = $2")
            .bind(mood.as_str())
            .bind(id)
            .execute(self.db.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn update_username(
        &self,
        id: Uuid,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = r#"
        UPDATE public.user
        SET username = $1
        WHERE id = $2
        RETURNING id, username, name, is_private, current_mood, profile_pic
        "#;
        sqlx::query_as::<_, User>(query)
            .bind(username)
            .bind(id)
            .fetch_optional(self.db.as_ref())
            .await
    }

    pub async fn update_privacy(
        &self,
        id: Uuid,
        is_private: bool,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = r#"
        UPDATE public.user
        SET is_private = $1
        WHERE id = $2
        RETURNING id, username, name, is_private, current_mood, profile_pic
        "#;
        sqlx::query_as::<_, User>(query)
            .bind(is_private)
            .bind(id)
            .fetch_optional(self.db.as_ref())
            .await
    }
}
