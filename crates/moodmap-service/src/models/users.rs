use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{favorites::FavoriteResponse, mood::Mood};

pub const MIN_USERNAME_LEN: usize = 3;

#[derive(Clone, Debug, PartialEq, FromRow, Serialize, Deserialize, Default)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub is_private: bool,
    pub current_mood: Option<String>,
    pub profile_pic: Option<String>,
}

impl User {
    /// Stored mood, falling back to `work` for unset or unrecognised values.
    pub fn mood(&self) -> Mood {
        self.current_mood
            .as_deref()
            .and_then(|m| m.parse().ok())
            .unwrap_or_default()
    }

    /// Private profiles are only fully visible to their owner.
    pub fn is_visible_to(&self, viewer_id: Option<Uuid>) -> bool {
        !self.is_private || viewer_id == Some(self.id)
    }
}

/// Lowercased username when it is at least three characters of `a-z`, `0-9`
/// or `_`.
pub fn normalize_username(raw: &str) -> Option<String> {
    let username = raw.trim().to_lowercase();
    let valid = username.chars().count() >= MIN_USERNAME_LEN
        && username
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    valid.then_some(username)
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UserMoodResponse {
    pub user_id: Uuid,
    pub mood: Mood,
}

impl From<User> for UserMoodResponse {
    fn from(user: User) -> Self {
        UserMoodResponse {
            user_id: user.id,
            mood: user.mood(),
        }
    }
}

/// Public card shown in search results and after profile edits.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub is_private: bool,
    pub profile_pic: Option<String>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        UserSummary {
            id: user.id,
            username: user.username,
            name: user.name,
            is_private: user.is_private,
            profile_pic: user.profile_pic,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UserProfileResponse {
    #[serde(flatten)]
    pub user: UserSummary,
    /// False when the profile is private and the viewer is not its owner.
    pub visible: bool,
    pub current_mood: Option<Mood>,
    pub favorites: Option<Vec<FavoriteResponse>>,
}

impl UserProfileResponse {
    /// `favorites` is `None` when the viewer may not see them; the mood is
    /// hidden along with them.
    pub fn new(user: User, favorites: Option<Vec<FavoriteResponse>>) -> Self {
        let current_mood = favorites.as_ref().map(|_| user.mood());
        UserProfileResponse {
            user: user.into(),
            visible: favorites.is_some(),
            current_mood,
            favorites,
        }
    }
}
