use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The preference category a user picks to drive place recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    #[default]
    Work,
    Date,
    QuickBite,
    Budget,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Work, Mood::Date, Mood::QuickBite, Mood::Budget];

    /// Overpass search radius in meters.
    pub fn search_radius_m(&self) -> u32 {
        match self {
            Mood::Work => 6000,
            Mood::Date => 4500,
            Mood::QuickBite => 4000,
            Mood::Budget => 6500,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Work => "work",
            Mood::Date => "date",
            Mood::QuickBite => "quick_bite",
            Mood::Budget => "budget",
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown mood: {0}")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "work" => Ok(Mood::Work),
            "date" => Ok(Mood::Date),
            "quick_bite" => Ok(Mood::QuickBite),
            "budget" => Ok(Mood::Budget),
            other => Err(UnknownMood(other.to_string())),
        }
    }
}
