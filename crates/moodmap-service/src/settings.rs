use config::{Config, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub environment: Option<String>,
    pub database_url: String,
    /// Shared place details cache; in-process when unset.
    pub redis_url: Option<String>,
    pub port: Option<u16>,
    /// Preferred Overpass mirror, tried before the built-in fallbacks.
    pub overpass_url: Option<String>,
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    Config::builder()
        .add_source(Environment::default())
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_may_be_absent() {
        let settings: Settings = Config::builder()
            .set_override("database_url", "postgres://localhost/moodmap")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.database_url, "postgres://localhost/moodmap");
        assert!(settings.redis_url.is_none());
        assert!(settings.overpass_url.is_none());
        assert_eq!(settings.port, None);
    }
}
