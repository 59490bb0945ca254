use serde::{Deserialize, Serialize};

use crate::common::types::AnyResult;
use crate::configs::*;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

impl Config {
    pub fn load() -> AnyResult<Self> {
        let config_path = if std::path::Path::new("config.toml").exists() {
            "config.toml"
        } else if std::path::Path::new("config.default.toml").exists() {
            "config.default.toml"
        } else {
            return Ok(Self::default());
        };

        tracing::debug!("Loading configuration from: {}", config_path);

        let config_str = std::fs::read_to_string(config_path)?;
        if config_str.is_empty() {
            return Err(format!("{} is empty", config_path).into());
        }

        let config: Config = toml::from_str(&config_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            api_key = "AIzaSyTest"

            [logging]
            level = "debug"
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.api.api_key.as_deref(), Some("AIzaSyTest"));
        assert_eq!(
            config.api.feeds_base_url,
            "https://gdata.youtube.com/feeds/api"
        );
        assert_eq!(
            config.api.data_base_url,
            "https://www.googleapis.com/youtube/v3"
        );
        assert_eq!(
            config.logging.and_then(|l| l.level).as_deref(),
            Some("debug")
        );
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").expect("empty config should parse");
        assert!(config.api.api_key.is_none());
        assert!(config.logging.is_none());
    }
}
