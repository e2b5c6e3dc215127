//! Startup configuration
//!
//! Read once when the page (or terminal session) starts. Every field has a
//! default, so an empty JSON object is a valid config.

use serde::Deserialize;

use crate::consts::{DEFAULT_MAX, DEFAULT_MIN, STORAGE_KEY};
use crate::game::GuessRange;

/// Errors raised while reading a config document
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("number range is empty (min {min} > max {max})")]
    EmptyRange { min: u32, max: u32 },
    #[error("storage key must not be empty")]
    EmptyStorageKey,
    /// Config file could not be read (native only)
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Inclusive range the target and guesses are drawn from
    pub range: GuessRange,
    /// Key the best score is stored under
    pub storage_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            range: GuessRange::new(DEFAULT_MIN, DEFAULT_MAX),
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde can't express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.range.min > self.range.max {
            return Err(ConfigError::EmptyRange {
                min: self.range.min,
                max: self.range.max,
            });
        }
        if self.storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(())
    }

    /// Parse `json`, falling back to defaults when it is invalid
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => {
                log::info!(
                    "Loaded config: range {}..={}, key {:?}",
                    config.range.min,
                    config.range.max,
                    config.storage_key
                );
                config
            }
            Err(e) => {
                log::warn!("Ignoring config ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Element id of the inline JSON config block
    #[cfg(target_arch = "wasm32")]
    const CONFIG_ELEMENT_ID: &'static str = "game-config";

    /// Environment variable naming a JSON config file
    #[cfg(not(target_arch = "wasm32"))]
    const CONFIG_ENV_VAR: &'static str = "NUMBER_CHALLENGE_CONFIG";

    /// Load config from `<script type="application/json" id="game-config">`
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => Self::from_json_or_default(&json),
            None => {
                log::info!("No inline config, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from the file named by `NUMBER_CHALLENGE_CONFIG`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::CONFIG_ENV_VAR) else {
            log::info!("{} not set, using defaults", Self::CONFIG_ENV_VAR);
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => Self::from_json_or_default(&json),
            Err(e) => {
                log::warn!("{}", ConfigError::Io(e));
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.range, GuessRange::new(1, 100));
        assert_eq!(config.storage_key, "number-challenge-best-score");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{"range": {"min": 5, "max": 20}}"#).unwrap();
        assert_eq!(config.range, GuessRange::new(5, 20));
        assert_eq!(config.storage_key, STORAGE_KEY);

        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = GameConfig::from_json(r#"{"range": {"min": 50, "max": 10}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRange { min: 50, max: 10 }));
    }

    #[test]
    fn test_rejects_empty_key() {
        let err = GameConfig::from_json(r#"{"storage_key": ""}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyStorageKey));
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let config = GameConfig::from_json_or_default("not json");
        assert_eq!(config, GameConfig::default());
    }
}
