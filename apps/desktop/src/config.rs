//! Host configuration from `.env` and the process environment.

use flaszkards_core::LoadSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SKIP_HEADER_ROW_VAR: &str = "FLASZKARDS_SKIP_HEADER_ROW";
pub const MAX_UPLOAD_BYTES_VAR: &str = "FLASZKARDS_MAX_UPLOAD_BYTES";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub skip_header_row: bool,
    pub max_upload_bytes: usize,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            skip_header_row: false,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load `.env` (if any), then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup. Unset variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(SKIP_HEADER_ROW_VAR) {
            config.skip_header_row = parse_bool(SKIP_HEADER_ROW_VAR, &value)?;
        }
        if let Some(value) = lookup(MAX_UPLOAD_BYTES_VAR) {
            config.max_upload_bytes = value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: MAX_UPLOAD_BYTES_VAR,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(LOG_FILTER_VAR) {
            config.log_filter = value;
        }

        Ok(config)
    }

    /// Settings handed to the deck loader.
    pub fn load_settings(&self) -> LoadSettings {
        LoadSettings {
            skip_header_row: self.skip_header_row,
            max_bytes: Some(self.max_upload_bytes),
        }
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(!config.load_settings().skip_header_row);
        assert_eq!(config.load_settings().max_bytes, Some(DEFAULT_MAX_UPLOAD_BYTES));
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (SKIP_HEADER_ROW_VAR, "true"),
            (MAX_UPLOAD_BYTES_VAR, " 2048 "),
            (LOG_FILTER_VAR, "flaszkards_core=debug"),
        ]))
        .unwrap();
        assert!(config.skip_header_row);
        assert_eq!(config.max_upload_bytes, 2048);
        assert_eq!(config.log_filter, "flaszkards_core=debug");
    }

    #[test]
    fn rejects_bad_bool() {
        let err = AppConfig::from_lookup(lookup(&[(SKIP_HEADER_ROW_VAR, "maybe")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for FLASZKARDS_SKIP_HEADER_ROW: \"maybe\""
        );
    }

    #[test]
    fn rejects_bad_size() {
        let result = AppConfig::from_lookup(lookup(&[(MAX_UPLOAD_BYTES_VAR, "lots")]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { var: MAX_UPLOAD_BYTES_VAR, .. })
        ));
    }
}
