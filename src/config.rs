//! Form configuration.
//!
//! Every field has a default matching the stock signup form, so an empty
//! JSON object is a valid configuration.

use crate::messages::MessageTable;
use chrono::Duration;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

const MAX_DEBOUNCE_MS: u64 = 24 * 60 * 60 * 1000;

/// Errors that can occur when loading or checking a [`FormConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Rating bounds are inverted (min {min} > max {max})")]
    InvertedRange { min: f64, max: f64 },

    #[error("Invalid email pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Debounce period must be greater than zero")]
    ZeroDebounce,
}

/// Tunables of the customer signup form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Quiet period before the e-mail message is recomputed.
    pub debounce_ms: u64,
    pub rating_min: f64,
    pub rating_max: f64,
    pub first_name_min_length: usize,
    pub last_name_max_length: usize,
    /// Matched against the whole e-mail value.
    pub email_pattern: String,
    pub messages: MessageTable,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 1000,
            rating_min: 1.0,
            rating_max: 5.0,
            first_name_min_length: 3,
            last_name_max_length: 50,
            email_pattern: "[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+".to_string(),
            messages: MessageTable::default(),
        }
    }
}

impl FormConfig {
    /// Parse and check a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and check a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rating_min > self.rating_max {
            return Err(ConfigError::InvertedRange {
                min: self.rating_min,
                max: self.rating_max,
            });
        }
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        Regex::new(&self.email_pattern)?;
        Ok(())
    }

    /// Quiet period as a duration, capped at one day.
    pub fn debounce(&self) -> Duration {
        Duration::milliseconds(self.debounce_ms.min(MAX_DEBOUNCE_MS) as i64)
    }
}
