//! # Catalog Configuration
//!
//! Where the catalog comes from, read from the environment at startup.
//!
//! ## Environment Variables
//! ```text
//! ┌──────────────────────────┬──────────────────────────────────────────────┐
//! │ FRAMECRAFT_DATA_DIR      │ Directory of catalog JSON files.             │
//! │                          │ Unset: the catalog bundled into the binary.  │
//! │ FRAMECRAFT_PRINT_RATE    │ Print price per square inch, e.g. "0.06".    │
//! │                          │ Unset: the value in pricing-config.json.     │
//! └──────────────────────────┴──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub const DATA_DIR_VAR: &str = "FRAMECRAFT_DATA_DIR";
pub const PRINT_RATE_VAR: &str = "FRAMECRAFT_PRINT_RATE";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}' ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Catalog source settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogConfig {
    /// `None` loads the bundled catalog.
    pub data_dir: Option<PathBuf>,
    /// Replaces `printAndFrame.pricePerSquareInch` when set.
    pub print_rate_override: Option<f64>,
}

impl CatalogConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable lookup, starting from defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CatalogConfig::default();

        if let Some(dir) = lookup(DATA_DIR_VAR) {
            if dir.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    var: DATA_DIR_VAR,
                    value: dir,
                    reason: "must not be empty".to_string(),
                });
            }
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(raw) = lookup(PRINT_RATE_VAR) {
            let rate = raw
                .trim()
                .parse::<f64>()
                .map_err(|e| ConfigError::InvalidValue {
                    var: PRINT_RATE_VAR,
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;

            if !rate.is_finite() || rate < 0.0 {
                return Err(ConfigError::InvalidValue {
                    var: PRINT_RATE_VAR,
                    value: raw,
                    reason: "must be a non-negative number".to_string(),
                });
            }
            config.print_rate_override = Some(rate);
        }

        Ok(config)
    }
}
