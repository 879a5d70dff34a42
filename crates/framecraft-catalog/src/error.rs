//! # Catalog Error Types
//!
//! Error types for loading catalog data.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / ValidationError                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds the file path and data kind         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Startup fails; the designers never see a half-loaded catalog          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A single bad row is not an error: the loader drops it and logs the
//! counts. Only a file that cannot be read or parsed at all, or a kind with
//! no valid rows left, stops the load.

use std::path::PathBuf;

use framecraft_pricing::ValidationError;
use thiserror::Error;

/// Catalog load errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A catalog file could not be read.
    ///
    /// ## When This Occurs
    /// - FRAMECRAFT_DATA_DIR points at the wrong directory
    /// - A required file (frames.json, mats.json, ...) is missing
    /// - File permissions issue
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog file is not the JSON shape we expect at the top level.
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Every row of a kind was invalid (or the file was an empty array).
    #[error("No valid {kind} found in catalog data")]
    Empty { kind: String },

    /// A price table could not be assembled from otherwise valid rows.
    #[error("Invalid {table} table: {reason}")]
    InvalidTable { table: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        CatalogError::Json {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_table(table: &str, source: ValidationError) -> Self {
        CatalogError::InvalidTable {
            table: table.to_string(),
            reason: source.to_string(),
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = CatalogError::Empty {
            kind: "frame styles".to_string(),
        };
        assert_eq!(err.to_string(), "No valid frame styles found in catalog data");

        let err = CatalogError::io(
            "/data/frames.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().starts_with("Failed to read /data/frames.json"));
    }

    #[test]
    fn test_invalid_table_keeps_reason() {
        let err = CatalogError::invalid_table(
            "moulding price",
            ValidationError::Duplicate {
                field: "moulding sku".to_string(),
                value: "8693".to_string(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Invalid moulding price table: moulding sku '8693' already exists"
        );
    }
}
