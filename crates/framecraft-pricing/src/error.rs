//! # Error Types
//!
//! Domain-specific error types for framecraft-pricing.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  framecraft-pricing errors (this file)                                  │
//! │  ├── PricingError     - Caller errors (unknown catalog ids, bad tables) │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  framecraft-catalog errors (separate crate)                             │
//! │  └── CatalogError     - File / JSON / empty catalog failures            │
//! │                                                                         │
//! │  Flow: ValidationError → PricingError / CatalogError → designer UI      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What is NOT an error
//! An unknown moulding SKU, a mat that is not stocked at 40×60, or engine v2
//! declining to price a frame are *degraded conditions*. They take a legacy
//! fallback path and still produce a price. Only a catalog id that cannot be
//! resolved at all stops a pricing call.

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors that stop a pricing call.
///
/// These indicate a data or consistency bug on the caller side: the designer
/// UI is expected to validate selections before asking for a price.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Frame style id does not resolve in the catalog.
    ///
    /// ## When This Occurs
    /// - Designer kept a stale frame selection after a catalog reload
    /// - Specialty designer hard-coded an id that was since removed
    #[error("Frame style not found: {0}")]
    FrameStyleNotFound(String),

    /// Mat color id does not resolve (only checked when a mat is selected).
    #[error("Mat color not found: {0}")]
    MatColorNotFound(String),

    /// Glass type id does not resolve.
    #[error("Glass type not found: {0}")]
    GlassTypeNotFound(String),

    /// An anchor table handed to the interpolator is unusable.
    #[error("Invalid anchor table: {reason}")]
    InvalidAnchorTable { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation of configurations and catalog rows before any
/// pricing math runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., SKU with spaces, non-increasing anchors).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., SKU present in two moulding sub-tables).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_missing_id() {
        let err = PricingError::FrameStyleNotFound("oak-classic".to_string());
        assert_eq!(err.to_string(), "Frame style not found: oak-classic");

        let err = PricingError::MatColorNotFound("mat-99".to_string());
        assert_eq!(err.to_string(), "Mat color not found: mat-99");

        let err = PricingError::GlassTypeNotFound("museum".to_string());
        assert_eq!(err.to_string(), "Glass type not found: museum");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "sku".to_string(),
        };
        assert_eq!(err.to_string(), "sku is required");

        let err = ValidationError::MustBePositive {
            field: "artwork width".to_string(),
        };
        assert_eq!(err.to_string(), "artwork width must be positive");
    }

    #[test]
    fn test_validation_converts_to_pricing_error() {
        let validation_err = ValidationError::Duplicate {
            field: "sku".to_string(),
            value: "206".to_string(),
        };
        let err: PricingError = validation_err.into();
        assert!(matches!(err, PricingError::Validation(_)));
    }
}
