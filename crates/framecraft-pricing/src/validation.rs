//! # Validation Module
//!
//! Input validation for pricing requests and catalog rows.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Designer UI (React)                                          │
//! │  ├── Dimension pickers bounded to what we can cut                      │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: framecraft-catalog loader                                    │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: catalog row rules; bad rows are dropped              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: calculate_pricing                                            │
//! │  └── THIS MODULE: configuration rules before any math runs             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use framecraft_pricing::validation::{validate_sku, validate_dimension};
//!
//! validate_sku("8446").unwrap();
//! validate_dimension("artwork width", 11.0).unwrap();
//! assert!(validate_dimension("artwork width", 0.0).is_err());
//! ```

use crate::config::PricingConfig;
use crate::error::{ValidationError, ValidationResult};
use crate::sheet::MatPricingEntry;
use crate::types::{FrameConfiguration, FrameStyle, GlassType, MatColor};

/// Longest artwork side we accept, in inches.
pub const MAX_ARTWORK_SIDE: f64 = 120.0;

/// Longest id or name accepted from the catalog.
const MAX_NAME_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a supplier SKU.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only letters, digits, hyphens and underscores
///
/// ## Example
/// ```rust
/// use framecraft_pricing::validation::validate_sku;
///
/// assert!(validate_sku("10117").is_ok());
/// assert!(validate_sku("VB-222").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("82 46").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a catalog id or display name: non-blank, bounded length.
pub fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price or rate: finite and not negative. Zero is allowed.
///
/// ## Example
/// ```rust
/// use framecraft_pricing::validation::validate_rate;
///
/// assert!(validate_rate("pricePerInch", 0.12).is_ok());
/// assert!(validate_rate("pricePerInch", 0.0).is_ok());
/// assert!(validate_rate("pricePerInch", -0.5).is_err());
/// assert!(validate_rate("pricePerInch", f64::NAN).is_err());
/// ```
pub fn validate_rate(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: f64::MAX,
        });
    }

    Ok(())
}

/// Validates a physical dimension in inches: finite and strictly positive.
pub fn validate_dimension(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a width that may legitimately be zero (mat border, reveal).
fn validate_optional_width(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: MAX_ARTWORK_SIDE,
        });
    }

    Ok(())
}

// =============================================================================
// Request Validators
// =============================================================================

/// Validates a configuration before it is priced.
///
/// ## Rules
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  artwork W, H   > 0, finite, ≤ MAX_ARTWORK_SIDE                         │
/// │  frame style id  required                                               │
/// │  glass type id   required                                               │
/// │  mat border      ≥ 0 (only checked when a mat is selected)              │
/// │  mat color id    required when a mat is selected                        │
/// │  mat reveal      ≥ 0                                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_configuration(config: &FrameConfiguration) -> ValidationResult<()> {
    for (field, value) in [
        ("artworkWidth", config.artwork_width),
        ("artworkHeight", config.artwork_height),
    ] {
        validate_dimension(field, value)?;
        if value > MAX_ARTWORK_SIDE {
            return Err(ValidationError::OutOfRange {
                field: field.to_string(),
                min: 0.0,
                max: MAX_ARTWORK_SIDE,
            });
        }
    }

    validate_name("frameStyleId", &config.frame_style_id)?;
    validate_name("glassTypeId", &config.glass_type_id)?;
    validate_optional_width("matRevealWidth", config.mat_reveal_width)?;

    if config.mat_type.has_mat() {
        validate_name("matColorId", &config.mat_color_id)?;
        validate_optional_width("matBorderWidth", config.mat_border_width)?;
    }

    Ok(())
}

// =============================================================================
// Catalog Row Validators
// =============================================================================

pub fn validate_frame_style(style: &FrameStyle) -> ValidationResult<()> {
    validate_name("frame style id", &style.id)?;
    validate_name("frame style name", &style.name)?;
    validate_rate("pricePerInch", style.price_per_inch)?;
    validate_optional_width("mouldingWidth", style.moulding_width)?;
    if let Some(sku) = &style.sku {
        validate_sku(sku)?;
    }
    Ok(())
}

pub fn validate_mat_color(mat: &MatColor) -> ValidationResult<()> {
    validate_name("mat color id", &mat.id)?;
    validate_name("mat color name", &mat.name)?;

    let hex = mat.hex_color.trim();
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !(digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())) {
        return Err(ValidationError::InvalidFormat {
            field: "hexColor".to_string(),
            reason: format!("'{}' is not a #RRGGBB color", mat.hex_color),
        });
    }

    if let Some(rate) = mat.price_per_inch {
        validate_rate("pricePerInch", rate)?;
    }
    Ok(())
}

pub fn validate_glass_type(glass: &GlassType) -> ValidationResult<()> {
    validate_name("glass type id", &glass.id)?;
    validate_name("glass type name", &glass.name)?;
    validate_rate("pricePerSqFt", glass.price_per_sq_ft)
}

pub fn validate_mat_pricing_entry(entry: &MatPricingEntry) -> ValidationResult<()> {
    validate_name("mat name", &entry.name)?;
    validate_sku(&entry.sku_32x40)?;
    validate_rate("price32x40", entry.price_32x40)?;

    match (&entry.sku_40x60, entry.price_40x60) {
        (Some(sku), Some(price)) => {
            validate_sku(sku)?;
            validate_rate("price40x60", price)
        }
        (None, None) => Ok(()),
        _ => Err(ValidationError::InvalidFormat {
            field: "price40x60".to_string(),
            reason: "sku40x60 and price40x60 must both be set or both be null".to_string(),
        }),
    }
}

/// Validates the pricing config table.
///
/// ## Rules
/// - Every rate, fee and multiplier is finite and not negative
/// - The fee band is ordered: `min ≤ max`
/// - The too-large threshold sits above the fee band
pub fn validate_pricing_config(config: &PricingConfig) -> ValidationResult<()> {
    let band = &config.oversize_fees.threshold_75_to_99;
    let blocked = &config.oversize_fees.threshold_100_plus;

    validate_rate(
        "printAndFrame.pricePerSquareInch",
        config.print_and_frame.price_per_square_inch,
    )?;
    validate_rate("threshold75to99.fee", band.fee)?;
    validate_rate("threshold75to99.minDimension", band.min_dimension)?;
    validate_rate("threshold75to99.maxDimension", band.max_dimension)?;
    validate_rate("threshold100Plus.minDimension", blocked.min_dimension)?;

    if band.min_dimension > band.max_dimension {
        return Err(ValidationError::InvalidFormat {
            field: "threshold75to99".to_string(),
            reason: format!(
                "minDimension {} is above maxDimension {}",
                band.min_dimension, band.max_dimension
            ),
        });
    }

    if blocked.min_dimension <= band.max_dimension {
        return Err(ValidationError::InvalidFormat {
            field: "threshold100Plus".to_string(),
            reason: format!(
                "minDimension {} must be above the fee band (max {})",
                blocked.min_dimension, band.max_dimension
            ),
        });
    }

    let multipliers = &config.mat_multipliers;
    validate_rate("matMultipliers.none", multipliers.none)?;
    validate_rate("matMultipliers.single", multipliers.single)?;
    validate_rate("matMultipliers.double", multipliers.double)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::MatTier;
    use crate::types::{FrameCategory, MatType, ServiceType};

    fn configuration() -> FrameConfiguration {
        FrameConfiguration {
            service_type: ServiceType::FrameOnly,
            artwork_width: 10.0,
            artwork_height: 8.0,
            frame_style_id: "black-206".to_string(),
            mat_type: MatType::Single,
            mat_border_width: 2.5,
            mat_reveal_width: 0.0,
            mat_color_id: "mat-white".to_string(),
            mat_inner_color_id: None,
            glass_type_id: "standard".to_string(),
            bottom_weighted: false,
            image_url: None,
        }
    }

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("206").is_ok());
        assert!(validate_sku("VB8222").is_ok());
        assert!(validate_sku("moulding_1").is_ok());

        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Gallery Black").is_ok());
        assert!(matches!(
            validate_name("name", " "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_name("name", &"x".repeat(101)),
            Err(ValidationError::TooLong { max: 100, .. })
        ));
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate("rate", 0.0).is_ok());
        assert!(validate_rate("rate", 3.46).is_ok());
        assert!(validate_rate("rate", -0.01).is_err());
        assert!(validate_rate("rate", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_dimension() {
        assert!(validate_dimension("w", 0.25).is_ok());
        assert!(matches!(
            validate_dimension("w", 0.0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_dimension("w", f64::NAN),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_configuration() {
        assert!(validate_configuration(&configuration()).is_ok());

        let zero_width = FrameConfiguration {
            artwork_width: 0.0,
            ..configuration()
        };
        assert!(validate_configuration(&zero_width).is_err());

        let huge = FrameConfiguration {
            artwork_height: 121.0,
            ..configuration()
        };
        assert!(matches!(
            validate_configuration(&huge),
            Err(ValidationError::OutOfRange { .. })
        ));

        let no_glass = FrameConfiguration {
            glass_type_id: String::new(),
            ..configuration()
        };
        assert!(validate_configuration(&no_glass).is_err());
    }

    #[test]
    fn test_mat_color_only_required_with_mat() {
        let no_mat = FrameConfiguration {
            mat_type: MatType::None,
            mat_color_id: String::new(),
            mat_border_width: -1.0,
            ..configuration()
        };
        assert!(validate_configuration(&no_mat).is_ok());

        let missing_color = FrameConfiguration {
            mat_color_id: String::new(),
            ..configuration()
        };
        assert!(validate_configuration(&missing_color).is_err());
    }

    #[test]
    fn test_validate_frame_style() {
        let mut style = FrameStyle {
            id: "black-206".to_string(),
            name: "Gallery Black".to_string(),
            material: "wood".to_string(),
            color: "black".to_string(),
            price_per_inch: 0.5,
            moulding_width: 0.75,
            category: FrameCategory::Picture,
            sku: Some("206".to_string()),
        };
        assert!(validate_frame_style(&style).is_ok());

        style.sku = Some("2 06".to_string());
        assert!(validate_frame_style(&style).is_err());

        style.sku = None;
        style.price_per_inch = -1.0;
        assert!(validate_frame_style(&style).is_err());
    }

    #[test]
    fn test_validate_mat_color_hex() {
        let mut mat = MatColor {
            id: "mat-white".to_string(),
            name: "White".to_string(),
            hex_color: "#FFFFFF".to_string(),
            price_per_inch: None,
        };
        assert!(validate_mat_color(&mat).is_ok());

        mat.hex_color = "white".to_string();
        assert!(matches!(
            validate_mat_color(&mat),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_glass_type() {
        let glass = GlassType {
            id: "standard".to_string(),
            name: "Standard Acrylic".to_string(),
            price_per_sq_ft: -2.0,
            glazing: None,
        };
        assert!(validate_glass_type(&glass).is_err());
    }

    #[test]
    fn test_validate_mat_pricing_entry_pairs_oversize_fields() {
        let mut entry = MatPricingEntry {
            name: "White".to_string(),
            tier: MatTier::Regular,
            sku_32x40: "VB222".to_string(),
            price_32x40: 3.46,
            sku_40x60: None,
            price_40x60: None,
        };
        assert!(validate_mat_pricing_entry(&entry).is_ok());

        entry.price_40x60 = Some(11.85);
        assert!(validate_mat_pricing_entry(&entry).is_err());

        entry.sku_40x60 = Some("VB8222".to_string());
        assert!(validate_mat_pricing_entry(&entry).is_ok());
    }

    #[test]
    fn test_validate_pricing_config() {
        assert!(validate_pricing_config(&PricingConfig::default()).is_ok());

        let mut inverted = PricingConfig::default();
        inverted.oversize_fees.threshold_75_to_99.min_dimension = 120.0;
        assert!(validate_pricing_config(&inverted).is_err());

        let mut overlapping = PricingConfig::default();
        overlapping.oversize_fees.threshold_100_plus.min_dimension = 90.0;
        assert!(validate_pricing_config(&overlapping).is_err());

        let mut negative = PricingConfig::default();
        negative.mat_multipliers.double = -1.5;
        assert!(validate_pricing_config(&negative).is_err());
    }
}
