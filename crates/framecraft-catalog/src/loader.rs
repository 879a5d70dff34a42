//! # Catalog Loader
//!
//! Parses catalog JSON and filters out rows that fail validation.
//!
//! ## Row Filtering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  frames.json: [ row, row, row, ... ]                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  top level not an array?  ──► CatalogError::Json (whole file rejected)  │
//! │       │                                                                 │
//! │       ▼  per row                                                        │
//! │  deserialize ─► validate ─► keep                                        │
//! │       │            │                                                    │
//! │       └── fail ────┴──► drop, count as invalid                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  invalid > 0  ──► error! { kind, total, valid, invalid }                │
//! │  valid == 0   ──► CatalogError::Empty                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;

use framecraft_pricing::moulding::{MouldingPriceSheet, MouldingPriceTable};
use framecraft_pricing::sheet::{MatPriceTable, MatPricingEntry};
use framecraft_pricing::validation::{
    validate_frame_style, validate_glass_type, validate_mat_color, validate_mat_pricing_entry,
    validate_pricing_config,
};
use framecraft_pricing::{FrameStyle, GlassType, MatColor, PricingConfig, ValidationResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{CatalogError, CatalogResult};

/// Parses a JSON array of `T`, keeping rows that deserialize and validate.
///
/// `source` names the file in errors and logs.
pub fn load_rows<T, V>(kind: &str, source: &Path, json: &str, validate: V) -> CatalogResult<Vec<T>>
where
    T: DeserializeOwned,
    V: Fn(&T) -> ValidationResult<()>,
{
    let raw: Vec<Value> =
        serde_json::from_str(json).map_err(|e| CatalogError::json(source, e))?;
    let total = raw.len();

    let valid: Vec<T> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let row = match serde_json::from_value::<T>(value) {
                Ok(row) => row,
                Err(e) => {
                    debug!(kind = %kind, index, error = %e, "Dropping malformed row");
                    return None;
                }
            };
            match validate(&row) {
                Ok(()) => Some(row),
                Err(e) => {
                    debug!(kind = %kind, index, error = %e, "Dropping invalid row");
                    None
                }
            }
        })
        .collect();

    if valid.len() != total {
        error!(
            kind = %kind,
            source = %source.display(),
            total,
            valid = valid.len(),
            invalid = total - valid.len(),
            "Invalid catalog data detected"
        );
    }

    if valid.is_empty() {
        return Err(CatalogError::Empty {
            kind: kind.to_string(),
        });
    }

    Ok(valid)
}

pub fn load_frame_styles(source: &Path, json: &str) -> CatalogResult<Vec<FrameStyle>> {
    load_rows("frame styles", source, json, validate_frame_style)
}

pub fn load_mat_colors(source: &Path, json: &str) -> CatalogResult<Vec<MatColor>> {
    load_rows("mat colors", source, json, validate_mat_color)
}

pub fn load_glass_types(source: &Path, json: &str) -> CatalogResult<Vec<GlassType>> {
    load_rows("glass types", source, json, validate_glass_type)
}

/// The pricing config is a single object; any problem rejects it outright.
pub fn load_pricing_config(source: &Path, json: &str) -> CatalogResult<PricingConfig> {
    let config: PricingConfig =
        serde_json::from_str(json).map_err(|e| CatalogError::json(source, e))?;
    validate_pricing_config(&config)?;
    Ok(config)
}

pub fn load_mat_price_table(source: &Path, json: &str) -> CatalogResult<MatPriceTable> {
    let entries: Vec<MatPricingEntry> =
        load_rows("mat sheet prices", source, json, validate_mat_pricing_entry)?;
    MatPriceTable::from_entries(entries).map_err(|e| CatalogError::invalid_table("mat price", e))
}

pub fn load_moulding_price_table(source: &Path, json: &str) -> CatalogResult<MouldingPriceTable> {
    let sheet: MouldingPriceSheet =
        serde_json::from_str(json).map_err(|e| CatalogError::json(source, e))?;
    let table = MouldingPriceTable::from_sheet(&sheet)
        .map_err(|e| CatalogError::invalid_table("moulding price", e))?;

    if table.is_empty() {
        return Err(CatalogError::Empty {
            kind: "moulding prices".to_string(),
        });
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src() -> &'static Path {
        Path::new("test.json")
    }

    #[test]
    fn test_drops_invalid_rows() {
        let json = r##"[
            {"id": "mat-white", "name": "White", "hexColor": "#FFFFFF"},
            {"id": "mat-bad", "name": "Bad", "hexColor": "white"},
            {"id": "mat-missing-name", "hexColor": "#000000"},
            {"id": "mat-black", "name": "Black", "color": "#000000", "pricePerInch": 0.1}
        ]"##;

        let mats = load_mat_colors(src(), json).unwrap();
        let ids: Vec<&str> = mats.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["mat-white", "mat-black"]);
    }

    #[test]
    fn test_all_invalid_is_empty_error() {
        let json = r#"[{"id": "", "name": "Blank", "pricePerSqFt": 1.0}]"#;
        let err = load_glass_types(src(), json).unwrap_err();
        assert!(matches!(err, CatalogError::Empty { ref kind } if kind == "glass types"));

        assert!(matches!(
            load_glass_types(src(), "[]"),
            Err(CatalogError::Empty { .. })
        ));
    }

    #[test]
    fn test_non_array_is_json_error() {
        let err = load_frame_styles(src(), r#"{"frames": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Json { .. }));
    }

    #[test]
    fn test_pricing_config_is_validated() {
        let json = r#"{
            "oversizeFees": {
                "threshold75to99": { "minDimension": 75, "maxDimension": 99, "fee": 25 },
                "threshold100Plus": { "minDimension": 90 }
            }
        }"#;
        assert!(matches!(
            load_pricing_config(src(), json),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn test_overlapping_moulding_sub_tables_rejected() {
        let json = r#"{ "picture": { "8693": 0.72 }, "shadowbox": { "8693": 0.72 } }"#;
        assert!(matches!(
            load_moulding_price_table(src(), json),
            Err(CatalogError::InvalidTable { .. })
        ));
    }

    #[test]
    fn test_duplicate_mat_names_rejected() {
        let row = r#"{"name": "White", "type": "regular", "sku32x40": "VB222", "price32x40": 3.46}"#;
        let json = format!("[{row}, {row}]");
        assert!(matches!(
            load_mat_price_table(src(), &json),
            Err(CatalogError::InvalidTable { .. })
        ));
    }
}
