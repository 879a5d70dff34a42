//! # Sheet Costing & Mat Pricer
//!
//! Mat board is bought in 32×40 sheets (and 40×60 for oversize work). A mat
//! is costed by the fraction of a sheet its opening consumes, so small mats
//! do not pay for a whole board.
//!
//! ## Sheet Fractions
//! ```text
//! ┌──────────────────────────────── 32 × 40 ────────────────────────────────┐
//! │ ┌──────────────┐                                                        │
//! │ │   16 × 20    │  quarter (0.25)                                        │
//! │ └──────────────┘                                                        │
//! │ ┌───────────────────────────┐                                           │
//! │ │          20 × 32          │  half (0.5)                               │
//! │ └───────────────────────────┘                                           │
//! │                                          anything up to 32 × 40: full   │
//! └─────────────────────────────────────────────────────────────────────────┘
//!   larger than 32 × 40  →  oversize: full price of a 40 × 60 sheet
//! ```
//!
//! Sides are compared shorter-to-shorter and longer-to-longer, so a 20×16
//! mat is the same quarter sheet as a 16×20 one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};
use crate::types::Dimensions;
use crate::validation::validate_mat_pricing_entry;
use crate::PRICING_MARKUPS;

// =============================================================================
// Sheet Fraction
// =============================================================================

/// Portion of a 32×40 sheet consumed by one mat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SheetFraction {
    Quarter,
    Half,
    Full,
}

impl SheetFraction {
    /// The fraction as a multiplier of the sheet price.
    pub const fn as_f64(self) -> f64 {
        match self {
            SheetFraction::Quarter => 0.25,
            SheetFraction::Half => 0.5,
            SheetFraction::Full => 1.0,
        }
    }
}

/// Classifies a mat by sheet usage; `None` means it needs a 40×60 sheet.
///
/// ## Example
/// ```rust
/// use framecraft_pricing::sheet::{sheet_fraction, SheetFraction};
///
/// assert_eq!(sheet_fraction(16.0, 20.0), Some(SheetFraction::Quarter));
/// assert_eq!(sheet_fraction(20.0, 16.0), Some(SheetFraction::Quarter));
/// assert_eq!(sheet_fraction(32.01, 40.0), None);
/// ```
pub fn sheet_fraction(width: f64, height: f64) -> Option<SheetFraction> {
    let (short, long) = Dimensions::new(width, height).shorter_longer();

    if short <= 16.0 && long <= 20.0 {
        Some(SheetFraction::Quarter)
    } else if short <= 20.0 && long <= 32.0 {
        Some(SheetFraction::Half)
    } else if short <= 32.0 && long <= 40.0 {
        Some(SheetFraction::Full)
    } else {
        None
    }
}

// =============================================================================
// Mat Pricing Catalog
// =============================================================================

/// Mat board quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum MatTier {
    Regular,
    Premium,
}

/// Supplier prices for one mat board color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatPricingEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub tier: MatTier,
    #[serde(rename = "sku32x40")]
    pub sku_32x40: String,
    #[serde(rename = "price32x40")]
    pub price_32x40: f64,
    /// `None` when the color is not stocked at 40×60.
    #[serde(rename = "sku40x60", default)]
    pub sku_40x60: Option<String>,
    #[serde(rename = "price40x60", default)]
    pub price_40x60: Option<f64>,
}

/// Immutable mat-name → sheet-price lookup, built once at startup and
/// passed to pricing calls by reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatPriceTable {
    by_name: HashMap<String, MatPricingEntry>,
}

impl MatPriceTable {
    /// The mat prices shipped with the engine.
    pub fn standard() -> Self {
        let entries = [
            MatPricingEntry {
                name: "White".to_string(),
                tier: MatTier::Regular,
                sku_32x40: "VB222".to_string(),
                price_32x40: 3.46,
                sku_40x60: Some("VB8222".to_string()),
                price_40x60: Some(11.85),
            },
            MatPricingEntry {
                name: "Black".to_string(),
                tier: MatTier::Regular,
                sku_32x40: "VB221".to_string(),
                price_32x40: 3.46,
                sku_40x60: Some("VB8221".to_string()),
                price_40x60: Some(11.85),
            },
        ];

        MatPriceTable {
            by_name: entries
                .into_iter()
                .map(|entry| (entry.name.clone(), entry))
                .collect(),
        }
    }

    /// Builds a table from catalog rows, rejecting duplicate names and
    /// invalid prices.
    pub fn from_entries(entries: Vec<MatPricingEntry>) -> ValidationResult<Self> {
        let mut by_name = HashMap::with_capacity(entries.len());

        for entry in entries {
            validate_mat_pricing_entry(&entry)?;

            if by_name.contains_key(&entry.name) {
                return Err(ValidationError::Duplicate {
                    field: "mat name".to_string(),
                    value: entry.name,
                });
            }
            by_name.insert(entry.name.clone(), entry);
        }

        Ok(MatPriceTable { by_name })
    }

    pub fn get(&self, mat_name: &str) -> Option<&MatPricingEntry> {
        self.by_name.get(mat_name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Raw material cost of a mat, before markup.
    ///
    /// `None` when the mat is unknown, or when it needs a 40×60 sheet that
    /// this color is not stocked in.
    pub fn mat_cost(&self, width: f64, height: f64, mat_name: &str) -> Option<f64> {
        let Some(mat) = self.get(mat_name) else {
            debug!(mat_name = %mat_name, "Mat not in sheet price table");
            return None;
        };

        match sheet_fraction(width, height) {
            Some(fraction) => Some(mat.price_32x40 * fraction.as_f64()),
            None => {
                if mat.price_40x60.is_none() {
                    debug!(mat_name = %mat_name, width, height, "Mat not stocked at 40x60");
                }
                mat.price_40x60
            }
        }
    }

    /// Mat price inside the frame designers (backing included): cost × 2.5.
    pub fn mat_price_for_designer(&self, width: f64, height: f64, mat_name: &str) -> Option<f64> {
        let cost = self.mat_cost(width, height, mat_name)?;
        Some(cost * PRICING_MARKUPS.mat_in_frame_designer)
    }

    /// Retail price of a bare mat in the mat designer, marked up by tier.
    pub fn mat_price_for_mat_designer(
        &self,
        width: f64,
        height: f64,
        mat_name: &str,
    ) -> Option<f64> {
        let cost = self.mat_cost(width, height, mat_name)?;
        let markup = match self.get(mat_name)?.tier {
            MatTier::Regular => PRICING_MARKUPS.mat_standard,
            MatTier::Premium => PRICING_MARKUPS.mat_premium,
        };
        Some(cost * markup)
    }
}
