//! # Frame Material Costing
//!
//! Moulding is bought by the linear foot. Frame cost scales with the length
//! of moulding needed to go around the opening, not with area.
//!
//! ## Linear Feet
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  10″ × 8″ opening                                                       │
//! │                                                                         │
//! │  inches = (10 + 8) × 2 + 8 (corner/cut waste) = 44                      │
//! │  feet   = 44 / 12 = 3.67  ──ceil──►  4 linear feet                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price Table
//! Supplier prices come in three disjoint sub-tables (picture, shadowbox,
//! canvas) merged into one [`MouldingPriceTable`] keyed by SKU. A missing SKU
//! is not an error: callers fall back to the legacy per-inch rate.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::types::FrameCategory;
use crate::validation::{validate_rate, validate_sku};
use crate::PRICING_MARKUPS;

/// Waste allowance for mitred corners and saw cuts, in inches.
pub const CORNER_WASTE_INCHES: f64 = 8.0;

// =============================================================================
// Linear Feet
// =============================================================================

/// Linear feet of moulding for an interior opening, rounded up.
///
/// ## Example
/// ```rust
/// use framecraft_pricing::moulding::linear_feet;
///
/// assert_eq!(linear_feet(10.0, 8.0), 4);
/// ```
pub fn linear_feet(interior_width: f64, interior_height: f64) -> u32 {
    let total_inches = (interior_width + interior_height) * 2.0 + CORNER_WASTE_INCHES;
    (total_inches / 12.0).ceil() as u32
}

/// Legacy moulding retail price: linear feet × $/ft × moulding markup.
pub fn frame_moulding_price(interior_width: f64, interior_height: f64, price_per_foot: f64) -> f64 {
    let feet = linear_feet(interior_width, interior_height);
    f64::from(feet) * price_per_foot * PRICING_MARKUPS.frame_moulding
}

// =============================================================================
// Price Table
// =============================================================================

/// Price of one moulding SKU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouldingPrice {
    pub price_per_foot: f64,
    pub category: FrameCategory,
}

/// Supplier price sheet as shipped in catalog JSON: one map per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MouldingPriceSheet {
    pub picture: BTreeMap<String, f64>,
    pub shadowbox: BTreeMap<String, f64>,
    pub canvas: BTreeMap<String, f64>,
}

impl MouldingPriceSheet {
    fn sub_tables(&self) -> [(FrameCategory, &BTreeMap<String, f64>); 3] {
        [
            (FrameCategory::Picture, &self.picture),
            (FrameCategory::Shadowbox, &self.shadowbox),
            (FrameCategory::Canvas, &self.canvas),
        ]
    }
}

const PICTURE_MOULDING_PRICES: [(&str, f64); 6] = [
    ("206", 0.75),
    ("6301", 1.14),
    ("6711", 1.24),
    ("8446", 1.22),
    ("8989", 0.45),
    ("9935", 1.0),
];

const SHADOWBOX_MOULDING_PRICES: [(&str, f64); 3] =
    [("8693", 0.72), ("8990", 0.72), ("9448", 1.81)];

const CANVAS_MOULDING_PRICES: [(&str, f64); 3] =
    [("10117", 0.8), ("10104", 1.14), ("10105", 1.14)];

/// Merged SKU → price-per-foot lookup. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MouldingPriceTable {
    prices: HashMap<String, MouldingPrice>,
}

impl MouldingPriceTable {
    /// The moulding prices shipped with the engine.
    pub fn standard() -> Self {
        let sub_tables: [(FrameCategory, &[(&str, f64)]); 3] = [
            (FrameCategory::Picture, &PICTURE_MOULDING_PRICES),
            (FrameCategory::Shadowbox, &SHADOWBOX_MOULDING_PRICES),
            (FrameCategory::Canvas, &CANVAS_MOULDING_PRICES),
        ];

        let prices = sub_tables
            .iter()
            .flat_map(|(category, rows)| {
                rows.iter().map(move |(sku, price_per_foot)| {
                    (
                        (*sku).to_string(),
                        MouldingPrice {
                            price_per_foot: *price_per_foot,
                            category: *category,
                        },
                    )
                })
            })
            .collect();

        MouldingPriceTable { prices }
    }

    /// Merges a supplier sheet, rejecting bad SKUs, bad prices and SKUs
    /// that appear in more than one sub-table.
    pub fn from_sheet(sheet: &MouldingPriceSheet) -> ValidationResult<Self> {
        let mut prices = HashMap::new();

        for (category, rows) in sheet.sub_tables() {
            for (sku, &price_per_foot) in rows {
                validate_sku(sku)?;
                validate_rate("price per foot", price_per_foot)?;

                let previous = prices.insert(
                    sku.clone(),
                    MouldingPrice {
                        price_per_foot,
                        category,
                    },
                );
                if previous.is_some() {
                    return Err(ValidationError::Duplicate {
                        field: "moulding sku".to_string(),
                        value: sku.clone(),
                    });
                }
            }
        }

        Ok(MouldingPriceTable { prices })
    }

    /// Price per linear foot for `sku`.
    pub fn price_per_foot(&self, sku: &str) -> Option<f64> {
        self.prices.get(sku).map(|p| p.price_per_foot)
    }

    /// Which sub-table `sku` came from.
    pub fn category_of(&self, sku: &str) -> Option<FrameCategory> {
        self.prices.get(sku).map(|p| p.category)
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.prices.contains_key(sku)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Legacy moulding retail price by SKU; `None` if the SKU is unknown.
    pub fn frame_price_by_sku(
        &self,
        interior_width: f64,
        interior_height: f64,
        sku: &str,
    ) -> Option<f64> {
        let price_per_foot = self.price_per_foot(sku)?;
        Some(frame_moulding_price(
            interior_width,
            interior_height,
            price_per_foot,
        ))
    }
}
