//! # Engine v2: Frame + Glazing Pricer
//!
//! Prices a frame (moulding plus glazing) from material cost through a
//! margin curve, handling fee, oversize surcharge, marketing load, ".99"
//! rounding and a floor price.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  interior W × H, $/ft, glazing                                          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  1. material  = linear_feet × $/ft + area × glazing $/sq in             │
//! │  2. perimeter = 2 × (W + H)                                             │
//! │  3. multiplier(material)          ── MULTIPLIER_ANCHORS                 │
//! │  4. handling_fee(perimeter)       ── HANDLING_ANCHORS                   │
//! │  5. oversize_surcharge(perimeter) ── 120″ → $15, 140″ → $25             │
//! │  6. pre-marketing = material × multiplier + handling + surcharge        │
//! │  7. ÷ (1 − 0.125)                 ── marketing load                     │
//! │  8. round_up_to_99                ── ceil(x) − 0.01                     │
//! │  9. max(·, 15.99)                 ── floor, sets hit_floor              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Glazing cost is part of the material cost, so a frame priced here already
//! includes its glazing. Nothing is rounded before step 8.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::interpolation::{AnchorPoint, AnchorTable};
use crate::moulding::{linear_feet, MouldingPriceTable};
use crate::oversize::oversize_surcharge;
use crate::types::GlazingType;

// =============================================================================
// Constants
// =============================================================================

/// Share of the final price reserved for marketing spend.
pub const MARKETING_LOAD: f64 = 0.125;

/// No frame sells below this.
pub const FLOOR_PRICE: f64 = 15.99;

const HANDLING_POINTS: [AnchorPoint; 6] = [
    AnchorPoint::new(16.0, 6.0),
    AnchorPoint::new(36.0, 8.0),
    AnchorPoint::new(72.0, 11.0),
    AnchorPoint::new(88.0, 15.0),
    AnchorPoint::new(120.0, 23.0),
    AnchorPoint::new(140.0, 32.0),
];

const MULTIPLIER_POINTS: [AnchorPoint; 7] = [
    AnchorPoint::new(0.0, 6.0),
    AnchorPoint::new(10.0, 6.0),
    AnchorPoint::new(25.0, 5.2),
    AnchorPoint::new(60.0, 4.4),
    AnchorPoint::new(120.0, 3.6),
    AnchorPoint::new(200.0, 3.0),
    AnchorPoint::new(400.0, 2.6),
];

/// Interior perimeter (inches) → handling fee (dollars).
pub static HANDLING_ANCHORS: AnchorTable<'static> = AnchorTable::from_sorted(&HANDLING_POINTS);

/// Total material cost (dollars) → retail multiplier. Non-increasing.
pub static MULTIPLIER_ANCHORS: AnchorTable<'static> = AnchorTable::from_sorted(&MULTIPLIER_POINTS);

// =============================================================================
// Pipeline Stages
// =============================================================================

/// Rounds up to the next whole dollar, then takes a cent off.
///
/// ## Example
/// ```rust
/// use framecraft_pricing::engine::round_up_to_99;
///
/// assert_eq!(round_up_to_99(15.50), 15.99);
/// assert_eq!(round_up_to_99(15.99), 15.99);
/// ```
pub fn round_up_to_99(price: f64) -> f64 {
    price.ceil() - 0.01
}

/// Handling fee for an interior perimeter in inches.
pub fn handling_fee(perimeter: f64) -> f64 {
    HANDLING_ANCHORS.interpolate(perimeter)
}

/// Retail multiplier for a total material cost in dollars.
pub fn multiplier(material_cost: f64) -> f64 {
    MULTIPLIER_ANCHORS.interpolate(material_cost)
}

// =============================================================================
// Breakdown
// =============================================================================

/// Every intermediate of one engine v2 run, for audit and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FramePricingBreakdown {
    pub interior_width: f64,
    pub interior_height: f64,
    pub perimeter: f64,
    pub frame_material_cost: f64,
    pub glazing_material_cost: f64,
    pub total_material_cost: f64,
    pub multiplier: f64,
    pub handling_fee: f64,
    pub oversize_surcharge: f64,
    pub pre_marketing: f64,
    pub with_marketing: f64,
    pub hit_floor: bool,
    pub final_price: f64,
}

/// Runs the full pipeline and returns every intermediate.
pub fn calculate_frame_price_with_breakdown(
    interior_width: f64,
    interior_height: f64,
    price_per_foot: f64,
    glazing: GlazingType,
) -> FramePricingBreakdown {
    let feet = linear_feet(interior_width, interior_height);
    let frame_material_cost = f64::from(feet) * price_per_foot;

    let area = interior_width * interior_height;
    let glazing_material_cost = glazing.profile().material_cost(area);
    let total_material_cost = frame_material_cost + glazing_material_cost;

    let perimeter = (interior_width + interior_height) * 2.0;

    let multiplier = multiplier(total_material_cost);
    let handling_fee = handling_fee(perimeter);
    let oversize_surcharge = oversize_surcharge(perimeter);

    let pre_marketing = total_material_cost * multiplier + handling_fee + oversize_surcharge;
    let with_marketing = pre_marketing / (1.0 - MARKETING_LOAD);

    let rounded = round_up_to_99(with_marketing);
    let hit_floor = rounded < FLOOR_PRICE;
    let final_price = if hit_floor { FLOOR_PRICE } else { rounded };

    FramePricingBreakdown {
        interior_width,
        interior_height,
        perimeter,
        frame_material_cost,
        glazing_material_cost,
        total_material_cost,
        multiplier,
        handling_fee,
        oversize_surcharge,
        pre_marketing,
        with_marketing,
        hit_floor,
        final_price,
    }
}

/// Final frame price only.
pub fn calculate_complete_frame_price(
    interior_width: f64,
    interior_height: f64,
    price_per_foot: f64,
    glazing: GlazingType,
) -> f64 {
    calculate_frame_price_with_breakdown(interior_width, interior_height, price_per_foot, glazing)
        .final_price
}

/// Like [`calculate_frame_price_with_breakdown`], with the $/ft looked up by
/// SKU. `None` when the SKU has no moulding price.
pub fn calculate_frame_price_with_breakdown_by_sku(
    mouldings: &MouldingPriceTable,
    interior_width: f64,
    interior_height: f64,
    sku: &str,
    glazing: GlazingType,
) -> Option<FramePricingBreakdown> {
    let Some(price_per_foot) = mouldings.price_per_foot(sku) else {
        debug!(sku = %sku, "No moulding price for SKU");
        return None;
    };

    Some(calculate_frame_price_with_breakdown(
        interior_width,
        interior_height,
        price_per_foot,
        glazing,
    ))
}

pub fn calculate_complete_frame_price_by_sku(
    mouldings: &MouldingPriceTable,
    interior_width: f64,
    interior_height: f64,
    sku: &str,
    glazing: GlazingType,
) -> Option<f64> {
    calculate_frame_price_with_breakdown_by_sku(
        mouldings,
        interior_width,
        interior_height,
        sku,
        glazing,
    )
    .map(|breakdown| breakdown.final_price)
}

// =============================================================================
// Unit Tests
// =============================================================================
