//! # Domain Types
//!
//! Request, response and catalog types shared by the pricing engine and its
//! callers (the React designers and the cart glue).
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Catalog (read-only)        Request                 Response            │
//! │  ┌──────────────┐      ┌────────────────────┐   ┌──────────────────┐   │
//! │  │ FrameStyle   │◄─id──│ FrameConfiguration │──►│ PricingBreakdown │   │
//! │  │ MatColor     │◄─id──│  artwork W×H       │   │  frame/mat/glass │   │
//! │  │ GlassType    │◄─id──│  mat type, border  │   │  print, oversize │   │
//! │  └──────────────┘      │  bottom weighted   │   │  subtotal, total │   │
//! │                        └────────────────────┘   └──────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names serialize in camelCase so the JSON matches what the
//! designers already send and receive.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Dimensions
// =============================================================================

/// A width × height pair in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Dimensions { width, height }
    }

    /// Area in square inches.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Perimeter in inches, `2 × (w + h)`.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        (self.width + self.height) * 2.0
    }

    /// United inches (`w + h`), the measure the oversize fee bands use.
    #[inline]
    pub fn united_inches(&self) -> f64 {
        self.width + self.height
    }

    /// Returns `(shorter, longer)` so orientation never matters.
    #[inline]
    pub fn shorter_longer(&self) -> (f64, f64) {
        if self.width <= self.height {
            (self.width, self.height)
        } else {
            (self.height, self.width)
        }
    }
}

// =============================================================================
// Enumerations
// =============================================================================

/// What the customer is buying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    /// Customer ships their own artwork.
    #[default]
    FrameOnly,
    /// We print the uploaded image, then frame it.
    PrintAndFrame,
}

/// Mat layering around the artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum MatType {
    #[default]
    None,
    Single,
    Double,
}

impl MatType {
    /// Whether any mat is cut for this configuration.
    #[inline]
    pub fn has_mat(&self) -> bool {
        !matches!(self, MatType::None)
    }
}

/// Moulding family; each has its own price sub-table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum FrameCategory {
    Picture,
    Shadowbox,
    Canvas,
}

/// Glazing variants. Each selects one cost profile in [`crate::glazing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum GlazingType {
    #[default]
    StandardAcrylic,
    NonGlareAcrylic,
    StandardGlass,
    NonGlareGlass,
}

// =============================================================================
// Catalog Entities
// =============================================================================

/// A frame moulding style from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FrameStyle {
    pub id: String,
    pub name: String,
    pub material: String,
    pub color: String,
    /// Legacy retail rate, used when the SKU has no moulding price.
    pub price_per_inch: f64,
    /// Face width of the moulding in inches.
    pub moulding_width: f64,
    pub category: FrameCategory,
    /// Supplier SKU, keys into the moulding price table.
    #[serde(default)]
    pub sku: Option<String>,
}

/// A mat board color offered in the designers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MatColor {
    pub id: String,
    /// Matches a `MatPricingEntry` name for sheet-based pricing.
    pub name: String,
    #[serde(alias = "color")]
    pub hex_color: String,
    /// Legacy perimeter rate; absent in the newer catalog format.
    #[serde(default)]
    pub price_per_inch: Option<f64>,
}

/// A glazing option (acrylic or glass) from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GlassType {
    pub id: String,
    pub name: String,
    pub price_per_sq_ft: f64,
    /// Explicit cost profile; inferred from id/name when absent.
    #[serde(default)]
    pub glazing: Option<GlazingType>,
}

impl GlassType {
    /// The glazing profile to price this glass with.
    ///
    /// Catalog rows without an explicit profile are treated as acrylic:
    /// non-glare when the id or name says so, standard otherwise.
    pub fn glazing(&self) -> GlazingType {
        if let Some(glazing) = self.glazing {
            return glazing;
        }

        let non_glare =
            self.id.contains("non-glare") || self.name.to_lowercase().contains("non-glare");
        if non_glare {
            GlazingType::NonGlareAcrylic
        } else {
            GlazingType::StandardAcrylic
        }
    }
}

// =============================================================================
// Pricing Request
// =============================================================================

/// A frame configuration to price. Built per call by the designers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FrameConfiguration {
    pub service_type: ServiceType,
    pub artwork_width: f64,
    pub artwork_height: f64,
    pub frame_style_id: String,
    pub mat_type: MatType,
    pub mat_border_width: f64,
    pub mat_reveal_width: f64,
    pub mat_color_id: String,
    /// Inner mat of a double mat; carried for the designers, not priced.
    #[serde(default)]
    pub mat_inner_color_id: Option<String>,
    pub glass_type_id: String,
    /// Adds half an inch to the bottom border ("museum style").
    #[serde(default)]
    pub bottom_weighted: bool,
    /// Uploaded image for print-and-frame orders.
    #[serde(default)]
    pub image_url: Option<String>,
}

// =============================================================================
// Pricing Response
// =============================================================================

/// Which cost model priced the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum FramePricingModel {
    /// Engine v2; glazing is bundled into the frame price.
    EngineV2,
    /// `perimeter × pricePerInch`, glazing priced separately.
    LegacyPerimeter,
}

/// Which cost model priced the mat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum MatPricingModel {
    /// Sheet fraction × sheet price × designer markup.
    Sheet,
    /// `perimeter × pricePerInch`.
    LegacyPerimeter,
}

/// Itemized price of a configuration.
///
/// ## Invariant
/// `subtotal == frame + mat + glass + print` and `total == subtotal +
/// oversize_fee`, computed in that order with no extra rounding term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    pub frame_price: f64,
    pub mat_price: f64,
    pub glass_price: f64,
    pub print_price: f64,
    pub oversize_fee: f64,
    pub subtotal: f64,
    pub total: f64,
    /// Too large to fulfill online; UI must block checkout.
    pub is_too_large: bool,
    /// United inches of the outer frame opening.
    pub total_dimensions: f64,
    /// Frame opening including mat border and bottom weighting.
    pub frame_dimensions: Dimensions,
    /// Engine v2 clamped the frame price to the floor.
    pub hit_floor: bool,
    pub frame_pricing_model: FramePricingModel,
    /// `None` when no mat was ordered.
    pub mat_pricing_model: Option<MatPricingModel>,
}

impl PricingBreakdown {
    /// The total as integer cents for the cart.
    pub fn total_money(&self) -> Money {
        Money::from_dollars(self.total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
