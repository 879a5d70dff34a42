//! # framecraft-pricing: Pricing Engine for FrameCraft
//!
//! This crate turns a custom-framing configuration into a price. It contains
//! the pricing rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      FrameCraft Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Designers (React)                            │   │
//! │  │   Frame designer ──► Mat designer ──► Specialty ──► Cart glue   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ FrameConfiguration (JSON)              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ framecraft-pricing (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   configurator ──► engine (v2) ──► moulding, glazing            │   │
//! │  │        │              │                                         │   │
//! │  │        │              └──► interpolation, oversize               │   │
//! │  │        └──► sheet (mats), config (fees, print rate)             │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CatalogResolver                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               framecraft-catalog (Data Layer)                   │   │
//! │  │         JSON catalog loading, validation, quote binary          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`configurator`] - Top-level `calculate_pricing` entry point
//! - [`engine`] - Engine v2 frame + glazing pricing
//! - [`sheet`] - Mat sheet fractions and mat pricing
//! - [`moulding`] - Linear-foot frame costing and the moulding price table
//! - [`glazing`] - Acrylic / glass cost profiles
//! - [`interpolation`] - Piecewise-linear anchor tables
//! - [`oversize`] - Perimeter surcharge step function
//! - [`config`] - Print rate, oversize fee bands, mat multipliers
//! - [`catalog`] - Catalog lookup trait and the pricing table bundle
//! - [`types`] - Request / response / catalog types
//! - [`money`] - Integer cents for display and checkout
//! - [`error`] - Domain error types
//! - [`validation`] - Input and catalog row validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same configuration and tables, same price
//! 2. **No I/O**: catalog data comes in through [`catalog::CatalogResolver`]
//! 3. **Round Once**: component costs stay unrounded; only engine v2 rounds
//! 4. **Degrade, Don't Fail**: unknown SKUs fall back to legacy pricing
//!
//! ## Example Usage
//!
//! ```rust
//! use framecraft_pricing::engine::calculate_complete_frame_price_by_sku;
//! use framecraft_pricing::moulding::MouldingPriceTable;
//! use framecraft_pricing::GlazingType;
//!
//! let mouldings = MouldingPriceTable::standard();
//!
//! // 15 × 13 opening in moulding 206, standard acrylic
//! let price =
//!     calculate_complete_frame_price_by_sku(&mouldings, 15.0, 13.0, "206", GlazingType::default())
//!         .unwrap();
//! assert_eq!(price, 46.99);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod configurator;
pub mod engine;
pub mod error;
pub mod glazing;
pub mod interpolation;
pub mod money;
pub mod moulding;
pub mod oversize;
pub mod sheet;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{CatalogResolver, PricingTables};
pub use config::PricingConfig;
pub use configurator::calculate_pricing;
pub use error::{PricingError, PricingResult, ValidationError, ValidationResult};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Retail markups applied on top of material cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingMarkups {
    /// Legacy moulding retail price.
    pub frame_moulding: f64,
    /// Acrylic sold on its own product page.
    pub dedicated_page: f64,
    /// Legacy glazing inside the frame designers.
    pub designer_standard: f64,
    /// Plywood backing in shadowboxes.
    pub designer_plywood: f64,
    /// Mats inside the frame designers (backing included).
    pub mat_in_frame_designer: f64,
    /// Regular mats in the mat designer.
    pub mat_standard: f64,
    /// Premium mats in the mat designer.
    pub mat_premium: f64,
    pub print: f64,
}

/// The markups every designer prices with.
///
/// Engine v2 does not read these; it prices from material cost through
/// the multiplier curve instead.
pub const PRICING_MARKUPS: PricingMarkups = PricingMarkups {
    frame_moulding: 8.0,
    dedicated_page: 13.0,
    designer_standard: 8.0,
    designer_plywood: 2.5,
    mat_in_frame_designer: 2.5,
    mat_standard: 8.0,
    mat_premium: 4.0,
    print: 3.5,
};
