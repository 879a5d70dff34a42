//! # Catalog Seam
//!
//! The pricing engine never loads data itself. Catalog lookups arrive
//! through [`CatalogResolver`], and the supplier price tables arrive as a
//! [`PricingTables`] bundle. Both are built once and shared read-only.

use std::collections::HashMap;

use crate::config::PricingConfig;
use crate::moulding::MouldingPriceTable;
use crate::sheet::MatPriceTable;
use crate::types::{FrameStyle, GlassType, MatColor};

/// Catalog lookups needed to price a configuration.
///
/// Lookups never fail: an unknown id is `None`, and the caller decides
/// whether that is an error.
pub trait CatalogResolver {
    fn pricing_config(&self) -> &PricingConfig;

    fn frame_style(&self, id: &str) -> Option<&FrameStyle>;

    fn mat_color(&self, id: &str) -> Option<&MatColor>;

    fn glass_type(&self, id: &str) -> Option<&GlassType>;
}

/// Supplier price tables consulted by the pricers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingTables {
    pub mats: MatPriceTable,
    pub mouldings: MouldingPriceTable,
}

impl PricingTables {
    /// The mat and moulding prices shipped with the engine.
    pub fn standard() -> Self {
        PricingTables {
            mats: MatPriceTable::standard(),
            mouldings: MouldingPriceTable::standard(),
        }
    }
}

/// An in-memory catalog keyed by id.
///
/// Handy for specialty designers with a hard-coded product line, and for
/// tests. Later inserts with the same id replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    config: PricingConfig,
    frames: HashMap<String, FrameStyle>,
    mats: HashMap<String, MatColor>,
    glass: HashMap<String, GlassType>,
}

impl StaticCatalog {
    pub fn new(config: PricingConfig) -> Self {
        StaticCatalog {
            config,
            ..Default::default()
        }
    }

    pub fn with_frame(mut self, style: FrameStyle) -> Self {
        self.frames.insert(style.id.clone(), style);
        self
    }

    pub fn with_mat(mut self, mat: MatColor) -> Self {
        self.mats.insert(mat.id.clone(), mat);
        self
    }

    pub fn with_glass(mut self, glass: GlassType) -> Self {
        self.glass.insert(glass.id.clone(), glass);
        self
    }
}

impl CatalogResolver for StaticCatalog {
    fn pricing_config(&self) -> &PricingConfig {
        &self.config
    }

    fn frame_style(&self, id: &str) -> Option<&FrameStyle> {
        self.frames.get(id)
    }

    fn mat_color(&self, id: &str) -> Option<&MatColor> {
        self.mats.get(id)
    }

    fn glass_type(&self, id: &str) -> Option<&GlassType> {
        self.glass.get(id)
    }
}
