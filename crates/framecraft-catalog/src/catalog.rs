//! # Catalog
//!
//! The loaded, read-only product catalog. Implements [`CatalogResolver`] so
//! it can be handed straight to `calculate_pricing`.
//!
//! ## Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog::bundled()          data/*.json compiled into the crate        │
//! │  Catalog::load_dir(path)     the same six files from a directory        │
//! │  Catalog::from_config(cfg)   load_dir if FRAMECRAFT_DATA_DIR is set,    │
//! │                              bundled otherwise; applies overrides       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! In a data directory, `mat-pricing.json` and `moulding-prices.json` are
//! optional; when absent the engine's shipped price tables are used.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use framecraft_pricing::moulding::MouldingPriceTable;
use framecraft_pricing::sheet::MatPriceTable;
use framecraft_pricing::{
    calculate_pricing, CatalogResolver, FrameConfiguration, FrameStyle, GlassType, MatColor,
    PricingBreakdown, PricingConfig, PricingResult, PricingTables,
};
use tracing::{info, warn};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::loader;

pub const FRAMES_FILE: &str = "frames.json";
pub const MATS_FILE: &str = "mats.json";
pub const GLASS_FILE: &str = "glass.json";
pub const PRICING_CONFIG_FILE: &str = "pricing-config.json";
pub const MAT_PRICING_FILE: &str = "mat-pricing.json";
pub const MOULDING_PRICES_FILE: &str = "moulding-prices.json";

const BUNDLED_FRAMES: &str = include_str!("../data/frames.json");
const BUNDLED_MATS: &str = include_str!("../data/mats.json");
const BUNDLED_GLASS: &str = include_str!("../data/glass.json");
const BUNDLED_PRICING_CONFIG: &str = include_str!("../data/pricing-config.json");
const BUNDLED_MAT_PRICING: &str = include_str!("../data/mat-pricing.json");
const BUNDLED_MOULDING_PRICES: &str = include_str!("../data/moulding-prices.json");

// =============================================================================
// Catalog
// =============================================================================

/// Read-only catalog, safe to share across threads.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: PricingConfig,
    frames: Vec<FrameStyle>,
    mats: Vec<MatColor>,
    glass: Vec<GlassType>,
    frame_index: HashMap<String, usize>,
    mat_index: HashMap<String, usize>,
    glass_index: HashMap<String, usize>,
    tables: PricingTables,
}

impl Catalog {
    /// Assembles a catalog from already validated parts.
    ///
    /// Duplicate ids keep the first row; later ones are logged and ignored.
    pub fn from_parts(
        config: PricingConfig,
        frames: Vec<FrameStyle>,
        mats: Vec<MatColor>,
        glass: Vec<GlassType>,
        tables: PricingTables,
    ) -> Self {
        let frames = dedupe("frame style", frames, |f| &f.id);
        let mats = dedupe("mat color", mats, |m| &m.id);
        let glass = dedupe("glass type", glass, |g| &g.id);

        Catalog {
            frame_index: index_by_id(&frames, |f| &f.id),
            mat_index: index_by_id(&mats, |m| &m.id),
            glass_index: index_by_id(&glass, |g| &g.id),
            config,
            frames,
            mats,
            glass,
            tables,
        }
    }

    /// The catalog compiled into this crate.
    pub fn bundled() -> CatalogResult<Self> {
        let src = Path::new("<bundled>");

        let catalog = Catalog::from_parts(
            loader::load_pricing_config(&src.join(PRICING_CONFIG_FILE), BUNDLED_PRICING_CONFIG)?,
            loader::load_frame_styles(&src.join(FRAMES_FILE), BUNDLED_FRAMES)?,
            loader::load_mat_colors(&src.join(MATS_FILE), BUNDLED_MATS)?,
            loader::load_glass_types(&src.join(GLASS_FILE), BUNDLED_GLASS)?,
            PricingTables {
                mats: loader::load_mat_price_table(
                    &src.join(MAT_PRICING_FILE),
                    BUNDLED_MAT_PRICING,
                )?,
                mouldings: loader::load_moulding_price_table(
                    &src.join(MOULDING_PRICES_FILE),
                    BUNDLED_MOULDING_PRICES,
                )?,
            },
        );

        catalog.log_loaded("bundled");
        Ok(catalog)
    }

    /// Loads the catalog files from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> CatalogResult<Self> {
        let dir = dir.as_ref();

        let config = {
            let path = dir.join(PRICING_CONFIG_FILE);
            loader::load_pricing_config(&path, &read_required(&path)?)?
        };
        let frames = {
            let path = dir.join(FRAMES_FILE);
            loader::load_frame_styles(&path, &read_required(&path)?)?
        };
        let mats = {
            let path = dir.join(MATS_FILE);
            loader::load_mat_colors(&path, &read_required(&path)?)?
        };
        let glass = {
            let path = dir.join(GLASS_FILE);
            loader::load_glass_types(&path, &read_required(&path)?)?
        };

        let mat_prices = {
            let path = dir.join(MAT_PRICING_FILE);
            match read_optional(&path)? {
                Some(json) => loader::load_mat_price_table(&path, &json)?,
                None => MatPriceTable::standard(),
            }
        };
        let moulding_prices = {
            let path = dir.join(MOULDING_PRICES_FILE);
            match read_optional(&path)? {
                Some(json) => loader::load_moulding_price_table(&path, &json)?,
                None => MouldingPriceTable::standard(),
            }
        };

        let catalog = Catalog::from_parts(
            config,
            frames,
            mats,
            glass,
            PricingTables {
                mats: mat_prices,
                mouldings: moulding_prices,
            },
        );

        catalog.log_loaded(&dir.display().to_string());
        Ok(catalog)
    }

    /// Loads from the configured source and applies config overrides.
    pub fn from_config(config: &CatalogConfig) -> CatalogResult<Self> {
        let mut catalog = match &config.data_dir {
            Some(dir) => Catalog::load_dir(dir)?,
            None => Catalog::bundled()?,
        };

        if let Some(rate) = config.print_rate_override {
            info!(print_rate = rate, "Overriding print price per square inch");
            catalog.config.print_and_frame.price_per_square_inch = rate;
        }

        Ok(catalog)
    }

    /// Prices a configuration against this catalog and its price tables.
    pub fn price(&self, config: &FrameConfiguration) -> PricingResult<PricingBreakdown> {
        calculate_pricing(config, self, &self.tables)
    }

    pub fn tables(&self) -> &PricingTables {
        &self.tables
    }

    pub fn frame_styles(&self) -> &[FrameStyle] {
        &self.frames
    }

    pub fn mat_colors(&self) -> &[MatColor] {
        &self.mats
    }

    pub fn glass_types(&self) -> &[GlassType] {
        &self.glass
    }

    fn log_loaded(&self, source: &str) {
        info!(
            source = %source,
            frames = self.frames.len(),
            mats = self.mats.len(),
            glass = self.glass.len(),
            mat_prices = self.tables.mats.len(),
            moulding_prices = self.tables.mouldings.len(),
            "Catalog loaded"
        );
    }
}

impl CatalogResolver for Catalog {
    fn pricing_config(&self) -> &PricingConfig {
        &self.config
    }

    fn frame_style(&self, id: &str) -> Option<&FrameStyle> {
        self.frame_index.get(id).map(|&i| &self.frames[i])
    }

    fn mat_color(&self, id: &str) -> Option<&MatColor> {
        self.mat_index.get(id).map(|&i| &self.mats[i])
    }

    fn glass_type(&self, id: &str) -> Option<&GlassType> {
        self.glass_index.get(id).map(|&i| &self.glass[i])
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn read_required(path: &Path) -> CatalogResult<String> {
    fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))
}

fn read_optional(path: &Path) -> CatalogResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(json) => Ok(Some(json)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "Optional price file absent, using shipped table");
            Ok(None)
        }
        Err(e) => Err(CatalogError::io(PathBuf::from(path), e)),
    }
}

fn dedupe<T, F>(kind: &str, rows: Vec<T>, id: F) -> Vec<T>
where
    F: Fn(&T) -> &String,
{
    let mut seen = std::collections::HashSet::new();
    rows.into_iter()
        .filter(|row| {
            let fresh = seen.insert(id(row).clone());
            if !fresh {
                warn!(kind = %kind, id = %id(row), "Duplicate catalog id, keeping the first");
            }
            fresh
        })
        .collect()
}

fn index_by_id<T, F>(rows: &[T], id: F) -> HashMap<String, usize>
where
    F: Fn(&T) -> &String,
{
    rows.iter()
        .enumerate()
        .map(|(i, row)| (id(row).clone(), i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use framecraft_pricing::{FrameCategory, GlazingType};

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.frame_styles().is_empty());
        assert!(catalog.mat_color("mat-white").is_some());
        assert!(catalog.glass_type("standard").is_some());
        assert_eq!(catalog.pricing_config(), &PricingConfig::default());
        assert_eq!(catalog.tables().mouldings.len(), 12);
    }

    #[test]
    fn test_bundled_glass_profiles() {
        let catalog = Catalog::bundled().unwrap();
        let non_glare = catalog.glass_type("non-glare").unwrap();
        assert_eq!(non_glare.glazing(), GlazingType::NonGlareAcrylic);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let frame = |name: &str| FrameStyle {
            id: "oak".to_string(),
            name: name.to_string(),
            material: "wood".to_string(),
            color: "natural".to_string(),
            price_per_inch: 0.4,
            moulding_width: 1.0,
            category: FrameCategory::Picture,
            sku: None,
        };

        let catalog = Catalog::from_parts(
            PricingConfig::default(),
            vec![frame("First"), frame("Second")],
            Vec::new(),
            Vec::new(),
            PricingTables::standard(),
        );

        assert_eq!(catalog.frame_styles().len(), 1);
        assert_eq!(catalog.frame_style("oak").unwrap().name, "First");
    }

    #[test]
    fn test_print_rate_override() {
        let config = CatalogConfig {
            data_dir: None,
            print_rate_override: Some(0.08),
        };
        let catalog = Catalog::from_config(&config).unwrap();
        assert_eq!(catalog.pricing_config().print_and_frame.price_per_square_inch, 0.08);
    }
}
