//! # Configuration Pricer
//!
//! The single entry point UI code calls: resolves catalog ids, works out
//! the frame opening, and composes frame, glazing, mat, print and oversize
//! prices into one [`PricingBreakdown`].
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FrameConfiguration                                                     │
//! │     │                                                                   │
//! │     ├─► resolve frame / mat / glass ──── missing? ──► PricingError       │
//! │     │                                                                   │
//! │     ├─► frame opening = art + 2 × border (+ 0.5″ bottom weighted)       │
//! │     │                                                                   │
//! │     ├─► frame: SKU priced?  yes ─► engine v2 (glazing included)         │
//! │     │                       no  ─► perimeter × $/in + legacy glazing    │
//! │     │                                                                   │
//! │     ├─► mat:   sheet price × 2.5, else perimeter × $/in; × multiplier   │
//! │     ├─► print: art area × $/sq in (print-and-frame with an image)       │
//! │     └─► oversize: united inches vs fee band / too-large threshold       │
//! │                                                                         │
//! │  subtotal = frame + mat + glass + print;  total = subtotal + fee        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, error};

use crate::catalog::{CatalogResolver, PricingTables};
use crate::engine::calculate_frame_price_with_breakdown_by_sku;
use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::types::{
    Dimensions, FrameConfiguration, FramePricingModel, MatPricingModel, PricingBreakdown,
    ServiceType,
};

/// Extra bottom border for bottom-weighted mats, in inches.
pub const BOTTOM_WEIGHT_INCHES: f64 = 0.5;

/// Per-inch mat rate when a mat has neither a sheet price nor its own rate.
pub const DEFAULT_MAT_PRICE_PER_INCH: f64 = 0.10;

/// Prices a configuration.
///
/// ## Errors
/// Fails only when a required catalog id does not resolve: the frame style
/// and glass type always, the mat color unless no mat is selected. Unknown
/// SKUs and mats without a sheet price take fallback paths instead.
///
/// ## Example
/// ```rust
/// use framecraft_pricing::catalog::{PricingTables, StaticCatalog};
/// use framecraft_pricing::{calculate_pricing, PricingConfig};
/// use framecraft_pricing::{FrameCategory, FrameConfiguration, FrameStyle, GlassType};
/// use framecraft_pricing::{MatType, ServiceType};
///
/// let catalog = StaticCatalog::new(PricingConfig::default())
///     .with_frame(FrameStyle {
///         id: "black".into(),
///         name: "Gallery Black".into(),
///         material: "wood".into(),
///         color: "black".into(),
///         price_per_inch: 0.5,
///         moulding_width: 0.75,
///         category: FrameCategory::Picture,
///         sku: Some("206".into()),
///     })
///     .with_glass(GlassType {
///         id: "standard".into(),
///         name: "Standard Acrylic".into(),
///         price_per_sq_ft: 0.0,
///         glazing: None,
///     });
///
/// let config = FrameConfiguration {
///     service_type: ServiceType::FrameOnly,
///     artwork_width: 15.0,
///     artwork_height: 13.0,
///     frame_style_id: "black".into(),
///     mat_type: MatType::None,
///     mat_border_width: 0.0,
///     mat_reveal_width: 0.0,
///     mat_color_id: String::new(),
///     mat_inner_color_id: None,
///     glass_type_id: "standard".into(),
///     bottom_weighted: false,
///     image_url: None,
/// };
///
/// let breakdown = calculate_pricing(&config, &catalog, &PricingTables::standard()).unwrap();
/// assert_eq!(breakdown.total_money().cents(), 4699);
/// ```
pub fn calculate_pricing<C>(
    config: &FrameConfiguration,
    catalog: &C,
    tables: &PricingTables,
) -> PricingResult<PricingBreakdown>
where
    C: CatalogResolver + ?Sized,
{
    let pricing_config = catalog.pricing_config();

    // -------------------------------------------------------------------------
    // Resolve catalog entities
    // -------------------------------------------------------------------------
    let Some(frame_style) = catalog.frame_style(&config.frame_style_id) else {
        error!(frame_style_id = %config.frame_style_id, "Invalid frame style ID");
        return Err(PricingError::FrameStyleNotFound(config.frame_style_id.clone()));
    };

    let has_mat = config.mat_type.has_mat();
    let mat_color = if has_mat {
        let Some(mat) = catalog.mat_color(&config.mat_color_id) else {
            error!(mat_color_id = %config.mat_color_id, "Invalid mat color ID");
            return Err(PricingError::MatColorNotFound(config.mat_color_id.clone()));
        };
        Some(mat)
    } else {
        None
    };

    let Some(glass_type) = catalog.glass_type(&config.glass_type_id) else {
        error!(glass_type_id = %config.glass_type_id, "Invalid glass type ID");
        return Err(PricingError::GlassTypeNotFound(config.glass_type_id.clone()));
    };

    // -------------------------------------------------------------------------
    // Frame opening
    // -------------------------------------------------------------------------
    let mat_border = if has_mat { config.mat_border_width } else { 0.0 };
    let bottom_extra = if config.bottom_weighted {
        BOTTOM_WEIGHT_INCHES
    } else {
        0.0
    };

    let frame = Dimensions::new(
        config.artwork_width + mat_border * 2.0,
        config.artwork_height + mat_border * 2.0 + bottom_extra,
    );
    let perimeter = frame.perimeter();

    // -------------------------------------------------------------------------
    // Frame + glazing
    // -------------------------------------------------------------------------
    let glazing = glass_type.glazing();
    let engine_run = frame_style.sku.as_deref().and_then(|sku| {
        calculate_frame_price_with_breakdown_by_sku(
            &tables.mouldings,
            frame.width,
            frame.height,
            sku,
            glazing,
        )
    });

    let (frame_price, glass_price, frame_pricing_model, hit_floor) = match engine_run {
        Some(run) => (run.final_price, 0.0, FramePricingModel::EngineV2, run.hit_floor),
        None => {
            debug!(
                frame_style_id = %frame_style.id,
                sku = ?frame_style.sku,
                "Frame style has no moulding price, using legacy perimeter pricing"
            );
            let frame_price = perimeter * frame_style.price_per_inch;
            let glass_price = glazing.profile().designer_price(frame.area());
            (frame_price, glass_price, FramePricingModel::LegacyPerimeter, false)
        }
    };

    // -------------------------------------------------------------------------
    // Mat
    // -------------------------------------------------------------------------
    let (mat_price, mat_pricing_model) = match mat_color {
        Some(mat) => {
            let multiplier = pricing_config.mat_multipliers.for_mat_type(config.mat_type);
            match tables
                .mats
                .mat_price_for_designer(frame.width, frame.height, &mat.name)
            {
                Some(single) => (single * multiplier, Some(MatPricingModel::Sheet)),
                None => {
                    let rate = mat.price_per_inch.unwrap_or(DEFAULT_MAT_PRICE_PER_INCH);
                    debug!(
                        mat_color_id = %mat.id,
                        mat_name = %mat.name,
                        rate,
                        "Mat has no sheet price, using perimeter pricing"
                    );
                    (
                        perimeter * rate * multiplier,
                        Some(MatPricingModel::LegacyPerimeter),
                    )
                }
            }
        }
        None => (0.0, None),
    };

    // -------------------------------------------------------------------------
    // Print
    // -------------------------------------------------------------------------
    let has_image = config
        .image_url
        .as_deref()
        .is_some_and(|url| !url.is_empty());
    let print_price = if config.service_type == ServiceType::PrintAndFrame && has_image {
        let art_area = config.artwork_width * config.artwork_height;
        art_area * pricing_config.print_and_frame.price_per_square_inch
    } else {
        0.0
    };

    // -------------------------------------------------------------------------
    // Oversize + totals
    // -------------------------------------------------------------------------
    let total_dimensions = frame.united_inches();
    let oversize = pricing_config.oversize_fees.assess(total_dimensions);

    let subtotal = frame_price + mat_price + glass_price + print_price;
    let total = subtotal + oversize.fee;

    debug!(
        frame_style_id = %frame_style.id,
        total,
        is_too_large = oversize.is_too_large,
        "Priced configuration"
    );

    Ok(PricingBreakdown {
        frame_price,
        mat_price,
        glass_price,
        print_price,
        oversize_fee: oversize.fee,
        subtotal,
        total,
        is_too_large: oversize.is_too_large,
        total_dimensions,
        frame_dimensions: frame,
        hit_floor,
        frame_pricing_model,
        mat_pricing_model,
    })
}

/// Formats dollars for display, e.g. `"$46.99"` or `"-$5.50"`.
pub fn format_price(dollars: f64) -> String {
    Money::from_dollars(dollars).to_string()
}

/// Price per square inch of a piece; 0 when the area is not positive.
pub fn price_per_square_inch(total: f64, width: f64, height: f64) -> f64 {
    let area = width * height;
    if area > 0.0 {
        total / area
    } else {
        0.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::config::PricingConfig;
    use crate::types::{FrameCategory, FrameStyle, GlassType, MatColor, MatType};
    use approx::assert_abs_diff_eq;

    fn frame(id: &str, sku: Option<&str>, price_per_inch: f64) -> FrameStyle {
        FrameStyle {
            id: id.to_string(),
            name: format!("Frame {id}"),
            material: "wood".to_string(),
            color: "black".to_string(),
            price_per_inch,
            moulding_width: 0.75,
            category: FrameCategory::Picture,
            sku: sku.map(str::to_string),
        }
    }

    fn mat(id: &str, name: &str, price_per_inch: Option<f64>) -> MatColor {
        MatColor {
            id: id.to_string(),
            name: name.to_string(),
            hex_color: "#FFFFFF".to_string(),
            price_per_inch,
        }
    }

    fn glass(id: &str, name: &str) -> GlassType {
        GlassType {
            id: id.to_string(),
            name: name.to_string(),
            price_per_sq_ft: 0.0,
            glazing: None,
        }
    }

    fn catalog() -> StaticCatalog {
        StaticCatalog::new(PricingConfig::default())
            .with_frame(frame("black-206", Some("206"), 0.5))
            .with_frame(frame("thin-8989", Some("8989"), 0.3))
            .with_frame(frame("retired", Some("UNKNOWN"), 0.5))
            .with_frame(frame("no-sku", None, 0.5))
            .with_mat(mat("mat-white", "White", None))
            .with_mat(mat("mat-forest", "Forest", None))
            .with_mat(mat("mat-linen", "Linen", Some(0.2)))
            .with_glass(glass("standard", "Standard Acrylic"))
            .with_glass(glass("non-glare", "Non-Glare Acrylic"))
    }

    fn config(width: f64, height: f64, frame_style_id: &str, mat_type: MatType) -> FrameConfiguration {
        FrameConfiguration {
            service_type: ServiceType::FrameOnly,
            artwork_width: width,
            artwork_height: height,
            frame_style_id: frame_style_id.to_string(),
            mat_type,
            mat_border_width: 2.5,
            mat_reveal_width: 0.0,
            mat_color_id: "mat-white".to_string(),
            mat_inner_color_id: None,
            glass_type_id: "standard".to_string(),
            bottom_weighted: false,
            image_url: None,
        }
    }

    fn price(config: &FrameConfiguration) -> PricingBreakdown {
        calculate_pricing(config, &catalog(), &PricingTables::standard()).unwrap()
    }

    #[test]
    fn test_single_mat_with_known_sku() {
        let b = price(&config(10.0, 8.0, "black-206", MatType::Single));

        assert_eq!(b.frame_dimensions, Dimensions::new(15.0, 13.0));
        assert_eq!(b.frame_pricing_model, FramePricingModel::EngineV2);
        assert_abs_diff_eq!(b.frame_price, 46.99, epsilon = 1e-9);
        assert_eq!(b.glass_price, 0.0);
        assert_eq!(b.mat_pricing_model, Some(MatPricingModel::Sheet));
        assert_abs_diff_eq!(b.mat_price, 2.1625, epsilon = 1e-9);
        assert_eq!(b.print_price, 0.0);
        assert_eq!(b.oversize_fee, 0.0);
        assert_eq!(b.total_dimensions, 28.0);
        assert!(!b.is_too_large);
        assert!(!b.hit_floor);
        assert_abs_diff_eq!(b.subtotal, 49.1525, epsilon = 1e-9);
        assert_eq!(b.total, b.subtotal + b.oversize_fee);
        assert_eq!(b.total_money().cents(), 4915);
    }

    #[test]
    fn test_unknown_sku_uses_legacy_perimeter() {
        let b = price(&config(10.0, 8.0, "retired", MatType::Single));

        assert_eq!(b.frame_pricing_model, FramePricingModel::LegacyPerimeter);
        assert_abs_diff_eq!(b.frame_price, 28.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.glass_price, 5.0544, epsilon = 1e-9);
        assert!(!b.hit_floor);

        let no_sku = price(&config(10.0, 8.0, "no-sku", MatType::Single));
        assert_eq!(no_sku.frame_price, b.frame_price);
        assert_eq!(no_sku.glass_price, b.glass_price);
    }

    #[test]
    fn test_small_frame_hits_floor() {
        let b = price(&config(4.0, 4.0, "thin-8989", MatType::None));
        assert_eq!(b.frame_price, 15.99);
        assert!(b.hit_floor);
        assert_eq!(b.mat_price, 0.0);
        assert_eq!(b.mat_pricing_model, None);
    }

    #[test]
    fn test_no_mat_ignores_border_and_mat_color() {
        let mut cfg = config(10.0, 8.0, "black-206", MatType::None);
        cfg.mat_color_id = "does-not-exist".to_string();

        let b = price(&cfg);
        assert_eq!(b.frame_dimensions, Dimensions::new(10.0, 8.0));
        assert_eq!(b.mat_price, 0.0);
    }

    #[test]
    fn test_double_mat_multiplier() {
        let b = price(&config(10.0, 8.0, "black-206", MatType::Double));
        assert_abs_diff_eq!(b.mat_price, 2.1625 * 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_bottom_weighted_adds_half_inch() {
        let mut cfg = config(10.0, 8.0, "black-206", MatType::Single);
        cfg.bottom_weighted = true;

        let b = price(&cfg);
        assert_eq!(b.frame_dimensions, Dimensions::new(15.0, 13.5));
        assert_eq!(b.total_dimensions, 28.5);
    }

    #[test]
    fn test_mat_fallbacks() {
        let mut cfg = config(10.0, 8.0, "black-206", MatType::Single);

        cfg.mat_color_id = "mat-forest".to_string();
        let default_rate = price(&cfg);
        assert_eq!(default_rate.mat_pricing_model, Some(MatPricingModel::LegacyPerimeter));
        assert_abs_diff_eq!(default_rate.mat_price, 56.0 * 0.10, epsilon = 1e-9);

        cfg.mat_color_id = "mat-linen".to_string();
        cfg.mat_type = MatType::Double;
        let own_rate = price(&cfg);
        assert_abs_diff_eq!(own_rate.mat_price, 56.0 * 0.2 * 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_oversize_mat_uses_40x60_sheet() {
        // 30 × 36 art + 2.5″ border → 35 × 41, past a 32 × 40 sheet
        let b = price(&config(30.0, 36.0, "black-206", MatType::Single));
        assert_abs_diff_eq!(b.mat_price, 11.85 * 2.5, epsilon = 1e-9);
    }

    #[test]
    fn test_print_price_needs_service_and_image() {
        let mut cfg = config(10.0, 8.0, "black-206", MatType::Single);
        cfg.service_type = ServiceType::PrintAndFrame;
        assert_eq!(price(&cfg).print_price, 0.0);

        cfg.image_url = Some(String::new());
        assert_eq!(price(&cfg).print_price, 0.0);

        cfg.image_url = Some("https://cdn.example.com/art.jpg".to_string());
        assert_abs_diff_eq!(price(&cfg).print_price, 4.0, epsilon = 1e-12);

        cfg.service_type = ServiceType::FrameOnly;
        assert_eq!(price(&cfg).print_price, 0.0);
    }

    #[test]
    fn test_oversize_fee_band() {
        let b = price(&config(40.0, 38.0, "black-206", MatType::None));
        assert_eq!(b.total_dimensions, 78.0);
        assert_eq!(b.oversize_fee, 25.0);
        assert!(!b.is_too_large);
        assert_abs_diff_eq!(b.total, b.subtotal + 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_too_large_blocks_without_fee() {
        let b = price(&config(60.0, 45.0, "black-206", MatType::None));
        assert_eq!(b.total_dimensions, 105.0);
        assert!(b.is_too_large);
        assert_eq!(b.oversize_fee, 0.0);
        assert_eq!(b.total, b.subtotal);
    }

    #[test]
    fn test_non_glare_glass_prices_higher() {
        let mut cfg = config(16.0, 20.0, "black-206", MatType::None);
        let standard = price(&cfg);

        cfg.glass_type_id = "non-glare".to_string();
        let non_glare = price(&cfg);
        assert!(non_glare.frame_price >= standard.frame_price);

        cfg.frame_style_id = "no-sku".to_string();
        let legacy = price(&cfg);
        assert_abs_diff_eq!(legacy.glass_price, 320.0 * 0.00449 * 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_missing_ids_are_errors() {
        let tables = PricingTables::standard();
        let catalog = catalog();

        let mut cfg = config(10.0, 8.0, "walnut", MatType::Single);
        let err = calculate_pricing(&cfg, &catalog, &tables).unwrap_err();
        assert!(matches!(err, PricingError::FrameStyleNotFound(ref id) if id == "walnut"));

        cfg.frame_style_id = "black-206".to_string();
        cfg.mat_color_id = "mat-plum".to_string();
        let err = calculate_pricing(&cfg, &catalog, &tables).unwrap_err();
        assert_eq!(err.to_string(), "Mat color not found: mat-plum");

        cfg.mat_color_id = "mat-white".to_string();
        cfg.glass_type_id = "museum".to_string();
        let err = calculate_pricing(&cfg, &catalog, &tables).unwrap_err();
        assert!(matches!(err, PricingError::GlassTypeNotFound(_)));
    }

    #[test]
    fn test_concurrent_pricing_is_identical() {
        let catalog = catalog();
        let tables = PricingTables::standard();
        let cfg = config(10.0, 8.0, "black-206", MatType::Double);
        let expected = calculate_pricing(&cfg, &catalog, &tables).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| calculate_pricing(&cfg, &catalog, &tables).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(46.99), "$46.99");
        assert_eq!(format_price(-5.5), "-$5.50");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_price_per_square_inch() {
        assert_abs_diff_eq!(price_per_square_inch(50.0, 10.0, 10.0), 0.5, epsilon = 1e-12);
        assert_eq!(price_per_square_inch(50.0, 0.0, 10.0), 0.0);
    }
}
