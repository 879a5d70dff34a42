//! # Quote Tool
//!
//! Prices a frame configuration against the catalog and prints the
//! breakdown. Handy for checking catalog edits before they ship.
//!
//! ## Usage
//! ```bash
//! # Price a configuration file against the bundled catalog
//! cargo run -p framecraft-catalog --bin quote -- order.json
//!
//! # Read the configuration from stdin, include the engine v2 trace
//! cat order.json | cargo run -p framecraft-catalog --bin quote -- --trace -
//!
//! # Use a catalog directory and verbose logs
//! FRAMECRAFT_DATA_DIR=./catalog RUST_LOG=debug cargo run -p framecraft-catalog --bin quote -- order.json
//! ```

use std::env;
use std::fs;
use std::io::{self, Read};

use framecraft_catalog::{Catalog, CatalogConfig};
use framecraft_pricing::configurator::format_price;
use framecraft_pricing::engine::calculate_frame_price_with_breakdown_by_sku;
use framecraft_pricing::validation::validate_configuration;
use framecraft_pricing::{CatalogResolver, FrameConfiguration, FramePricingModel};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut input: Option<String> = None;
    let mut show_trace = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--trace" | "-t" => show_trace = true,
            "--help" | "-h" => {
                println!("FrameCraft Quote Tool");
                println!();
                println!("Usage: quote [OPTIONS] <CONFIG.json | ->");
                println!();
                println!("Options:");
                println!("  -t, --trace    Also print the engine v2 breakdown");
                println!("  -h, --help     Show this help message");
                println!();
                println!("Environment:");
                println!("  FRAMECRAFT_DATA_DIR    Catalog directory (default: bundled catalog)");
                println!("  FRAMECRAFT_PRINT_RATE  Print price per square inch override");
                return Ok(());
            }
            other => input = Some(other.to_string()),
        }
        i += 1;
    }

    let Some(input) = input else {
        return Err("missing configuration file (use --help for usage)".into());
    };

    let json = if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&input)?
    };

    let config: FrameConfiguration = serde_json::from_str(&json)?;
    validate_configuration(&config)?;

    let catalog = Catalog::from_config(&CatalogConfig::from_env()?)?;
    let breakdown = catalog.price(&config)?;

    info!(
        frame_style_id = %config.frame_style_id,
        total = %format_price(breakdown.total),
        "Quote ready"
    );

    println!("{}", serde_json::to_string_pretty(&breakdown)?);

    if show_trace && breakdown.frame_pricing_model == FramePricingModel::EngineV2 {
        let sku = catalog
            .frame_style(&config.frame_style_id)
            .and_then(|style| style.sku.as_deref())
            .unwrap_or_default();
        let glazing = catalog
            .glass_type(&config.glass_type_id)
            .map(|glass| glass.glazing())
            .unwrap_or_default();

        if let Some(trace) = calculate_frame_price_with_breakdown_by_sku(
            &catalog.tables().mouldings,
            breakdown.frame_dimensions.width,
            breakdown.frame_dimensions.height,
            sku,
            glazing,
        ) {
            println!("{}", serde_json::to_string_pretty(&trace)?);
        }
    }

    println!();
    println!("Total: {}", format_price(breakdown.total));
    if breakdown.is_too_large {
        println!("⚠ Too large to order online");
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show fallback decisions
/// - Default: INFO, DEBUG for framecraft crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,framecraft=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
