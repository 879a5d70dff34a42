//! # framecraft-catalog: Catalog Data Layer for FrameCraft
//!
//! This crate loads the product catalog and supplier price sheets from JSON
//! and serves them to the pricing engine through `CatalogResolver`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      FrameCraft Data Flow                               │
//! │                                                                         │
//! │  FRAMECRAFT_DATA_DIR / bundled data/*.json                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 framecraft-catalog (THIS CRATE)                 │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │    config     │    │    loader     │    │   catalog    │   │   │
//! │  │   │ CatalogConfig │───►│ parse + drop  │───►│   Catalog    │   │   │
//! │  │   │  from_env()   │    │ invalid rows  │    │ (resolver)   │   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────┬───────┘   │   │
//! │  └────────────────────────────────────────────────────┼───────────┘   │
//! │                                                       │               │
//! │                                                       ▼               │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            framecraft-pricing: calculate_pricing                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Environment configuration
//! - [`loader`] - JSON parsing and row validation
//! - [`catalog`] - The loaded catalog and its resolver implementation
//! - [`error`] - Catalog error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use framecraft_catalog::{Catalog, CatalogConfig};
//!
//! let config = CatalogConfig::from_env()?;
//! let catalog = Catalog::from_config(&config)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::Catalog;
pub use config::{CatalogConfig, ConfigError};
pub use error::{CatalogError, CatalogResult};
