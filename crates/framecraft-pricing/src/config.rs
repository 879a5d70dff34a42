//! # Pricing Config
//!
//! The store-wide numbers the configuration pricer reads: print rate,
//! oversize fee band and mat multipliers. Shipped as `pricing-config.json`
//! in the catalog; [`PricingConfig::default`] holds the same values.
//!
//! ## Oversize Fee Bands (united inches = frame W + H)
//! ```text
//!   0 ───────────── 75 ─────────── 99 │ 100 ──────────────────►
//!        no fee          flat fee     │   too large, checkout blocked
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::MatType;

/// Pricing config table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingConfig {
    pub print_and_frame: PrintAndFrameConfig,
    pub oversize_fees: OversizeFees,
    pub mat_multipliers: MatMultipliers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PrintAndFrameConfig {
    /// Print price per square inch of artwork, in dollars.
    pub price_per_square_inch: f64,
}

impl Default for PrintAndFrameConfig {
    fn default() -> Self {
        PrintAndFrameConfig {
            price_per_square_inch: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OversizeFees {
    #[serde(rename = "threshold75to99")]
    pub threshold_75_to_99: FeeBand,
    #[serde(rename = "threshold100Plus")]
    pub threshold_100_plus: TooLargeThreshold,
}

/// A flat fee charged when united inches fall inside `[min, max]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FeeBand {
    pub min_dimension: f64,
    pub max_dimension: f64,
    pub fee: f64,
}

impl Default for FeeBand {
    fn default() -> Self {
        FeeBand {
            min_dimension: 75.0,
            max_dimension: 99.0,
            fee: 25.0,
        }
    }
}

/// United inches at or above which a piece cannot be ordered online.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TooLargeThreshold {
    pub min_dimension: f64,
}

impl Default for TooLargeThreshold {
    fn default() -> Self {
        TooLargeThreshold {
            min_dimension: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatMultipliers {
    pub none: f64,
    pub single: f64,
    pub double: f64,
}

impl Default for MatMultipliers {
    fn default() -> Self {
        MatMultipliers {
            none: 0.0,
            single: 1.0,
            double: 1.5,
        }
    }
}

impl MatMultipliers {
    pub fn for_mat_type(&self, mat_type: MatType) -> f64 {
        match mat_type {
            MatType::None => self.none,
            MatType::Single => self.single,
            MatType::Double => self.double,
        }
    }
}

/// Result of checking united inches against the fee bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OversizeAssessment {
    pub fee: f64,
    pub is_too_large: bool,
}

impl OversizeFees {
    /// Applies the bands to `united_inches`. Too-large pieces carry no fee;
    /// sizes between the band and the too-large threshold carry none either.
    pub fn assess(&self, united_inches: f64) -> OversizeAssessment {
        if united_inches >= self.threshold_100_plus.min_dimension {
            return OversizeAssessment {
                fee: 0.0,
                is_too_large: true,
            };
        }

        let band = &self.threshold_75_to_99;
        let fee = if united_inches >= band.min_dimension && united_inches <= band.max_dimension {
            band.fee
        } else {
            0.0
        };

        OversizeAssessment {
            fee,
            is_too_large: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PricingConfig::default();
        assert_eq!(config.print_and_frame.price_per_square_inch, 0.05);
        assert_eq!(config.mat_multipliers.for_mat_type(MatType::None), 0.0);
        assert_eq!(config.mat_multipliers.for_mat_type(MatType::Double), 1.5);
    }

    #[test]
    fn test_assess_bands() {
        let fees = OversizeFees::default();
        assert_eq!(fees.assess(74.9), OversizeAssessment { fee: 0.0, is_too_large: false });
        assert_eq!(fees.assess(75.0), OversizeAssessment { fee: 25.0, is_too_large: false });
        assert_eq!(fees.assess(99.0), OversizeAssessment { fee: 25.0, is_too_large: false });
        assert_eq!(fees.assess(99.5), OversizeAssessment { fee: 0.0, is_too_large: false });
        assert_eq!(fees.assess(100.0), OversizeAssessment { fee: 0.0, is_too_large: true });
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "printAndFrame": { "pricePerSquareInch": 0.04 },
            "oversizeFees": {
                "threshold75to99": { "minDimension": 75, "maxDimension": 99, "fee": 30 },
                "threshold100Plus": { "minDimension": 100 }
            },
            "matMultipliers": { "none": 0, "single": 1, "double": 1.75 }
        }"#;
        let config: PricingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.oversize_fees.threshold_75_to_99.fee, 30.0);
        assert_eq!(config.mat_multipliers.double, 1.75);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: PricingConfig =
            serde_json::from_str(r#"{ "printAndFrame": { "pricePerSquareInch": 0.07 } }"#).unwrap();
        assert_eq!(config.oversize_fees, OversizeFees::default());
        assert_eq!(config.mat_multipliers, MatMultipliers::default());
    }
}
