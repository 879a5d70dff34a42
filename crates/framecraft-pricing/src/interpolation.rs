//! # Interpolation Tables
//!
//! Piecewise-linear lookup over ordered anchor points.
//!
//! ## Lookup Rule
//! ```text
//!   value
//!     │  ●────●                          clamp high: last value
//!     │        ╲
//!     │         ●───────●
//!     │                  ╲
//!     │ clamp low:        ●──────────────●────────────
//!     │ first value
//!     └──────────────────────────────────────────────── key
//!        k0   k1   k2      k3            k4
//!
//!   k_a < q < k_b  ⇒  v_a + (q − k_a) / (k_b − k_a) × (v_b − v_a)
//! ```
//!
//! The engine's own tables (handling fee, margin multiplier) are `static`
//! and built with [`AnchorTable::from_sorted`]. Tables assembled at runtime
//! go through [`AnchorTable::new`], which checks the ordering.

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};

/// One breakpoint of a piecewise-linear curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub key: f64,
    pub value: f64,
}

impl AnchorPoint {
    #[inline]
    pub const fn new(key: f64, value: f64) -> Self {
        AnchorPoint { key, value }
    }
}

/// An immutable, strictly increasing sequence of anchor points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorTable<'a> {
    anchors: &'a [AnchorPoint],
}

impl<'a> AnchorTable<'a> {
    /// Wraps anchors that are already known to be sorted (compile-time tables).
    pub const fn from_sorted(anchors: &'a [AnchorPoint]) -> Self {
        AnchorTable { anchors }
    }

    /// Builds a table after checking it is non-empty, finite and strictly
    /// increasing in key.
    pub fn new(anchors: &'a [AnchorPoint]) -> PricingResult<Self> {
        if anchors.is_empty() {
            return Err(PricingError::InvalidAnchorTable {
                reason: "table has no anchors".to_string(),
            });
        }

        if let Some(bad) = anchors
            .iter()
            .find(|a| !a.key.is_finite() || !a.value.is_finite())
        {
            return Err(PricingError::InvalidAnchorTable {
                reason: format!("anchor at key {} is not finite", bad.key),
            });
        }

        if let Some(pair) = anchors.windows(2).find(|pair| pair[1].key <= pair[0].key) {
            return Err(PricingError::InvalidAnchorTable {
                reason: format!(
                    "keys must be strictly increasing: {} followed by {}",
                    pair[0].key, pair[1].key
                ),
            });
        }

        Ok(AnchorTable { anchors })
    }

    /// The anchor points, in key order.
    pub fn anchors(&self) -> &'a [AnchorPoint] {
        self.anchors
    }

    /// Looks up `query`, clamping outside the anchor range.
    pub fn interpolate(&self, query: f64) -> f64 {
        let (first, last) = match (self.anchors.first(), self.anchors.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };

        if query <= first.key {
            return first.value;
        }
        if query >= last.key {
            return last.value;
        }

        for pair in self.anchors.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if query >= a.key && query <= b.key {
                let ratio = (query - a.key) / (b.key - a.key);
                return a.value + ratio * (b.value - a.value);
            }
        }

        last.value
    }
}
