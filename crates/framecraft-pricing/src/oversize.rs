//! # Oversize Surcharge Rule
//!
//! Flat surcharge for large frames, a step function over the interior
//! perimeter. Covers fulfillment and shipping risk on big pieces.

/// A perimeter threshold and the surcharge it triggers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OversizeThreshold {
    /// Minimum perimeter in inches (inclusive).
    pub perimeter: f64,
    /// Surcharge in dollars.
    pub surcharge: f64,
}

/// Engine v2 thresholds, highest first.
pub const OVERSIZE_THRESHOLDS: [OversizeThreshold; 2] = [
    // 30×40 and up
    OversizeThreshold {
        perimeter: 140.0,
        surcharge: 25.0,
    },
    // 24×36 and up
    OversizeThreshold {
        perimeter: 120.0,
        surcharge: 15.0,
    },
];

/// Returns the surcharge for `perimeter` using [`OVERSIZE_THRESHOLDS`].
pub fn oversize_surcharge(perimeter: f64) -> f64 {
    surcharge_for(&OVERSIZE_THRESHOLDS, perimeter)
}

/// First threshold (in the given descending order) that the perimeter meets
/// or exceeds wins; no match means no surcharge.
pub fn surcharge_for(thresholds: &[OversizeThreshold], perimeter: f64) -> f64 {
    thresholds
        .iter()
        .find(|t| perimeter >= t.perimeter)
        .map_or(0.0, |t| t.surcharge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(oversize_surcharge(140.0), 25.0);
        assert_eq!(oversize_surcharge(139.9), 15.0);
        assert_eq!(oversize_surcharge(120.0), 15.0);
        assert_eq!(oversize_surcharge(119.9), 0.0);
        assert_eq!(oversize_surcharge(0.0), 0.0);
        assert_eq!(oversize_surcharge(500.0), 25.0);
    }

    #[test]
    fn test_scans_in_given_order() {
        // Ascending order would hit the smaller surcharge first.
        let ascending = [OVERSIZE_THRESHOLDS[1], OVERSIZE_THRESHOLDS[0]];
        assert_eq!(surcharge_for(&ascending, 150.0), 15.0);
        assert_eq!(surcharge_for(&[], 150.0), 0.0);
    }
}
