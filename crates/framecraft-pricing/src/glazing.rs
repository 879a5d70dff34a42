//! # Glazing Profiles
//!
//! Cost profiles for the four glazing variants. Engine v2 only reads
//! `cost_per_sq_in`; the markups and minimums belong to the legacy designer
//! path and to the standalone acrylic product page.

use crate::types::GlazingType;
use crate::PRICING_MARKUPS;

/// Material cost and retail rules for one glazing variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlazingProfile {
    /// Material cost per square inch, 15% waste included.
    pub cost_per_sq_in: f64,
    /// Markup when sold on its own product page.
    pub dedicated_markup: f64,
    /// Markup inside the frame designers (legacy path).
    pub designer_markup: f64,
    /// Minimum price on the dedicated page.
    pub minimum_price: f64,
    pub has_dedicated_page: bool,
}

const STANDARD_ACRYLIC: GlazingProfile = GlazingProfile {
    cost_per_sq_in: 0.00324,
    dedicated_markup: PRICING_MARKUPS.dedicated_page,
    designer_markup: PRICING_MARKUPS.designer_standard,
    minimum_price: 9.95,
    has_dedicated_page: true,
};

const NON_GLARE_ACRYLIC: GlazingProfile = GlazingProfile {
    cost_per_sq_in: 0.00449,
    dedicated_markup: PRICING_MARKUPS.dedicated_page,
    designer_markup: PRICING_MARKUPS.designer_standard,
    minimum_price: 12.95,
    has_dedicated_page: true,
};

// Glass is costed like the matching acrylic but has no product page.
const STANDARD_GLASS: GlazingProfile = GlazingProfile {
    has_dedicated_page: false,
    ..STANDARD_ACRYLIC
};

const NON_GLARE_GLASS: GlazingProfile = GlazingProfile {
    has_dedicated_page: false,
    ..NON_GLARE_ACRYLIC
};

impl GlazingType {
    /// The cost profile for this variant.
    pub const fn profile(self) -> GlazingProfile {
        match self {
            GlazingType::StandardAcrylic => STANDARD_ACRYLIC,
            GlazingType::NonGlareAcrylic => NON_GLARE_ACRYLIC,
            GlazingType::StandardGlass => STANDARD_GLASS,
            GlazingType::NonGlareGlass => NON_GLARE_GLASS,
        }
    }
}

impl GlazingProfile {
    /// Raw material cost for `area` square inches.
    #[inline]
    pub fn material_cost(&self, area: f64) -> f64 {
        area * self.cost_per_sq_in
    }

    /// Legacy in-designer glazing price: area × cost × designer markup.
    pub fn designer_price(&self, area: f64) -> f64 {
        area * self.cost_per_sq_in * self.designer_markup
    }

    /// Price on the standalone product page, never below the minimum.
    /// `None` for variants that are not sold on their own.
    pub fn dedicated_page_price(&self, area: f64) -> Option<f64> {
        if !self.has_dedicated_page {
            return None;
        }
        let price = area * self.cost_per_sq_in * self.dedicated_markup;
        Some(price.max(self.minimum_price))
    }
}
