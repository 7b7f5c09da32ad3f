//! Scoring weight set.

use serde::{Deserialize, Serialize};

/// The eight named scoring factors.
///
/// Negative values are penalties, positive values are bonuses. Magnitudes are
/// unconstrained; the scorer clamps the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightSet {
    pub nearby_schools: i32,
    pub on_main_avenue: i32,
    pub high_rating: i32,
    pub many_reviews: i32,
    pub pharmacy_bonus: i32,
    pub boring_vibe: i32,
    pub early_opening: i32,
    pub residential: i32,
}

impl Default for WeightSet {
    fn default() -> Self {
        Self {
            nearby_schools: -15,
            on_main_avenue: -10,
            high_rating: -8,
            many_reviews: -12,
            pharmacy_bonus: 20,
            boring_vibe: 15,
            early_opening: 10,
            residential: 12,
        }
    }
}

/// Factor names in canonical display order.
pub const FACTOR_NAMES: [&str; 8] = [
    "nearby_schools",
    "on_main_avenue",
    "high_rating",
    "many_reviews",
    "pharmacy_bonus",
    "boring_vibe",
    "early_opening",
    "residential",
];

impl WeightSet {
    /// Look up a factor by name.
    #[must_use]
    pub fn get(&self, factor: &str) -> Option<i32> {
        match factor {
            "nearby_schools" => Some(self.nearby_schools),
            "on_main_avenue" => Some(self.on_main_avenue),
            "high_rating" => Some(self.high_rating),
            "many_reviews" => Some(self.many_reviews),
            "pharmacy_bonus" => Some(self.pharmacy_bonus),
            "boring_vibe" => Some(self.boring_vibe),
            "early_opening" => Some(self.early_opening),
            "residential" => Some(self.residential),
            _ => None,
        }
    }

    /// Set a factor by name. Returns `false` when the name is unknown.
    pub fn set(&mut self, factor: &str, value: i32) -> bool {
        match factor {
            "nearby_schools" => self.nearby_schools = value,
            "on_main_avenue" => self.on_main_avenue = value,
            "high_rating" => self.high_rating = value,
            "many_reviews" => self.many_reviews = value,
            "pharmacy_bonus" => self.pharmacy_bonus = value,
            "boring_vibe" => self.boring_vibe = value,
            "early_opening" => self.early_opening = value,
            "residential" => self.residential = value,
            _ => return false,
        }
        true
    }
}
