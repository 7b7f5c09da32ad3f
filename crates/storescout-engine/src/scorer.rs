//! Weighted tranquility scoring.

use storescout_core::{StoreProfile, StoreType, Vibe, WeightSet};

/// Every score starts here before adjustments.
const BASE_SCORE: i64 = 50;

/// Compute the tranquility score for a profile under the given weights.
///
/// Adjustments are applied in a fixed order for reproducibility: school
/// penalty (scales linearly with the school count), main-avenue, high-rating
/// (strictly above 4.0), many-reviews (strictly above 1000), pharmacy bonus,
/// boring vibe, residential vibe, early opening (hour <= 7). The sum is
/// clamped to [0, 100].
///
/// Pure function: identical profile and weights always yield the same score,
/// for weight magnitudes far beyond the defaults (arithmetic is done in i64).
#[must_use]
pub fn tranquility_score(profile: &StoreProfile, weights: &WeightSet) -> u8 {
    let mut score = BASE_SCORE;

    score += i64::from(profile.nearby_school_count) * i64::from(weights.nearby_schools);

    if profile.on_main_avenue {
        score += i64::from(weights.on_main_avenue);
    }

    if profile.rating > 4.0 {
        score += i64::from(weights.high_rating);
    }

    if profile.review_count > 1000 {
        score += i64::from(weights.many_reviews);
    }

    if profile.store_type == StoreType::Pharmacy {
        score += i64::from(weights.pharmacy_bonus);
    }

    if profile.vibe == Vibe::Boring {
        score += i64::from(weights.boring_vibe);
    }

    if profile.vibe == Vibe::Residential {
        score += i64::from(weights.residential);
    }

    if profile.opening_hour <= 7 {
        score += i64::from(weights.early_opening);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        score.clamp(0, 100) as u8
    }
}
