//! Ranking and human-readable justifications.

use storescout_core::{StoreProfile, StoreType, Vibe};

/// Top-ranked scores below this make the whole day not worth the trip.
const SLOW_DAY_THRESHOLD: u8 = 60;

/// At most this many reasons are surfaced per store.
const MAX_REASONS: usize = 2;

/// Sort profiles by descending score.
///
/// The sort is stable: stores sharing a score keep their discovery order.
#[must_use]
pub fn rank(mut profiles: Vec<StoreProfile>) -> Vec<StoreProfile> {
    profiles.sort_by(|a, b| b.score.cmp(&a.score));
    profiles
}

/// Short reasons why a store is a good pick, at most two, in a fixed order
/// (pharmacy, zero schools, off-avenue, boring, residential) so the output
/// is reproducible. Falls back to a generic line when nothing matches.
#[must_use]
pub fn explain(profile: &StoreProfile) -> Vec<String> {
    let mut reasons = Vec::new();

    if profile.store_type == StoreType::Pharmacy {
        reasons.push("It's a pharmacy".to_string());
    }
    if profile.nearby_school_count == 0 {
        reasons.push("No schools nearby".to_string());
    }
    if !profile.on_main_avenue {
        reasons.push("Off the main avenue".to_string());
    }
    if profile.vibe == Vibe::Boring {
        reasons.push("Quiet store".to_string());
    }
    if profile.vibe == Vibe::Residential {
        reasons.push("Residential area".to_string());
    }

    reasons.truncate(MAX_REASONS);
    if reasons.is_empty() {
        reasons.push("Several factors".to_string());
    }
    reasons
}

/// "Not worth going today" advisory: true when the best score is below 60.
/// An empty ranking is always a slow day.
#[must_use]
pub fn slow_day(ranked: &[StoreProfile]) -> bool {
    ranked.first().is_none_or(|top| top.score < SLOW_DAY_THRESHOLD)
}
