//! Converts raw place records into normalized store profiles.

use storescout_core::{distance_km, Config, StoreProfile, StoreType, Vibe};
use storescout_overpass::RawPlace;

use crate::estimator::Estimator;

/// School count below which a store is considered to sit in a residential
/// pocket.
const RESIDENTIAL_SCHOOL_THRESHOLD: u32 = 2;
/// Review count below which a busy-area store still reads as boring.
const BORING_REVIEW_THRESHOLD: u32 = 400;
/// Review count above which a store is assumed to sit on a main avenue.
const MAIN_AVENUE_REVIEW_THRESHOLD: u32 = 500;

/// Builds [`StoreProfile`]s from raw places, one at a time.
pub struct ProfileBuilder<E> {
    estimator: E,
}

impl<E: Estimator> ProfileBuilder<E> {
    pub fn new(estimator: E) -> Self {
        Self { estimator }
    }

    /// Build a profile for one raw place.
    ///
    /// Returns `None` when the record has no resolvable location; such records
    /// are filtered out upstream, not reported as errors. The school count is
    /// supplied by the caller (queried separately at a fixed 1 km radius).
    /// The returned profile carries a zero score; scoring happens afterwards.
    #[must_use]
    pub fn build(&self, raw: &RawPlace, config: &Config, school_count: u32) -> Option<StoreProfile> {
        let location = raw.location()?;

        let store_type = match raw.shop_tag() {
            Some("chemist" | "pharmacy") => StoreType::Pharmacy,
            Some("department_store" | "mall") => StoreType::DepartmentStore,
            _ => StoreType::Supermarket,
        };

        let name = raw.display_name().to_owned();
        let rating = self.estimator.rating(&name);
        let review_count = self.estimator.review_count(&name, store_type);

        // School-count check dominates; the three arms are mutually exclusive.
        let vibe = if school_count < RESIDENTIAL_SCHOOL_THRESHOLD {
            Vibe::Residential
        } else if review_count < BORING_REVIEW_THRESHOLD {
            Vibe::Boring
        } else {
            Vibe::Busy
        };

        Some(StoreProfile {
            id: raw.id,
            name,
            store_type,
            location,
            rating,
            review_count,
            nearby_school_count: school_count,
            on_main_avenue: review_count > MAIN_AVENUE_REVIEW_THRESHOLD,
            opening_hour: self.estimator.opening_hour(),
            vibe,
            distance_km: distance_km(config.location, location),
            score: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::BrandHeuristics;

    fn builder() -> ProfileBuilder<BrandHeuristics> {
        ProfileBuilder::new(BrandHeuristics::default())
    }

    fn raw_place(id: i64, shop: &str, name: &str) -> RawPlace {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "lat": 19.44,
            "lon": -99.14,
            "tags": {"shop": shop, "name": name}
        }))
        .unwrap()
    }

    #[test]
    fn place_without_location_yields_none() {
        let raw: RawPlace = serde_json::from_value(serde_json::json!({
            "id": 1,
            "tags": {"shop": "supermarket", "name": "Somewhere"}
        }))
        .unwrap();
        assert!(builder().build(&raw, &Config::default(), 0).is_none());
    }

    #[test]
    fn shop_tag_maps_to_store_type() {
        let b = builder();
        let config = Config::default();
        let cases = [
            ("chemist", StoreType::Pharmacy),
            ("pharmacy", StoreType::Pharmacy),
            ("department_store", StoreType::DepartmentStore),
            ("mall", StoreType::DepartmentStore),
            ("supermarket", StoreType::Supermarket),
            ("convenience", StoreType::Supermarket),
            ("greengrocer", StoreType::Supermarket),
        ];
        for (tag, expected) in cases {
            let profile = b.build(&raw_place(1, tag, "Tienda"), &config, 2).unwrap();
            assert_eq!(profile.store_type, expected, "shop tag {tag}");
        }
    }

    #[test]
    fn missing_shop_tag_defaults_to_supermarket() {
        let raw: RawPlace = serde_json::from_value(serde_json::json!({
            "id": 5,
            "lat": 19.44,
            "lon": -99.14,
            "tags": {"name": "Abarrotes Doña Mary"}
        }))
        .unwrap();
        let profile = builder().build(&raw, &Config::default(), 2).unwrap();
        assert_eq!(profile.store_type, StoreType::Supermarket);
    }

    #[test]
    fn vibe_residential_dominates_when_few_schools() {
        // Walmart has 1200 reviews, but one school nearby forces residential.
        let profile = builder()
            .build(&raw_place(1, "supermarket", "Walmart"), &Config::default(), 1)
            .unwrap();
        assert_eq!(profile.vibe, Vibe::Residential);
    }

    #[test]
    fn vibe_boring_for_low_review_count_in_school_zone() {
        let profile = builder()
            .build(
                &raw_place(1, "supermarket", "Tiendita"),
                &Config::default(),
                3,
            )
            .unwrap();
        assert_eq!(profile.review_count, 300);
        assert_eq!(profile.vibe, Vibe::Boring);
    }

    #[test]
    fn vibe_busy_for_high_review_count_in_school_zone() {
        let profile = builder()
            .build(&raw_place(1, "pharmacy", "Farmacia X"), &Config::default(), 3)
            .unwrap();
        assert_eq!(profile.review_count, 500);
        assert_eq!(profile.vibe, Vibe::Busy);
    }

    #[test]
    fn main_avenue_requires_strictly_more_than_500_reviews() {
        let b = builder();
        let config = Config::default();

        // Pharmacy base of exactly 500 does not qualify.
        let pharmacy = b
            .build(&raw_place(1, "pharmacy", "Farmacia Y"), &config, 2)
            .unwrap();
        assert!(!pharmacy.on_main_avenue);

        let walmart = b
            .build(&raw_place(2, "supermarket", "Walmart"), &config, 2)
            .unwrap();
        assert!(walmart.on_main_avenue);
    }

    #[test]
    fn distance_is_measured_from_config_origin() {
        let profile = builder()
            .build(&raw_place(1, "supermarket", "Tienda"), &Config::default(), 0)
            .unwrap();
        // ~1.4 km from the default CDMX origin to (19.44, -99.14).
        assert!(profile.distance_km > 0.5 && profile.distance_km < 3.0);
    }

    #[test]
    fn fresh_profile_has_zero_score_and_placeholder_hour() {
        let profile = builder()
            .build(&raw_place(1, "supermarket", "Tienda"), &Config::default(), 0)
            .unwrap();
        assert_eq!(profile.score, 0);
        assert_eq!(profile.opening_hour, 8);
    }
}
