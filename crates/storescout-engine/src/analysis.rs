//! The end-to-end analysis run: fetch, enrich, score, sort.

use std::time::Duration;

use storescout_core::{Config, StoreProfile};
use storescout_overpass::OverpassClient;

use crate::builder::ProfileBuilder;
use crate::estimator::Estimator;
use crate::rank::rank;
use crate::scorer::tranquility_score;

/// Shop categories scouted on every run.
pub const STORE_CATEGORIES: [&str; 5] = [
    "supermarket",
    "convenience",
    "chemist",
    "pharmacy",
    "department_store",
];

/// Radius for the per-store school query, independent of the search radius.
const SCHOOL_RADIUS_M: u32 = 1000;

/// Runs the sequential analysis pipeline.
///
/// One places query, then one school-count query per candidate with a
/// courtesy pause in between. Everything is blocking-sequential; there is no
/// parallelism, no retry, and no cancellation. A failed school query
/// degrades that one store, never the run.
pub struct Analyzer<E> {
    client: OverpassClient,
    builder: ProfileBuilder<E>,
    inter_request_delay_ms: u64,
}

impl<E: Estimator> Analyzer<E> {
    pub fn new(client: OverpassClient, estimator: E, inter_request_delay_ms: u64) -> Self {
        Self {
            client,
            builder: ProfileBuilder::new(estimator),
            inter_request_delay_ms,
        }
    }

    /// Analyse stores around the configured origin.
    ///
    /// When `cached` holds a non-empty store set it is returned unchanged and
    /// no query is made. Otherwise candidates are fetched, enriched, scored,
    /// and returned ranked (descending score, stable for ties). External
    /// failures degrade to an empty or partial result; this never errors.
    pub async fn analyze(
        &self,
        config: &Config,
        cached: Option<Vec<StoreProfile>>,
    ) -> Vec<StoreProfile> {
        if let Some(stores) = cached {
            if !stores.is_empty() {
                tracing::info!(count = stores.len(), "using cached analysis");
                return stores;
            }
        }

        let places = match self
            .client
            .find_places(config.location, config.radius_meters, &STORE_CATEGORIES)
            .await
        {
            Ok(places) => places,
            Err(e) => {
                tracing::warn!(error = %e, "place query failed; returning no candidates");
                return Vec::new();
            }
        };

        tracing::info!(count = places.len(), "places found");

        let mut profiles = Vec::new();
        let mut is_first = true;

        for place in &places {
            if !is_first && self.inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.inter_request_delay_ms)).await;
            }
            is_first = false;

            let Some(location) = place.location() else {
                // No resolvable point: skipped silently, per the error taxonomy.
                continue;
            };

            let school_count = match self
                .client
                .count_nearby_schools(location, SCHOOL_RADIUS_M)
                .await
            {
                Ok(count) => count,
                Err(e) => {
                    tracing::warn!(
                        place_id = place.id,
                        error = %e,
                        "school query failed; assuming zero schools"
                    );
                    0
                }
            };

            if let Some(mut profile) = self.builder.build(place, config, school_count) {
                profile.score = tranquility_score(&profile, &config.weights);
                profiles.push(profile);
            }
        }

        rank(profiles)
    }
}
