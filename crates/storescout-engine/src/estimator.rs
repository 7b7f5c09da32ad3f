//! Rating, review-count, and opening-hour estimation.
//!
//! These values stand in for a real ratings/hours data source. They are
//! deterministic heuristics behind the [`Estimator`] trait so a real provider
//! can be substituted later without touching the scorer.

use std::path::Path;

use serde::Deserialize;
use storescout_core::{ConfigError, StoreType};

/// Rating assigned to names matching a known large chain.
const KNOWN_BRAND_RATING: f64 = 4.0;
/// Rating for everything else.
const BASE_RATING: f64 = 3.5;

/// Review-count override for high-traffic chains.
const HIGH_TRAFFIC_REVIEWS: u32 = 1200;
/// Review-count base for pharmacies.
const PHARMACY_REVIEWS: u32 = 500;
/// Review-count base for everything else.
const DEFAULT_REVIEWS: u32 = 300;

/// Placeholder opening hour; not derived from real opening-hours data.
const PLACEHOLDER_OPENING_HOUR: u8 = 8;

/// Supplies estimated store attributes for profile building.
pub trait Estimator {
    /// Estimated rating for a store with the given display name.
    fn rating(&self, name: &str) -> f64;
    /// Estimated review count for a store of the given type and name.
    fn review_count(&self, name: &str, store_type: StoreType) -> u32;
    /// Estimated opening hour (24h clock).
    fn opening_hour(&self) -> u8;
}

/// On-disk shape of the brand heuristics file (`config/brands.yaml`).
#[derive(Debug, Deserialize)]
struct BrandsFile {
    known_brands: Vec<String>,
    high_traffic_brands: Vec<String>,
}

/// Data-driven brand-substring heuristics.
///
/// A name "matches" a brand when it contains the brand string anywhere,
/// case-insensitively; `"superwalmart express"` matches `"walmart"`.
#[derive(Debug, Clone)]
pub struct BrandHeuristics {
    known_brands: Vec<String>,
    high_traffic_brands: Vec<String>,
}

impl Default for BrandHeuristics {
    fn default() -> Self {
        Self {
            known_brands: [
                "walmart",
                "chedraui",
                "soriana",
                "bodega",
                "farmacia guadalajara",
                "ahorro",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            high_traffic_brands: ["walmart", "chedraui"].into_iter().map(String::from).collect(),
        }
    }
}

impl BrandHeuristics {
    /// Load brand lists from a YAML file, falling back to the compiled-in
    /// defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed,
    /// or if a brand list entry is empty.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "brands file absent; using built-in defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let file: BrandsFile = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Validation(format!("invalid brands file: {e}")))?;

        let normalize = |brands: Vec<String>| -> Result<Vec<String>, ConfigError> {
            brands
                .into_iter()
                .map(|b| {
                    let lowered = b.trim().to_lowercase();
                    if lowered.is_empty() {
                        Err(ConfigError::Validation(
                            "brand entries must be non-empty".to_string(),
                        ))
                    } else {
                        Ok(lowered)
                    }
                })
                .collect()
        };

        Ok(Self {
            known_brands: normalize(file.known_brands)?,
            high_traffic_brands: normalize(file.high_traffic_brands)?,
        })
    }

    fn matches_any(name_lower: &str, brands: &[String]) -> bool {
        brands.iter().any(|brand| name_lower.contains(brand.as_str()))
    }
}

impl Estimator for BrandHeuristics {
    fn rating(&self, name: &str) -> f64 {
        let name_lower = name.to_lowercase();
        if Self::matches_any(&name_lower, &self.known_brands) {
            KNOWN_BRAND_RATING
        } else {
            BASE_RATING
        }
    }

    fn review_count(&self, name: &str, store_type: StoreType) -> u32 {
        let name_lower = name.to_lowercase();
        if Self::matches_any(&name_lower, &self.high_traffic_brands) {
            return HIGH_TRAFFIC_REVIEWS;
        }
        match store_type {
            StoreType::Pharmacy => PHARMACY_REVIEWS,
            StoreType::Supermarket | StoreType::DepartmentStore => DEFAULT_REVIEWS,
        }
    }

    fn opening_hour(&self) -> u8 {
        PLACEHOLDER_OPENING_HOUR
    }
}
