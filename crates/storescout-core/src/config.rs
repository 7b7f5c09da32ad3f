//! User configuration: search origin, radius, and scoring weights.
//!
//! Persisted as pretty-printed JSON. A missing or unreadable file falls back
//! to the documented defaults; nothing here is fatal.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geo::Location;
use crate::weights::WeightSet;
use crate::ConfigError;

/// Default search origin: Mexico City centre.
const DEFAULT_LAT: f64 = 19.4326;
const DEFAULT_LNG: f64 = -99.1332;
/// Default search radius in metres (6 km).
const DEFAULT_RADIUS_M: u32 = 6000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub location: Location,
    #[serde(rename = "radius")]
    pub radius_meters: u32,
    pub weights: WeightSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: Location {
                lat: DEFAULT_LAT,
                lng: DEFAULT_LNG,
            },
            radius_meters: DEFAULT_RADIUS_M,
            weights: WeightSet::default(),
        }
    }
}

impl Config {
    /// Load the config from `path`, falling back to defaults when the file is
    /// missing or cannot be parsed.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "config file unreadable; using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persist the config to `path` as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Write` if the file cannot be written. Serialization
    /// of `Config` itself cannot fail.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            path: path.display().to_string(),
            source: e,
        })?;
        std::fs::write(path, json).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }
}
