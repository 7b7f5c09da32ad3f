//! Shared domain types for storescout: coordinates, scoring weights,
//! store profiles, user configuration, process settings, and visit history.

pub mod config;
pub mod geo;
pub mod history;
pub mod profile;
pub mod settings;
pub mod weights;

use thiserror::Error;

pub use config::Config;
pub use geo::{distance_km, Location};
pub use history::Visit;
pub use profile::{StoreProfile, StoreType, Vibe};
pub use settings::Settings;
pub use weights::WeightSet;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("latitude {0} out of range [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} out of range [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Errors raised while loading or persisting configuration-like files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("validation error: {0}")]
    Validation(String),
}
