//! Time-boxed persistence of analysed store profiles.
//!
//! One global cache slot, overwritten wholesale after every fresh analysis.
//! The slot is NOT keyed by location or radius; changing the search origin
//! while a fresh cache exists serves mismatched data until it is cleared
//! manually.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use storescout_core::StoreProfile;
use thiserror::Error;

/// Caches older than this behave as absent.
const MAX_AGE_DAYS: i64 = 7;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to write cache {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize cache: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheFile {
    timestamp: DateTime<Utc>,
    stores: Vec<StoreProfile>,
}

/// Load cached profiles, if a fresh cache exists.
///
/// Returns `None` when the file is missing, unreadable, or at least seven
/// days old: all three behave identically and trigger a fresh fetch.
#[must_use]
pub fn load(path: &Path, now: DateTime<Utc>) -> Option<Vec<StoreProfile>> {
    let content = std::fs::read_to_string(path).ok()?;
    let cache: CacheFile = match serde_json::from_str(&content) {
        Ok(cache) => cache,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cache file unreadable; ignoring");
            return None;
        }
    };

    if now - cache.timestamp >= Duration::days(MAX_AGE_DAYS) {
        tracing::debug!(path = %path.display(), timestamp = %cache.timestamp, "cache is stale");
        return None;
    }

    Some(cache.stores)
}

/// Overwrite the cache with a fresh store set, stamping it with `now`.
///
/// # Errors
///
/// Returns `CacheError` when serialization or the file write fails.
pub fn save(path: &Path, stores: &[StoreProfile], now: DateTime<Utc>) -> Result<(), CacheError> {
    let cache = CacheFile {
        timestamp: now,
        stores: stores.to_vec(),
    };
    let json = serde_json::to_string_pretty(&cache)?;
    std::fs::write(path, json).map_err(|e| CacheError::Write {
        path: path.display().to_string(),
        source: e,
    })
}

/// Remove the cache file if present. Missing files are not an error.
///
/// # Errors
///
/// Returns `CacheError::Write` when the file exists but cannot be removed.
pub fn clear(path: &Path) -> Result<(), CacheError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(CacheError::Write {
            path: path.display().to_string(),
            source: e,
        }),
    }
}
