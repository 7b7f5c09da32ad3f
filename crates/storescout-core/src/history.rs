//! Append-only visit history, consumed only for display statistics.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub store: String,
    pub date: DateTime<Utc>,
    pub found: bool,
}

/// Aggregate statistics over a visit history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryStats {
    pub total: usize,
    pub found: usize,
    pub success_rate_pct: f64,
}

/// Load the visit history; missing or corrupt files behave as empty.
#[must_use]
pub fn load(path: &Path) -> Vec<Visit> {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(visits) => visits,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "history file unreadable; treating as empty");
                Vec::new()
            }
        },
        Err(_) => Vec::new(),
    }
}

/// Append one visit and persist the whole history back to disk.
///
/// # Errors
///
/// Returns `ConfigError::Write` if the file cannot be written.
pub fn append(path: &Path, visit: Visit) -> Result<(), ConfigError> {
    let mut visits = load(path);
    visits.push(visit);
    let json = serde_json::to_string_pretty(&visits).map_err(|e| ConfigError::Serialize {
        path: path.display().to_string(),
        source: e,
    })?;
    std::fs::write(path, json).map_err(|e| ConfigError::Write {
        path: path.display().to_string(),
        source: e,
    })
}

/// Success-rate statistics for display.
#[must_use]
pub fn stats(visits: &[Visit]) -> HistoryStats {
    let total = visits.len();
    let found = visits.iter().filter(|v| v.found).count();
    #[allow(clippy::cast_precision_loss)]
    let success_rate_pct = if total == 0 {
        0.0
    } else {
        found as f64 / total as f64 * 100.0
    };
    HistoryStats {
        total,
        found,
        success_rate_pct,
    }
}
