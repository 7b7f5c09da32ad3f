//! Domain types for the collectible catalogue.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HotlistError {
    #[error("failed to write hotlist {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize hotlist: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One catalogue entry.
///
/// `is_th` / `is_sth` are the Treasure Hunt and Super Treasure Hunt rarity
/// flags; `is_jdm` / `is_premium` / `is_muscle` are theme classifications
/// derived from the model name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotlistEntry {
    pub id: String,
    pub number: String,
    pub name: String,
    pub series: String,
    pub year: u16,
    #[serde(default = "unknown_brand")]
    pub brand: String,
    #[serde(default)]
    pub is_jdm: bool,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_muscle: bool,
    #[serde(default)]
    pub is_th: bool,
    #[serde(default)]
    pub is_sth: bool,
}

fn unknown_brand() -> String {
    "Unknown".to_string()
}

/// Conjunction of search filters; `None`/`false` means "don't filter on it".
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub jdm: bool,
    pub premium: bool,
    /// Matches TH or STH entries.
    pub treasure_hunt: bool,
    /// Matches STH entries only.
    pub super_treasure_hunt: bool,
    pub brand: Option<String>,
}

/// Aggregate catalogue statistics for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotlistStats {
    pub total: usize,
    pub jdm: usize,
    pub premium: usize,
    pub muscle: usize,
    pub treasure_hunts: usize,
    pub super_treasure_hunts: usize,
    /// Brand names with counts, most frequent first, at most ten.
    pub top_brands: Vec<(String, usize)>,
}
