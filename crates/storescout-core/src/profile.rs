//! Normalized store profiles produced by the analysis pipeline.

use serde::{Deserialize, Serialize};

use crate::geo::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreType {
    Supermarket,
    Pharmacy,
    DepartmentStore,
}

impl std::fmt::Display for StoreType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreType::Supermarket => write!(f, "supermarket"),
            StoreType::Pharmacy => write!(f, "pharmacy"),
            StoreType::DepartmentStore => write!(f, "department_store"),
        }
    }
}

/// Coarse crowd classification derived from nearby schools and review volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Residential,
    Boring,
    Busy,
}

impl std::fmt::Display for Vibe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vibe::Residential => write!(f, "residential"),
            Vibe::Boring => write!(f, "boring"),
            Vibe::Busy => write!(f, "busy"),
        }
    }
}

/// A fully analysed store candidate.
///
/// Built from a raw place record, then scored; not mutated afterwards within
/// an analysis run. A fresh run replaces the whole set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreProfile {
    /// OSM element id of the source record.
    pub id: i64,
    pub name: String,
    pub store_type: StoreType,
    pub location: Location,
    /// Estimated rating; a heuristic stand-in for a real ratings source.
    pub rating: f64,
    /// Estimated review count, same caveat as `rating`.
    pub review_count: u32,
    pub nearby_school_count: u32,
    pub on_main_avenue: bool,
    /// Placeholder constant for now; not derived from real opening-hours data.
    pub opening_hour: u8,
    pub vibe: Vibe,
    pub distance_km: f64,
    /// Tranquility score in [0, 100]; assigned by the scorer.
    pub score: u8,
}
