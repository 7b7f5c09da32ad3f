//! Place Data Source: a thin client for the Overpass API
//! (`https://overpass-api.de`), the free points-of-interest query service of
//! OpenStreetMap.
//!
//! The rest of the system depends only on two operations: fetching shop
//! records around a point, and counting nearby schools. Both are fallible
//! here; the analysis pipeline decides how failures degrade.

mod client;
pub(crate) mod query;
mod types;

pub use client::OverpassClient;
pub use types::{OverpassError, RawPlace};
