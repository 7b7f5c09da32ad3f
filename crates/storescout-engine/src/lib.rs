//! Store viability scoring engine.
//!
//! Turns raw points-of-interest records into scored, ranked store profiles:
//! profile building (type inference, rating/review estimation, vibe
//! classification), weighted tranquility scoring, stable ranking with
//! human-readable reasons, and a time-boxed result cache.

pub mod analysis;
pub mod builder;
pub mod cache;
pub mod estimator;
pub mod rank;
pub mod scorer;

pub use analysis::Analyzer;
pub use builder::ProfileBuilder;
pub use cache::CacheError;
pub use estimator::{BrandHeuristics, Estimator};
pub use rank::{explain, rank, slow_day};
pub use scorer::tranquility_score;
