//! The hotlist: a catalogue of collectible die-cast cars worth hunting for.
//!
//! This crate is a collaborator of the scoring engine, not part of it: it
//! loads an already-built catalogue file, classifies entries by brand lists,
//! and answers search/statistics queries for the presentation layer. The
//! scraping pipeline that builds the catalogue lives outside this repository.

mod catalogue;
mod classify;
mod types;

pub use catalogue::{format_entry, load_catalogue, save_catalogue, search, stats};
pub use classify::{classify, Classification};
pub use types::{HotlistEntry, HotlistError, HotlistStats, SearchFilters};
