//! Wire types for Overpass API responses.

use std::collections::HashMap;

use serde::Deserialize;
use storescout_core::Location;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverpassError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The envelope Overpass wraps every result set in.
#[derive(Debug, Deserialize)]
pub(crate) struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<RawPlace>,
}

/// One raw OSM element (node or way) as returned by Overpass.
///
/// Nodes carry `lat`/`lon` directly; ways carry a `center` when the query
/// asks for one. Either may be absent, in which case the record has no
/// resolvable location and is discarded before scoring.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlace {
    pub id: i64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<Center>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

impl RawPlace {
    /// Resolve the element's point location: direct coordinates first, then
    /// the way centre. `None` means the record is unusable for scoring.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            return Some(Location { lat, lng: lon });
        }
        self.center.map(|c| Location {
            lat: c.lat,
            lng: c.lon,
        })
    }

    /// Display name: the `name` tag, falling back to `brand`, then a stub.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.tags
            .get("name")
            .or_else(|| self.tags.get("brand"))
            .map_or("Unnamed", String::as_str)
    }

    /// The `shop` tag value, if tagged.
    #[must_use]
    pub fn shop_tag(&self) -> Option<&str> {
        self.tags.get("shop").map(String::as_str)
    }
}
