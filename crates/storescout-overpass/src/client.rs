use std::time::Duration;

use reqwest::Client;
use storescout_core::Location;

use crate::query::{places_query, schools_query};
use crate::types::{OverpassError, OverpassResponse, RawPlace};

/// HTTP client for the Overpass API interpreter endpoint.
///
/// Queries are plain POSTs with the Overpass QL script in the `data` form
/// field. Calls carry a fixed timeout and are never retried; a timeout is
/// "no data", not a recoverable condition.
pub struct OverpassClient {
    client: Client,
    base_url: String,
}

impl OverpassClient {
    /// Creates an `OverpassClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, OverpassError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetch shop records of the given categories within `radius_meters` of
    /// `origin`. Records without a resolvable location are included here and
    /// filtered by the profile builder.
    ///
    /// # Errors
    ///
    /// - [`OverpassError::Http`]: network or TLS failure, or timeout.
    /// - [`OverpassError::UnexpectedStatus`]: non-2xx response.
    /// - [`OverpassError::Deserialize`]: body is not a valid Overpass JSON
    ///   envelope.
    pub async fn find_places(
        &self,
        origin: Location,
        radius_meters: u32,
        categories: &[&str],
    ) -> Result<Vec<RawPlace>, OverpassError> {
        let query = places_query(origin, radius_meters, categories);
        let response = self.interpret(&query, "places query").await?;
        Ok(response.elements)
    }

    /// Count schools within `radius_meters` of `origin`.
    ///
    /// The count is the number of returned elements; a failed query is an
    /// `Err`, so callers can tell "zero schools" apart from "query failed".
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::find_places`].
    pub async fn count_nearby_schools(
        &self,
        origin: Location,
        radius_meters: u32,
    ) -> Result<u32, OverpassError> {
        let query = schools_query(origin, radius_meters);
        let response = self.interpret(&query, "schools query").await?;
        Ok(u32::try_from(response.elements.len()).unwrap_or(u32::MAX))
    }

    async fn interpret(
        &self,
        query: &str,
        context: &str,
    ) -> Result<OverpassResponse, OverpassError> {
        let response = self
            .client
            .post(&self.base_url)
            .form(&[("data", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OverpassError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.base_url.clone(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<OverpassResponse>(&body).map_err(|e| {
            OverpassError::Deserialize {
                context: context.to_owned(),
                source: e,
            }
        })
    }
}
