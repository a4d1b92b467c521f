//! Per-country statistics: the /countries list, single-country lookups,
//! per-country history, rankings, and the map layer.

use crate::client::ApiClient;
use crate::config;
use crate::error::{DiseaseShError, Result};
use crate::models::{CountryHistory, CountrySnapshot, MapPoint, TimeSeriesRow};
use crate::shape;

// ---------------------------------------------------------------------------
// CountryQuery
// ---------------------------------------------------------------------------

/// Query interface for per-country data.
pub struct CountryQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> CountryQuery<'a> {
    /// Create a new `CountryQuery` bound to the given client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// All countries with their current counts, from `/countries`.
    pub fn list(&self) -> Result<Vec<CountrySnapshot>> {
        self.client
            .get_into(&config::countries_path(), self.client.ttls().country_list)
    }

    /// Current counts for one country.
    ///
    /// A country the API does not know answers 404, surfaced as
    /// [`DiseaseShError::CountryNotFound`].
    pub fn get(&self, country: &str) -> Result<CountrySnapshot> {
        self.client
            .get_into(
                &config::country_path(country),
                self.client.ttls().country_snapshot,
            )
            .map_err(|e| Self::map_missing(e, country))
    }

    /// One country's history over the last `lastdays` days, shaped into
    /// one chronologically ordered row per day.
    pub fn history(&self, country: &str, lastdays: u32) -> Result<Vec<TimeSeriesRow>> {
        let history: CountryHistory = self
            .client
            .get_into(
                &config::historical_country_path(country, lastdays),
                self.client.ttls().history,
            )
            .map_err(|e| Self::map_missing(e, country))?;
        shape::time_series(&history.timeline)
    }

    /// The `n` highest-case countries, descending, ties in source order.
    pub fn top_by_cases(&self, n: usize) -> Result<Vec<CountrySnapshot>> {
        let countries = self.list()?;
        Ok(shape::top_by_cases(&countries, n))
    }

    /// Scatter-map rows for every country carrying coordinates.
    pub fn map_points(&self) -> Result<Vec<MapPoint>> {
        let countries = self.list()?;
        Ok(shape::map_points(&countries))
    }

    fn map_missing(err: DiseaseShError, country: &str) -> DiseaseShError {
        match err {
            DiseaseShError::Status { status: 404, .. } => {
                DiseaseShError::CountryNotFound(country.to_string())
            }
            other => other,
        }
    }
}
