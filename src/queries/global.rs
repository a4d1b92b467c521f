//! Worldwide statistics: the /all snapshot and /historical/all series.

use crate::client::ApiClient;
use crate::config;
use crate::error::Result;
use crate::models::{Snapshot, Timeline, TimeSeriesRow};
use crate::shape;

// ---------------------------------------------------------------------------
// GlobalQuery
// ---------------------------------------------------------------------------

/// Query interface for worldwide totals and history.
pub struct GlobalQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> GlobalQuery<'a> {
    /// Create a new `GlobalQuery` bound to the given client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Current worldwide totals from `/all`.
    pub fn snapshot(&self) -> Result<Snapshot> {
        self.client
            .get_into(&config::global_path(), self.client.ttls().global_snapshot)
    }

    /// Worldwide history over the last `lastdays` days, shaped into one
    /// chronologically ordered row per day.
    pub fn history(&self, lastdays: u32) -> Result<Vec<TimeSeriesRow>> {
        let timeline = self.history_raw(lastdays)?;
        shape::time_series(&timeline)
    }

    /// Last 30 days of worldwide history.
    pub fn history_month(&self) -> Result<Vec<TimeSeriesRow>> {
        self.history(config::LASTDAYS_MONTH)
    }

    /// Last 365 days of worldwide history.
    pub fn history_year(&self) -> Result<Vec<TimeSeriesRow>> {
        self.history(config::LASTDAYS_YEAR)
    }

    /// The unshaped three-map timeline, for callers that want the wire form.
    pub fn history_raw(&self, lastdays: u32) -> Result<Timeline> {
        self.client.get_into(
            &config::historical_all_path(lastdays),
            self.client.ttls().history,
        )
    }
}
