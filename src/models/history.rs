use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Timeline — wire shape of /historical/all and the per-country timeline
// ---------------------------------------------------------------------------

/// Three parallel date -> cumulative-count maps as the API returns them.
///
/// Key order is not meaningful; shaping joins the maps on parsed dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    pub cases: HashMap<String, u64>,
    pub deaths: HashMap<String, u64>,
    pub recovered: HashMap<String, u64>,
}

/// Wire shape of /historical/{country}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryHistory {
    pub country: String,
    pub timeline: Timeline,
}

// ---------------------------------------------------------------------------
// TimeSeriesRow — one shaped row per calendar day
// ---------------------------------------------------------------------------

/// One day of the shaped time series, chronologically ordered within a
/// series and never carrying an unparsed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSeriesRow {
    pub date: NaiveDate,
    pub cases: u64,
    pub deaths: u64,
    pub recovered: u64,
}
