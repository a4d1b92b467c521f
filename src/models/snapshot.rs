use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Snapshot — point-in-time counts from /all
// ---------------------------------------------------------------------------

/// Global point-in-time counts, immutable once fetched and re-created
/// wholesale on each cache refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub cases: u64,
    pub deaths: u64,
    pub recovered: u64,
    #[serde(default)]
    pub active: Option<u64>,
    #[serde(default)]
    pub today_cases: Option<u64>,
    #[serde(default)]
    pub today_deaths: Option<u64>,
    #[serde(default)]
    pub population: Option<u64>,
    /// Source-side last-update time, epoch milliseconds.
    #[serde(default)]
    pub updated: Option<i64>,
    #[serde(default)]
    pub affected_countries: Option<u64>,
}
