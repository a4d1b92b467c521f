use std::time::Duration;

pub const API_BASE: &str = "https://disease.sh/v3/covid-19";

/// Default `lastdays` window for history queries (one month of data).
pub const LASTDAYS_MONTH: u32 = 30;
/// Full-year `lastdays` window for history queries.
pub const LASTDAYS_YEAR: u32 = 365;

/// Scatter-map radius is `cases / MAP_RADIUS_DIVISOR`.
pub const MAP_RADIUS_DIVISOR: f64 = 500.0;
/// Fixed translucent red fill used by the map layer.
pub const MAP_FILL_RGBA: &str = "rgba(255, 0, 0, 0.4)";

pub fn global_path() -> String {
    "/all".to_string()
}

pub fn historical_all_path(lastdays: u32) -> String {
    format!("/historical/all?lastdays={}", lastdays)
}

pub fn countries_path() -> String {
    "/countries".to_string()
}

pub fn country_path(country: &str) -> String {
    format!("/countries/{}", urlencoding::encode(country))
}

pub fn historical_country_path(country: &str, lastdays: u32) -> String {
    format!(
        "/historical/{}?lastdays={}",
        urlencoding::encode(country),
        lastdays
    )
}

/// Per-endpoint time-to-live windows for the fetch cache.
///
/// List and history payloads change slowly and default to 30 minutes;
/// per-country current stats refresh faster and default to 10 minutes.
#[derive(Debug, Clone, Copy)]
pub struct Ttls {
    pub global_snapshot: Duration,
    pub history: Duration,
    pub country_list: Duration,
    pub country_snapshot: Duration,
}

impl Default for Ttls {
    fn default() -> Self {
        Self {
            global_snapshot: Duration::from_secs(30 * 60),
            history: Duration::from_secs(30 * 60),
            country_list: Duration::from_secs(30 * 60),
            country_snapshot: Duration::from_secs(10 * 60),
        }
    }
}
