use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CountrySnapshot — one element of /countries, or /countries/{country}
// ---------------------------------------------------------------------------

/// Per-country point-in-time counts with optional geocoordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySnapshot {
    pub country: String,
    pub cases: u64,
    pub deaths: u64,
    pub recovered: u64,
    pub active: u64,
    #[serde(default)]
    pub country_info: Option<CountryInfo>,
    #[serde(default)]
    pub today_cases: Option<u64>,
    #[serde(default)]
    pub today_deaths: Option<u64>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub updated: Option<i64>,
}

impl CountrySnapshot {
    /// `(lat, lon)` when both coordinates are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let info = self.country_info.as_ref()?;
        match (info.lat, info.long) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// The `countryInfo` sub-object. Coordinates may be absent for
/// aggregate rows like cruise ships.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(default)]
    pub iso3: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,
}

// ---------------------------------------------------------------------------
// MapPoint — one row of the scatter-map layer
// ---------------------------------------------------------------------------

/// A country reduced to what the map layer consumes. Countries without
/// coordinates are dropped before this type is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub country: String,
    pub cases: u64,
    pub lat: f64,
    pub lon: f64,
    /// Marker radius, `cases` scaled by the fixed display divisor.
    pub radius: f64,
}
