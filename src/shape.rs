//! Reshaping of raw API payloads into flat, chart-ready tables.
//!
//! All functions here are pure: they take already-fetched data and return
//! tabular types, so every shaping rule is testable without a network.

use chrono::NaiveDate;

use crate::config;
use crate::error::{DiseaseShError, Result};
use crate::models::{CountrySnapshot, MapPoint, Timeline, TimeSeriesRow};

/// Dates on the wire look like `1/22/20` (month/day/two-digit-year).
const API_DATE_FORMAT: &str = "%m/%d/%y";

/// Parse one wire-format date key.
pub fn parse_api_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, API_DATE_FORMAT).map_err(|source| {
        DiseaseShError::InvalidDate {
            value: raw.to_string(),
            source,
        }
    })
}

/// Zip the three parallel date->count maps into one row per calendar day.
///
/// The join is explicit: keys are parsed to dates and sorted, so the output
/// is chronological regardless of map iteration order. The three maps must
/// share an identical key set; a date present in one series but not another
/// is an error rather than a silent truncation.
pub fn time_series(timeline: &Timeline) -> Result<Vec<TimeSeriesRow>> {
    let mut dated: Vec<(NaiveDate, &str)> = timeline
        .cases
        .keys()
        .map(|k| parse_api_date(k).map(|d| (d, k.as_str())))
        .collect::<Result<_>>()?;
    dated.sort_by_key(|(date, _)| *date);

    if timeline.deaths.len() != timeline.cases.len()
        || timeline.recovered.len() != timeline.cases.len()
    {
        return Err(DiseaseShError::MismatchedSeries(format!(
            "cases has {} dates, deaths {}, recovered {}",
            timeline.cases.len(),
            timeline.deaths.len(),
            timeline.recovered.len()
        )));
    }

    let mut rows = Vec::with_capacity(dated.len());
    for (date, key) in dated {
        let cases = timeline.cases[key];
        let deaths = *timeline.deaths.get(key).ok_or_else(|| {
            DiseaseShError::MismatchedSeries(format!("deaths series missing date {}", key))
        })?;
        let recovered = *timeline.recovered.get(key).ok_or_else(|| {
            DiseaseShError::MismatchedSeries(format!("recovered series missing date {}", key))
        })?;
        rows.push(TimeSeriesRow {
            date,
            cases,
            deaths,
            recovered,
        });
    }
    Ok(rows)
}

/// The `n` highest-case countries in descending order.
///
/// The sort is stable, so ties keep their source order; a list shorter
/// than `n` is returned whole.
pub fn top_by_cases(countries: &[CountrySnapshot], n: usize) -> Vec<CountrySnapshot> {
    let mut ranked = countries.to_vec();
    ranked.sort_by(|a, b| b.cases.cmp(&a.cases));
    ranked.truncate(n);
    ranked
}

/// Reduce a country list to scatter-map rows.
///
/// Countries without both coordinates are omitted; radius is case count
/// over the fixed display divisor.
pub fn map_points(countries: &[CountrySnapshot]) -> Vec<MapPoint> {
    countries
        .iter()
        .filter_map(|c| {
            let (lat, lon) = c.coordinates()?;
            Some(MapPoint {
                country: c.country.clone(),
                cases: c.cases,
                lat,
                lon,
                radius: c.cases as f64 / config::MAP_RADIUS_DIVISOR,
            })
        })
        .collect()
}
