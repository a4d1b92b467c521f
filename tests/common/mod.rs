//! Shared test fixtures for the disease.sh SDK integration tests.
//!
//! Provides SDK constructors pointed at a local `httpmock` server plus
//! small sample payloads matching the API's wire shapes.

use diseasesh_sdk::{DiseaseShSdk, Ttls};
use httpmock::MockServer;
use serde_json::json;

/// Build an SDK whose base URL is the given mock server, with default TTLs.
pub fn sdk_for(server: &MockServer) -> DiseaseShSdk {
    DiseaseShSdk::builder()
        .base_url(server.base_url())
        .build()
        .unwrap()
}

/// Build an SDK with every TTL forced to zero, so each query refetches.
pub fn sdk_without_caching(server: &MockServer) -> DiseaseShSdk {
    DiseaseShSdk::builder()
        .base_url(server.base_url())
        .ttls(Ttls {
            global_snapshot: std::time::Duration::ZERO,
            history: std::time::Duration::ZERO,
            country_list: std::time::Duration::ZERO,
            country_snapshot: std::time::Duration::ZERO,
        })
        .build()
        .unwrap()
}

/// The spec's worked snapshot example.
pub fn sample_global() -> serde_json::Value {
    json!({
        "cases": 100,
        "deaths": 10,
        "recovered": 50,
        "active": 40
    })
}

/// Three days of history in the API's three-parallel-maps shape.
pub fn sample_timeline() -> serde_json::Value {
    json!({
        "cases":     { "1/24/21": 300, "1/22/21": 100, "1/23/21": 200 },
        "deaths":    { "1/24/21": 30,  "1/22/21": 10,  "1/23/21": 20 },
        "recovered": { "1/24/21": 150, "1/22/21": 50,  "1/23/21": 100 }
    })
}

/// Four countries; "MS Zaandam" carries no coordinates and ties "Erewhon"
/// on case count.
pub fn sample_countries() -> serde_json::Value {
    json!([
        {
            "country": "USA",
            "cases": 5000,
            "deaths": 100,
            "recovered": 4000,
            "active": 900,
            "countryInfo": { "iso2": "US", "lat": 38.0, "long": -97.0 }
        },
        {
            "country": "India",
            "cases": 3000,
            "deaths": 60,
            "recovered": 2500,
            "active": 440,
            "countryInfo": { "iso2": "IN", "lat": 20.0, "long": 77.0 }
        },
        {
            "country": "MS Zaandam",
            "cases": 1000,
            "deaths": 2,
            "recovered": 900,
            "active": 98,
            "countryInfo": { "iso2": null, "lat": null, "long": null }
        },
        {
            "country": "Erewhon",
            "cases": 1000,
            "deaths": 5,
            "recovered": 800,
            "active": 195,
            "countryInfo": { "iso2": "EW", "lat": -41.0, "long": 172.0 }
        }
    ])
}
