//! Country list, lookup, ranking, and map-layer tests against a local
//! mock server.

mod common;

use diseasesh_sdk::{config, DiseaseShError};
use httpmock::prelude::*;

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_returns_all_countries() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/countries");
        then.status(200).json_body(common::sample_countries());
    });

    let sdk = common::sdk_for(&server);
    let countries = sdk.countries().list().unwrap();

    assert_eq!(countries.len(), 4);
    assert_eq!(countries[0].country, "USA");
    assert_eq!(countries[0].cases, 5000);
    assert_eq!(countries[0].active, 900);
}

#[test]
fn list_ranking_and_map_share_one_fetch() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/countries");
        then.status(200).json_body(common::sample_countries());
    });

    let sdk = common::sdk_for(&server);
    sdk.countries().list().unwrap();
    sdk.countries().top_by_cases(10).unwrap();
    sdk.countries().map_points().unwrap();

    assert_eq!(mock.hits(), 1);
}

// ---------------------------------------------------------------------------
// get
// ---------------------------------------------------------------------------

#[test]
fn get_parses_coordinates() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/countries/USA");
        then.status(200).json_body(serde_json::json!({
            "country": "USA",
            "cases": 5000,
            "deaths": 100,
            "recovered": 4000,
            "active": 900,
            "countryInfo": { "iso2": "US", "lat": 38.0, "long": -97.0 }
        }));
    });

    let sdk = common::sdk_for(&server);
    let usa = sdk.countries().get("USA").unwrap();

    assert_eq!(usa.coordinates(), Some((38.0, -97.0)));
}

#[test]
fn get_unknown_country_maps_to_country_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/countries/Atlantis");
        then.status(404)
            .json_body(serde_json::json!({ "message": "Country not found" }));
    });

    let sdk = common::sdk_for(&server);
    let err = sdk.countries().get("Atlantis").unwrap_err();

    match err {
        DiseaseShError::CountryNotFound(name) => assert_eq!(name, "Atlantis"),
        other => panic!("expected CountryNotFound, got {other}"),
    }
}

#[test]
fn country_paths_percent_encode_names() {
    assert_eq!(
        config::country_path("South Africa"),
        "/countries/South%20Africa"
    );
    assert_eq!(
        config::historical_country_path("South Africa", 30),
        "/historical/South%20Africa?lastdays=30"
    );
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

#[test]
fn country_history_shapes_timeline_rows() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/historical/UK")
            .query_param("lastdays", "3");
        then.status(200).json_body(serde_json::json!({
            "country": "UK",
            "timeline": common::sample_timeline()
        }));
    });

    let sdk = common::sdk_for(&server);
    let rows = sdk.countries().history("UK", 3).unwrap();

    assert_eq!(rows.len(), 3);
    assert!(rows.windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn country_history_unknown_maps_to_country_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/historical/Atlantis");
        then.status(404)
            .json_body(serde_json::json!({ "message": "Country not found" }));
    });

    let sdk = common::sdk_for(&server);
    let err = sdk.countries().history("Atlantis", 30).unwrap_err();

    assert!(matches!(err, DiseaseShError::CountryNotFound(_)));
}

// ---------------------------------------------------------------------------
// top_by_cases
// ---------------------------------------------------------------------------

#[test]
fn top_by_cases_orders_descending_with_stable_ties() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/countries");
        then.status(200).json_body(common::sample_countries());
    });

    let sdk = common::sdk_for(&server);
    let top = sdk.countries().top_by_cases(10).unwrap();

    // Shorter than n: the whole list comes back.
    assert_eq!(top.len(), 4);
    assert_eq!(top[0].country, "USA");
    assert_eq!(top[1].country, "India");
    // MS Zaandam and Erewhon tie at 1000 cases; source order is kept.
    assert_eq!(top[2].country, "MS Zaandam");
    assert_eq!(top[3].country, "Erewhon");
}

#[test]
fn top_by_cases_truncates_to_n() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/countries");
        then.status(200).json_body(common::sample_countries());
    });

    let sdk = common::sdk_for(&server);
    let top = sdk.countries().top_by_cases(2).unwrap();

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].country, "USA");
    assert_eq!(top[1].country, "India");
}

// ---------------------------------------------------------------------------
// map_points
// ---------------------------------------------------------------------------

#[test]
fn map_points_exclude_countries_without_coordinates() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/countries");
        then.status(200).json_body(common::sample_countries());
    });

    let sdk = common::sdk_for(&server);
    let points = sdk.countries().map_points().unwrap();

    // One of four sample countries has no coordinates.
    assert_eq!(points.len(), 3);
    assert!(points.iter().all(|p| p.country != "MS Zaandam"));
    assert_eq!(points[0].country, "USA");
    assert_eq!(points[0].lat, 38.0);
    assert_eq!(points[0].lon, -97.0);
    // radius = cases / 500
    assert_eq!(points[0].radius, 10.0);
}
