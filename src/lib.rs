//! disease.sh SDK for Rust.
//!
//! Provides a high-level client for the public disease.sh COVID-19 API.
//! Responses are fetched over HTTPS, memoized in an in-memory TTL cache,
//! and reshaped into flat tabular types ready for metric tiles, line
//! charts, scatter maps, and rankings.
//!
//! # Quick start
//!
//! ```no_run
//! use diseasesh_sdk::DiseaseShSdk;
//!
//! let sdk = DiseaseShSdk::builder().build().unwrap();
//!
//! // Worldwide totals
//! let totals = sdk.global().snapshot().unwrap();
//! println!("cases: {}", totals.cases);
//!
//! // Ten highest-case countries
//! let top = sdk.countries().top_by_cases(10).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod shape;

#[cfg(feature = "async")]
pub use async_client::AsyncDiseaseShSdk;
pub use cache::{Clock, FetchCache, SystemClock};
pub use client::ApiClient;
pub use config::Ttls;
pub use error::{DiseaseShError, Result};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// DiseaseShSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`DiseaseShSdk`] instance.
///
/// Use [`DiseaseShSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DiseaseShSdkBuilder::build) to create the SDK.
pub struct DiseaseShSdkBuilder {
    base_url: String,
    timeout: Duration,
    ttls: Ttls,
}

impl Default for DiseaseShSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: Duration::from_secs(30),
            ttls: Ttls::default(),
        }
    }
}

impl DiseaseShSdkBuilder {
    /// Override the API base URL.
    ///
    /// Defaults to the public disease.sh v3 endpoint; tests point this at
    /// a local mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the per-endpoint cache TTL windows.
    pub fn ttls(mut self, ttls: Ttls) -> Self {
        self.ttls = ttls;
        self
    }

    /// Build the SDK with a fresh, empty fetch cache.
    ///
    /// No network traffic happens here; every endpoint is fetched lazily
    /// on first query.
    pub fn build(self) -> Result<DiseaseShSdk> {
        let cache = FetchCache::new();
        let client = ApiClient::new(cache, self.base_url, self.timeout, self.ttls)?;
        Ok(DiseaseShSdk { client })
    }
}

// ---------------------------------------------------------------------------
// DiseaseShSdk
// ---------------------------------------------------------------------------

/// The main entry point for the disease.sh SDK.
///
/// Wraps an [`ApiClient`] (which owns the HTTP client and the
/// [`FetchCache`]) and exposes domain query interfaces as lightweight
/// borrowing wrappers.
///
/// Created via [`DiseaseShSdk::builder()`].
pub struct DiseaseShSdk {
    client: ApiClient,
}

impl DiseaseShSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> DiseaseShSdkBuilder {
        DiseaseShSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access worldwide totals and history.
    ///
    /// Returns a lightweight wrapper that borrows from the underlying
    /// client and fetches through the cache.
    pub fn global(&self) -> queries::global::GlobalQuery<'_> {
        queries::global::GlobalQuery::new(&self.client)
    }

    /// Access per-country data: list, lookups, history, rankings, map rows.
    pub fn countries(&self) -> queries::countries::CountryQuery<'_> {
        queries::countries::CountryQuery::new(&self.client)
    }

    // -- Utility methods ---------------------------------------------------

    /// Drop every cached response so the next queries refetch.
    ///
    /// The manual-refresh analog of waiting out the TTLs.
    pub fn clear_cache(&self) {
        self.client.cache.clear();
        eprintln!("fetch cache cleared; next queries will refetch");
    }

    /// Return a reference to the underlying [`ApiClient`] for advanced usage.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for DiseaseShSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DiseaseShSdk(base_url={}, cached_entries={})",
            self.client.base_url(),
            self.client.cache.len()
        )
    }
}
