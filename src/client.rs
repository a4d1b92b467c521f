//! HTTP client wrapper implementing the fetch -> cache -> parse pipeline.
//!
//! Every request goes through [`ApiClient::get_json`]: cache lookup first,
//! then a blocking GET on a miss, a status check, a JSON parse, and a cache
//! store. Failures are never retried; they surface to the caller.

use reqwest::blocking::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::cache::FetchCache;
use crate::config::Ttls;
use crate::error::{DiseaseShError, Result};

/// Wraps the blocking HTTP client and the fetch cache.
///
/// The cache is passed in explicitly (no process-wide singleton) and keyed
/// by the full request URL, including any parameterized country name.
pub struct ApiClient {
    http: HttpClient,
    /// The memoization cache consulted before every network call.
    pub cache: FetchCache,
    base_url: String,
    ttls: Ttls,
}

impl ApiClient {
    /// Create a client backed by the given cache.
    pub fn new(
        cache: FetchCache,
        base_url: impl Into<String>,
        timeout: Duration,
        ttls: Ttls,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            http,
            cache,
            base_url: base_url.into(),
            ttls,
        })
    }

    /// Fetch parsed JSON for an endpoint path, hitting the network at most
    /// once per TTL window per unique URL.
    pub fn get_json(&self, path: &str, ttl: Duration) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, path);

        if let Some(value) = self.cache.get(&url, ttl) {
            return Ok(value);
        }

        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DiseaseShError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let value: serde_json::Value = resp.json()?;
        self.cache.store(url, value.clone());
        Ok(value)
    }

    /// Fetch and deserialize an endpoint payload into type `T`.
    pub fn get_into<T: DeserializeOwned>(&self, path: &str, ttl: Duration) -> Result<T> {
        let value = self.get_json(path, ttl)?;
        let item: T = serde_json::from_value(value)?;
        Ok(item)
    }

    /// Base URL this client resolves paths against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-endpoint TTL configuration.
    pub fn ttls(&self) -> &Ttls {
        &self.ttls
    }
}
