//! Async wrapper around [`DiseaseShSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the network.
//!
//! # Example
//!
//! ```no_run
//! use diseasesh_sdk::AsyncDiseaseShSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncDiseaseShSdk::builder().build().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let top = sdk.run(|s| s.countries().top_by_cases(10)).await.unwrap();
//!
//!     // Convenience method for the global snapshot
//!     let totals = sdk.global_snapshot().await.unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::Ttls;
use crate::error::{DiseaseShError, Result};
use crate::models::{CountrySnapshot, Snapshot, TimeSeriesRow};
use crate::DiseaseShSdk;

// ---------------------------------------------------------------------------
// AsyncDiseaseShSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncDiseaseShSdk`] instance.
pub struct AsyncDiseaseShSdkBuilder {
    base_url: Option<String>,
    timeout: Duration,
    ttls: Ttls,
}

impl Default for AsyncDiseaseShSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            ttls: Ttls::default(),
        }
    }
}

impl AsyncDiseaseShSdkBuilder {
    /// Override the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the per-endpoint cache TTL windows.
    pub fn ttls(mut self, ttls: Ttls) -> Self {
        self.ttls = ttls;
        self
    }

    /// Build the async SDK.
    ///
    /// Construction runs on the blocking thread pool so it won't block
    /// the async event loop.
    pub async fn build(self) -> Result<AsyncDiseaseShSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = DiseaseShSdk::builder();
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            builder = builder.timeout(self.timeout).ttls(self.ttls);
            let sdk = builder.build()?;
            Ok(AsyncDiseaseShSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| DiseaseShError::Schema(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncDiseaseShSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`DiseaseShSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`DiseaseShSdk`] is
/// protected by a [`Mutex`] so one wrapper can be shared across tasks.
pub struct AsyncDiseaseShSdk {
    inner: Arc<Mutex<DiseaseShSdk>>,
}

impl AsyncDiseaseShSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncDiseaseShSdkBuilder {
        AsyncDiseaseShSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&DiseaseShSdk` reference and should return
    /// a `Result<T>`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use diseasesh_sdk::AsyncDiseaseShSdk;
    /// # async fn example() -> diseasesh_sdk::Result<()> {
    /// # let sdk = AsyncDiseaseShSdk::builder().build().await?;
    /// let rows = sdk.run(|s| s.global().history(30)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DiseaseShSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| DiseaseShError::Schema("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| DiseaseShError::Schema(format!("Task join error: {e}")))?
    }

    /// Current worldwide totals.
    pub async fn global_snapshot(&self) -> Result<Snapshot> {
        self.run(|s| s.global().snapshot()).await
    }

    /// Worldwide history over the last `lastdays` days.
    pub async fn global_history(&self, lastdays: u32) -> Result<Vec<TimeSeriesRow>> {
        self.run(move |s| s.global().history(lastdays)).await
    }

    /// All countries with their current counts.
    pub async fn country_list(&self) -> Result<Vec<CountrySnapshot>> {
        self.run(|s| s.countries().list()).await
    }

    /// The `n` highest-case countries.
    pub async fn top_by_cases(&self, n: usize) -> Result<Vec<CountrySnapshot>> {
        self.run(move |s| s.countries().top_by_cases(n)).await
    }

    /// Drop every cached response.
    pub async fn clear_cache(&self) -> Result<()> {
        self.run(|s| {
            s.clear_cache();
            Ok(())
        })
        .await
    }
}
