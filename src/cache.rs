//! In-memory TTL cache for API responses.
//!
//! Memoizes parsed JSON per request URL so repeated renders within a TTL
//! window never re-hit the network. Expired entries are evicted on read.
//! There is no single-flight dedup: two callers racing on a cold key may
//! both issue a network call, and the later store wins.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Time source for TTL checks, injectable so expiry is testable
/// without sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Default wall-clock time source.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct CacheEntry {
    value: Value,
    fetched_at: Instant,
}

/// URL-keyed memoization cache with per-read TTL.
///
/// The cache stores when each value was fetched; the caller supplies the
/// TTL on lookup since different endpoints carry different windows.
/// Access is mutex-guarded so the cache can be shared across sessions.
pub struct FetchCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    clock: Box<dyn Clock>,
}

impl FetchCache {
    /// Create a cache backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create a cache with a custom time source.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Return the cached value for `key` if it is younger than `ttl`.
    ///
    /// An expired entry is removed and treated as absent, so the caller
    /// refetches and stores a fresh value.
    pub fn get(&self, key: &str, ttl: Duration) -> Option<Value> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        if let Some(entry) = entries.get(key) {
            if self.clock.now().duration_since(entry.fetched_at) < ttl {
                return Some(entry.value.clone());
            }
            entries.remove(key);
        }
        None
    }

    /// Store a freshly fetched value, replacing any previous entry wholesale.
    pub fn store(&self, key: String, value: Value) {
        let entry = CacheEntry {
            value,
            fetched_at: self.clock.now(),
        };
        self.entries
            .lock()
            .expect("cache lock poisoned")
            .insert(key, entry);
    }

    /// Drop all cached entries.
    pub fn clear(&self) {
        self.entries.lock().expect("cache lock poisoned").clear();
    }

    /// Number of live entries (including any not yet evicted as expired).
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FetchCache {
    fn default() -> Self {
        Self::new()
    }
}
