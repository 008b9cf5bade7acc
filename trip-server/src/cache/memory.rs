//! In-process cache store.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache as MokaCache;

use crate::gateway::{CacheError, TripCache};

/// Default maximum number of cached entries.
pub const DEFAULT_MAX_CAPACITY: u64 = 1000;

/// A cached value with the expiry it was stored with.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    ttl: Option<Duration>,
}

/// Expires each entry after the TTL it was written with.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        entry.ttl
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        entry.ttl
    }
}

/// Cache store held in process memory, bounded by entry count.
///
/// Entries are lost on restart; suitable for single-instance deployments
/// and local development.
#[derive(Clone)]
pub struct MemoryTripCache {
    entries: MokaCache<String, Entry>,
}

impl MemoryTripCache {
    /// Create a cache holding at most `max_capacity` entries.
    pub fn new(max_capacity: u64) -> Self {
        let entries = MokaCache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self { entries }
    }
}

impl Default for MemoryTripCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CAPACITY)
    }
}

#[async_trait]
impl TripCache for MemoryTripCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.get(key).await.map(|entry| entry.value))
    }

    async fn set(
        &self,
        key: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> Result<bool, CacheError> {
        let entry = Entry {
            value: value.to_string(),
            ttl,
        };
        self.entries.insert(key.to_string(), entry).await;
        Ok(true)
    }
}
