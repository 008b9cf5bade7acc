//! Cache-aside fetching of trip offers.
//!
//! Offers for a route are looked up in a [`TripCache`] under
//! `trp-{ORIGIN}-{DESTINATION}` before the upstream source is queried.
//! The cache is never authoritative: read failures and entries that do not
//! decode are treated as misses, and failed writes are logged and ignored.

mod memory;
mod redis_cache;

use std::time::Duration;

use crate::domain::{AirportCode, Trip};
use crate::error::TripError;
use crate::gateway::{TripCache, TripSource};

pub use memory::{DEFAULT_MAX_CAPACITY, MemoryTripCache};
pub use redis_cache::RedisTripCache;

/// TTL applied to cached offers when none is configured.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;

/// Cache key for the offers on a route.
pub fn trips_cache_key(origin: AirportCode, destination: AirportCode) -> String {
    format!("trp-{origin}-{destination}")
}

/// Parse a configured TTL in seconds.
///
/// Absent or unparsable values fall back to [`DEFAULT_CACHE_TTL_SECS`].
pub fn parse_cache_ttl(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_CACHE_TTL_SECS)
}

/// Expiry to request from the cache store. Zero means no expiry.
fn ttl_duration(ttl_secs: u64) -> Option<Duration> {
    (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs))
}

/// Read the cached offers for `key`, treating any failure as a miss.
///
/// An empty cached list is a hit.
pub async fn get_cached_trips(cache: &dyn TripCache, key: &str) -> Option<Vec<Trip>> {
    let raw = match cache.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "cache read failed, treating as miss");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(trips) => Some(trips),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding undecodable cache entry");
            None
        }
    }
}

/// Store offers under `key`. Failures are logged, never returned.
async fn put_cached_trips(cache: &dyn TripCache, key: &str, trips: &[Trip], ttl_secs: u64) {
    let value = match serde_json::to_string(trips) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to encode trips for cache");
            return;
        }
    };

    match cache.set(key, &value, ttl_duration(ttl_secs)).await {
        Ok(true) => {}
        Ok(false) => tracing::warn!(key, "cache did not acknowledge write"),
        Err(e) => tracing::warn!(key, error = %e, "cache write failed"),
    }
}

/// Fetch offers for a route, from the cache if possible.
///
/// On a hit the source is not queried. On a miss the source is queried
/// and a successful result is written back with `ttl_secs` before being
/// returned. Source errors propagate unchanged and nothing is cached.
pub async fn fetch_trips(
    cache: &dyn TripCache,
    source: &dyn TripSource,
    origin: AirportCode,
    destination: AirportCode,
    ttl_secs: u64,
) -> Result<Vec<Trip>, TripError> {
    let key = trips_cache_key(origin, destination);

    if let Some(cached) = get_cached_trips(cache, &key).await {
        tracing::debug!(%key, count = cached.len(), "trips cache hit");
        return Ok(cached);
    }

    tracing::debug!(%key, "trips cache miss");
    let trips = source.fetch_trips(origin, destination).await?;

    put_cached_trips(cache, &key, &trips, ttl_secs).await;

    Ok(trips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::CacheError;
    use crate::testing::{CacheWrite, RecordingSource, ScriptedCache, code, trip};

    #[test]
    fn cache_key_format() {
        assert_eq!(trips_cache_key(code("ATL"), code("LAX")), "trp-ATL-LAX");
        assert_eq!(trips_cache_key(code("LAX"), code("ATL")), "trp-LAX-ATL");
    }

    #[test]
    fn ttl_parsing() {
        assert_eq!(parse_cache_ttl(None), 600);
        assert_eq!(parse_cache_ttl(Some("")), 600);
        assert_eq!(parse_cache_ttl(Some("abc")), 600);
        assert_eq!(parse_cache_ttl(Some("-5")), 600);
        assert_eq!(parse_cache_ttl(Some("120")), 120);
        assert_eq!(parse_cache_ttl(Some(" 90 ")), 90);
        assert_eq!(parse_cache_ttl(Some("0")), 0);
    }

    #[test]
    fn zero_ttl_means_no_expiry() {
        assert_eq!(ttl_duration(0), None);
        assert_eq!(ttl_duration(600), Some(Duration::from_secs(600)));
    }

    #[tokio::test]
    async fn hit_skips_source() {
        let cached = vec![trip("a", 10.0, 1.0), trip("b", 5.0, 2.0)];
        let cache = ScriptedCache::holding(Some(&serde_json::to_string(&cached).unwrap()));
        let source = RecordingSource::returning(vec![trip("fresh", 1.0, 1.0)]);

        let trips = fetch_trips(&cache, &source, code("ATL"), code("LAX"), 600)
            .await
            .unwrap();

        assert_eq!(trips, cached);
        assert_eq!(source.call_count(), 0);
        assert!(cache.writes().is_empty());
        assert_eq!(*cache.reads.lock().unwrap(), ["trp-ATL-LAX"]);
    }

    #[tokio::test]
    async fn empty_cached_list_is_a_hit() {
        let cache = ScriptedCache::holding(Some("[]"));
        let source = RecordingSource::returning(vec![trip("fresh", 1.0, 1.0)]);

        let trips = fetch_trips(&cache, &source, code("ATL"), code("LAX"), 600)
            .await
            .unwrap();

        assert!(trips.is_empty());
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn miss_fetches_and_populates() {
        let fresh = vec![trip("a", 10.0, 1.0)];
        let cache = ScriptedCache::empty();
        let source = RecordingSource::returning(fresh.clone());

        let trips = fetch_trips(&cache, &source, code("ATL"), code("LAX"), 600)
            .await
            .unwrap();

        assert_eq!(trips, fresh);
        assert_eq!(*source.calls.lock().unwrap(), [(code("ATL"), code("LAX"))]);
        assert_eq!(
            cache.writes(),
            [CacheWrite {
                key: "trp-ATL-LAX".to_string(),
                value: serde_json::to_string(&fresh).unwrap(),
                ttl: Some(Duration::from_secs(600)),
            }]
        );
    }

    #[tokio::test]
    async fn configured_ttl_is_passed_through() {
        let cache = ScriptedCache::empty();
        let source = RecordingSource::returning(vec![]);

        fetch_trips(&cache, &source, code("ATL"), code("LAX"), 42)
            .await
            .unwrap();

        assert_eq!(cache.writes()[0].ttl, Some(Duration::from_secs(42)));
    }

    #[tokio::test]
    async fn undecodable_entry_falls_through() {
        for corrupt in ["not json", "{\"trips\": []}", "null", "[{\"id\": 1}]"] {
            let fresh = vec![trip("a", 10.0, 1.0)];
            let cache = ScriptedCache::holding(Some(corrupt));
            let source = RecordingSource::returning(fresh.clone());

            let trips = fetch_trips(&cache, &source, code("ATL"), code("LAX"), 600)
                .await
                .unwrap();

            assert_eq!(trips, fresh, "entry {corrupt:?}");
            assert_eq!(source.call_count(), 1);
            assert_eq!(cache.writes().len(), 1);
        }
    }

    #[tokio::test]
    async fn read_failure_falls_through() {
        let cache = ScriptedCache::failing_reads();
        let source = RecordingSource::returning(vec![trip("a", 1.0, 1.0)]);

        let trips = fetch_trips(&cache, &source, code("ATL"), code("LAX"), 600)
            .await
            .unwrap();

        assert_eq!(trips.len(), 1);
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn write_failure_is_not_fatal() {
        let fresh = vec![trip("a", 1.0, 1.0)];
        let source = RecordingSource::returning(fresh.clone());

        for result in [Ok(false), Err(CacheError::new("connection reset"))] {
            let cache = ScriptedCache::empty().with_write_result(result);
            let trips = fetch_trips(&cache, &source, code("ATL"), code("LAX"), 600)
                .await
                .unwrap();
            assert_eq!(trips, fresh);
        }
    }

    #[tokio::test]
    async fn source_error_propagates_without_caching() {
        for err in [
            TripError::NotFound("no trips found from ATL to LAX".into()),
            TripError::Server("Unable to fetch trips".into()),
        ] {
            let cache = ScriptedCache::empty();
            let source = RecordingSource::failing(err.clone());

            let result = fetch_trips(&cache, &source, code("ATL"), code("LAX"), 600).await;

            assert_eq!(result, Err(err));
            assert!(cache.writes().is_empty());
        }
    }
}
