//! Capabilities the use cases consume.
//!
//! Concrete implementations live in [`crate::upstream`], [`crate::cache`]
//! and [`crate::store`]. Implementations are shared across concurrent
//! requests behind an `Arc`, so all methods take `&self`.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{AirportCode, Trip};
use crate::error::{INTERNAL_ERROR_MESSAGE, TripError};

/// A source of fresh trip offers.
#[async_trait]
pub trait TripSource: Send + Sync {
    /// Fetch offers for a route.
    ///
    /// Fails with [`TripError::NotFound`] when the source has no such
    /// route and [`TripError::Server`] for anything else.
    async fn fetch_trips(
        &self,
        origin: AirportCode,
        destination: AirportCode,
    ) -> Result<Vec<Trip>, TripError>;
}

/// Error from a cache store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cache error: {message}")]
pub struct CacheError {
    pub message: String,
}

impl CacheError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A string key/value cache with optional expiry.
#[async_trait]
pub trait TripCache: Send + Sync {
    /// Read a value. `Ok(None)` means nothing is stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store a value, expiring after `ttl` if given.
    ///
    /// Returns whether the store acknowledged the write.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>)
    -> Result<bool, CacheError>;
}

/// Error from a trip repository.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// A trip with this id is already stored
    #[error("a trip with id \"{0}\" already exists")]
    DuplicateId(String),

    /// The backing store failed
    #[error("repository error: {0}")]
    Backend(String),
}

impl From<RepositoryError> for TripError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateId(_) => TripError::Conflict(err.to_string()),
            RepositoryError::Backend(_) => {
                tracing::error!(error = %err, "trip repository failed");
                TripError::Server(INTERNAL_ERROR_MESSAGE.to_string())
            }
        }
    }
}

/// Persistent storage for trips saved by users.
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Store a trip. Fails with [`RepositoryError::DuplicateId`] if its id
    /// is already present.
    async fn save(&self, trip: Trip) -> Result<Trip, RepositoryError>;

    /// All stored trips.
    async fn find_all(&self) -> Result<Vec<Trip>, RepositoryError>;

    /// Remove the trip with this id. Returns whether a trip was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_map_to_trip_errors() {
        let err = TripError::from(RepositoryError::DuplicateId("1234".into()));
        assert_eq!(
            err,
            TripError::Conflict("a trip with id \"1234\" already exists".into())
        );

        let err = TripError::from(RepositoryError::Backend("disk full".into()));
        assert_eq!(err, TripError::Server("Some error occurred".into()));
    }

    #[test]
    fn cache_error_display() {
        let err = CacheError::new("connection refused");
        assert_eq!(err.to_string(), "cache error: connection refused");
    }
}
