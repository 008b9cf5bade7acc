//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::DEFAULT_CACHE_TTL_SECS;
use crate::gateway::{TripCache, TripRepository, TripSource};

/// Shared application state.
///
/// Holds the gateways every handler needs; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Where trip offers come from
    pub source: Arc<dyn TripSource>,

    /// Cache in front of the source
    pub cache: Arc<dyn TripCache>,

    /// Saved trips
    pub repository: Arc<dyn TripRepository>,

    /// TTL for cached offers in seconds
    pub cache_ttl_secs: u64,
}

impl AppState {
    /// Create a new app state with the default cache TTL.
    pub fn new(
        source: impl TripSource + 'static,
        cache: impl TripCache + 'static,
        repository: impl TripRepository + 'static,
    ) -> Self {
        Self {
            source: Arc::new(source),
            cache: Arc::new(cache),
            repository: Arc::new(repository),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}
