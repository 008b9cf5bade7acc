//! Mock trip source for running without API access.
//!
//! Loads offer lists from JSON files and serves them as if they were live
//! API responses.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::{AirportCode, Trip};
use crate::error::TripError;
use crate::gateway::TripSource;

use super::error::UpstreamError;

type Route = (AirportCode, AirportCode);

/// Mock trip source that serves data from JSON files.
#[derive(Debug, Clone)]
pub struct MockTripSource {
    /// Pre-loaded offers, keyed by (origin, destination).
    routes: HashMap<Route, Vec<Trip>>,
}

impl MockTripSource {
    /// Create a mock source by loading JSON files from a directory.
    ///
    /// Expects files named `{ORIGIN}-{DESTINATION}.json` (e.g.
    /// `ATL-LAX.json`), each holding an array of trips.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, UpstreamError> {
        let data_dir = data_dir.as_ref();
        let mut routes = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| UpstreamError::ApiError {
            status: 0,
            message: format!("Failed to read mock data directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| UpstreamError::ApiError {
                status: 0,
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| UpstreamError::ApiError {
                    status: 0,
                    message: format!("Invalid filename: {:?}", path),
                })?;

            let route = parse_route(stem).ok_or_else(|| UpstreamError::ApiError {
                status: 0,
                message: format!("Invalid route in filename: {}", stem),
            })?;

            let json = std::fs::read_to_string(&path).map_err(|e| UpstreamError::ApiError {
                status: 0,
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            let trips: Vec<Trip> =
                serde_json::from_str(&json).map_err(|e| UpstreamError::Json {
                    message: format!("Failed to parse {:?}: {}", path, e),
                    body: None,
                })?;

            routes.insert(route, trips);
        }

        if routes.is_empty() {
            return Err(UpstreamError::ApiError {
                status: 0,
                message: format!("No mock route files found in {:?}", data_dir),
            });
        }

        Ok(Self { routes })
    }

    /// Create a mock source from in-memory routes.
    pub fn from_routes(routes: impl IntoIterator<Item = (Route, Vec<Trip>)>) -> Self {
        Self {
            routes: routes.into_iter().collect(),
        }
    }

    /// Get the offers for a route.
    pub fn get_trips(
        &self,
        origin: AirportCode,
        destination: AirportCode,
    ) -> Result<Vec<Trip>, UpstreamError> {
        self.routes
            .get(&(origin, destination))
            .cloned()
            .ok_or_else(|| UpstreamError::RouteNotFound {
                origin: origin.to_string(),
                destination: destination.to_string(),
            })
    }

    /// List available routes in the mock data.
    pub fn available_routes(&self) -> Vec<Route> {
        self.routes.keys().copied().collect()
    }
}

#[async_trait]
impl TripSource for MockTripSource {
    async fn fetch_trips(
        &self,
        origin: AirportCode,
        destination: AirportCode,
    ) -> Result<Vec<Trip>, TripError> {
        Ok(self.get_trips(origin, destination)?)
    }
}

/// Parse `ORIGIN-DESTINATION` into a route.
fn parse_route(stem: &str) -> Option<Route> {
    let (origin, destination) = stem.split_once('-')?;
    Some((
        AirportCode::parse(origin).ok()?,
        AirportCode::parse(destination).ok()?,
    ))
}
