//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::Trip;

/// Query for `GET /trip-planner/trips`.
#[derive(Debug, Deserialize)]
pub struct GetTripsQuery {
    /// Origin airport code
    #[serde(default)]
    pub origin: String,

    /// Destination airport code
    #[serde(default)]
    pub destination: String,

    /// "cheapest" or "fastest"
    pub sort_by: Option<String>,
}

/// Body of `POST /trip-planner/my-trip`.
///
/// The trip stays untyped here; validation happens in the use case.
#[derive(Debug, Deserialize)]
pub struct SaveTripRequest {
    #[serde(default)]
    pub trip: Value,
}

/// A single trip.
#[derive(Debug, Serialize, Deserialize)]
pub struct TripResponse {
    pub trip: Trip,
}

/// All saved trips.
#[derive(Debug, Serialize, Deserialize)]
pub struct TripListResponse {
    pub trips: Vec<Trip>,
}

/// Query for `DELETE /trip-planner/my-trip`.
#[derive(Debug, Deserialize)]
pub struct DeleteTripQuery {
    pub id: Option<String>,
}

/// Confirmation message.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
