//! Saving, listing and deleting a user's trips.

use serde_json::Value;

use crate::domain::Trip;
use crate::error::{TripError, ValidationError};
use crate::gateway::TripRepository;
use crate::validate::{is_non_empty_string, is_valid_trip};

/// Validate and store a trip.
///
/// `trip` is untrusted input; nothing reaches the repository unless it
/// passes [`is_valid_trip`]. A duplicate id surfaces as
/// [`TripError::Conflict`].
pub async fn save_trip(trip: &Value, repository: &dyn TripRepository) -> Result<Trip, TripError> {
    if !is_valid_trip(trip) {
        return Err(ValidationError::InvalidTrip.into());
    }

    let trip: Trip =
        serde_json::from_value(trip.clone()).map_err(|_| ValidationError::InvalidTrip)?;

    Ok(repository.save(trip).await?)
}

/// All saved trips.
pub async fn list_saved_trips(repository: &dyn TripRepository) -> Result<Vec<Trip>, TripError> {
    Ok(repository.find_all().await?)
}

/// Delete the saved trip with `id`.
///
/// Returns `false` if no such trip was stored.
pub async fn delete_trip(id: &str, repository: &dyn TripRepository) -> Result<bool, TripError> {
    if !is_non_empty_string(id) {
        return Err(ValidationError::InvalidId.into());
    }

    Ok(repository.delete_by_id(id).await?)
}
