//! Retrieval of offers for a route, optionally sorted.

use crate::cache::fetch_trips;
use crate::domain::{AirportCode, Trip};
use crate::error::{TripError, ValidationError};
use crate::gateway::{TripCache, TripSource};
use crate::sorting::sorting_function;
use crate::validate::is_valid_sorting_strategy;

/// Get the offers from `origin` to `destination`, ordered by `sort_by`.
///
/// Inputs are validated before any gateway is touched. Without `sort_by`
/// the offers are returned in source (or cache) order.
pub async fn get_sorted_trips(
    origin: &str,
    destination: &str,
    sort_by: Option<&str>,
    source: &dyn TripSource,
    cache: &dyn TripCache,
    cache_ttl_secs: u64,
) -> Result<Vec<Trip>, TripError> {
    let (Ok(origin), Ok(destination)) = (AirportCode::parse(origin), AirportCode::parse(destination))
    else {
        return Err(ValidationError::MissingEndpoint.into());
    };

    if let Some(token) = sort_by
        && !is_valid_sorting_strategy(token)
    {
        return Err(ValidationError::InvalidSortingStrategy(token.to_string()).into());
    }

    let trips = fetch_trips(cache, source, origin, destination, cache_ttl_secs).await?;

    match sort_by {
        None => Ok(trips),
        Some(token) => {
            let sort = sorting_function(token)?;
            Ok(sort(&trips))
        }
    }
}
