//! Domain types for the trip planner.
//!
//! Airport codes enforce their invariant at construction time. Trips are
//! plain values decoded from upstream or user input; see
//! [`crate::validate`] for the checks applied to untrusted input.

mod airport;
mod trip;

pub use airport::{AIRPORT_CODES, AirportCode, InvalidAirportCode};
pub use trip::{
    SortingStrategy, Trip, TripType, UnknownSortingStrategy, UnknownTripType,
};

pub(crate) use trip::is_non_negative_finite;
