//! Framework-agnostic operations behind the HTTP API.
//!
//! Each use case receives its gateways as trait objects and returns a
//! value or a [`crate::error::TripError`]; none keeps state between calls.

mod persistence;
mod retrieval;

pub use persistence::{delete_trip, list_saved_trips, save_trip};
pub use retrieval::get_sorted_trips;
