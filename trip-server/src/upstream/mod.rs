//! Upstream trip offer sources.
//!
//! [`HttpTripSource`] queries the third-party trip API; [`MockTripSource`]
//! serves canned offers from JSON files for offline development.

mod client;
mod error;
mod mock;

pub use client::{DEFAULT_MAX_CONCURRENT, DEFAULT_TIMEOUT_SECS, HttpTripSource, TripApiConfig};
pub use error::UpstreamError;
pub use mock::MockTripSource;
