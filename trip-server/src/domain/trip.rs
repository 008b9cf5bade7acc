//! Trip offers and the orderings users can ask for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AirportCode;

/// Mode of transport for a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Flight,
    Train,
    Car,
}

impl TripType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::Flight => "flight",
            TripType::Train => "train",
            TripType::Car => "car",
        }
    }
}

/// Error returned when parsing an unknown trip type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown trip type: {0:?}")]
pub struct UnknownTripType(String);

impl FromStr for TripType {
    type Err = UnknownTripType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flight" => Ok(TripType::Flight),
            "train" => Ok(TripType::Train),
            "car" => Ok(TripType::Car),
            other => Err(UnknownTripType(other.to_string())),
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trip offer between two airports.
///
/// Offers come either from the upstream trip API (never persisted) or
/// from a user saving one, in which case `id` is its key in the store.
/// The wire form uses `type` for [`Trip::trip_type`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub origin: AirportCode,
    pub destination: AirportCode,
    /// Price of the trip. Finite and non-negative for valid trips.
    pub cost: f64,
    /// Travel time. Finite and non-negative for valid trips.
    pub duration: f64,
    #[serde(rename = "type")]
    pub trip_type: TripType,
    pub id: String,
    pub display_name: String,
}

pub(crate) fn is_non_negative_finite(n: f64) -> bool {
    n.is_finite() && n >= 0.0
}

/// How to order a list of trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortingStrategy {
    /// Ascending by cost.
    Cheapest,
    /// Ascending by duration.
    Fastest,
}

impl SortingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortingStrategy::Cheapest => "cheapest",
            SortingStrategy::Fastest => "fastest",
        }
    }
}

/// Error returned when parsing an unknown sorting strategy token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sorting strategy: {0:?}")]
pub struct UnknownSortingStrategy(pub String);

impl FromStr for SortingStrategy {
    type Err = UnknownSortingStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cheapest" => Ok(SortingStrategy::Cheapest),
            "fastest" => Ok(SortingStrategy::Fastest),
            other => Err(UnknownSortingStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for SortingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
