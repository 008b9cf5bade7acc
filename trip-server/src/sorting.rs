//! Trip ordering strategies.
//!
//! Every sort returns a fresh `Vec` and leaves its input untouched. Sorts
//! are stable, so trips with equal keys keep their relative order.

use crate::domain::{SortingStrategy, Trip};
use crate::error::TripError;

/// A resolved ordering over a list of trips.
pub type SortingFunction = fn(&[Trip]) -> Vec<Trip>;

/// Sort trips by ascending cost.
pub fn sort_by_cheapest(trips: &[Trip]) -> Vec<Trip> {
    let mut sorted = trips.to_vec();
    sorted.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    sorted
}

/// Sort trips by ascending duration.
pub fn sort_by_fastest(trips: &[Trip]) -> Vec<Trip> {
    let mut sorted = trips.to_vec();
    sorted.sort_by(|a, b| a.duration.total_cmp(&b.duration));
    sorted
}

impl SortingStrategy {
    /// The sorting function implementing this strategy.
    pub fn sorting_function(&self) -> SortingFunction {
        match self {
            SortingStrategy::Cheapest => sort_by_cheapest,
            SortingStrategy::Fastest => sort_by_fastest,
        }
    }
}

/// Resolve a strategy token to its sorting function.
///
/// Tokens are expected to have been validated already; an unknown token
/// here is reported as [`TripError::UnsupportedStrategy`].
pub fn sorting_function(token: &str) -> Result<SortingFunction, TripError> {
    token
        .parse::<SortingStrategy>()
        .map(|strategy| strategy.sorting_function())
        .map_err(|_| TripError::UnsupportedStrategy(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AirportCode, TripType};

    fn trip(id: &str, cost: f64, duration: f64) -> Trip {
        Trip {
            origin: AirportCode::parse("ATL").unwrap(),
            destination: AirportCode::parse("LAX").unwrap(),
            cost,
            duration,
            trip_type: TripType::Flight,
            id: id.to_string(),
            display_name: format!("trip {id}"),
        }
    }

    fn ids(trips: &[Trip]) -> Vec<&str> {
        trips.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn cheapest_orders_by_cost() {
        let trips = vec![trip("a", 300.0, 1.0), trip("b", 100.0, 3.0), trip("c", 200.0, 2.0)];
        assert_eq!(ids(&sort_by_cheapest(&trips)), ["b", "c", "a"]);
    }

    #[test]
    fn fastest_orders_by_duration() {
        let trips = vec![trip("a", 300.0, 5.0), trip("b", 100.0, 3.0), trip("c", 200.0, 4.0)];
        assert_eq!(ids(&sort_by_fastest(&trips)), ["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let trips = vec![trip("a", 100.0, 1.0), trip("b", 50.0, 1.0), trip("c", 100.0, 1.0)];
        assert_eq!(ids(&sort_by_cheapest(&trips)), ["b", "a", "c"]);
        assert_eq!(ids(&sort_by_fastest(&trips)), ["a", "b", "c"]);
    }

    #[test]
    fn input_is_not_modified() {
        let trips = vec![trip("a", 300.0, 1.0), trip("b", 100.0, 3.0)];
        let before = trips.clone();
        let _ = sort_by_cheapest(&trips);
        let _ = sort_by_fastest(&trips);
        assert_eq!(trips, before);
    }

    #[test]
    fn empty_list() {
        assert!(sort_by_cheapest(&[]).is_empty());
        assert!(sort_by_fastest(&[]).is_empty());
    }

    #[test]
    fn resolve_known_tokens() {
        let trips = vec![trip("a", 300.0, 1.0), trip("b", 100.0, 3.0)];

        let cheapest = sorting_function("cheapest").unwrap();
        assert_eq!(ids(&cheapest(&trips)), ["b", "a"]);

        let fastest = sorting_function("fastest").unwrap();
        assert_eq!(ids(&fastest(&trips)), ["a", "b"]);
    }

    #[test]
    fn resolve_unknown_token() {
        assert!(matches!(
            sorting_function("slowest"),
            Err(TripError::UnsupportedStrategy(token)) if token == "slowest"
        ));
    }
}
