//! Airport code types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// The closed set of airports the planner serves.
pub const AIRPORT_CODES: [&str; 50] = [
    "ATL", "PEK", "LAX", "DXB", "HND", "ORD", "LHR", "PVG", "CDG", "DFW", "AMS", "FRA", "IST",
    "CAN", "JFK", "SIN", "DEN", "ICN", "BKK", "SFO", "LAS", "CLT", "MIA", "KUL", "SEA", "MUC",
    "EWR", "MAD", "HKG", "MCO", "PHX", "IAH", "SYD", "MEL", "GRU", "YYZ", "LGW", "BCN", "MAN",
    "BOM", "DEL", "ZRH", "SVO", "DME", "JNB", "ARN", "OSL", "CPH", "HEL", "VIE",
];

/// Error returned when parsing a code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {code:?}")]
pub struct InvalidAirportCode {
    code: String,
}

/// A supported 3-letter IATA airport code.
///
/// Matching is exact: no trimming and no case folding. Any `AirportCode`
/// value is a member of [`AIRPORT_CODES`] by construction.
///
/// # Examples
///
/// ```
/// use trip_server::domain::AirportCode;
///
/// let atl = AirportCode::parse("ATL").unwrap();
/// assert_eq!(atl.as_str(), "ATL");
///
/// // Lowercase is rejected
/// assert!(AirportCode::parse("atl").is_err());
///
/// // Surrounding whitespace is rejected
/// assert!(AirportCode::parse("ATL ").is_err());
///
/// // Well-formed but unsupported codes are rejected
/// assert!(AirportCode::parse("XYZ").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AirportCode(&'static str);

impl AirportCode {
    /// Parse an airport code, accepting only members of the supported set.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        AIRPORT_CODES
            .iter()
            .find(|&&code| code == s)
            .map(|&code| AirportCode(code))
            .ok_or_else(|| InvalidAirportCode { code: s.to_string() })
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl<'de> Deserialize<'de> for AirportCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AirportCode::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.0)
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Lowercase letters are always rejected
        #[test]
        fn lowercase_rejected(s in "[a-z]{3}") {
            prop_assert!(AirportCode::parse(&s).is_err());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,10}") {
            prop_assert!(AirportCode::parse(&s).is_err());
        }

        /// Parsing succeeds exactly for members of the supported set
        #[test]
        fn parses_iff_supported(s in "[A-Z]{3}") {
            let supported = AIRPORT_CODES.contains(&s.as_str());
            prop_assert_eq!(AirportCode::parse(&s).is_ok(), supported);
        }
    }
}
