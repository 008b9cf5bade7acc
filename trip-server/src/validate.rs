//! Predicates over untrusted input.
//!
//! None of these fail: each answers whether a value can be narrowed to
//! the corresponding domain type, and callers decide what to raise.

use serde_json::Value;

use crate::domain::{AirportCode, SortingStrategy, TripType, is_non_negative_finite};

/// True iff `value` is exactly one of the supported airport codes.
pub fn is_valid_airport_code(value: &str) -> bool {
    AirportCode::parse(value).is_ok()
}

/// True iff `value` is exactly `"cheapest"` or `"fastest"`.
pub fn is_valid_sorting_strategy(value: &str) -> bool {
    value.parse::<SortingStrategy>().is_ok()
}

/// True iff `value` is a non-empty string.
pub fn is_non_empty_string(value: &str) -> bool {
    !value.is_empty()
}

/// True iff `value` is a JSON object carrying every trip field with a
/// valid value. Unknown extra fields are ignored.
pub fn is_valid_trip(value: &Value) -> bool {
    let Some(fields) = value.as_object() else {
        return false;
    };

    let str_field = |name: &str| fields.get(name).and_then(Value::as_str);
    let num_field = |name: &str| fields.get(name).and_then(Value::as_f64);

    str_field("origin").is_some_and(is_valid_airport_code)
        && str_field("destination").is_some_and(is_valid_airport_code)
        && num_field("cost").is_some_and(is_non_negative_finite)
        && num_field("duration").is_some_and(is_non_negative_finite)
        && str_field("type").is_some_and(|t| t.parse::<TripType>().is_ok())
        && str_field("id").is_some_and(is_non_empty_string)
        && str_field("display_name").is_some_and(is_non_empty_string)
}
