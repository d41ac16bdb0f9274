//! # Slot Validation Helpers
//!
//! Membership tests over JSON values and slot maps. These never error:
//! anything that is not a recognizable container or value simply fails the
//! test, which the order handler turns into a re-prompt.

use serde_json::{Map, Value};

use crate::constants::{SIZE_WORDS, TEMPERATURE_WORDS};

/// Membership test over JSON containers.
///
/// Arrays match by element equality, objects match by key (string keys
/// only). Null and scalar containers always report absence.
pub fn key_exists(key: &Value, search: &Value) -> bool {
    match search {
        Value::Array(items) => items.iter().any(|item| item == key),
        Value::Object(map) => key.as_str().is_some_and(|name| map.contains_key(name)),
        _ => false,
    }
}

/// Look up a slot value, treating null and empty strings as absent.
pub fn slot_value<'a>(slots: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    slots
        .get(name)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

/// Whether a size value uses one of the recognized size words at all
pub fn is_allowed_size_word(value: &str) -> bool {
    SIZE_WORDS.contains(&value)
}

/// Whether a temperature value is in the accepted set (case-sensitive)
pub fn is_allowed_temperature(value: &str) -> bool {
    TEMPERATURE_WORDS.contains(&value)
}
