//! # Beverage Menu
//!
//! The immutable menu table the order handler validates against. The table
//! is constructed once at process start and passed into the components that
//! need it; nothing reads it as ambient global state.

use serde_json::{json, Value};

use crate::error::{FulfillmentError, Result};
use crate::validation::key_exists;

/// Today's beverage menu: type names mapped to their valid sizes.
///
/// Backed by a JSON object table; key order is preserved, so cards list
/// beverage types and sizes in menu order.
#[derive(Debug, Clone)]
pub struct Menu {
    table: Value,
}

impl Menu {
    /// The menu currently on offer
    pub fn today() -> Self {
        Self {
            table: json!({
                "rulanda": {"size": ["short", "small", "medium", "large"]},
                "chai": {"size": ["small", "short"]},
            }),
        }
    }

    /// Build a menu from a caller-supplied table, validating its shape:
    /// an object whose entries each carry a non-empty `size` string array.
    pub fn from_table(table: Value) -> Result<Self> {
        let entries = table
            .as_object()
            .ok_or_else(|| FulfillmentError::configuration("menu table must be a JSON object"))?;

        for (name, entry) in entries {
            let sizes = entry.get("size").and_then(Value::as_array).ok_or_else(|| {
                FulfillmentError::configuration(format!("menu entry {name} is missing a size list"))
            })?;
            if sizes.is_empty() || sizes.iter().any(|size| !size.is_string()) {
                return Err(FulfillmentError::configuration(format!(
                    "menu entry {name} has an invalid size list"
                )));
            }
        }

        Ok(Self { table })
    }

    /// Whether the menu offers the given beverage type
    pub fn contains_type(&self, name: &str) -> bool {
        key_exists(&Value::from(name), &self.table)
    }

    /// Beverage type names in menu order
    pub fn type_names(&self) -> Vec<String> {
        self.table
            .as_object()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Valid sizes for a beverage type, in menu order; empty for unknown types
    pub fn sizes_for(&self, name: &str) -> Vec<String> {
        self.table
            .get(name)
            .and_then(|entry| entry.get("size"))
            .and_then(Value::as_array)
            .map(|sizes| {
                sizes
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether the given size is valid for the given beverage type
    pub fn has_size(&self, name: &str, size: &str) -> bool {
        match self.table.get(name).and_then(|entry| entry.get("size")) {
            Some(sizes) => key_exists(&Value::from(size), sizes),
            None => false,
        }
    }
}
