//! In-progress values of one form.

use std::collections::BTreeMap;

/// Holds the raw input of exactly one form, keyed by field name.
///
/// No validation happens here; values are whatever the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStore {
    names: &'static [&'static str],
    values: BTreeMap<&'static str, String>,
}

impl FieldStore {
    /// Create a store with every field empty.
    pub fn new(names: &'static [&'static str]) -> Self {
        let values = names.iter().map(|name| (*name, String::new())).collect();
        Self { names, values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Replace one field's value. Returns `false` if the form has no such field.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => {
                tracing::warn!(field = name, "Ignoring value for unknown form field");
                false
            }
        }
    }

    /// Restore every field to empty.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    /// (name, value) pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.names
            .iter()
            .map(move |name| (*name, self.get(name).unwrap_or_default()))
    }
}
