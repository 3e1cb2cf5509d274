//! Resolved build property sets.
//!
//! Responsibilities:
//! - Define the `PropertySet` capability (`find`, `merge_properties`).
//! - Provide `ResolvedProperties`, the immutable map a loader hands back.
//!
//! Does NOT handle:
//! - Reading properties from disk or the environment (see the `PropertiesLoader` trait).
//! - Lifecycle or load-once semantics (see `controller`).
//!
//! Invariants:
//! - A `ResolvedProperties` never changes after construction.
//! - `merge_properties` never mutates the receiver; on key collision the overrides win.

use std::collections::HashMap;
use std::collections::hash_map;

/// Read access to a resolved set of build properties.
pub trait PropertySet: Send + Sync {
    /// Returns the value stored for `name`, if any.
    fn find(&self, name: &str) -> Option<String>;

    /// Returns the properties merged with `overrides`.
    ///
    /// Keys present in either map are included; on collision the value from
    /// `overrides` wins.
    fn merge_properties(&self, overrides: &HashMap<String, String>) -> HashMap<String, String>;
}

/// A fully resolved, immutable mapping from property name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedProperties {
    values: HashMap<String, String>,
}

impl ResolvedProperties {
    /// Wrap an already resolved map.
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Borrow the value for `name` without cloning it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all entries in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.values.iter()
    }
}

impl PropertySet for ResolvedProperties {
    fn find(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }

    fn merge_properties(&self, overrides: &HashMap<String, String>) -> HashMap<String, String> {
        let mut merged = self.values.clone();
        merged.extend(
            overrides
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        merged
    }
}

impl From<HashMap<String, String>> for ResolvedProperties {
    fn from(values: HashMap<String, String>) -> Self {
        Self::new(values)
    }
}

impl<K, V> FromIterator<(K, V)> for ResolvedProperties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a ResolvedProperties {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
