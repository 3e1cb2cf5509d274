//! Process-wide system properties and the projection into them.
//!
//! Responsibilities:
//! - Hold the process-wide system property store.
//! - Expose the narrow write interface (`SystemPropertySink`) the controller projects through.
//! - Project `systemProp.`-prefixed build properties into a sink.
//!
//! Does NOT handle:
//! - Deciding when projection happens (the controller projects once, on first load).
//! - Exporting system properties into the OS environment.
//!
//! Invariants:
//! - Every write to the store holds its write lock, so readers of a key see the old
//!   or the new value, never a partial one.
//! - Projection reads the loaded values exactly (merged with an empty override map).
//! - A key equal to the bare prefix is never written; it would produce an empty name.

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

use crate::constants::SYSTEM_PROP_PREFIX;
use crate::properties::{PropertySet, ResolvedProperties};

static SYSTEM_PROPERTIES: LazyLock<RwLock<HashMap<String, String>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Write-only target of the system property projection.
pub trait SystemPropertySink: Send + Sync {
    fn set_system_property(&self, key: &str, value: &str);
}

/// Sink writing into the process-wide system property store.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalSystemProperties;

impl SystemPropertySink for GlobalSystemProperties {
    fn set_system_property(&self, key: &str, value: &str) {
        set_system_property(key, value);
    }
}

/// Read a process-wide system property.
pub fn system_property(key: &str) -> Option<String> {
    SYSTEM_PROPERTIES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(key)
        .cloned()
}

/// Snapshot of every process-wide system property.
pub fn system_properties() -> HashMap<String, String> {
    SYSTEM_PROPERTIES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Set a process-wide system property, returning the previous value.
pub fn set_system_property(key: &str, value: &str) -> Option<String> {
    SYSTEM_PROPERTIES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key.to_string(), value.to_string())
}

/// Remove a process-wide system property, returning the previous value.
pub fn remove_system_property(key: &str) -> Option<String> {
    SYSTEM_PROPERTIES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(key)
}

/// Publish every `systemProp.`-prefixed property through `sink` with the prefix stripped.
///
/// Returns the number of properties written.
pub fn project_system_properties(
    properties: &ResolvedProperties,
    sink: &dyn SystemPropertySink,
) -> usize {
    let mut projected = 0;
    for (key, value) in properties.merge_properties(&HashMap::new()) {
        let Some(name) = key.strip_prefix(SYSTEM_PROP_PREFIX) else {
            continue;
        };
        if name.is_empty() {
            tracing::warn!(
                key = %key,
                "Ignoring build property with an empty system property name"
            );
            continue;
        }
        tracing::debug!(name = %name, "Setting system property from build properties");
        sink.set_system_property(name, &value);
        projected += 1;
    }
    projected
}
