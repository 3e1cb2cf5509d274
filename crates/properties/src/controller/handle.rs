//! Stable handle over the controller's current state.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use super::state::PropertyState;
use crate::constants::NOT_LOADED_MESSAGE;
use crate::properties::{PropertySet, ResolvedProperties};

/// Handle to the build properties that stays valid across the load.
///
/// Every call reads the controller's state afresh. Clones share that state.
///
/// # Panics
///
/// `find` and `merge_properties` panic if the properties have not been loaded yet.
#[derive(Clone)]
pub struct SharedProperties {
    state: Arc<RwLock<PropertyState>>,
}

impl SharedProperties {
    pub(super) fn new(state: PropertyState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_loaded()
    }

    /// Whether both handles read the same controller state.
    #[cfg(test)]
    pub(super) fn same_state(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    // The state is only replaced after a successful load, so a poisoned lock
    // still holds a consistent value.
    pub(super) fn write_state(&self) -> RwLockWriteGuard<'_, PropertyState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn current(&self) -> Arc<ResolvedProperties> {
        let properties = self
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .properties();
        match properties {
            Some(properties) => properties,
            None => panic!("{NOT_LOADED_MESSAGE}"),
        }
    }
}

impl PropertySet for SharedProperties {
    fn find(&self, name: &str) -> Option<String> {
        self.current().find(name)
    }

    fn merge_properties(&self, overrides: &HashMap<String, String>) -> HashMap<String, String> {
        self.current().merge_properties(overrides)
    }
}

impl std::fmt::Debug for SharedProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("SharedProperties")
            .field("state", &*state)
            .finish()
    }
}
