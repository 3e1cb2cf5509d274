//! Build properties lifecycle management.
//!
//! This crate owns the single process-wide set of build properties: it is
//! loaded once from a directory through a pluggable loader, answers lookups
//! and merges through a stable handle, and projects `systemProp.` entries
//! into the process-wide system property store.

pub mod constants;
pub mod controller;
mod layout;
mod loader;
mod properties;
pub mod system_properties;

pub use controller::{
    ControllerBuilder, DefaultPropertiesController, PropertiesController, SharedProperties,
};
pub use layout::BuildLayout;
pub use loader::{LoadError, PropertiesLoader};
pub use properties::{PropertySet, ResolvedProperties};
pub use system_properties::{
    GlobalSystemProperties, SystemPropertySink, project_system_properties, system_property,
};

#[cfg(test)]
pub(crate) mod test_util {
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex, OnceLock};

    use crate::{LoadError, PropertiesLoader, ResolvedProperties, SystemPropertySink};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    /// Sink that records every write instead of touching the process-wide store.
    #[derive(Clone, Default)]
    pub struct RecordingSink {
        writes: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl RecordingSink {
        pub fn writes(&self) -> Vec<(String, String)> {
            self.writes.lock().expect("lock poisoned").clone()
        }

        pub fn value_of(&self, key: &str) -> Option<String> {
            self.writes()
                .into_iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v)
        }
    }

    impl SystemPropertySink for RecordingSink {
        fn set_system_property(&self, key: &str, value: &str) {
            self.writes
                .lock()
                .expect("lock poisoned")
                .push((key.to_string(), value.to_string()));
        }
    }

    /// Loader returning a fixed property set and remembering every directory it was asked for.
    #[derive(Clone)]
    pub struct StubLoader {
        properties: ResolvedProperties,
        calls: Arc<AtomicUsize>,
        directories: Arc<Mutex<Vec<PathBuf>>>,
        failures_remaining: Arc<AtomicUsize>,
    }

    impl StubLoader {
        pub fn new<I, K, V>(entries: I) -> Self
        where
            I: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            Self {
                properties: entries.into_iter().collect(),
                calls: Arc::new(AtomicUsize::new(0)),
                directories: Arc::new(Mutex::new(Vec::new())),
                failures_remaining: Arc::new(AtomicUsize::new(0)),
            }
        }

        /// Fail the next `count` loads with an I/O error before succeeding.
        pub fn failing(self, count: usize) -> Self {
            self.failures_remaining.store(count, Ordering::SeqCst);
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn directories(&self) -> Vec<PathBuf> {
            self.directories.lock().expect("lock poisoned").clone()
        }
    }

    impl PropertiesLoader for StubLoader {
        fn load_from(&self, directory: &Path) -> Result<ResolvedProperties, LoadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.directories
                .lock()
                .expect("lock poisoned")
                .push(directory.to_path_buf());

            let should_fail = self
                .failures_remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if should_fail {
                return Err(LoadError::Io {
                    directory: directory.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "stub failure"),
                });
            }

            Ok(self.properties.clone())
        }
    }
}
