//! Lazy, load-once lifecycle of the build properties.
//!
//! Responsibilities:
//! - Hand out a stable `SharedProperties` handle that is valid before and after loading.
//! - Perform the single Unloaded → Loaded transition through the configured loader.
//! - Project `systemProp.` entries into the system property sink during that transition.
//!
//! Does NOT handle:
//! - Reading or merging property sources (delegated to `PropertiesLoader`).
//! - Locating the build directory (callers supply a `BuildLayout`).
//!
//! Invariants / Assumptions:
//! - The state moves from Unloaded to Loaded at most once and never back.
//! - The transition runs under the state's write lock: one loader call, one projection,
//!   and readers see either Unloaded or the complete Loaded set.
//! - Loads after the first successful one are silent no-ops, whatever the directory.
//! - A failed load leaves the controller Unloaded so the caller can retry.
//! - Reading properties while Unloaded is a programming error and panics.

mod builder;
mod handle;
mod state;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::sync::Arc;

use crate::layout::BuildLayout;
use crate::loader::{LoadError, PropertiesLoader};
use crate::system_properties::{GlobalSystemProperties, SystemPropertySink};

pub use builder::ControllerBuilder;
pub use handle::SharedProperties;
use state::PropertyState;

/// Owner of the build properties lifecycle.
pub trait PropertiesController: Send + Sync {
    /// The handle through which properties are read. Its identity never changes.
    fn properties(&self) -> &SharedProperties;

    /// Load properties from `directory` unless they are already loaded.
    fn load_from(&self, directory: &Path) -> Result<(), LoadError>;
}

/// Controller backed by a `PropertiesLoader` and a system property sink.
pub struct DefaultPropertiesController {
    properties: SharedProperties,
    sink: Arc<dyn SystemPropertySink>,
}

impl DefaultPropertiesController {
    /// Create an unloaded controller that projects into the process-wide system properties.
    pub fn new(layout: BuildLayout, loader: impl PropertiesLoader + 'static) -> Self {
        Self::builder(layout, loader).build()
    }

    pub fn builder(
        layout: BuildLayout,
        loader: impl PropertiesLoader + 'static,
    ) -> ControllerBuilder {
        ControllerBuilder::new(layout, Box::new(loader))
    }

    pub(crate) fn from_parts(
        layout: BuildLayout,
        loader: Box<dyn PropertiesLoader>,
        sink: Option<Arc<dyn SystemPropertySink>>,
    ) -> Self {
        Self {
            properties: SharedProperties::new(PropertyState::unloaded(layout, loader)),
            sink: sink.unwrap_or_else(|| Arc::new(GlobalSystemProperties)),
        }
    }

    /// Whether the first successful load has happened.
    pub fn is_loaded(&self) -> bool {
        self.properties.is_loaded()
    }

    /// Load properties from the layout's settings directory unless already loaded.
    pub fn load_from_settings_dir(&self) -> Result<(), LoadError> {
        let mut state = self.properties.write_state();
        let Some(settings_dir) = state.settings_dir().map(Path::to_path_buf) else {
            tracing::debug!("Build properties already loaded; ignoring settings directory load");
            return Ok(());
        };
        self.transition(&mut state, &settings_dir)
    }

    fn transition(&self, state: &mut PropertyState, directory: &Path) -> Result<(), LoadError> {
        let _span =
            tracing::debug_span!("load_build_properties", directory = %directory.display())
                .entered();

        match state.load(directory, self.sink.as_ref()) {
            Ok(Some(next)) => {
                *state = next;
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                tracing::warn!(
                    directory = %directory.display(),
                    error = %e,
                    "Failed to load build properties"
                );
                Err(e)
            }
        }
    }
}

impl PropertiesController for DefaultPropertiesController {
    fn properties(&self) -> &SharedProperties {
        &self.properties
    }

    fn load_from(&self, directory: &Path) -> Result<(), LoadError> {
        let mut state = self.properties.write_state();
        self.transition(&mut state, directory)
    }
}

impl std::fmt::Debug for DefaultPropertiesController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultPropertiesController")
            .field("properties", &self.properties)
            .finish_non_exhaustive()
    }
}
