//! The two lifecycle states of a properties controller.

use std::path::Path;
use std::sync::Arc;

use crate::layout::BuildLayout;
use crate::loader::{LoadError, PropertiesLoader};
use crate::properties::ResolvedProperties;
use crate::system_properties::{SystemPropertySink, project_system_properties};

pub(super) enum PropertyState {
    /// Holds what is needed to load; answers no lookups.
    ///
    /// The layout only supplies the settings directory; load directories reach
    /// the loader untouched.
    Unloaded {
        layout: BuildLayout,
        loader: Box<dyn PropertiesLoader>,
    },
    /// Holds the snapshot every lookup is answered from.
    Loaded(Arc<ResolvedProperties>),
}

impl PropertyState {
    pub(super) fn unloaded(layout: BuildLayout, loader: Box<dyn PropertiesLoader>) -> Self {
        Self::Unloaded { layout, loader }
    }

    /// The loaded snapshot, or `None` while unloaded.
    pub(super) fn properties(&self) -> Option<Arc<ResolvedProperties>> {
        match self {
            Self::Unloaded { .. } => None,
            Self::Loaded(properties) => Some(Arc::clone(properties)),
        }
    }

    pub(super) fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub(super) fn settings_dir(&self) -> Option<&Path> {
        match self {
            Self::Unloaded { layout, .. } => Some(layout.settings_dir()),
            Self::Loaded(_) => None,
        }
    }

    /// Compute the state that follows a load request.
    ///
    /// Returns `Ok(None)` when already loaded. On success the system properties
    /// have been projected into `sink` and the caller must install the returned state.
    pub(super) fn load(
        &self,
        directory: &Path,
        sink: &dyn SystemPropertySink,
    ) -> Result<Option<Self>, LoadError> {
        match self {
            Self::Loaded(_) => {
                tracing::debug!(
                    directory = %directory.display(),
                    "Build properties already loaded; ignoring load request"
                );
                Ok(None)
            }
            Self::Unloaded { loader, .. } => {
                let loaded = loader.load_from(directory)?;
                let projected = project_system_properties(&loaded, sink);
                tracing::info!(
                    directory = %directory.display(),
                    properties = loaded.len(),
                    projected,
                    "Loaded build properties"
                );
                Ok(Some(Self::Loaded(Arc::new(loaded))))
            }
        }
    }
}

impl std::fmt::Debug for PropertyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unloaded { layout, .. } => f
                .debug_struct("Unloaded")
                .field("layout", layout)
                .finish_non_exhaustive(),
            Self::Loaded(properties) => f
                .debug_struct("Loaded")
                .field("properties", &properties.len())
                .finish(),
        }
    }
}
