//! Loader collaborator contract.
//!
//! Responsibilities:
//! - Define `PropertiesLoader`, the only way the controller obtains properties.
//! - Define `LoadError`, returned unchanged to `load_from` callers.
//!
//! Does NOT handle:
//! - File formats, environment variables, or precedence between property sources.
//!   Implementations own all of that and hand back a fully resolved set.
//!
//! Invariants:
//! - A loader is invoked at most once per successful controller load.
//! - A failed load leaves no trace in the controller; the loader may be called again.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::properties::ResolvedProperties;

/// Errors a loader can report while resolving properties.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read build properties from {directory}")]
    Io {
        directory: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid build property '{key}': {message}")]
    Invalid { key: String, message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Resolves every property source for a directory into one property set.
pub trait PropertiesLoader: Send + Sync {
    /// Load the fully merged properties for `directory`.
    fn load_from(&self, directory: &Path) -> Result<ResolvedProperties, LoadError>;
}

impl<L: PropertiesLoader + ?Sized> PropertiesLoader for Box<L> {
    fn load_from(&self, directory: &Path) -> Result<ResolvedProperties, LoadError> {
        (**self).load_from(directory)
    }
}
