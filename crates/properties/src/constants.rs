//! Fixed values shared across the crate.

/// Prefix marking a build property that must also be published as a system property.
///
/// `systemProp.http.proxyHost=proxy` publishes `http.proxyHost=proxy`.
pub const SYSTEM_PROP_PREFIX: &str = "systemProp.";

/// Panic message raised when properties are read before the first successful load.
pub const NOT_LOADED_MESSAGE: &str = "Build properties have not been loaded yet.";
