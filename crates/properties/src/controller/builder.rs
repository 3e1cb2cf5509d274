//! Builder for `DefaultPropertiesController`.

use std::sync::Arc;

use super::DefaultPropertiesController;
use crate::layout::BuildLayout;
use crate::loader::PropertiesLoader;
use crate::system_properties::SystemPropertySink;

/// Configures a `DefaultPropertiesController` before it is created.
///
/// Without a sink, projected system properties go to the process-wide store.
pub struct ControllerBuilder {
    layout: BuildLayout,
    loader: Box<dyn PropertiesLoader>,
    sink: Option<Arc<dyn SystemPropertySink>>,
}

impl ControllerBuilder {
    pub fn new(layout: BuildLayout, loader: Box<dyn PropertiesLoader>) -> Self {
        Self {
            layout,
            loader,
            sink: None,
        }
    }

    /// Send projected system properties to `sink` instead of the process-wide store.
    pub fn with_system_property_sink(mut self, sink: Arc<dyn SystemPropertySink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replace the build layout.
    pub fn with_layout(mut self, layout: BuildLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn build(self) -> DefaultPropertiesController {
        DefaultPropertiesController::from_parts(self.layout, self.loader, self.sink)
    }
}
