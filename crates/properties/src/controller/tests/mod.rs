//! Tests for the properties controller lifecycle.
//!
//! Responsibilities:
//! - Test use-before-load detection and post-load lookups.
//! - Test load-once semantics, projection, concurrency, and loader failures.
//!
//! Invariants:
//! - Tests project into a `RecordingSink`, never the process-wide store,
//!   unless they are marked `#[serial]`.

use std::sync::Arc;

use crate::controller::DefaultPropertiesController;
use crate::layout::BuildLayout;
use crate::test_util::{RecordingSink, StubLoader};


/// Build an unloaded controller over `loader` that records projections into the returned sink.
pub fn recording_controller(loader: StubLoader) -> (DefaultPropertiesController, RecordingSink) {
    let sink = RecordingSink::default();
    let controller = DefaultPropertiesController::builder(BuildLayout::new("/work/app"), loader)
        .with_system_property_sink(Arc::new(sink.clone()))
        .build();
    (controller, sink)
}
