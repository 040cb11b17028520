//! Shared utilities for integration testing.

use std::sync::Arc;

use unilog::{LoggerDefaults, MemorySink, Registry};

/// A registry whose loggers write into a shared in-memory sink and carry no
/// timestamp, so emitted lines are deterministic.
pub fn capture_registry() -> (Registry, MemorySink) {
    let sink = MemorySink::new();
    let defaults = LoggerDefaults {
        time_format: None,
        ..LoggerDefaults::default()
    };
    (Registry::new(defaults, Arc::new(sink.clone())), sink)
}
