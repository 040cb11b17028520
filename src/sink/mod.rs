//! Output sinks.
//!
//! # Data Flow
//! ```text
//! Logger::log
//!     → threshold check
//!     → Template::render
//!     → Record { logger, severity, route, line }
//!     → LogSink::emit
//!         → console.rs  (stdout)
//!         → callback.rs (host-provided closure)
//!         → tracing.rs  (tracing events)
//!         → memory.rs   (captured in memory)
//! ```
//!
//! # Design Decisions
//! - Sinks receive finished text; all formatting happens in the logger
//! - The sink is chosen when the registry is built, never per call
//! - `Route` collapses severities into the three channels most hosts expose

pub mod callback;
pub mod console;
pub mod memory;
pub mod tracing;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::logger::Severity;

pub use callback::CallbackSink;
pub use console::ConsoleSink;
pub use memory::MemorySink;
pub use self::tracing::TracingSink;

/// Coarse output channel for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Info,
    Warn,
    Error,
}

/// A rendered log line on its way to a sink.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    /// Name of the emitting logger.
    pub logger: &'a str,
    pub severity: Severity,
    pub route: Route,
    /// Fully rendered line.
    pub line: &'a str,
}

/// Destination for rendered log lines.
pub trait LogSink: Send + Sync {
    fn emit(&self, record: &Record<'_>);
}

/// Sinks selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Console,
    Tracing,
}

/// Build the sink named by `kind`.
pub fn from_kind(kind: SinkKind) -> Arc<dyn LogSink> {
    match kind {
        SinkKind::Console => Arc::new(ConsoleSink::new()),
        SinkKind::Tracing => Arc::new(TracingSink),
    }
}
