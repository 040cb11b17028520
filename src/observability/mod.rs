//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Registry, config loader, watcher produce:
//!     → tracing events (logger creation, resets, reloads)
//!
//! Consumers:
//!     → logging.rs installs the fmt subscriber on stderr
//! ```
//!
//! # Design Decisions
//! - The crate's own diagnostics go through `tracing`, never through its loggers
//! - Diagnostics write to stderr so command output on stdout stays parseable

pub mod logging;

pub use logging::init_logging;
