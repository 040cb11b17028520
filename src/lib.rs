//! Named-logger registry library.
//!
//! ```no_run
//! use std::sync::Arc;
//! use unilog::{ConsoleSink, Registry, Severity};
//!
//! let registry = Registry::with_sink(Arc::new(ConsoleSink::new()));
//! let log = registry.get_logger("net");
//! log.set_level(Severity::Info);
//! log.info("connected");
//! ```

pub mod config;
pub mod logger;
pub mod observability;
pub mod registry;
pub mod sink;

pub use config::LoggingConfig;
pub use logger::{sid, short_id, LogError, Logger, LoggerDefaults, Severity};
pub use registry::{get_logger, Registry};
pub use sink::{CallbackSink, ConsoleSink, LogSink, MemorySink, Route, TracingSink};
