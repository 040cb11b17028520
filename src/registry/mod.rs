//! Logger registry.
//!
//! # Data Flow
//! ```text
//! get_logger(name)
//!     → existing entry?  → shared Arc<Logger>
//!     → otherwise        → Logger::new(name, defaults, sink), inserted atomically
//!
//! setup_levels(name → level name)
//!     → get_logger(name).set_level(Severity::from_name(level))
//! ```
//!
//! # Design Decisions
//! - One instance per name; lookups return the same `Arc`
//! - Registries are explicit values; `global()` is a convenience for binaries
//! - `reset` swaps the whole map, so tests can start from a clean slate

pub mod global;
#[allow(clippy::module_inception)]
pub mod registry;

pub use global::{get_logger, global, init_global};
pub use registry::Registry;
