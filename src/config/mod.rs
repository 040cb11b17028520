//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoggingConfig (validated)
//!     → Registry::from_config (defaults, sink, levels)
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → apply_levels pushes thresholds into the live registry
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Defaults and sink are fixed when the registry is built; reloads only
//!   touch thresholds
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{DefaultsConfig, LoggingConfig, ObservabilityConfig, SinkConfig};
pub use validation::{validate_config, ValidationError};
pub use watcher::ConfigWatcher;

use crate::registry::Registry;

/// Push the thresholds listed in `config` into `registry`.
pub fn apply_levels(registry: &Registry, config: &LoggingConfig) {
    registry.setup_levels(&config.levels);
    tracing::info!(loggers = config.levels.len(), "Logger levels applied");
}
