//! Process-wide registry for application entry points.
//!
//! Library code should take a `&Registry`; this instance exists so a binary
//! can configure logging once and hand out loggers by name.

use std::sync::{Arc, OnceLock};

use super::Registry;
use crate::logger::Logger;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry. Built with console output and standard
/// defaults unless [`init_global`] ran first.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::default)
}

/// Install `registry` as the process-wide instance.
///
/// Fails, handing the registry back, if one is already installed.
pub fn init_global(registry: Registry) -> Result<(), Registry> {
    GLOBAL.set(registry)
}

/// Look up a logger in the process-wide registry.
pub fn get_logger(name: &str) -> Arc<Logger> {
    global().get_logger(name)
}
