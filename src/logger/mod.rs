//! Logger subsystem.
//!
//! # Responsibilities
//! - Severity ordering and name lookup
//! - Per-logger threshold, template, timestamp and escalation settings
//! - The write path: filter, render, emit or escalate
//!
//! # Design Decisions
//! - Bad level names never fail; they resolve to a default level
//! - Templates are parsed when set, so writes cannot fail on formatting
//! - Escalation is a returned `LogError`, opt-in per logger

#[allow(clippy::module_inception)]
pub mod logger;
pub mod severity;
pub mod template;

pub use logger::{LogError, Logger, LoggerDefaults};
pub use severity::{Severity, UnknownSeverity, DEFAULT_SEVERITY};
pub use template::{Template, TemplateError, TimeFormat, DEFAULT_FORMAT, DEFAULT_TIME_FORMAT};

/// Length used by [`sid`].
pub const SHORT_ID_LEN: usize = 8;

/// Leading `len` characters of `id`, or `""` when there is no id.
///
/// Used to keep long identifiers readable in log lines. A `len` past the end
/// returns the whole id.
pub fn short_id(id: Option<&str>, len: usize) -> String {
    id.map(|s| s.chars().take(len).collect())
        .unwrap_or_default()
}

/// [`short_id`] with the standard length of 8.
pub fn sid(id: Option<&str>) -> String {
    short_id(id, SHORT_ID_LEN)
}
