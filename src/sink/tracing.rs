//! Sink that forwards into the `tracing` ecosystem.
//!
//! Verbose has no `tracing` counterpart; it is emitted at `DEBUG` and told
//! apart from Debug by the `severity` field.

use super::{LogSink, Record};
use crate::logger::Severity;

/// Emits each record as a `tracing` event with `logger` and `severity` fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, record: &Record<'_>) {
        let logger = record.logger;
        let severity = record.severity.name();
        let line = record.line;
        match record.severity {
            Severity::Debug | Severity::Verbose => {
                ::tracing::debug!(logger, severity, "{}", line)
            }
            Severity::Info => ::tracing::info!(logger, severity, "{}", line),
            Severity::Warn => ::tracing::warn!(logger, severity, "{}", line),
            Severity::Error | Severity::Off => ::tracing::error!(logger, severity, "{}", line),
        }
    }
}
