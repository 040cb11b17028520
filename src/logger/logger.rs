//! Named logger: filter, format, emit.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use arc_swap::{ArcSwap, ArcSwapOption};
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::logger::severity::{Severity, DEFAULT_SEVERITY};
use crate::logger::template::{LineFields, Template, TemplateError, TimeFormat};
use crate::sink::{LogSink, Record};

/// Failure signalled by a logging call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    /// An Error-level write on a logger with `escalate_errors` set.
    /// Displays as the rendered line, which was not emitted.
    #[error("{line}")]
    Escalated { logger: String, line: String },
}

impl LogError {
    /// The rendered line carried by the failure.
    pub fn line(&self) -> &str {
        match self {
            LogError::Escalated { line, .. } => line,
        }
    }
}

/// Settings applied to loggers when a registry creates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerDefaults {
    pub level: Severity,
    pub format: Template,
    /// `None` disables the timestamp segment.
    pub time_format: Option<TimeFormat>,
    pub escalate_errors: bool,
}

impl Default for LoggerDefaults {
    fn default() -> Self {
        Self {
            level: DEFAULT_SEVERITY,
            format: Template::default(),
            time_format: Some(TimeFormat::default()),
            escalate_errors: false,
        }
    }
}

/// A named logger.
///
/// Configuration fields are independently atomic, so a shared `Arc<Logger>`
/// can be reconfigured from any thread; concurrent writers race with
/// last-write-wins semantics.
pub struct Logger {
    name: String,
    level: AtomicU8,
    format: ArcSwap<Template>,
    time_format: ArcSwapOption<TimeFormat>,
    escalate_errors: AtomicBool,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    /// Create a logger with the given defaults, writing to `sink`.
    pub fn new(name: impl Into<String>, defaults: &LoggerDefaults, sink: Arc<dyn LogSink>) -> Self {
        Self {
            name: name.into(),
            level: AtomicU8::new(defaults.level as u8),
            format: ArcSwap::from_pointee(defaults.format.clone()),
            time_format: ArcSwapOption::from(defaults.time_format.clone().map(Arc::new)),
            escalate_errors: AtomicBool::new(defaults.escalate_errors),
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current threshold.
    pub fn level(&self) -> Severity {
        Severity::from(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: Severity) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// Whether a write at `severity` would pass the threshold.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity != Severity::Off && severity >= self.level()
    }

    /// Current template source.
    pub fn format(&self) -> String {
        self.format.load().as_str().to_string()
    }

    pub fn template(&self) -> Arc<Template> {
        self.format.load_full()
    }

    /// Parse and install a new template. On error the old one stays.
    pub fn set_format(&self, format: &str) -> Result<(), TemplateError> {
        self.set_template(Template::parse(format)?);
        Ok(())
    }

    pub fn set_template(&self, template: Template) {
        self.format.store(Arc::new(template));
    }

    /// Current timestamp pattern, if any.
    pub fn time_format(&self) -> Option<String> {
        (*self.time_format.load())
            .as_ref()
            .map(|f| f.as_str().to_string())
    }

    /// Install a timestamp pattern, or disable timestamps with `None`.
    /// On error the old pattern stays.
    pub fn set_time_format(&self, pattern: Option<&str>) -> Result<(), TemplateError> {
        let parsed = pattern.map(TimeFormat::parse).transpose()?;
        self.time_format.store(parsed.map(Arc::new));
        Ok(())
    }

    pub fn escalate_errors(&self) -> bool {
        self.escalate_errors.load(Ordering::Relaxed)
    }

    pub fn set_escalate_errors(&self, escalate: bool) {
        self.escalate_errors.store(escalate, Ordering::Relaxed);
    }

    /// Render a line for `severity` at the current time, without emitting it.
    pub fn render(&self, severity: Severity, message: &str) -> String {
        self.render_at(severity, message, Utc::now())
    }

    /// Render a line as if written at `at`.
    pub fn render_at(&self, severity: Severity, message: &str, at: DateTime<Utc>) -> String {
        let timestamp = match &*self.time_format.load() {
            Some(f) => f.format(at),
            None => String::new(),
        };

        self.format.load().render(&LineFields {
            timestamp: &timestamp,
            name: &self.name,
            level: severity.name(),
            message,
        })
    }

    /// Write `message` at `severity`.
    ///
    /// Only an Error-level write on an escalating logger returns `Err`; the
    /// line is then carried in the error instead of reaching the sink.
    pub fn log(&self, severity: Severity, message: &str) -> Result<(), LogError> {
        if !self.is_enabled(severity) {
            return Ok(());
        }
        let line = self.render(severity, message);

        if severity == Severity::Error && self.escalate_errors() {
            return Err(LogError::Escalated {
                logger: self.name.clone(),
                line,
            });
        }

        self.sink.emit(&Record {
            logger: &self.name,
            severity,
            route: severity.route(),
            line: &line,
        });
        Ok(())
    }

    pub fn debug(&self, message: &str) {
        self.write(Severity::Debug, message);
    }

    pub fn verbose(&self, message: &str) {
        self.write(Severity::Verbose, message);
    }

    pub fn info(&self, message: &str) {
        self.write(Severity::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.write(Severity::Warn, message);
    }

    /// Write at Error; see [`Logger::log`] for the escalation rule.
    pub fn error(&self, message: &str) -> Result<(), LogError> {
        self.log(Severity::Error, message)
    }

    // Below Error nothing escalates, so the result is always Ok.
    fn write(&self, severity: Severity, message: &str) {
        debug_assert!(severity < Severity::Error);
        let _ = self.log(severity, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("format", &self.format())
            .field("time_format", &self.time_format())
            .field("escalate_errors", &self.escalate_errors())
            .finish_non_exhaustive()
    }
}
