//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files. Every
//! section has defaults, so an empty file is a valid configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::logger::{
    LoggerDefaults, Severity, Template, TemplateError, TimeFormat, DEFAULT_FORMAT,
    DEFAULT_TIME_FORMAT,
};
use crate::sink::SinkKind;

/// Root logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Settings for newly created loggers.
    pub defaults: DefaultsConfig,

    /// Output sink selection.
    pub sink: SinkConfig,

    /// Initial thresholds: logger name → level name.
    pub levels: BTreeMap<String, String>,

    /// Diagnostics of the logging system itself.
    pub observability: ObservabilityConfig,
}

/// Defaults applied when the registry creates a logger.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Level name; unknown names resolve to Warn. Unknown names under
    /// `levels` resolve to this level.
    pub level: String,

    /// Line template, e.g. `"{timestamp}{name}:{level} {message}"`.
    pub format: String,

    /// strftime pattern for the timestamp. Empty disables timestamps.
    pub time_format: String,

    /// Turn Error writes into returned failures.
    pub escalate_errors: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            level: Severity::Warn.name().to_string(),
            format: DEFAULT_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            escalate_errors: false,
        }
    }
}

impl DefaultsConfig {
    /// Resolve into runtime defaults.
    pub fn to_defaults(&self) -> Result<LoggerDefaults, TemplateError> {
        let time_format = match self.time_format.as_str() {
            "" => None,
            pattern => Some(TimeFormat::parse(pattern)?),
        };
        Ok(LoggerDefaults {
            level: Severity::from_name(&self.level),
            format: Template::parse(&self.format)?,
            time_format,
            escalate_errors: self.escalate_errors,
        })
    }
}

/// Sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct SinkConfig {
    /// `console` or `tracing`.
    pub kind: SinkKind,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `tracing` filter directive (trace, debug, info, warn, error, or
    /// per-target directives). `RUST_LOG` takes precedence.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.defaults.level, "Warn");
        assert_eq!(config.sink.kind, SinkKind::Console);
        assert!(config.levels.is_empty());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_to_defaults() {
        let resolved = DefaultsConfig::default().to_defaults().unwrap();
        assert_eq!(resolved, LoggerDefaults::default());

        let no_time = DefaultsConfig {
            time_format: String::new(),
            level: "Nonsense".into(),
            ..DefaultsConfig::default()
        };
        let resolved = no_time.to_defaults().unwrap();
        assert_eq!(resolved.time_format, None);
        assert_eq!(resolved.level, Severity::Warn);
    }
}
