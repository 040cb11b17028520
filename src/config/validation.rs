//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject templates and time formats that could not be rendered
//! - Reject filter directives the diagnostics layer cannot parse
//! - Report, but accept, unknown level names
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Unknown level names resolve to a default at runtime, so they only warn here

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::LoggingConfig;
use crate::logger::{Severity, Template, TemplateError, TimeFormat};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("defaults.format: {0}")]
    Format(TemplateError),

    #[error("defaults.time_format: {0}")]
    TimeFormat(TemplateError),

    #[error("levels: logger name must not be empty")]
    EmptyLoggerName,

    #[error("observability.log_level: invalid filter {0:?}")]
    LogFilter(String),
}

/// Validate `config`, collecting every error.
pub fn validate_config(config: &LoggingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = Template::parse(&config.defaults.format) {
        errors.push(ValidationError::Format(e));
    }
    if !config.defaults.time_format.is_empty() {
        if let Err(e) = TimeFormat::parse(&config.defaults.time_format) {
            errors.push(ValidationError::TimeFormat(e));
        }
    }
    if config.levels.keys().any(|name| name.is_empty()) {
        errors.push(ValidationError::EmptyLoggerName);
    }
    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::LogFilter(config.observability.log_level.clone()));
    }

    let fallback = Severity::from_name(&config.defaults.level);
    for (field, level) in unknown_level_names(config) {
        let using = if field == "defaults.level" { Severity::Warn } else { fallback };
        tracing::warn!(field = %field, level = %level, using = %using, "Unknown level name");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `(field, level)` pairs whose level name does not resolve.
pub fn unknown_level_names(config: &LoggingConfig) -> Vec<(String, String)> {
    let mut unknown = Vec::new();
    if config.defaults.level.parse::<Severity>().is_err() {
        unknown.push(("defaults.level".to_string(), config.defaults.level.clone()));
    }
    for (name, level) in &config.levels {
        if level.parse::<Severity>().is_err() {
            unknown.push((format!("levels.{name}"), level.clone()));
        }
    }
    unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&LoggingConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = LoggingConfig::default();
        config.defaults.format = "{nope}".into();
        config.defaults.time_format = "%Q".into();
        config.levels.insert(String::new(), "Info".into());
        config.observability.log_level = "net=loudest".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(matches!(errors[0], ValidationError::Format(_)));
        assert!(matches!(errors[1], ValidationError::TimeFormat(_)));
        assert_eq!(errors[2], ValidationError::EmptyLoggerName);
        assert!(matches!(errors[3], ValidationError::LogFilter(_)));
    }

    #[test]
    fn test_unknown_levels_are_not_errors() {
        let mut config = LoggingConfig::default();
        config.defaults.level = "Chatty".into();
        config.levels.insert("net".into(), "Loud".into());
        config.levels.insert("db".into(), "Debug".into());

        assert!(validate_config(&config).is_ok());
        assert_eq!(
            unknown_level_names(&config),
            vec![
                ("defaults.level".to_string(), "Chatty".to_string()),
                ("levels.net".to_string(), "Loud".to_string()),
            ]
        );
    }
}
