//! Message templates and timestamp formats.
//!
//! # Responsibilities
//! - Parse format templates once, at configuration time
//! - Render lines without any failure path
//! - Validate strftime patterns before they reach a logger
//!
//! # Template syntax
//! ```text
//! {timestamp}  {0}   formatted UTC time, or "" when disabled
//! {name}       {1}   logger name
//! {level}      {2}   severity display name
//! {message}    {3}   caller's message
//! {{ and }}          literal braces
//! ```

use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Default line layout: timestamp, name, level, message.
pub const DEFAULT_FORMAT: &str = "{timestamp}{name}:{level} {message}";

/// Default timestamp layout, e.g. `[14:23:04.030] ` (note the trailing space).
pub const DEFAULT_TIME_FORMAT: &str = "[%H:%M:%S%.3f] ";

/// Errors raised while parsing a template or a time format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unknown placeholder {{{0}}}")]
    UnknownPlaceholder(String),

    #[error("unclosed '{{' at byte {0}")]
    Unclosed(usize),

    #[error("unmatched '}}' at byte {0}")]
    StrayBrace(usize),

    #[error("invalid time format {0:?}")]
    InvalidTimeFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Timestamp,
    Name,
    Level,
    Message,
}

impl Field {
    fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "timestamp" | "0" => Some(Field::Timestamp),
            "name" | "1" => Some(Field::Name),
            "level" | "2" => Some(Field::Level),
            "message" | "3" => Some(Field::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// Values substituted into a [`Template`].
#[derive(Debug, Clone, Copy)]
pub struct LineFields<'a> {
    pub timestamp: &'a str,
    pub name: &'a str,
    pub level: &'a str,
    pub message: &'a str,
}

/// A parsed message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template string.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut key = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, ch)) => key.push(ch),
                            None => return Err(TemplateError::Unclosed(pos)),
                        }
                    }
                    let field = Field::from_key(&key)
                        .ok_or(TemplateError::UnknownPlaceholder(key))?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));
                }
                '}' => return Err(TemplateError::StrayBrace(pos)),
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The template as originally written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Substitute `fields` into the template.
    pub fn render(&self, fields: &LineFields<'_>) -> String {
        let mut out = String::with_capacity(self.source.len() + fields.message.len());
        for segment in &self.segments {
            let text = match segment {
                Segment::Literal(s) => s.as_str(),
                Segment::Field(Field::Timestamp) => fields.timestamp,
                Segment::Field(Field::Name) => fields.name,
                Segment::Field(Field::Level) => fields.level,
                Segment::Field(Field::Message) => fields.message,
            };
            out.push_str(text);
        }
        out
    }
}

impl Default for Template {
    fn default() -> Self {
        Self {
            source: DEFAULT_FORMAT.to_string(),
            segments: vec![
                Segment::Field(Field::Timestamp),
                Segment::Field(Field::Name),
                Segment::Literal(":".to_string()),
                Segment::Field(Field::Level),
                Segment::Literal(" ".to_string()),
                Segment::Field(Field::Message),
            ],
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// A validated strftime pattern, applied to UTC time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormat(String);

impl TimeFormat {
    pub fn parse(pattern: &str) -> Result<Self, TemplateError> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(TemplateError::InvalidTimeFormat(pattern.to_string()));
        }
        Ok(Self(pattern.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Format `at` with this pattern.
    pub fn format(&self, at: DateTime<Utc>) -> String {
        let mut out = String::new();
        // Patterns are checked in `parse`; a formatting failure leaves the partial output.
        let _ = write!(out, "{}", at.format(&self.0));
        out
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self(DEFAULT_TIME_FORMAT.to_string())
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
