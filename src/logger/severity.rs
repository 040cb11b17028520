//! Severity levels and name lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sink::Route;

/// Severity used whenever a level name cannot be resolved.
pub const DEFAULT_SEVERITY: Severity = Severity::Warn;

/// Ordered log severity.
///
/// The discriminants keep gaps between levels so the ordering stays stable if
/// a level is ever added in between. `Off` is only meaningful as a threshold.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Debug = 10,
    Verbose = 20,
    Info = 30,
    Warn = 40,
    Error = 50,
    Off = 100,
}

/// Returned by the strict `FromStr` lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity name: {0:?}")]
pub struct UnknownSeverity(pub String);

impl Severity {
    /// Every severity, lowest first.
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Verbose,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Off,
    ];

    /// Display name, e.g. `"Warn"`.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Debug => "Debug",
            Severity::Verbose => "Verbose",
            Severity::Info => "Info",
            Severity::Warn => "Warn",
            Severity::Error => "Error",
            Severity::Off => "Off",
        }
    }

    /// Lenient reverse lookup: unknown names resolve to [`DEFAULT_SEVERITY`].
    pub fn from_name(name: &str) -> Severity {
        Severity::from_name_or(name, DEFAULT_SEVERITY)
    }

    /// Lenient reverse lookup with an explicit fallback for unknown names.
    pub fn from_name_or(name: &str, fallback: Severity) -> Severity {
        name.parse().unwrap_or(fallback)
    }

    /// Output class a sink uses to pick a channel.
    pub fn route(self) -> Route {
        match self {
            Severity::Debug | Severity::Verbose | Severity::Info => Route::Info,
            Severity::Warn => Route::Warn,
            Severity::Error | Severity::Off => Route::Error,
        }
    }
}

impl From<u8> for Severity {
    fn from(val: u8) -> Self {
        match val {
            10 => Severity::Debug,
            20 => Severity::Verbose,
            30 => Severity::Info,
            40 => Severity::Warn,
            50 => Severity::Error,
            100 => Severity::Off,
            _ => DEFAULT_SEVERITY,
        }
    }
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|lvl| lvl.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
