//! In-memory capture sink.

use std::sync::{Arc, Mutex, PoisonError};

use super::{LogSink, Record, Route};
use crate::logger::Severity;

/// A line captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    pub logger: String,
    pub severity: Severity,
    pub route: Route,
    pub line: String,
}

/// Thread-safe buffer of emitted lines. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything captured so far.
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rendered text only, in emission order.
    pub fn texts(&self) -> Vec<String> {
        self.lines().into_iter().map(|l| l.line).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain the buffer.
    pub fn take(&self) -> Vec<CapturedLine> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl LogSink for MemorySink {
    fn emit(&self, record: &Record<'_>) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CapturedLine {
                logger: record.logger.to_string(),
                severity: record.severity,
                route: record.route,
                line: record.line.to_string(),
            });
    }
}
