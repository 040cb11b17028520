//! Standard output sink.

use std::io::{self, Write};

use super::{LogSink, Record};

/// Writes one line per record to stdout. Routes are ignored; use
/// [`CallbackSink`](super::CallbackSink) to send warnings or errors elsewhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for ConsoleSink {
    fn emit(&self, record: &Record<'_>) {
        let mut out = io::stdout().lock();
        // A closed stdout must not take the caller down with it.
        let _ = writeln!(out, "{}", record.line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::Severity;

    #[test]
    fn test_every_route_goes_to_stdout() {
        let sink = ConsoleSink::new();
        for severity in [Severity::Info, Severity::Warn, Severity::Error] {
            sink.emit(&Record {
                logger: "console",
                severity,
                route: severity.route(),
                line: "console line",
            });
        }
    }
}
