//! Host-provided callback sink.
//!
//! Embedders that already own a log pipeline (an engine console, a GUI log
//! pane) hand the registry a closure and receive each finished line together
//! with its [`Route`].

use std::fmt;
use std::sync::Arc;

use super::{LogSink, Record, Route};

type Callback = dyn Fn(Route, &str) + Send + Sync;

/// Forwards each line to a host closure.
#[derive(Clone)]
pub struct CallbackSink {
    callback: Arc<Callback>,
}

impl CallbackSink {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(Route, &str) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }
}

impl fmt::Debug for CallbackSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSink").finish_non_exhaustive()
    }
}

impl LogSink for CallbackSink {
    fn emit(&self, record: &Record<'_>) {
        (self.callback)(record.route, record.line);
    }
}
