//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::apply_levels;
use crate::config::loader::load_config;
use crate::config::schema::LoggingConfig;
use crate::registry::Registry;

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<LoggingConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<LoggingConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file. Events are handled on notify's thread; keep
    /// the returned watcher alive for as long as updates are wanted.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Config file change detected, reloading...");
                        match load_config(&path) {
                            Ok(new_config) => {
                                forward_update(&tx, new_config);
                            }
                            Err(e) => {
                                tracing::error!(
                                    "Failed to reload config: {}. Keeping current configuration.",
                                    e
                                );
                            }
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

/// Hand a reloaded config to the receiver. Returns `false` when the
/// receiver is gone and the reload was dropped.
fn forward_update(tx: &mpsc::UnboundedSender<LoggingConfig>, config: LoggingConfig) -> bool {
    if tx.send(config).is_err() {
        tracing::debug!("Config update receiver closed, reload dropped");
        return false;
    }
    true
}

/// Apply every received configuration to `registry` until the sender side
/// closes. Returns how many updates were applied.
pub async fn apply_updates(
    registry: &Registry,
    mut updates: mpsc::UnboundedReceiver<LoggingConfig>,
) -> usize {
    let mut applied = 0;
    while let Some(config) = updates.recv().await {
        apply_levels(registry, &config);
        applied += 1;
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::Severity;
    use crate::sink::MemorySink;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_apply_updates_until_closed() {
        let registry = Registry::with_sink(Arc::new(MemorySink::new()));
        let (tx, rx) = mpsc::unbounded_channel();

        let mut first = LoggingConfig::default();
        first.levels.insert("net".into(), "Debug".into());
        let mut second = LoggingConfig::default();
        second.levels.insert("net".into(), "Error".into());
        second.levels.insert("db".into(), "Verbose".into());

        tx.send(first).unwrap();
        tx.send(second).unwrap();
        drop(tx);

        assert_eq!(apply_updates(&registry, rx).await, 2);
        assert_eq!(registry.get_logger("net").level(), Severity::Error);
        assert_eq!(registry.get_logger("db").level(), Severity::Verbose);
    }

    #[test]
    fn test_forward_update_after_receiver_closed() {
        let (tx, rx) = mpsc::unbounded_channel();
        assert!(forward_update(&tx, LoggingConfig::default()));

        drop(rx);
        assert!(!forward_update(&tx, LoggingConfig::default()));
    }
}
