//! Name-keyed logger store.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use dashmap::DashMap;

use crate::config::LoggingConfig;
use crate::logger::{Logger, LoggerDefaults, Severity, TemplateError};
use crate::sink::{self, ConsoleSink, LogSink};

type LoggerMap = DashMap<String, Arc<Logger>>;

/// Registry of named loggers, one instance per name.
///
/// Loggers are created on first lookup with the registry's defaults and
/// share its sink. Lookups hold the map's read lock and `reset` its write
/// lock, so a logger is always created in the map that is current.
pub struct Registry {
    loggers: RwLock<LoggerMap>,
    defaults: LoggerDefaults,
    sink: Arc<dyn LogSink>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new(defaults: LoggerDefaults, sink: Arc<dyn LogSink>) -> Self {
        Self {
            loggers: RwLock::new(DashMap::new()),
            defaults,
            sink,
        }
    }

    /// Create an empty registry with standard defaults writing to `sink`.
    pub fn with_sink(sink: Arc<dyn LogSink>) -> Self {
        Self::new(LoggerDefaults::default(), sink)
    }

    /// Build a registry from configuration: defaults, sink, initial levels.
    pub fn from_config(config: &LoggingConfig) -> Result<Self, TemplateError> {
        let registry = Self::new(config.defaults.to_defaults()?, sink::from_kind(config.sink.kind));
        registry.setup_levels(&config.levels);

        tracing::info!(
            loggers = registry.len(),
            sink = ?config.sink.kind,
            default_level = %registry.defaults.level,
            "Logger registry configured"
        );
        Ok(registry)
    }

    // Poisoning only means a panic elsewhere; the map itself stays consistent.
    fn map(&self) -> RwLockReadGuard<'_, LoggerMap> {
        self.loggers.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the logger named `name`, creating it if absent.
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        let loggers = self.map();
        if let Some(existing) = loggers.get(name).map(|r| Arc::clone(r.value())) {
            return existing;
        }

        let entry = loggers.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!(logger = name, level = %self.defaults.level, "Creating logger");
            Arc::new(Logger::new(name, &self.defaults, Arc::clone(&self.sink)))
        });
        Arc::clone(entry.value())
    }

    /// Replace every entry with `seed`.
    pub fn reset<I>(&self, seed: I)
    where
        I: IntoIterator<Item = (String, Arc<Logger>)>,
    {
        let fresh: LoggerMap = seed.into_iter().collect();
        let count = fresh.len();
        *self.loggers.write().unwrap_or_else(PoisonError::into_inner) = fresh;
        tracing::debug!(seeded = count, "Logger registry reset");
    }

    /// Drop every logger.
    pub fn clear(&self) {
        self.reset(std::iter::empty());
    }

    /// Snapshot of all registered loggers, in no particular order.
    pub fn all_loggers(&self) -> Vec<Arc<Logger>> {
        self.map()
            .iter()
            .map(|r| Arc::clone(r.value()))
            .collect()
    }

    /// Set thresholds from a name → level-name mapping, creating loggers as
    /// needed. Unknown level names fall back to the registry's default level.
    pub fn setup_levels<I, K, V>(&self, levels: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, level) in levels {
            let (name, level) = (name.as_ref(), level.as_ref());
            let resolved = Severity::from_name_or(level, self.defaults.level);
            if resolved.name() != level {
                tracing::debug!(logger = name, requested = level, resolved = %resolved, "Resolved level name");
            }
            self.get_logger(name).set_level(resolved);
        }
    }

    /// Each logger's name mapped to its threshold's display name.
    pub fn current_logger_levels(&self) -> BTreeMap<String, String> {
        self.map()
            .iter()
            .map(|r| (r.key().clone(), r.value().level().name().to_string()))
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Settings new loggers start with.
    pub fn defaults(&self) -> &LoggerDefaults {
        &self.defaults
    }

    pub fn sink(&self) -> Arc<dyn LogSink> {
        Arc::clone(&self.sink)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_sink(Arc::new(ConsoleSink::new()))
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("loggers", &self.current_logger_levels())
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn registry() -> Registry {
        Registry::with_sink(Arc::new(MemorySink::new()))
    }

    #[test]
    fn test_get_or_create() {
        let reg = registry();
        assert!(reg.is_empty());

        let bob = reg.get_logger("Bob");
        assert_eq!(reg.len(), 1);
        reg.get_logger("Fred");
        assert_eq!(reg.len(), 2);

        let bob_again = reg.get_logger("Bob");
        assert_eq!(reg.len(), 2);
        assert!(Arc::ptr_eq(&bob, &bob_again));
    }

    #[test]
    fn test_new_loggers_use_defaults() {
        let defaults = LoggerDefaults {
            level: Severity::Verbose,
            escalate_errors: true,
            ..LoggerDefaults::default()
        };
        let reg = Registry::new(defaults, Arc::new(MemorySink::new()));
        let logger = reg.get_logger("x");
        assert_eq!(logger.level(), Severity::Verbose);
        assert!(logger.escalate_errors());
    }

    #[test]
    fn test_reset_with_seed() {
        let reg = registry();
        let old = reg.get_logger("old");

        let seeded = Arc::new(Logger::new("kept", reg.defaults(), reg.sink()));
        reg.reset([("kept".to_string(), Arc::clone(&seeded))]);

        assert!(!reg.contains("old"));
        assert!(Arc::ptr_eq(&reg.get_logger("kept"), &seeded));

        // A fresh lookup after reset yields a new instance.
        let replacement = reg.get_logger("old");
        assert!(!Arc::ptr_eq(&old, &replacement));

        reg.clear();
        assert!(reg.is_empty());
    }

    #[test]
    fn test_setup_levels_unknown_name() {
        let reg = registry();
        reg.setup_levels([("odd", "Loudest"), ("quiet", "Off")]);
        assert_eq!(reg.get_logger("odd").level(), Severity::Warn);
        assert_eq!(reg.get_logger("quiet").level(), Severity::Off);
    }

    #[test]
    fn test_setup_levels_falls_back_to_configured_default() {
        let defaults = LoggerDefaults {
            level: Severity::Info,
            ..LoggerDefaults::default()
        };
        let reg = Registry::new(defaults, Arc::new(MemorySink::new()));
        reg.setup_levels([("fresh", "Loudest")]);

        let untouched = reg.get_logger("untouched");
        assert_eq!(reg.get_logger("fresh").level(), untouched.level());
        assert_eq!(untouched.level(), Severity::Info);
    }

    #[test]
    fn test_lookup_waiting_on_reset_lands_in_new_map() {
        let reg = registry();
        let before = reg.get_logger("late");

        let created = std::thread::scope(|s| {
            let mut guard = reg.loggers.write().unwrap();
            let lookup = s.spawn(|| reg.get_logger("late"));
            // Swap the map while the lookup waits behind the write lock.
            *guard = DashMap::new();
            drop(guard);
            lookup.join().unwrap()
        });

        assert!(!Arc::ptr_eq(&before, &created));
        assert!(Arc::ptr_eq(&created, &reg.get_logger("late")));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_concurrent_lookup_and_reset() {
        let reg = registry();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for i in 0..200 {
                        let name = format!("n{}", i % 8);
                        let logger = reg.get_logger(&name);
                        assert_eq!(logger.name(), name);
                    }
                });
            }
            s.spawn(|| {
                for _ in 0..50 {
                    reg.clear();
                }
            });
        });

        let first = reg.get_logger("n0");
        assert!(Arc::ptr_eq(&first, &reg.get_logger("n0")));
    }
}
