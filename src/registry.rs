//! Per-subsystem loggers sharing one sink.
//!
//! # Responsibilities
//! - Hold the root sink logger obtained from a `Logging` factory
//! - Hand out one tagged `DelegatingLogger` per subsystem name
//!
//! # Design Decisions
//! - Loggers are created on first use and cached for the registry's lifetime
//! - Tag is the subsystem name unless the config overrides it

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::DashMap;

use crate::config::LoggingConfig;
use crate::logger::{DelegatingLogger, Logger, Logging};

pub struct LoggerRegistry {
    root: Arc<dyn Logger>,
    prefixes: BTreeMap<String, String>,
    loggers: DashMap<String, Arc<DelegatingLogger>>,
}

impl LoggerRegistry {
    /// Registry whose root logger is `logging.get_log(name)`.
    pub fn new(logging: &dyn Logging, name: &str) -> Self {
        Self {
            root: logging.get_log(name),
            prefixes: BTreeMap::new(),
            loggers: DashMap::new(),
        }
    }

    pub fn from_config(logging: &dyn Logging, config: &LoggingConfig) -> Self {
        Self::new(logging, &config.name).with_prefixes(config.prefixes.clone())
    }

    /// Replace the default tag for some subsystems. Empty tags disable prefixing.
    pub fn with_prefixes(mut self, prefixes: BTreeMap<String, String>) -> Self {
        self.prefixes = prefixes;
        self
    }

    /// The untagged sink logger every subsystem forwards to.
    pub fn root(&self) -> &Arc<dyn Logger> {
        &self.root
    }

    /// The tagged logger for `subsystem`, created on first request.
    pub fn subsystem(&self, subsystem: &str) -> Arc<DelegatingLogger> {
        if let Some(existing) = self.loggers.get(subsystem) {
            return existing.clone();
        }

        self.loggers
            .entry(subsystem.to_string())
            .or_insert_with(|| {
                let prefix = self
                    .prefixes
                    .get(subsystem)
                    .map(String::as_str)
                    .unwrap_or(subsystem);
                tracing::trace!(subsystem, prefix, "Creating subsystem logger");
                Arc::new(DelegatingLogger::with_prefix(self.root.clone(), Some(prefix)))
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}
