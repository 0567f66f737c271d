//! Sink forwarding records into `tracing`.
//!
//! Records become events carrying a `logger` field, so the process-wide
//! subscriber decides where they end up. Enablement requires both the local
//! threshold and an interested subscriber.

use std::sync::Arc;

use crate::error::LogResult;
use crate::logger::message::render;
use crate::logger::{Arg, Cause, Logger, Logging};
use crate::sink::{Level, LevelHandle};

#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: Arc<str>,
    level: LevelHandle,
}

impl TracingLogger {
    pub fn new(name: &str, level: LevelHandle) -> Self {
        Self {
            name: Arc::from(name),
            level,
        }
    }
}

impl Logger for TracingLogger {
    fn error(&self, message: &str, cause: Option<Cause<'_>>, args: &[Arg<'_>]) -> LogResult<()> {
        if !self.level.allows(Level::Error) {
            return Ok(());
        }
        let text = render(message, args);
        match cause {
            Some(cause) => tracing::error!(logger = %self.name, cause = %cause, "{}", text),
            None => tracing::error!(logger = %self.name, "{}", text),
        }
        Ok(())
    }

    fn info(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
        if self.level.allows(Level::Info) {
            tracing::info!(logger = %self.name, "{}", render(message, args));
        }
        Ok(())
    }

    fn warn(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
        if self.level.allows(Level::Warn) {
            tracing::warn!(logger = %self.name, "{}", render(message, args));
        }
        Ok(())
    }

    fn debug(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
        if self.is_debug_enabled() {
            tracing::debug!(logger = %self.name, "{}", render(message, args));
        }
        Ok(())
    }

    fn trace(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
        if self.is_trace_enabled() {
            tracing::trace!(logger = %self.name, "{}", render(message, args));
        }
        Ok(())
    }

    fn is_debug_enabled(&self) -> bool {
        self.level.allows(Level::Debug) && tracing::enabled!(tracing::Level::DEBUG)
    }

    fn is_trace_enabled(&self) -> bool {
        self.level.allows(Level::Trace) && tracing::enabled!(tracing::Level::TRACE)
    }
}

/// Logging factory producing [`TracingLogger`]s.
#[derive(Debug, Clone, Default)]
pub struct TracingLogging {
    level: LevelHandle,
}

impl TracingLogging {
    pub fn new(level: LevelHandle) -> Self {
        Self { level }
    }
}

impl Logging for TracingLogging {
    fn get_log(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(TracingLogger::new(name, self.level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_without_subscriber() {
        let logger = TracingLogger::new("app", LevelHandle::new(Level::Trace));
        // No subscriber is installed for this thread, so nothing is interested.
        assert!(!logger.is_debug_enabled());
        assert!(!logger.is_trace_enabled());
        logger.info("still fine", &[]).unwrap();
    }

    #[test]
    fn test_threshold_applies_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        let level = LevelHandle::new(Level::Info);
        let logger = TracingLogger::new("app", level.clone());

        tracing::subscriber::with_default(subscriber, || {
            assert!(!logger.is_debug_enabled());
            level.set(Level::Debug);
            assert!(logger.is_debug_enabled());
            assert!(!logger.is_trace_enabled());
            logger.debug("visible {}", &[&1]).unwrap();
        });
    }

    #[test]
    fn test_reloaded_level_under_process_filter() {
        use crate::config::{LoggingConfig, SinkKind};
        use crate::observability::subscriber_level;
        use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

        let config = LoggingConfig {
            sink: SinkKind::Tracing,
            level: Level::Info,
            ..LoggingConfig::default()
        };
        let directive = subscriber_level(&config).as_str().to_ascii_lowercase();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new(directive))
            .with(tracing_subscriber::fmt::layer().with_test_writer());
        let logging = TracingLogging::new(LevelHandle::new(config.level));
        let logger = logging.get_log("app");

        tracing::subscriber::with_default(subscriber, || {
            assert!(!logger.is_debug_enabled());
            logging.level.set(Level::Debug);
            assert!(logger.is_debug_enabled());
            assert!(!logger.is_trace_enabled());
            logging.level.set(Level::Trace);
            assert!(logger.is_trace_enabled());
        });
    }
}
