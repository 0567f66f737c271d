//! Concrete sinks behind the `Logger` capability.
//!
//! # Responsibilities
//! - Console, file, tracing, null and recording implementations
//! - Level threshold shared by the loggers of one factory
//! - Build the configured factory from `LoggingConfig`
//!
//! # Design Decisions
//! - Sinks render placeholders only when a record passes the threshold
//! - Threshold is an atomic so config reloads apply without rebuilding loggers

pub mod console;
pub mod file;
pub mod format;
pub mod level;
pub mod null;
pub mod recording;
pub mod tracing_bridge;
pub mod writer;

use std::sync::Arc;

use crate::config::schema::{LoggingConfig, SinkKind};
use crate::error::{LogError, LogResult};
use crate::logger::Logging;

pub use console::ConsoleLogging;
pub use file::FileLogging;
pub use format::LineFormat;
pub use level::{Level, LevelHandle, ParseLevelError};
pub use null::{NullLogger, NullLogging};
pub use recording::{Record, RecordingLogger, RecordingLogging};
pub use tracing_bridge::{TracingLogger, TracingLogging};

/// A logging factory together with the threshold that governs it.
#[derive(Clone)]
pub struct ConfiguredLogging {
    pub logging: Arc<dyn Logging>,
    pub level: LevelHandle,
}

/// Build the factory described by `config`.
pub fn build_logging(config: &LoggingConfig) -> LogResult<ConfiguredLogging> {
    let level = LevelHandle::new(config.level);

    let logging: Arc<dyn Logging> = match config.sink {
        SinkKind::Console => Arc::new(ConsoleLogging::stderr(level.clone(), config.format)),
        SinkKind::File => {
            let path = config
                .file_path
                .as_ref()
                .ok_or(LogError::NullArgument("file_path"))?;
            Arc::new(FileLogging::open(path, level.clone(), config.format)?)
        }
        SinkKind::Tracing => Arc::new(TracingLogging::new(level.clone())),
        SinkKind::Null => Arc::new(NullLogging),
    };

    tracing::debug!(sink = ?config.sink, level = %config.level, "Logging sink built");

    Ok(ConfiguredLogging { logging, level })
}
