//! Console sink.

use std::io::{self, Write};
use std::sync::Arc;

use crate::logger::{Logger, Logging};
use crate::sink::format::LineFormat;
use crate::sink::writer::{shared_writer, SharedWriter, WriterLogger};
use crate::sink::LevelHandle;

/// Logging factory writing to standard error.
#[derive(Clone)]
pub struct ConsoleLogging {
    level: LevelHandle,
    format: LineFormat,
    out: SharedWriter,
}

impl ConsoleLogging {
    /// Console logging to standard error.
    pub fn stderr(level: LevelHandle, format: LineFormat) -> Self {
        Self::with_writer(level, format, io::stderr())
    }

    /// Console logging into an arbitrary writer, e.g. a buffer in tests.
    pub fn with_writer(
        level: LevelHandle,
        format: LineFormat,
        writer: impl Write + Send + 'static,
    ) -> Self {
        Self {
            level,
            format,
            out: shared_writer(writer),
        }
    }
}

impl Logging for ConsoleLogging {
    fn get_log(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(WriterLogger::new(name, self.level.clone(), self.format, self.out.clone()))
    }
}
