//! File sink.
//!
//! # Design Decisions
//! - Appends; never truncates an existing log
//! - Parent directories are created on open
//! - Each record is flushed so a crash loses at most the line being written

use std::fs::{self, OpenOptions};
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

use crate::error::LogResult;
use crate::logger::{Logger, Logging};
use crate::sink::format::LineFormat;
use crate::sink::writer::{shared_writer, SharedWriter, WriterLogger};
use crate::sink::LevelHandle;

/// Logging factory appending to a single file.
#[derive(Clone)]
pub struct FileLogging {
    level: LevelHandle,
    format: LineFormat,
    out: SharedWriter,
}

impl FileLogging {
    pub fn open(
        path: impl AsRef<Path>,
        level: LevelHandle,
        format: LineFormat,
    ) -> LogResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        tracing::debug!(path = %path.display(), "Opened log file");

        Ok(Self {
            level,
            format,
            out: shared_writer(BufWriter::new(file)),
        })
    }
}

impl Logging for FileLogging {
    fn get_log(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(WriterLogger::new(name, self.level.clone(), self.format, self.out.clone()))
    }
}
