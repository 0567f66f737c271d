//! In-memory test double.
//!
//! Records every forwarded call and counts enablement queries so callers can
//! assert exactly what reached the sink.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::LogResult;
use crate::logger::{Arg, Cause, Logger, Logging};
use crate::sink::Level;

/// One call received by a [`RecordingLogger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    /// The message exactly as received, placeholders unrendered.
    pub message: String,
    pub args: Vec<String>,
    pub cause: Option<String>,
}

#[derive(Debug, Default)]
pub struct RecordingLogger {
    debug_enabled: AtomicBool,
    trace_enabled: AtomicBool,
    debug_queries: AtomicUsize,
    trace_queries: AtomicUsize,
    records: Mutex<Vec<Record>>,
}

impl RecordingLogger {
    pub fn new(debug_enabled: bool, trace_enabled: bool) -> Self {
        Self {
            debug_enabled: AtomicBool::new(debug_enabled),
            trace_enabled: AtomicBool::new(trace_enabled),
            ..Self::default()
        }
    }

    pub fn set_debug_enabled(&self, enabled: bool) {
        self.debug_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn set_trace_enabled(&self, enabled: bool) {
        self.trace_enabled.store(enabled, Ordering::SeqCst);
    }

    /// How many times `is_debug_enabled` was asked.
    pub fn debug_queries(&self) -> usize {
        self.debug_queries.load(Ordering::SeqCst)
    }

    pub fn trace_queries(&self) -> usize {
        self.trace_queries.load(Ordering::SeqCst)
    }

    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Messages received at `level`, in order.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.message.clone())
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(
        &self,
        level: Level,
        message: &str,
        cause: Option<Cause<'_>>,
        args: &[Arg<'_>],
    ) -> LogResult<()> {
        let record = Record {
            level,
            message: message.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cause: cause.map(|c| c.to_string()),
        };
        self.lock().push(record);
        Ok(())
    }
}

impl Logger for RecordingLogger {
    fn error(&self, message: &str, cause: Option<Cause<'_>>, args: &[Arg<'_>]) -> LogResult<()> {
        self.record(Level::Error, message, cause, args)
    }

    fn info(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
        self.record(Level::Info, message, None, args)
    }

    fn warn(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
        self.record(Level::Warn, message, None, args)
    }

    fn debug(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
        self.record(Level::Debug, message, None, args)
    }

    fn trace(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
        self.record(Level::Trace, message, None, args)
    }

    fn is_debug_enabled(&self) -> bool {
        self.debug_queries.fetch_add(1, Ordering::SeqCst);
        self.debug_enabled.load(Ordering::SeqCst)
    }

    fn is_trace_enabled(&self) -> bool {
        self.trace_queries.fetch_add(1, Ordering::SeqCst);
        self.trace_enabled.load(Ordering::SeqCst)
    }
}

/// Factory handing out one shared [`RecordingLogger`] regardless of name.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogging {
    logger: Arc<RecordingLogger>,
}

impl RecordingLogging {
    pub fn new(logger: Arc<RecordingLogger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Arc<RecordingLogger> {
        &self.logger
    }
}

impl Logging for RecordingLogging {
    fn get_log(&self, _name: &str) -> Arc<dyn Logger> {
        self.logger.clone()
    }
}
