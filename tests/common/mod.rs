//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use delegating_log::{Arg, Cause, LogError, LogResult, Logger};

/// In-memory writer whose clones share one buffer.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Display value counting how often it is formatted.
#[derive(Clone, Default)]
pub struct Counted(Arc<AtomicUsize>);

impl Counted {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl fmt::Display for Counted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fetch_add(1, Ordering::SeqCst);
        write!(f, "counted")
    }
}

/// Sink whose every logging call fails; debug and trace report enabled.
pub struct FailingLogger;

impl FailingLogger {
    fn fail(message: &str) -> LogResult<()> {
        Err(LogError::sink(format!("rejected: {}", message)))
    }
}

impl Logger for FailingLogger {
    fn error(&self, message: &str, _cause: Option<Cause<'_>>, _args: &[Arg<'_>]) -> LogResult<()> {
        Self::fail(message)
    }

    fn info(&self, message: &str, _args: &[Arg<'_>]) -> LogResult<()> {
        Self::fail(message)
    }

    fn warn(&self, message: &str, _args: &[Arg<'_>]) -> LogResult<()> {
        Self::fail(message)
    }

    fn debug(&self, message: &str, _args: &[Arg<'_>]) -> LogResult<()> {
        Self::fail(message)
    }

    fn trace(&self, message: &str, _args: &[Arg<'_>]) -> LogResult<()> {
        Self::fail(message)
    }

    fn is_debug_enabled(&self) -> bool {
        true
    }

    fn is_trace_enabled(&self) -> bool {
        true
    }
}

/// Writer whose peer has gone away.
pub struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
