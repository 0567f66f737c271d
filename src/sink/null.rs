//! Sink that discards everything.

use std::sync::Arc;

use crate::error::LogResult;
use crate::logger::{Arg, Cause, Logger, Logging};

/// Logger that drops every record; debug and trace report disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn error(&self, _message: &str, _cause: Option<Cause<'_>>, _args: &[Arg<'_>]) -> LogResult<()> {
        Ok(())
    }

    fn info(&self, _message: &str, _args: &[Arg<'_>]) -> LogResult<()> {
        Ok(())
    }

    fn warn(&self, _message: &str, _args: &[Arg<'_>]) -> LogResult<()> {
        Ok(())
    }

    fn debug(&self, _message: &str, _args: &[Arg<'_>]) -> LogResult<()> {
        Ok(())
    }

    fn trace(&self, _message: &str, _args: &[Arg<'_>]) -> LogResult<()> {
        Ok(())
    }

    fn is_debug_enabled(&self) -> bool {
        false
    }

    fn is_trace_enabled(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogging;

impl Logging for NullLogging {
    fn get_log(&self, _name: &str) -> Arc<dyn Logger> {
        Arc::new(NullLogger)
    }
}
