//! Prefixing, enablement-gating wrapper around another logger.
//!
//! # Responsibilities
//! - Forward every call to one shared delegate
//! - Skip debug/trace entirely when the delegate reports them disabled
//! - Rewrite messages to `"[prefix] message"` when a prefix is set
//!
//! # Design Decisions
//! - The delegate is an `Arc` shared with whoever built it; no teardown here
//! - Enablement is queried on every call, never cached
//! - Delegate errors are returned as-is

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::{LogError, LogResult};
use crate::logger::{Arg, Cause, Logger};

/// A logger that decorates another logger with an optional tag.
#[derive(Clone)]
pub struct DelegatingLogger {
    delegate: Arc<dyn Logger>,
    prefix: Option<Box<str>>,
}

impl DelegatingLogger {
    /// Wrap `delegate` without a prefix.
    pub fn new(delegate: Arc<dyn Logger>) -> Self {
        Self::with_prefix(delegate, None)
    }

    /// Wrap `delegate`, tagging every message with `prefix`.
    ///
    /// An empty prefix behaves like no prefix.
    pub fn with_prefix(delegate: Arc<dyn Logger>, prefix: Option<&str>) -> Self {
        Self {
            delegate,
            prefix: prefix.filter(|p| !p.is_empty()).map(Box::from),
        }
    }

    /// Like [`with_prefix`](Self::with_prefix) but for call sites where the
    /// delegate may be missing, e.g. a sink looked up during wiring.
    pub fn try_new(delegate: Option<Arc<dyn Logger>>, prefix: Option<&str>) -> LogResult<Self> {
        let delegate = delegate.ok_or(LogError::NullArgument("delegate"))?;
        Ok(Self::with_prefix(delegate, prefix))
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    fn rewrite<'a>(&self, message: &'a str) -> Cow<'a, str> {
        match &self.prefix {
            Some(prefix) => Cow::Owned(format!("[{}] {}", prefix, message)),
            None => Cow::Borrowed(message),
        }
    }
}

impl Logger for DelegatingLogger {
    fn error(&self, message: &str, cause: Option<Cause<'_>>, args: &[Arg<'_>]) -> LogResult<()> {
        self.delegate.error(&self.rewrite(message), cause, args)
    }

    fn info(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
        self.delegate.info(&self.rewrite(message), args)
    }

    fn warn(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
        self.delegate.warn(&self.rewrite(message), args)
    }

    fn debug(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
        if !self.delegate.is_debug_enabled() {
            return Ok(());
        }
        self.delegate.debug(&self.rewrite(message), args)
    }

    fn trace(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
        if !self.delegate.is_trace_enabled() {
            return Ok(());
        }
        self.delegate.trace(&self.rewrite(message), args)
    }

    fn is_debug_enabled(&self) -> bool {
        self.delegate.is_debug_enabled()
    }

    fn is_trace_enabled(&self) -> bool {
        self.delegate.is_trace_enabled()
    }
}

impl fmt::Debug for DelegatingLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegatingLogger")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}
