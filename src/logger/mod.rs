//! Logger capability and the delegating wrapper.
//!
//! # Data Flow
//! ```text
//! caller
//!     → DelegatingLogger (enablement gate for debug/trace, "[prefix] " rewrite)
//!     → dyn Logger (console, file, tracing, null, recording)
//!     → sink renders message + args only when it actually writes
//! ```
//!
//! # Design Decisions
//! - Arguments travel as `&dyn Display` so nothing is formatted until a sink writes
//! - Every logging call returns `LogResult<()>`; sink failures reach the caller untouched
//! - `Logger` is object safe and implemented for `&L`, `Box<L>` and `Arc<L>`

pub mod delegating;
pub mod message;

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::error::LogResult;
use crate::sink::Level;

pub use delegating::DelegatingLogger;

/// A single format argument.
pub type Arg<'a> = &'a dyn fmt::Display;

/// The error value attached to an `error` record.
pub type Cause<'a> = &'a (dyn Error + 'static);

/// The logging capability every sink provides.
///
/// `message` may contain `{}` placeholders which the sink fills from `args`
/// when it emits the record.
pub trait Logger: Send + Sync {
    fn error(&self, message: &str, cause: Option<Cause<'_>>, args: &[Arg<'_>]) -> LogResult<()>;

    fn info(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()>;

    fn warn(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()>;

    fn debug(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()>;

    fn trace(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()>;

    fn is_debug_enabled(&self) -> bool;

    fn is_trace_enabled(&self) -> bool;
}

/// Factory handing out named loggers that share one underlying sink.
pub trait Logging: Send + Sync {
    fn get_log(&self, name: &str) -> Arc<dyn Logger>;
}

/// Dispatch to the method matching `level`. Errors are logged without a cause.
pub fn log_at(
    logger: &dyn Logger,
    level: Level,
    message: &str,
    args: &[Arg<'_>],
) -> LogResult<()> {
    match level {
        Level::Error => logger.error(message, None, args),
        Level::Warn => logger.warn(message, args),
        Level::Info => logger.info(message, args),
        Level::Debug => logger.debug(message, args),
        Level::Trace => logger.trace(message, args),
    }
}

macro_rules! forward_logger {
    ($($ty:ty),+) => {
        $(
            impl<L: Logger + ?Sized> Logger for $ty {
                fn error(
                    &self,
                    message: &str,
                    cause: Option<Cause<'_>>,
                    args: &[Arg<'_>],
                ) -> LogResult<()> {
                    (**self).error(message, cause, args)
                }

                fn info(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
                    (**self).info(message, args)
                }

                fn warn(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
                    (**self).warn(message, args)
                }

                fn debug(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
                    (**self).debug(message, args)
                }

                fn trace(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
                    (**self).trace(message, args)
                }

                fn is_debug_enabled(&self) -> bool {
                    (**self).is_debug_enabled()
                }

                fn is_trace_enabled(&self) -> bool {
                    (**self).is_trace_enabled()
                }
            }
        )+
    };
}

forward_logger!(&L, Box<L>, Arc<L>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingLogger;

    #[test]
    fn test_log_at_dispatches_by_level() {
        let recorder = RecordingLogger::new(true, true);

        for level in Level::ALL {
            log_at(&recorder, level, "at {}", &[&level]).unwrap();
        }

        let records = recorder.records();
        let levels: Vec<Level> = records.iter().map(|r| r.level).collect();
        assert_eq!(levels, Level::ALL.to_vec());
        assert!(records.iter().all(|r| r.message == "at {}" && r.cause.is_none()));
        assert_eq!(records[3].args, vec!["DEBUG"]);
    }

    #[test]
    fn test_log_at_goes_through_gate() {
        let recorder = Arc::new(RecordingLogger::new(false, false));
        let logger = DelegatingLogger::with_prefix(recorder.clone(), Some("cli"));

        log_at(&logger, Level::Debug, "hidden", &[]).unwrap();
        log_at(&logger, Level::Trace, "hidden", &[]).unwrap();
        log_at(&logger, Level::Warn, "shown", &[]).unwrap();

        assert_eq!(recorder.messages(Level::Warn), vec!["[cli] shown"]);
        assert_eq!(recorder.records().len(), 1);
    }
}
