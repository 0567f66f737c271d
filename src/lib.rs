//! Prefixing, enablement-gated logger delegation.
//!
//! A [`DelegatingLogger`] wraps any [`Logger`] sink: debug and trace calls are
//! dropped before any formatting when the sink has them disabled, and every
//! forwarded message can carry a `[tag]` so several subsystems stay
//! distinguishable on one shared sink.

pub mod config;
pub mod error;
pub mod logger;
pub mod observability;
pub mod registry;
pub mod sink;

pub use config::LoggingConfig;
pub use error::{LogError, LogResult};
pub use logger::{log_at, Arg, Cause, DelegatingLogger, Logger, Logging};
pub use registry::LoggerRegistry;
pub use sink::{build_logging, ConfiguredLogging, Level, LevelHandle};
