//! Observability subsystem.
//!
//! The crate's own diagnostics (config loading, reloads, sink construction)
//! go through `tracing`. The binary installs the subscriber; library users
//! bring their own.

pub mod logging;

pub use logging::{init_subscriber, subscriber_level};
