//! Process-wide `tracing` subscriber.
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured level when set
//! - Safe to call more than once; later calls are no-ops
//! - With the tracing sink the filter stays at trace; the sink's reloadable
//!   `LevelHandle` does the level filtering

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LoggingConfig, SinkKind};
use crate::sink::Level;

/// Level the process-wide filter should start at for `config`.
pub fn subscriber_level(config: &LoggingConfig) -> Level {
    match config.sink {
        SinkKind::Tracing => Level::Trace,
        _ => config.level,
    }
}

/// Install the fmt subscriber writing to stderr, filtered at `default_level`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_subscriber(default_level: Level) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(default_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}

fn default_directive(level: Level) -> String {
    level.as_str().to_ascii_lowercase()
}
