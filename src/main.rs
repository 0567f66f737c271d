//! delegating-log command line.
//!
//! ```text
//! delegating-log [--config FILE] emit [--level L] [--subsystem S | --prefix P] MESSAGE [ARGS]...
//! delegating-log  --config FILE  watch [--subsystem S] [--interval-ms N] [--count N]
//! ```
//!
//! `emit` sends one record through the configured sink. `watch` emits
//! info/debug/trace heartbeats while the config file is hot-reloaded, which
//! makes level changes visible as they happen.

use std::error::Error;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use delegating_log::config::{apply_reloads, load_config, ConfigWatcher, LoggingConfig};
use delegating_log::observability::{init_subscriber, subscriber_level};
use delegating_log::{
    build_logging, log_at, Arg, ConfiguredLogging, DelegatingLogger, Level, LevelHandle, Logger,
    LoggerRegistry,
};

#[derive(Parser)]
#[command(name = "delegating-log")]
#[command(about = "Emit log records through a configured, tagged sink", long_about = None)]
struct Cli {
    /// Logging configuration (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit a single record
    Emit {
        #[arg(short, long, default_value = "info")]
        level: Level,

        /// Subsystem whose registry logger is used (tag from config or name)
        #[arg(short, long)]
        subsystem: Option<String>,

        /// Explicit tag for the root logger
        #[arg(short, long, conflicts_with = "subsystem")]
        prefix: Option<String>,

        /// Message, may contain `{}` placeholders
        message: String,

        /// Values for the placeholders
        args: Vec<String>,
    },
    /// Emit heartbeats while hot-reloading the config file
    Watch {
        #[arg(short, long, default_value = "heartbeat")]
        subsystem: String,

        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,

        /// Stop after this many heartbeats (0 = until interrupted)
        #[arg(long, default_value_t = 0)]
        count: u64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggingConfig::default(),
    };

    init_subscriber(subscriber_level(&config));

    let ConfiguredLogging { logging, level: threshold } = build_logging(&config)?;
    let registry = LoggerRegistry::from_config(logging.as_ref(), &config);

    match cli.command {
        Commands::Emit {
            level,
            subsystem,
            prefix,
            message,
            args,
        } => {
            let logger = match subsystem {
                Some(subsystem) => registry.subsystem(&subsystem),
                None => Arc::new(DelegatingLogger::with_prefix(
                    registry.root().clone(),
                    prefix.as_deref(),
                )),
            };
            let args: Vec<Arg<'_>> = args.iter().map(|a| a as &dyn Display).collect();
            log_at(logger.as_ref(), level, &message, &args)?;
        }
        Commands::Watch {
            subsystem,
            interval_ms,
            count,
        } => {
            let path = cli.config.as_deref().ok_or("watch requires --config")?;
            let logger = registry.subsystem(&subsystem);
            watch(path, config, threshold, logger, interval_ms, count).await?;
        }
    }

    Ok(())
}

async fn watch(
    path: &Path,
    config: LoggingConfig,
    threshold: LevelHandle,
    logger: Arc<DelegatingLogger>,
    interval_ms: u64,
    count: u64,
) -> Result<(), Box<dyn Error>> {
    let (watcher, updates) = ConfigWatcher::new(path);
    let _watcher = watcher.run()?;
    let reloads = tokio::spawn(apply_reloads(config, updates, threshold));

    let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms.max(1)));
    let mut beat: u64 = 0;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                beat += 1;
                logger.info("heartbeat {}", &[&beat])?;
                logger.debug("heartbeat {} (debug)", &[&beat])?;
                logger.trace("heartbeat {} (trace)", &[&beat])?;
                if count != 0 && beat >= count {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, stopping");
                break;
            }
        }
    }

    reloads.abort();
    Ok(())
}
