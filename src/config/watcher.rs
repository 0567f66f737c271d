//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::LoggingConfig;
use crate::sink::LevelHandle;

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<LoggingConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<LoggingConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file in a background thread.
    ///
    /// The returned watcher must be kept alive for as long as reloads are wanted.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx;
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Config file change detected, reloading...");
                        match load_config(&path) {
                            Ok(new_config) => {
                                let _ = tx.send(new_config);
                            }
                            Err(e) => {
                                tracing::error!(
                                    "Failed to reload config: {}. Keeping current configuration.",
                                    e
                                );
                            }
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

/// What a reload did to the running configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    Unchanged,
    LevelChanged,
    /// Sink settings differ from the running sink; only the level was taken.
    RestartRequired,
}

/// Fold `next` into the running configuration `live`.
///
/// `live` keeps describing the sink that is actually running; only its level
/// follows `next`.
pub fn reconcile(live: &mut LoggingConfig, next: LoggingConfig) -> ReloadOutcome {
    let restart = live.requires_rebuild(&next);
    let level_changed = live.level != next.level;
    live.level = next.level;

    if restart {
        ReloadOutcome::RestartRequired
    } else if level_changed {
        ReloadOutcome::LevelChanged
    } else {
        ReloadOutcome::Unchanged
    }
}

/// Apply reloaded configurations to a live threshold until the channel closes.
///
/// Only the level is hot-swappable; other changes are reported and skipped.
/// Returns the running configuration with the last level applied.
pub async fn apply_reloads(
    mut live: LoggingConfig,
    mut updates: mpsc::UnboundedReceiver<LoggingConfig>,
    level: LevelHandle,
) -> LoggingConfig {
    while let Some(next) = updates.recv().await {
        let previous = live.level;
        let requested_sink = next.sink;
        match reconcile(&mut live, next) {
            ReloadOutcome::RestartRequired => tracing::warn!(
                running = ?live.sink,
                requested = ?requested_sink,
                "Sink settings changed; restart required, applying level only"
            ),
            ReloadOutcome::LevelChanged => {
                tracing::info!(from = %previous, to = %live.level, "Log level changed")
            }
            ReloadOutcome::Unchanged => {}
        }
        level.set(live.level);
    }
    live
}
