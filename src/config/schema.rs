//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::sink::{Level, LineFormat};

/// Root logging configuration.
///
/// ```toml
/// sink = "file"
/// level = "debug"
/// format = "json"
/// file_path = "logs/app.log"
/// name = "app"
///
/// [prefixes]
/// connection_pool = "pool"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Which sink receives records.
    pub sink: SinkKind,

    /// Most verbose level emitted by the sink.
    pub level: Level,

    /// Line layout for console and file sinks.
    pub format: LineFormat,

    /// Log file location (file sink only).
    pub file_path: Option<PathBuf>,

    /// Name of the root logger shared by all subsystems.
    pub name: String,

    /// Per-subsystem tag overrides. An empty tag disables prefixing.
    pub prefixes: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            sink: SinkKind::Console,
            level: Level::Info,
            format: LineFormat::Plain,
            file_path: None,
            name: "app".to_string(),
            prefixes: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Whether switching from `self` to `other` needs a new sink, as opposed
    /// to only a threshold change.
    pub fn requires_rebuild(&self, other: &LoggingConfig) -> bool {
        self.sink != other.sink
            || self.format != other.format
            || self.file_path != other.file_path
            || self.name != other.name
            || self.prefixes != other.prefixes
    }
}

/// Sink selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Console,
    File,
    Tracing,
    Null,
}
