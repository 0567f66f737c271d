//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoggingConfig (validated, immutable)
//!     → sink::build_logging + LoggerRegistry
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → apply_reloads stores the new level in the live LevelHandle
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; only the level is applied live
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LoggingConfig, SinkKind};
pub use validation::{validate_config, ValidationError};
pub use watcher::{apply_reloads, reconcile, ConfigWatcher, ReloadOutcome};
