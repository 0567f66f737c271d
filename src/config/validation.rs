//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that the selected sink has what it needs
//! - Reject tags that would break the one-record-per-line layout
//! - Reject tags containing braces, which sinks would read as placeholders
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggingConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::{LoggingConfig, SinkKind};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("file sink requires file_path")]
    MissingFilePath,

    #[error("logger name must not be empty")]
    EmptyName,

    #[error("prefix for subsystem '{0}' contains a line break")]
    MultilinePrefix(String),

    #[error("prefix for subsystem '{0}' contains '{{' or '}}'")]
    PlaceholderPrefix(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &LoggingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.sink == SinkKind::File
        && config.file_path.as_ref().map_or(true, |p| p.as_os_str().is_empty())
    {
        errors.push(ValidationError::MissingFilePath);
    }

    if config.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
    }

    for (subsystem, prefix) in &config.prefixes {
        if prefix.contains(['\n', '\r']) {
            errors.push(ValidationError::MultilinePrefix(subsystem.clone()));
        }
        if prefix.contains(['{', '}']) {
            errors.push(ValidationError::PlaceholderPrefix(subsystem.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
