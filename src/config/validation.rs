//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server.name is required")]
    MissingServerName,
    #[error("server.name must contain a '.' and no spaces, got '{0}'")]
    InvalidServerName(String),
    #[error("server.version is required")]
    MissingVersion,
    #[error("limits.{0} must be greater than zero")]
    ZeroLimit(&'static str),
    #[error("limits.max_line_length must be at least 16, got {0}")]
    LineLengthTooSmall(usize),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let name = &config.server.name;
    if name.is_empty() {
        errors.push(ValidationError::MissingServerName);
    } else if !name.contains('.') || name.contains(char::is_whitespace) {
        // Without a dot the name would read back as a nickname prefix.
        errors.push(ValidationError::InvalidServerName(name.clone()));
    }
    if config.server.version.trim().is_empty() {
        errors.push(ValidationError::MissingVersion);
    }

    let limits = &config.limits;
    if limits.max_line_length < 16 {
        errors.push(ValidationError::LineLengthTooSmall(limits.max_line_length));
    }
    if limits.send_queue == 0 {
        errors.push(ValidationError::ZeroLimit("send_queue"));
    }
    if limits.send_timeout_ms == 0 {
        errors.push(ValidationError::ZeroLimit("send_timeout_ms"));
    }
    if limits.close_grace_ms == 0 {
        errors.push(ValidationError::ZeroLimit("close_grace_ms"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
