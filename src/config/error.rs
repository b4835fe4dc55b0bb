//! Configuration loading errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    #[error("failed to read config: {0}")]
    Io(String),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}
