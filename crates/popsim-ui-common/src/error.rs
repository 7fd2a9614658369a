//! Error types for session and configuration operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for ui-common operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from session and configuration operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Failed to read a configuration file.
    #[error("failed to load config from {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The presenter failed while drawing a frame.
    #[error("presentation failed: {0}")]
    Presentation(#[from] popsim_core::PopError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
