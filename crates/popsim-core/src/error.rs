//! Unified error type for popsim
//!
//! The numeric core never fails: evaluators and derivers propagate NaN and
//! infinities instead of raising. [`PopError`] covers the fallible edges around
//! it (palette construction, model names, presenter I/O, sample decoding).
//!
//! # Example
//!
//! ```
//! use popsim_core::{Palette, PopError};
//!
//! let err = Palette::new(Vec::new()).unwrap_err();
//! assert!(matches!(err, PopError::Config(_)));
//! ```

use thiserror::Error;

/// Unified error type for popsim operations.
#[derive(Error, Debug)]
pub enum PopError {
    /// I/O errors raised while presenting or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognized model names or sample values
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration errors (e.g. an empty palette)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using PopError.
pub type PopResult<T> = Result<T, PopError>;
