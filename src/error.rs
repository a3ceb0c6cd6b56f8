//! Error types for the coverage engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only configuration loading is fallible: the coverage computations
//! themselves degrade by excluding malformed records rather than erroring,
//! so a dashboard keeps rendering partial data.

use thiserror::Error;

/// The main error type for the coverage engine.
///
/// # Example
///
/// ```
/// use coverage_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/palette.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/palette.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The color palette configuration was invalid.
    #[error("Invalid palette: {message}")]
    InvalidPalette {
        /// A description of what made the palette invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
