//! Error types for Cadence core operations.
//!
//! Errors are local to a single render or prompt call. Lookup gaps in the
//! theme are never errors; they resolve to the section default.

use thiserror::Error;

/// Result type alias for Cadence operations.
pub type Result<T> = std::result::Result<T, CadenceError>;

/// Core error type for Cadence operations.
#[derive(Debug, Error)]
pub enum CadenceError {
    /// Malformed element payload, raised before any output is emitted
    #[error("Validation error: {0}")]
    Validation(String),

    /// Theme could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Interactive chooser missing or failed
    #[error("Interactive prompt unavailable: {0}")]
    Interactive(String),

    /// The terminal sink failed to write
    #[error("Render error: {0}")]
    Render(String),
}

impl From<std::io::Error> for CadenceError {
    fn from(err: std::io::Error) -> Self {
        CadenceError::Render(err.to_string())
    }
}

impl From<toml::de::Error> for CadenceError {
    fn from(err: toml::de::Error) -> Self {
        CadenceError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CadenceError {
    fn from(err: toml::ser::Error) -> Self {
        CadenceError::Config(err.to_string())
    }
}
