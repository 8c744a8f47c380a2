//! Error types for picture construction and output

use thiserror::Error;

/// Result type alias for picture operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or writing pictures
#[derive(Error, Debug)]
pub enum Error {
    /// A dimension, margin or frame character outside its valid domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A scene description could not be parsed
    #[error("Invalid scene: {0}")]
    Scene(String),

    /// Writing to the output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Formatting into a text sink failed
    #[error("Formatting failed")]
    Format(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Scene(err.to_string())
    }
}
