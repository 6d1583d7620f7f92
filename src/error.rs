use thiserror::Error;

/// errors raised by the coloring engine and its drivers
#[derive(Error, Debug)]
pub enum ColorError {
    /// a parameter is out of range (n, p, k, number of trials, vertex ids, ...)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// file read/write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// configuration or report (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// malformed instance or solution file
    #[error("parse error: {0}")]
    Parse(String),
}

impl ColorError {
    /// creates an invalid argument error
    pub fn invalid(message: impl Into<String>) -> Self {
        ColorError::InvalidArgument(message.into())
    }

    /// creates a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        ColorError::Parse(message.into())
    }
}

/// result type used across the crate
pub type Result<T> = std::result::Result<T, ColorError>;
