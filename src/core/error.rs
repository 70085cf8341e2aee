//! Error types for the logger system
//!
//! Logging itself never fails: bad configuration falls back to defaults and
//! handler panics propagate to the caller. The only fallible operation is
//! parsing a [`LogLevel`](super::LogLevel) from text.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoggerError {
    /// Text that does not name a log level
    #[error("Invalid log level: '{value}'")]
    InvalidLevel { value: String },
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(value: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            value: value.into(),
        }
    }
}
