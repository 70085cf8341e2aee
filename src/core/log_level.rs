//! Log level definitions

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted for the initial process-wide threshold.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Ordered severity. `Off` is only meaningful as a threshold: it ranks above
/// every message severity, so a threshold of `Off` lets nothing through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    Off = 4,
}

impl LogLevel {
    /// Severities a message can carry, in rank order.
    pub const MESSAGE_LEVELS: [LogLevel; 4] =
        [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Off => "OFF",
        }
    }

    /// Fixed-width tag used inside the brackets of a formatted line.
    pub fn tag(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO ",
            LogLevel::Warn => "WARN ",
            LogLevel::Error => "ERROR",
            LogLevel::Off => "",
        }
    }

    /// Integer rank used for ordering.
    #[inline]
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Slot of a message severity inside a handler table, `None` for `Off`.
    #[inline]
    pub(crate) fn slot(&self) -> Option<usize> {
        match self {
            LogLevel::Off => None,
            level => Some(level.rank() as usize),
        }
    }

    /// Resolve an optional configuration value into a threshold.
    ///
    /// Absent, empty or unrecognized values fall back to [`LogLevel::Info`].
    ///
    /// ```
    /// use leveled_logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::resolve(Some("debug")), LogLevel::Debug);
    /// assert_eq!(LogLevel::resolve(Some("verbose")), LogLevel::Info);
    /// assert_eq!(LogLevel::resolve(None), LogLevel::Info);
    /// ```
    pub fn resolve(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    /// Resolve the threshold from the [`LOG_LEVEL_ENV`] environment variable.
    pub fn from_env() -> Self {
        let value = std::env::var(LOG_LEVEL_ENV).ok();
        Self::resolve(value.as_deref())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "OFF" => Ok(LogLevel::Off),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}
