//! Named logger instances

use super::{
    log_level::LogLevel,
    state::{global_state, LoggerState},
};
use std::fmt;
use std::sync::Arc;

/// A named source of log messages.
///
/// Loggers own nothing but their name; threshold, name width and handlers
/// live in the [`LoggerState`] they are bound to. Creating a logger widens
/// that state's name width so lines from differently named loggers align.
///
/// # Example
///
/// ```
/// use leveled_logger::{LevelHandlers, LogHandler, LogLevel, Logger, LoggerState};
/// use std::sync::{Arc, Mutex};
///
/// let lines = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&lines);
/// let state = Arc::new(
///     LoggerState::builder()
///         .threshold(LogLevel::Debug)
///         .handler(LevelHandlers::new().on(LogLevel::Warn, move |line: &str| {
///             sink.lock().unwrap().push(line.to_string())
///         }))
///         .build(),
/// );
///
/// let log = Logger::with_state("svc", state);
/// log.info("ignored, no INFO handler");
/// log.warn("disk low");
///
/// let lines = lines.lock().unwrap();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].ends_with(" [WARN ] svc | disk low"));
/// ```
#[derive(Clone)]
pub struct Logger {
    name: String,
    state: Arc<LoggerState>,
}

impl Logger {
    /// Create a logger bound to the process-wide state.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_state(name, Arc::clone(global_state()))
    }

    /// Create a logger bound to an explicit state.
    #[must_use]
    pub fn with_state(name: impl Into<String>, state: Arc<LoggerState>) -> Self {
        let name = name.into();
        state.register_name(&name);
        Self { name, state }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> &Arc<LoggerState> {
        &self.state
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.state.is_enabled(level)
    }

    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        self.state.log(level, &self.name, message);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("name", &self.name).finish()
    }
}
