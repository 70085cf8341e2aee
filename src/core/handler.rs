//! Output handlers
//!
//! A handler is any function that accepts a formatted line. Handlers are
//! registered either as a single function for every severity or as a partial
//! map from severities to functions; both forms are normalized into a
//! [`HandlerSet`] before they are stored.

use super::log_level::LogLevel;
use std::fmt;
use std::sync::Arc;

/// Function receiving one formatted line.
pub type HandlerFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Partial mapping from message severities to handler functions.
///
/// ```
/// use leveled_logger::{LevelHandlers, LogLevel};
///
/// let handlers = LevelHandlers::new()
///     .on(LogLevel::Warn, |line: &str| eprintln!("{line}"))
///     .on(LogLevel::Error, |line: &str| eprintln!("{line}"));
/// assert!(handlers.get(LogLevel::Error).is_some());
/// assert!(handlers.get(LogLevel::Info).is_none());
/// ```
#[derive(Clone, Default)]
pub struct LevelHandlers {
    slots: [Option<HandlerFn>; 4],
}

impl LevelHandlers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `level`, replacing any previous function for it.
    ///
    /// Registering for [`LogLevel::Off`] has no effect.
    #[must_use = "builder methods return a new value"]
    pub fn on<F>(self, level: LogLevel, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_shared(level, Arc::new(handler))
    }

    /// Same as [`LevelHandlers::on`] for an already shared function.
    #[must_use = "builder methods return a new value"]
    pub fn on_shared(mut self, level: LogLevel, handler: HandlerFn) -> Self {
        if let Some(slot) = level.slot() {
            self.slots[slot] = Some(handler);
        }
        self
    }

    pub fn get(&self, level: LogLevel) -> Option<&HandlerFn> {
        level.slot().and_then(|slot| self.slots[slot].as_ref())
    }

    /// Levels that have a function registered, in rank order.
    pub fn levels(&self) -> Vec<LogLevel> {
        LogLevel::MESSAGE_LEVELS
            .into_iter()
            .filter(|level| self.get(*level).is_some())
            .collect()
    }
}

impl fmt::Debug for LevelHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelHandlers")
            .field("levels", &self.levels())
            .finish()
    }
}

/// One configuration argument: a function for every severity, or a partial
/// severity map.
#[derive(Clone)]
pub enum LogHandler {
    All(HandlerFn),
    Levels(LevelHandlers),
}

impl LogHandler {
    /// One function receiving every severity.
    pub fn all<F>(handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        LogHandler::All(Arc::new(handler))
    }

    /// Functions for a subset of severities.
    pub fn levels(handlers: LevelHandlers) -> Self {
        LogHandler::Levels(handlers)
    }
}

impl From<LevelHandlers> for LogHandler {
    fn from(handlers: LevelHandlers) -> Self {
        LogHandler::Levels(handlers)
    }
}

impl fmt::Debug for LogHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogHandler::All(_) => f.write_str("LogHandler::All"),
            LogHandler::Levels(levels) => f
                .debug_tuple("LogHandler::Levels")
                .field(levels)
                .finish(),
        }
    }
}

/// Normalized handler-set as stored by the dispatcher.
#[derive(Clone, Debug, Default)]
pub struct HandlerSet {
    handlers: LevelHandlers,
}

impl HandlerSet {
    pub fn get(&self, level: LogLevel) -> Option<&HandlerFn> {
        self.handlers.get(level)
    }

    /// Invoke the function registered for `level`, if any.
    ///
    /// Returns whether a function was called.
    pub fn emit(&self, level: LogLevel, line: &str) -> bool {
        match self.get(level) {
            Some(handler) => {
                handler(line);
                true
            }
            None => false,
        }
    }
}

impl From<LogHandler> for HandlerSet {
    fn from(handler: LogHandler) -> Self {
        let handlers = match handler {
            LogHandler::All(f) => LogLevel::MESSAGE_LEVELS
                .into_iter()
                .fold(LevelHandlers::new(), |acc, level| {
                    acc.on_shared(level, Arc::clone(&f))
                }),
            LogHandler::Levels(handlers) => handlers,
        };
        Self { handlers }
    }
}
