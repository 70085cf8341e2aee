//! Shared logger state
//!
//! Every [`Logger`](super::Logger) reads three pieces of shared state: the
//! threshold, the widest registered name and the ordered handler-set list.
//! [`LoggerState`] owns all three. One instance is process-wide (see
//! [`global_state`]); independent instances can be built for isolation.

use super::format::format_line;
use super::handler::{HandlerSet, LogHandler};
use super::log_level::LogLevel;
use chrono::Utc;
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

static GLOBAL_STATE: OnceLock<Arc<LoggerState>> = OnceLock::new();

/// The process-wide state, initialized on first use.
///
/// The threshold is resolved from `LOG_LEVEL` exactly once, here.
pub fn global_state() -> &'static Arc<LoggerState> {
    GLOBAL_STATE.get_or_init(|| Arc::new(LoggerState::from_env()))
}

/// Current process-wide threshold.
pub fn log_level() -> LogLevel {
    global_state().threshold()
}

/// Replace the process-wide threshold.
pub fn set_log_level(level: LogLevel) {
    global_state().set_threshold(level);
}

/// Replace the process-wide handler-set list.
///
/// ```
/// use leveled_logger::{set_log_handlers, LevelHandlers, LogHandler, LogLevel};
///
/// set_log_handlers([
///     LogHandler::all(|line: &str| println!("{line}")),
///     LogHandler::levels(
///         LevelHandlers::new().on(LogLevel::Error, |line: &str| eprintln!("{line}")),
///     ),
/// ]);
/// ```
pub fn set_log_handlers<I>(handlers: I)
where
    I: IntoIterator<Item = LogHandler>,
{
    global_state().set_handlers(handlers);
}

/// Route every severity of the process-wide logger to one function.
pub fn set_log_handler<F>(handler: F)
where
    F: Fn(&str) + Send + Sync + 'static,
{
    set_log_handlers([LogHandler::all(handler)]);
}

fn default_handler_sets() -> Vec<LogHandler> {
    vec![LogHandler::levels(crate::handlers::console::default_handlers())]
}

pub struct LoggerState {
    threshold: RwLock<LogLevel>,
    max_name_width: AtomicUsize,
    handlers: RwLock<Arc<[HandlerSet]>>,
}

impl LoggerState {
    /// State with the given threshold and the default console handler-set.
    #[must_use]
    pub fn new(threshold: LogLevel) -> Self {
        Self::with_handlers(threshold, default_handler_sets())
    }

    /// State whose threshold comes from `LOG_LEVEL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(LogLevel::from_env())
    }

    #[must_use]
    pub fn with_handlers<I>(threshold: LogLevel, handlers: I) -> Self
    where
        I: IntoIterator<Item = LogHandler>,
    {
        Self {
            threshold: RwLock::new(threshold),
            max_name_width: AtomicUsize::new(0),
            handlers: RwLock::new(Self::normalize(handlers)),
        }
    }

    #[must_use]
    pub fn builder() -> LoggerStateBuilder {
        LoggerStateBuilder::new()
    }

    fn normalize<I>(handlers: I) -> Arc<[HandlerSet]>
    where
        I: IntoIterator<Item = LogHandler>,
    {
        handlers.into_iter().map(HandlerSet::from).collect()
    }

    pub fn threshold(&self) -> LogLevel {
        *self.threshold.read()
    }

    pub fn set_threshold(&self, level: LogLevel) {
        *self.threshold.write() = level;
    }

    /// Whether a message of `level` passes the gate.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level >= self.threshold()
    }

    pub fn max_name_width(&self) -> usize {
        self.max_name_width.load(Ordering::Acquire)
    }

    /// Widen the shared name width to fit `name`; returns the resulting width.
    pub fn register_name(&self, name: &str) -> usize {
        let len = name.chars().count();
        self.max_name_width.fetch_max(len, Ordering::AcqRel).max(len)
    }

    /// Replace the handler-set list wholesale.
    ///
    /// An empty iterator leaves no handlers: accepted messages go nowhere.
    pub fn set_handlers<I>(&self, handlers: I)
    where
        I: IntoIterator<Item = LogHandler>,
    {
        let sets = Self::normalize(handlers);
        *self.handlers.write() = sets;
    }

    pub fn handler_set_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Snapshot of the current list. Later reconfiguration does not affect it.
    pub fn handler_sets(&self) -> Arc<[HandlerSet]> {
        Arc::clone(&*self.handlers.read())
    }

    /// Format one line and fan it out to every handler-set registered for
    /// `level`, in registration order.
    ///
    /// The gate is not consulted here. A panicking handler unwinds into the
    /// caller and the remaining handler-sets are skipped.
    pub fn dispatch(&self, level: LogLevel, name: &str, message: impl fmt::Display) {
        let line = format_line(&Utc::now(), level, name, self.max_name_width(), message);
        // Handlers run outside the lock so they may reconfigure the state.
        let sets = self.handler_sets();
        for set in sets.iter() {
            set.emit(level, &line);
        }
    }

    /// Gate, then dispatch.
    pub fn log(&self, level: LogLevel, name: &str, message: impl fmt::Display) {
        if !self.is_enabled(level) {
            return;
        }
        self.dispatch(level, name, message);
    }

    /// Restore the initial configuration: threshold from `LOG_LEVEL`, name
    /// width zero, default handler-set.
    ///
    /// Loggers constructed before the reset keep working but no longer count
    /// towards the name width.
    pub fn reset(&self) {
        self.set_threshold(LogLevel::from_env());
        self.max_name_width.store(0, Ordering::Release);
        self.set_handlers(default_handler_sets());
    }
}

impl Default for LoggerState {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl fmt::Debug for LoggerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerState")
            .field("threshold", &self.threshold())
            .field("max_name_width", &self.max_name_width())
            .field("handler_sets", &self.handler_set_count())
            .finish()
    }
}

/// Builder for [`LoggerState`]
pub struct LoggerStateBuilder {
    threshold: LogLevel,
    handlers: Option<Vec<LogHandler>>,
}

impl LoggerStateBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            threshold: LogLevel::Info,
            handlers: None,
        }
    }

    /// Set the threshold
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: LogLevel) -> Self {
        self.threshold = level;
        self
    }

    /// Take the threshold from `LOG_LEVEL`
    #[must_use = "builder methods return a new value"]
    pub fn threshold_from_env(mut self) -> Self {
        self.threshold = LogLevel::from_env();
        self
    }

    /// Append a handler-set
    ///
    /// Once any handler is added, the default console handler-set is not
    /// installed.
    #[must_use = "builder methods return a new value"]
    pub fn handler(mut self, handler: impl Into<LogHandler>) -> Self {
        self.handlers.get_or_insert_with(Vec::new).push(handler.into());
        self
    }

    /// Append several handler-sets
    #[must_use = "builder methods return a new value"]
    pub fn handlers<I>(mut self, handlers: I) -> Self
    where
        I: IntoIterator<Item = LogHandler>,
    {
        self.handlers.get_or_insert_with(Vec::new).extend(handlers);
        self
    }

    /// Start with an empty handler-set list
    #[must_use = "builder methods return a new value"]
    pub fn no_handlers(mut self) -> Self {
        self.handlers = Some(Vec::new());
        self
    }

    /// Build the state
    pub fn build(self) -> LoggerState {
        match self.handlers {
            Some(handlers) => LoggerState::with_handlers(self.threshold, handlers),
            None => LoggerState::new(self.threshold),
        }
    }
}

impl Default for LoggerStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::handler::LevelHandlers;
    use parking_lot::Mutex;

    type Lines = Arc<Mutex<Vec<String>>>;

    fn capture(lines: &Lines, tag: &'static str) -> impl Fn(&str) + Send + Sync + 'static {
        let lines = Arc::clone(lines);
        move |line: &str| lines.lock().push(format!("{tag}:{line}"))
    }

    #[test]
    fn test_gate_matrix() {
        let state = LoggerState::builder().no_handlers().build();
        let all = [
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
            LogLevel::Off,
        ];
        for threshold in all {
            state.set_threshold(threshold);
            for level in all {
                let expected = level != LogLevel::Off && level.rank() >= threshold.rank();
                assert_eq!(state.is_enabled(level), expected, "{level} at {threshold}");
            }
        }
    }

    #[test]
    fn test_register_name_is_monotonic() {
        let state = LoggerState::builder().no_handlers().build();
        assert_eq!(state.max_name_width(), 0);
        assert_eq!(state.register_name("abc"), 3);
        assert_eq!(state.register_name("a"), 3);
        assert_eq!(state.register_name("abcdef"), 6);
        assert_eq!(state.max_name_width(), 6);
    }

    #[test]
    fn test_register_name_counts_chars() {
        let state = LoggerState::builder().no_handlers().build();
        assert_eq!(state.register_name("héllo"), 5);
    }

    #[test]
    fn test_dispatch_order_and_skips() {
        let lines = Lines::default();
        let state = LoggerState::builder()
            .threshold(LogLevel::Debug)
            .handler(LogHandler::all(capture(&lines, "A")))
            .handler(LevelHandlers::new().on(LogLevel::Error, capture(&lines, "B")))
            .build();
        state.register_name("n");

        state.log(LogLevel::Info, "n", "one");
        state.log(LogLevel::Error, "n", "two");

        let lines = lines.lock();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("A:") && lines[0].ends_with("[INFO ] n | one"));
        assert!(lines[1].starts_with("A:") && lines[1].ends_with("[ERROR] n | two"));
        assert!(lines[2].starts_with("B:") && lines[2].ends_with("[ERROR] n | two"));
    }

    #[test]
    fn test_set_handlers_replaces_wholesale() {
        let lines = Lines::default();
        let state = LoggerState::builder()
            .handler(LogHandler::all(capture(&lines, "old")))
            .build();
        state.set_handlers([LogHandler::all(capture(&lines, "new"))]);
        assert_eq!(state.handler_set_count(), 1);

        state.log(LogLevel::Info, "n", "m");
        let lines = lines.lock();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("new:"));
    }

    #[test]
    fn test_empty_configuration_is_silent() {
        let lines = Lines::default();
        let state = LoggerState::builder()
            .threshold(LogLevel::Debug)
            .handler(LogHandler::all(capture(&lines, "x")))
            .build();
        state.set_handlers(std::iter::empty());
        assert_eq!(state.handler_set_count(), 0);

        for level in LogLevel::MESSAGE_LEVELS {
            state.log(level, "n", "m");
        }
        assert!(lines.lock().is_empty());
    }

    #[test]
    fn test_handler_may_reconfigure() {
        let lines = Lines::default();
        let state = Arc::new(LoggerState::builder().no_handlers().build());
        let weak = Arc::downgrade(&state);
        let sink = capture(&lines, "first");
        state.set_handlers([LogHandler::all(move |line: &str| {
            sink(line);
            if let Some(state) = weak.upgrade() {
                state.set_handlers(std::iter::empty());
            }
        })]);

        state.log(LogLevel::Info, "n", "one");
        state.log(LogLevel::Info, "n", "two");
        assert_eq!(lines.lock().len(), 1);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let state = LoggerState::builder()
            .threshold(LogLevel::Error)
            .no_handlers()
            .build();
        state.register_name("something");
        state.reset();

        assert_eq!(state.max_name_width(), 0);
        assert_eq!(state.threshold(), LogLevel::from_env());
        assert_eq!(state.handler_set_count(), 1);
    }

    #[test]
    fn test_default_state_has_one_handler_set() {
        let state = LoggerState::default();
        assert_eq!(state.handler_set_count(), 1);
        let sets = state.handler_sets();
        for level in LogLevel::MESSAGE_LEVELS {
            assert!(sets[0].get(level).is_some(), "{level} has no default handler");
        }
    }

    #[test]
    fn test_builder_default_installs_console() {
        let state = LoggerState::builder().build();
        assert_eq!(state.handler_set_count(), 1);
        assert_eq!(state.threshold(), LogLevel::Info);
    }
}
