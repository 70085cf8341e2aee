//! Core logger types

pub mod error;
pub mod format;
pub mod handler;
pub mod log_level;
pub mod logger;
pub mod state;

pub use error::{LoggerError, Result};
pub use format::{format_line, format_timestamp};
pub use handler::{HandlerFn, HandlerSet, LevelHandlers, LogHandler};
pub use log_level::{LogLevel, LOG_LEVEL_ENV};
pub use logger::Logger;
pub use state::{
    global_state, log_level, set_log_handler, set_log_handlers, set_log_level, LoggerState,
    LoggerStateBuilder,
};
