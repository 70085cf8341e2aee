//! # Leveled Logger
//!
//! A minimal process-wide leveled logger. Named [`Logger`]s format each
//! message as `<timestamp> [<LEVEL>] <name> | <message>` and hand the line to
//! every registered handler-set.
//!
//! ## Features
//!
//! - **Level gate**: one process-wide threshold, initialized from `LOG_LEVEL`
//! - **Aligned names**: names are padded to the longest logger name seen so far
//! - **Pluggable output**: any number of handler-sets, each covering some or all levels
//! - **Thread safe**: shared state is lock-protected and replaced atomically
//!
//! ```
//! use leveled_logger::prelude::*;
//!
//! set_log_level(LogLevel::Debug);
//! let log = Logger::new("svc");
//! log.warn("disk low");
//! ```

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        log_level, set_log_handler, set_log_handlers, set_log_level, LevelHandlers, LogHandler,
        LogLevel, Logger, LoggerError, LoggerState, Result,
    };
}

pub use self::core::{
    format_line, global_state, log_level, set_log_handler, set_log_handlers, set_log_level,
    HandlerFn, HandlerSet, LevelHandlers, LogHandler, LogLevel, Logger, LoggerError, LoggerState,
    LoggerStateBuilder, Result, LOG_LEVEL_ENV,
};
