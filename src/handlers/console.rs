//! Console handlers
//!
//! The default handler-set routes DEBUG and INFO lines to stdout and WARN and
//! ERROR lines to stderr. Colored output needs the `console` feature.

use crate::core::{HandlerFn, LevelHandlers, LogLevel};
#[cfg(feature = "console")]
use colored::{Color, Colorize};
use std::sync::Arc;

/// Map DEBUG/INFO to `out` and WARN/ERROR to `err`.
///
/// This is the routing the default handler-set uses; passing other functions
/// lets the routing be exercised without touching the real streams.
pub fn routed_handlers(out: HandlerFn, err: HandlerFn) -> LevelHandlers {
    LevelHandlers::new()
        .on_shared(LogLevel::Debug, Arc::clone(&out))
        .on_shared(LogLevel::Info, out)
        .on_shared(LogLevel::Warn, Arc::clone(&err))
        .on_shared(LogLevel::Error, err)
}

/// Plain stdout/stderr handler-set installed before any configuration.
pub fn default_handlers() -> LevelHandlers {
    routed_handlers(
        Arc::new(|line: &str| println!("{}", line)),
        Arc::new(|line: &str| eprintln!("{}", line)),
    )
}

/// Same routing as [`default_handlers`], with each line colored by severity.
#[cfg(feature = "console")]
pub fn colored_handlers() -> LevelHandlers {
    LogLevel::MESSAGE_LEVELS
        .into_iter()
        .fold(LevelHandlers::new(), |handlers, level| {
            let color = level_color(level);
            let to_stderr = level >= LogLevel::Warn;
            handlers.on(level, move |line: &str| {
                let line = line.color(color);
                if to_stderr {
                    eprintln!("{}", line);
                } else {
                    println!("{}", line);
                }
            })
        })
}

#[cfg(feature = "console")]
fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Debug => Color::Blue,
        LogLevel::Info => Color::Green,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Error | LogLevel::Off => Color::Red,
    }
}
