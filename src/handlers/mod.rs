//! Handler implementations

pub mod console;

pub use console::{default_handlers, routed_handlers};

#[cfg(feature = "console")]
pub use console::colored_handlers;

// Re-export handler types for convenience
pub use crate::core::{HandlerFn, HandlerSet, LevelHandlers, LogHandler};
