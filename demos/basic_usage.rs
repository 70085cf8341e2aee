//! Basic logger usage example
//!
//! Demonstrates the default console handlers, threshold changes and
//! multiple handler-sets.
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::handlers::colored_handlers;
use leveled_logger::prelude::*;

fn main() {
    println!("=== Leveled Logger - Basic Usage Example ===\n");

    set_log_level(LogLevel::Debug);
    let api = Logger::new("api");
    let db = Logger::new("database");

    println!("1. Default handlers (DEBUG/INFO to stdout, WARN/ERROR to stderr):");
    api.debug("This is a debug message");
    api.info("This is an info message");
    db.warn("This is a warning message");
    db.error("This is an error message");

    println!("\n2. Threshold raised to WARN:");
    set_log_level(LogLevel::Warn);
    api.info("Info message (hidden)");
    api.warn("Warning message (visible)");

    println!("\n3. Colored console plus an error-only handler-set:");
    set_log_handlers([
        LogHandler::levels(colored_handlers()),
        LogHandler::levels(
            LevelHandlers::new().on(LogLevel::Error, |line: &str| println!("ALERT >> {}", line)),
        ),
    ]);
    api.warn("Shown once");
    db.error("Shown twice");

    println!("\n=== Example completed successfully! ===");
}
