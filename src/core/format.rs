//! Line formatting
//!
//! Every handler receives the same line:
//! `<timestamp> [<TAG>] <padded name> | <message>`.

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::fmt;

/// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

#[must_use]
pub fn format_timestamp(datetime: &DateTime<Utc>) -> String {
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// Build the formatted line handed to handlers.
///
/// `name` is right-padded with spaces to `width` characters; names that are
/// already at least `width` long are left untouched.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use leveled_logger::core::format::format_line;
/// use leveled_logger::LogLevel;
///
/// let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
/// let line = format_line(&ts, LogLevel::Warn, "svc", 5, "disk low");
/// assert_eq!(line, "2024-03-01T12:00:00.000Z [WARN ] svc   | disk low");
/// ```
#[must_use]
pub fn format_line(
    timestamp: &DateTime<Utc>,
    level: LogLevel,
    name: &str,
    width: usize,
    message: impl fmt::Display,
) -> String {
    format!(
        "{} [{}] {:<width$} | {}",
        format_timestamp(timestamp),
        level.tag(),
        name,
        message,
        width = width
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap()
            + chrono::Duration::milliseconds(123)
    }

    #[test]
    fn test_timestamp_is_iso8601_millis() {
        assert_eq!(format_timestamp(&fixed()), "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_line_layout() {
        let line = format_line(&fixed(), LogLevel::Error, "db", 2, "boom");
        assert_eq!(line, "2025-01-08T10:30:45.123Z [ERROR] db | boom");
    }

    #[test]
    fn test_name_padding() {
        let line = format_line(&fixed(), LogLevel::Info, "a", 4, "x");
        assert!(line.ends_with(" [INFO ] a    | x"), "{line}");
    }

    #[test]
    fn test_no_truncation() {
        let line = format_line(&fixed(), LogLevel::Debug, "longname", 3, "x");
        assert!(line.ends_with(" [DEBUG] longname | x"), "{line}");
    }

    #[test]
    fn test_display_message() {
        let line = format_line(&fixed(), LogLevel::Info, "n", 1, 42);
        assert!(line.ends_with("n | 42"));
    }
}
