//! Timestamp formatting utilities

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Timestamp format options for rendered lines
///
/// The default is local wall-clock time with second precision, the format
/// the bracketed line layout documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local date and time with second precision: `2025-01-08 10:30:45`
    #[default]
    DateTime,

    /// Local date and time with millisecond precision: `2025-01-08 10:30:45.123`
    DateTimeMillis,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Local>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::DateTime => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            TimestampFormat::DateTimeMillis => {
                datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
            }
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(123)
    }

    #[test]
    fn test_datetime_format() {
        let result = TimestampFormat::DateTime.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08 10:30:45");
    }

    #[test]
    fn test_datetime_millis_format() {
        let result = TimestampFormat::DateTimeMillis.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08 10:30:45.123");
    }

    #[test]
    fn test_unix_formats() {
        let unix: i64 = TimestampFormat::Unix
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix timestamp");
        let millis: i64 = TimestampFormat::UnixMillis
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix millis timestamp");
        assert!(unix > 0);
        assert!(millis > unix);
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_default_is_datetime() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::DateTime);
    }
}
