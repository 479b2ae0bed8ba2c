//! Rendering of log records into bracketed lines

use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;

/// Renders a record as `[timestamp][prefix][file:line][LEVEL][function] => message`.
///
/// The root logger has an empty prefix and its segment is omitted. Static
/// context fields, when present, are appended after the message as
/// space-separated `key=value` pairs. Unresolved caller locations render as
/// an empty file name and line 0.
#[derive(Debug, Clone, Default)]
pub struct LineFormatter {
    timestamp_format: TimestampFormat,
}

impl LineFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn format(&self, entry: &LogEntry) -> String {
        let timestamp = self.timestamp_format.format(&entry.timestamp);
        let file = entry.file.as_deref().unwrap_or("");
        let line = entry.line.unwrap_or(0);
        let function = entry.function.as_deref().unwrap_or("");

        let mut rendered = if entry.prefix.is_empty() {
            format!(
                "[{}][{}:{}][{}][{}] => {}",
                timestamp,
                file,
                line,
                entry.level.to_str(),
                function,
                entry.message
            )
        } else {
            format!(
                "[{}][{}][{}:{}][{}][{}] => {}",
                timestamp,
                entry.prefix,
                file,
                line,
                entry.level.to_str(),
                function,
                entry.message
            )
        };

        if let Some(context) = &entry.context {
            if !context.is_empty() {
                rendered.push(' ');
                rendered.push_str(&context.format_fields());
            }
        }

        rendered
    }
}
