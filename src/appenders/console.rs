//! Console appender implementation

use crate::core::{Appender, LineFormatter, LogEntry, Result, TimestampFormat};
use std::io::Write;

/// Writes rendered lines to standard output.
///
/// Every level goes to stdout; the facade treats stdout as the single shared
/// sink. The stdout lock is held for the duration of each line so concurrent
/// writers cannot interleave within a line.
pub struct ConsoleAppender {
    formatter: LineFormatter,
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            formatter: LineFormatter::new(),
            use_colors: false,
        }
    }

    /// Colorize whole lines by level. Off by default so the documented line
    /// layout is byte-exact.
    #[cfg(feature = "console")]
    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            formatter: LineFormatter::new(),
            use_colors,
        }
    }

    /// Set the timestamp format for this appender
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.formatter = self.formatter.with_timestamp_format(format);
        self
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = self.formatter.format(entry);
        let line = self.colorize(entry, line);
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

impl ConsoleAppender {
    #[cfg(feature = "console")]
    fn colorize(&self, entry: &LogEntry, line: String) -> String {
        use colored::Colorize;
        if self.use_colors {
            line.color(entry.level.color_code()).to_string()
        } else {
            line
        }
    }

    #[cfg(not(feature = "console"))]
    fn colorize(&self, _entry: &LogEntry, line: String) -> String {
        let _ = self.use_colors;
        line
    }
}
