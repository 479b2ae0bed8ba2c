//! In-memory appender for tests and output introspection

use crate::core::{Appender, LineFormatter, LogEntry, Result, TimestampFormat};
use parking_lot::Mutex;
use std::sync::Arc;

/// Buffers rendered lines instead of writing them to a stream.
///
/// Obtain a [`MemoryBuffer`] with [`MemoryAppender::buffer`] before handing
/// the appender to a registry; the buffer remains readable afterwards.
pub struct MemoryAppender {
    formatter: LineFormatter,
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self {
            formatter: LineFormatter::new(),
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the timestamp format for this appender
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.formatter = self.formatter.with_timestamp_format(format);
        self
    }

    /// Reader handle onto the captured lines
    pub fn buffer(&self) -> MemoryBuffer {
        MemoryBuffer {
            lines: Arc::clone(&self.lines),
        }
    }
}

impl Default for MemoryAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = self.formatter.format(entry);
        self.lines.lock().push(line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Shared view of the lines a [`MemoryAppender`] has captured.
#[derive(Clone)]
pub struct MemoryBuffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryBuffer {
    /// Snapshot of all captured lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}
