//! Named logger implementation

use super::{
    appender::Appender,
    caller::{self, CallerOverrides},
    log_context::LogContext,
    log_entry::LogEntry,
    log_level::LogLevel,
};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// Shared handle to a registered logger.
///
/// All handles for a given prefix point at the same instance, so a level
/// update through the registry is observed by every holder.
pub type LoggerHandle = Arc<Logger>;

/// A named logger bound to the shared sink.
///
/// Instances are created through a [`Registry`](super::registry::Registry);
/// the registry guarantees one instance per prefix.
pub struct Logger {
    prefix: String,
    min_level: RwLock<LogLevel>,
    fields: LogContext,
    sink: Arc<Mutex<Box<dyn Appender>>>,
    overrides: Arc<RwLock<CallerOverrides>>,
}

impl Logger {
    pub(crate) fn new(
        prefix: &str,
        min_level: LogLevel,
        fields: LogContext,
        sink: Arc<Mutex<Box<dyn Appender>>>,
        overrides: Arc<RwLock<CallerOverrides>>,
    ) -> Self {
        Self {
            prefix: prefix.to_string(),
            min_level: RwLock::new(min_level),
            fields,
            sink,
            overrides,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    /// Static fields rendered with every line from this logger
    pub fn fields(&self) -> &LogContext {
        &self.fields
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if level < *self.min_level.read() {
            return;
        }
        self.emit(level, message.into());
    }

    fn emit(&self, level: LogLevel, message: String) {
        let mut entry = LogEntry::new(level, &self.prefix, message);
        if !self.fields.is_empty() {
            entry = entry.with_context(self.fields.clone());
        }
        let overrides = self.overrides.read().clone();
        if let Some(info) = caller::resolve(&overrides) {
            entry = entry.with_caller(info);
        }

        let mut sink = self.sink.lock();
        if let Err(e) = sink.append(&entry) {
            eprintln!("[LOGGER ERROR] sink '{}' failed: {}", sink.name(), e);
        }
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    /// Emit at panic level, flush the sink, then unwind the calling thread.
    ///
    /// The level gate does not apply; the message is flushed before the
    /// unwind starts. Termination stays under caller control: the panic can
    /// be caught with `std::panic::catch_unwind`.
    pub fn panic(&self, message: impl Into<String>) -> ! {
        let message = message.into();
        self.emit(LogLevel::Panic, message.clone());
        {
            let mut sink = self.sink.lock();
            if let Err(e) = sink.flush() {
                eprintln!("[LOGGER ERROR] sink '{}' flush failed: {}", sink.name(), e);
            }
        }
        panic!("{}", message);
    }

    pub fn flush(&self) -> super::error::Result<()> {
        self.sink.lock().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;

    fn memory_logger(level: LogLevel) -> (Logger, crate::appenders::MemoryBuffer) {
        let appender = MemoryAppender::new();
        let buffer = appender.buffer();
        let sink: Arc<Mutex<Box<dyn Appender>>> = Arc::new(Mutex::new(Box::new(appender)));
        let logger = Logger::new(
            "test",
            level,
            LogContext::new(),
            sink,
            Arc::new(RwLock::new(CallerOverrides::default())),
        );
        (logger, buffer)
    }

    #[test]
    fn test_level_gate() {
        let (logger, buffer) = memory_logger(LogLevel::Info);
        logger.debug("suppressed");
        logger.info("emitted");
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("=> emitted"));
    }

    #[test]
    fn test_set_level_takes_effect() {
        let (logger, buffer) = memory_logger(LogLevel::Error);
        logger.info("before");
        logger.set_level(LogLevel::Trace);
        logger.info("after");
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("=> after"));
    }

    #[test]
    fn test_fields_rendered_on_every_line() {
        let appender = MemoryAppender::new();
        let buffer = appender.buffer();
        let sink: Arc<Mutex<Box<dyn Appender>>> = Arc::new(Mutex::new(Box::new(appender)));
        let logger = Logger::new(
            "sfu",
            LogLevel::Trace,
            LogContext::new().with_field("node", "edge-1"),
            sink,
            Arc::new(RwLock::new(CallerOverrides::default())),
        );
        logger.info("first");
        logger.warn("second");
        for line in buffer.lines() {
            assert!(line.contains("node=edge-1"));
        }
    }

    #[test]
    fn test_panic_emits_before_unwind() {
        let (logger, buffer) = memory_logger(LogLevel::Panic);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.panic("unrecoverable");
        }));
        assert!(result.is_err());
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[PANIC]"));
        assert!(lines[0].contains("=> unrecoverable"));
    }
}
