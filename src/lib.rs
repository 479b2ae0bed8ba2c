//! # Named Logger System
//!
//! A logging facade giving each subsystem of a process its own named logger,
//! keyed by a prefix string and independently leveled at runtime, while all
//! loggers share one process-wide registry and one output sink.
//!
//! ## Features
//!
//! - **Named loggers**: one instance per prefix, memoized in a registry
//! - **Caller location**: every line carries the caller's file, line, and
//!   function, resolved by walking past the facade's own frames
//! - **Runtime control**: per-prefix level updates observed by every handle
//! - **Thread safe**: designed for concurrent environments
//!
//! ## Line format
//!
//! ```text
//! [2025-01-08 10:30:45][sfu][session.rs:88][INFO][join_room] => peer joined
//! ```
//!
//! ## Example
//!
//! ```
//! use named_logger_system::prelude::*;
//!
//! named_logger_system::init("info", vec![], vec![]);
//! let logger = named_logger_system::new_logger(LogLevel::Info, "sfu");
//! logger.info("node ready");
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryAppender, MemoryBuffer};
    pub use crate::core::{
        Appender, CallerInfo, CallerOverrides, FieldValue, LineFormatter, LogConfig, LogContext,
        LogEntry, LogLevel, Logger, LoggerError, LoggerHandle, Registry, Result, TimestampFormat,
    };
}

pub use crate::appenders::{ConsoleAppender, MemoryAppender, MemoryBuffer};
pub use crate::core::{
    Appender, CallerInfo, CallerOverrides, FieldValue, LineFormatter, LogConfig, LogContext,
    LogEntry, LogLevel, Logger, LoggerError, LoggerHandle, Registry, Result, TimestampFormat,
};

use std::collections::HashMap;

/// Configure the process-wide registry.
///
/// `level` sets the default level; recognized names are `trace`, `debug`,
/// `info`, `warn`, and `error`, with anything else falling back to `debug`.
/// The two pattern lists adjust caller resolution as described on
/// [`CallerOverrides`].
pub fn init(level: &str, fix_by_file: Vec<String>, fix_by_func: Vec<String>) {
    Registry::global().init(level, fix_by_file, fix_by_func);
}

/// Configure the process-wide registry from a parsed [`LogConfig`]
pub fn init_from_config(config: &LogConfig) {
    Registry::global().init_from_config(config);
}

/// Get or create the logger registered under `prefix` in the process-wide
/// registry.
pub fn new_logger(level: LogLevel, prefix: &str) -> LoggerHandle {
    Registry::global().create_or_get(level, prefix)
}

/// Like [`new_logger`], attaching static fields rendered with every line
pub fn new_logger_with_fields(level: LogLevel, prefix: &str, fields: LogContext) -> LoggerHandle {
    Registry::global().create_or_get_with_fields(level, prefix, fields)
}

/// Update the level of a registered logger in the process-wide registry
pub fn set_level(prefix: &str, level: LogLevel) -> Result<()> {
    Registry::global().set_level(prefix, level)
}

/// Snapshot of all loggers in the process-wide registry
pub fn get_loggers() -> HashMap<String, LoggerHandle> {
    Registry::global().loggers()
}

/// Log at trace level through the root logger
pub fn trace(message: impl Into<String>) {
    Registry::global().root().trace(message);
}

/// Log at debug level through the root logger
pub fn debug(message: impl Into<String>) {
    Registry::global().root().debug(message);
}

/// Log at info level through the root logger
pub fn info(message: impl Into<String>) {
    Registry::global().root().info(message);
}

/// Log at warn level through the root logger
pub fn warn(message: impl Into<String>) {
    Registry::global().root().warn(message);
}

/// Log at error level through the root logger
pub fn error(message: impl Into<String>) {
    Registry::global().root().error(message);
}

/// Log at fatal level through the root logger
pub fn fatal(message: impl Into<String>) {
    Registry::global().root().fatal(message);
}

/// Log at panic level through the root logger, flush, and unwind the
/// calling thread
pub fn panic(message: impl Into<String>) -> ! {
    Registry::global().root().panic(message)
}
