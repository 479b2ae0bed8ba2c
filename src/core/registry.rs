//! Process-wide logger registry

use super::{
    appender::Appender,
    caller::CallerOverrides,
    config::LogConfig,
    error::{LoggerError, Result},
    log_context::LogContext,
    log_level::LogLevel,
    logger::{Logger, LoggerHandle},
};
use crate::appenders::ConsoleAppender;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Prefix of the root logger driven by the crate-level functions.
pub(crate) const ROOT_PREFIX: &str = "";

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Owns the prefix-to-logger map, the shared sink, and the caller-resolution
/// overrides.
///
/// One process-wide instance lives behind [`Registry::global`], created
/// lazily on first use and never torn down. Additional instances can be
/// constructed with an injected sink, which is how the test suite observes
/// output without touching stdout.
pub struct Registry {
    loggers: Mutex<HashMap<String, LoggerHandle>>,
    default_level: RwLock<LogLevel>,
    overrides: Arc<RwLock<CallerOverrides>>,
    sink: Arc<Mutex<Box<dyn Appender>>>,
}

impl Registry {
    /// Registry writing to standard output
    pub fn new() -> Self {
        Self::with_appender(Box::new(ConsoleAppender::new()))
    }

    /// Registry writing to the given sink
    pub fn with_appender(sink: Box<dyn Appender>) -> Self {
        Self {
            loggers: Mutex::new(HashMap::new()),
            default_level: RwLock::new(LogLevel::Info),
            overrides: Arc::new(RwLock::new(CallerOverrides::default())),
            sink: Arc::new(Mutex::new(sink)),
        }
    }

    /// The process-wide registry
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    /// Configure the default level and the caller-skip overrides.
    ///
    /// The recognized level names are `trace`, `debug`, `info`, `warn`, and
    /// `error`; anything else falls back to `Debug`. The root logger, if
    /// already created, is moved to the new level; named loggers keep their
    /// own levels.
    pub fn init(&self, level: &str, fix_by_file: Vec<String>, fix_by_func: Vec<String>) {
        let level = LogLevel::parse_or_default(level);
        *self.default_level.write() = level;
        {
            let mut overrides = self.overrides.write();
            overrides.fix_by_file = fix_by_file;
            overrides.fix_by_func = fix_by_func;
        }
        if let Some(root) = self.loggers.lock().get(ROOT_PREFIX) {
            root.set_level(level);
        }
    }

    /// Apply a parsed configuration
    pub fn init_from_config(&self, config: &LogConfig) {
        self.init(
            &config.level,
            config.fix_by_file.clone(),
            config.fix_by_func.clone(),
        );
        self.set_skip_frames(config.skip_frames);
    }

    /// Explicit number of extra frames to skip past the resolved caller
    pub fn set_skip_frames(&self, frames: usize) {
        self.overrides.write().extra_skip = frames;
    }

    pub fn default_level(&self) -> LogLevel {
        *self.default_level.read()
    }

    /// Get or create the logger registered under `prefix`.
    ///
    /// The first call for a prefix creates the instance at `level`; later
    /// calls return the existing instance and ignore their arguments.
    pub fn create_or_get(&self, level: LogLevel, prefix: &str) -> LoggerHandle {
        self.create_or_get_with_fields(level, prefix, LogContext::new())
    }

    /// Like [`create_or_get`](Self::create_or_get), attaching static fields
    /// at creation.
    pub fn create_or_get_with_fields(
        &self,
        level: LogLevel,
        prefix: &str,
        fields: LogContext,
    ) -> LoggerHandle {
        let mut loggers = self.loggers.lock();
        if let Some(existing) = loggers.get(prefix) {
            return Arc::clone(existing);
        }
        let logger = Arc::new(Logger::new(
            prefix,
            level,
            fields,
            Arc::clone(&self.sink),
            Arc::clone(&self.overrides),
        ));
        loggers.insert(prefix.to_string(), Arc::clone(&logger));
        logger
    }

    /// Update the level of a registered logger.
    ///
    /// Unregistered prefixes are an error and no entry is created.
    pub fn set_level(&self, prefix: &str, level: LogLevel) -> Result<()> {
        let loggers = self.loggers.lock();
        match loggers.get(prefix) {
            Some(logger) => {
                logger.set_level(level);
                Ok(())
            }
            None => Err(LoggerError::not_found(prefix)),
        }
    }

    /// Snapshot of all registered loggers, order unspecified
    pub fn loggers(&self) -> HashMap<String, LoggerHandle> {
        self.loggers.lock().clone()
    }

    /// All registered logger handles, order unspecified
    pub fn list(&self) -> Vec<LoggerHandle> {
        self.loggers.lock().values().cloned().collect()
    }

    /// The empty-prefix logger backing the crate-level emission functions
    pub fn root(&self) -> LoggerHandle {
        let level = self.default_level();
        self.create_or_get(level, ROOT_PREFIX)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
