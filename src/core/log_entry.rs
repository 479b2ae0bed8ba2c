//! Log record structure

use super::caller::CallerInfo;
use super::log_context::LogContext;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub prefix: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<LogContext>,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, prefix: &str, message: String) -> Self {
        Self {
            level,
            prefix: prefix.to_string(),
            message: Self::sanitize_message(&message),
            timestamp: Local::now(),
            file: None,
            line: None,
            function: None,
            context: None,
        }
    }

    pub fn with_caller(mut self, caller: CallerInfo) -> Self {
        self.file = Some(caller.file);
        self.line = Some(caller.line);
        self.function = Some(caller.function);
        self
    }

    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = Some(context);
        self
    }
}
