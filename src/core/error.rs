//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level update requested for a prefix that was never registered
    #[error("logger [{prefix}] not found")]
    LoggerNotFound { prefix: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create a not-found error for an unregistered prefix
    pub fn not_found(prefix: impl Into<String>) -> Self {
        LoggerError::LoggerNotFound {
            prefix: prefix.into(),
        }
    }
}
