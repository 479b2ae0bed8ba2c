//! Logging configuration

use super::error::Result;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Parameters for the facade, typically deserialized from an application's
/// configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level name; unrecognized values fall back to `debug`
    #[serde(default)]
    pub level: String,

    /// Filename substrings that shift caller resolution one frame deeper
    #[serde(default)]
    pub fix_by_file: Vec<String>,

    /// Function-name substrings that shift caller resolution one frame deeper
    #[serde(default)]
    pub fix_by_func: Vec<String>,

    /// Extra frames to skip past the resolved caller
    #[serde(default)]
    pub skip_frames: usize,
}

impl LogConfig {
    /// Parse a configuration from a JSON document
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// The configured level, with the `debug` fallback applied
    pub fn level(&self) -> LogLevel {
        LogLevel::parse_or_default(&self.level)
    }
}
