//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
    Panic = 6,
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Panic => "PANIC",
        }
    }

    /// Parse an init-style level name, falling back to `Debug`.
    ///
    /// Only the five runtime-configurable names are recognized; `fatal` and
    /// `panic` are emission-only severities and map to `Debug` like any
    /// other unrecognized input. Use the `FromStr` impl when the full level
    /// set should parse and unrecognized input should be an error.
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "trace" => LogLevel::Trace,
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warn" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Debug,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Trace => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal => BrightRed,
            LogLevel::Panic => Magenta,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            "PANIC" => Ok(LogLevel::Panic),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
        assert!(LogLevel::Fatal < LogLevel::Panic);
    }

    #[test]
    fn test_to_str_uppercase() {
        assert_eq!(LogLevel::Trace.to_str(), "TRACE");
        assert_eq!(LogLevel::Panic.to_str(), "PANIC");
        assert_eq!(format!("{}", LogLevel::Warn), "WARN");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("trace".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_parse_or_default_falls_back_to_debug() {
        assert_eq!(LogLevel::parse_or_default("trace"), LogLevel::Trace);
        assert_eq!(LogLevel::parse_or_default("error"), LogLevel::Error);
        assert_eq!(LogLevel::parse_or_default("verbose"), LogLevel::Debug);
        assert_eq!(LogLevel::parse_or_default(""), LogLevel::Debug);
    }

    #[test]
    fn test_parse_or_default_rejects_emission_only_severities() {
        assert_eq!(LogLevel::parse_or_default("fatal"), LogLevel::Debug);
        assert_eq!(LogLevel::parse_or_default("panic"), LogLevel::Debug);
        assert_eq!(LogLevel::parse_or_default("warning"), LogLevel::Debug);
    }
}
