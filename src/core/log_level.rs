//! Log level definitions

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message, ordered by increasing verbosity.
///
/// `Disabled < Error < Warn < Info < Debug`. A logger configured at a given
/// level emits messages at that severity and below (toward `Error`).
/// `Invalid` is a sentinel that parsing never produces on success; it exists
/// only as the failure value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Invalid = 0,
    Disabled = 1,
    Error = 2,
    Warn = 3,
    #[default]
    Info = 4,
    Debug = 5,
}

impl LogLevel {
    /// Configuration string for this level, the inverse of parsing.
    ///
    /// Returns `""` for `Invalid`; this function never fails.
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Invalid => "",
            LogLevel::Disabled => "disabled",
            LogLevel::Error => "error",
            LogLevel::Warn => "warning",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    /// Check that this is one of the five operational levels.
    pub fn validate(&self) -> Result<()> {
        match self {
            LogLevel::Invalid => Err(LoggerError::InvalidLevelValue {
                value: *self as i32,
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    /// Parse a configuration string. Exact match only: no case folding,
    /// no trimming.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "disabled" => Ok(LogLevel::Disabled),
            "error" => Ok(LogLevel::Error),
            "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(LoggerError::InvalidLevel {
                input: s.to_string(),
            }),
        }
    }
}

impl TryFrom<i32> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            1 => Ok(LogLevel::Disabled),
            2 => Ok(LogLevel::Error),
            3 => Ok(LogLevel::Warn),
            4 => Ok(LogLevel::Info),
            5 => Ok(LogLevel::Debug),
            _ => Err(LoggerError::InvalidLevelValue { value }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: [(LogLevel, &str); 5] = [
        (LogLevel::Disabled, "disabled"),
        (LogLevel::Error, "error"),
        (LogLevel::Warn, "warning"),
        (LogLevel::Info, "info"),
        (LogLevel::Debug, "debug"),
    ];

    #[test]
    fn test_parse_roundtrip() {
        for (level, s) in VALID {
            let parsed: LogLevel = s.parse().unwrap();
            assert_eq!(parsed, level);
            assert_eq!(parsed.to_str(), s);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for s in ["nonsense", "", "Debug", "DEBUG", " debug", "debug ", "warn"] {
            let err = s.parse::<LogLevel>().unwrap_err();
            assert!(
                matches!(err, LoggerError::InvalidLevel { ref input } if input == s),
                "unexpected error for {:?}: {}",
                s,
                err
            );
        }
    }

    #[test]
    fn test_parse_error_lists_options() {
        let err = "bogus".parse::<LogLevel>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("bogus"));
        for s in ["disabled", "error", "warning", "info", "debug"] {
            assert!(msg.contains(s), "error message missing {:?}: {}", s, msg);
        }
    }

    #[test]
    fn test_invalid_to_str_is_empty() {
        assert_eq!(LogLevel::Invalid.to_str(), "");
        assert_eq!(LogLevel::Invalid.to_string(), "");
    }

    #[test]
    fn test_ordering() {
        assert!(LogLevel::Disabled < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Invalid < LogLevel::Disabled);
    }

    #[test]
    fn test_validate() {
        for (level, _) in VALID {
            level.validate().unwrap();
        }
        let err = LogLevel::Invalid.validate().unwrap_err();
        assert!(err.to_string().contains('0'));
    }

    #[test]
    fn test_serde_roundtrip() {
        // Levels serialize by variant name; lock the representation so
        // config files don't break silently.
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"Warn\"");
        let parsed: LogLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, LogLevel::Warn);
    }

    #[test]
    fn test_try_from_numeric() {
        for (level, _) in VALID {
            assert_eq!(LogLevel::try_from(level as i32).unwrap(), level);
        }
        for value in [0, 6, 999, -1] {
            let err = LogLevel::try_from(value).unwrap_err();
            assert!(
                matches!(err, LoggerError::InvalidLevelValue { value: v } if v == value),
                "unexpected error for {}: {}",
                value,
                err
            );
        }
    }
}
