//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unrecognized level string in configuration
    #[error("invalid log level: '{input}'; use one of: disabled | error | warning | info | debug")]
    InvalidLevel { input: String },

    /// Numeric level value outside the defined range
    #[error("invalid log level value: {value}")]
    InvalidLevelValue { value: i32 },

    /// IO error while opening or preparing a sink
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_display() {
        let err = LoggerError::InvalidLevel {
            input: "verbose".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid log level: 'verbose'; use one of: disabled | error | warning | info | debug"
        );
    }

    #[test]
    fn test_invalid_level_value_display() {
        let err = LoggerError::InvalidLevelValue { value: 999 };
        assert_eq!(err.to_string(), "invalid log level value: 999");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: LoggerError = io_err.into();
        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(err.to_string().contains("access denied"));
    }
}
