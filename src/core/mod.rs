//! Core logger types

pub mod compose;
pub mod error;
pub mod log_level;
pub mod logger;

pub use compose::CallSite;
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{ConfigError, Logger};
