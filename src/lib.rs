//! # clilog
//!
//! A lightweight leveled logging library for command-line utilities and
//! small services.
//!
//! ## Features
//!
//! - **Five severities**: fatal, error, warning, info, debug, configured
//!   from a single level string
//! - **Dual destinations**: every line goes to a persistent sink; errors and
//!   warnings mirror to stderr, info and debug mirror to stdout in verbose
//!   mode
//! - **Fatal path**: writes the line, then terminates the process, even when
//!   logging is disabled or misconfigured
//! - **Thread safe**: configuration is frozen at construction; logging
//!   methods take `&self`
//!
//! ## Example
//!
//! ```no_run
//! use clilog::{infof, warnf, Logger};
//! use clilog::sinks::open_log_file;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let file = open_log_file("/var/log/myapp/app.log")?;
//!     let logger = Logger::new(Some(Box::new(file)), "info", false)?;
//!
//!     infof!(logger, "listening on port {}", 8080);
//!     warnf!(logger, "low disk space: {}% used", 93);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{CallSite, ConfigError, LogLevel, Logger, LoggerError, Result};
    pub use crate::sinks::open_log_file;
}

pub use crate::core::{CallSite, ConfigError, LogLevel, Logger, LoggerError, Result};
pub use crate::sinks::open_log_file;
