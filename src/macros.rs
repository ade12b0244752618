//! Logging macros for ergonomic call sites.
//!
//! Each severity has a plain macro that joins heterogeneous values with
//! spaces and an `f`-suffixed macro that formats like `println!`. The
//! recorded call site is the macro invocation.
//!
//! # Examples
//!
//! ```
//! use clilog::{info, infof, Logger};
//!
//! let logger = Logger::new(None, "info", false).unwrap();
//!
//! info!(logger, "server started");
//!
//! let port = 8080;
//! infof!(logger, "listening on port {}", port);
//! info!(logger, "worker", 3, "ready");
//! ```

/// Log heterogeneous values at debug level, joined with spaces.
///
/// # Examples
///
/// ```
/// # use clilog::{debug, Logger};
/// # let logger = Logger::new(None, "debug", false).unwrap();
/// debug!(logger, "cache size", 128);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($part:expr),+ $(,)?) => {
        $logger.debug(&[$(&$part as &dyn ::std::fmt::Display),+])
    };
}

/// Log a formatted message at debug level.
///
/// # Examples
///
/// ```
/// # use clilog::{debugf, Logger};
/// # let logger = Logger::new(None, "debug", false).unwrap();
/// debugf!(logger, "counter = {}", 10);
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

/// Log heterogeneous values at info level, joined with spaces.
///
/// # Examples
///
/// ```
/// # use clilog::{info, Logger};
/// # let logger = Logger::new(None, "info", false).unwrap();
/// info!(logger, "processed", 100, "items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($part:expr),+ $(,)?) => {
        $logger.info(&[$(&$part as &dyn ::std::fmt::Display),+])
    };
}

/// Log a formatted message at info level.
///
/// # Examples
///
/// ```
/// # use clilog::{infof, Logger};
/// # let logger = Logger::new(None, "info", false).unwrap();
/// infof!(logger, "application started in {}ms", 42);
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

/// Log heterogeneous values at warning level, joined with spaces.
///
/// # Examples
///
/// ```
/// # use clilog::{warn, Logger};
/// # let logger = Logger::new(None, "info", false).unwrap();
/// warn!(logger, "low disk space");
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($part:expr),+ $(,)?) => {
        $logger.warn(&[$(&$part as &dyn ::std::fmt::Display),+])
    };
}

/// Log a formatted message at warning level.
///
/// # Examples
///
/// ```
/// # use clilog::{warnf, Logger};
/// # let logger = Logger::new(None, "info", false).unwrap();
/// warnf!(logger, "retry {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::std::format_args!($($arg)+))
    };
}

/// Log heterogeneous values at error level, joined with spaces.
///
/// # Examples
///
/// ```
/// # use clilog::{error, Logger};
/// # let logger = Logger::new(None, "info", false).unwrap();
/// error!(logger, "failed to connect to database");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($part:expr),+ $(,)?) => {
        $logger.error(&[$(&$part as &dyn ::std::fmt::Display),+])
    };
}

/// Log a formatted message at error level.
///
/// # Examples
///
/// ```
/// # use clilog::{errorf, Logger};
/// # let logger = Logger::new(None, "info", false).unwrap();
/// errorf!(logger, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

/// Log heterogeneous values at fatal level, then terminate the process.
///
/// # Examples
///
/// ```no_run
/// # use clilog::{fatal, Logger};
/// # let logger = Logger::new(None, "info", false).unwrap();
/// fatal!(logger, "unrecoverable state");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($part:expr),+ $(,)?) => {
        $logger.fatal(&[$(&$part as &dyn ::std::fmt::Display),+])
    };
}

/// Log a formatted message at fatal level, then terminate the process.
///
/// # Examples
///
/// ```no_run
/// # use clilog::{fatalf, Logger};
/// # let logger = Logger::new(None, "info", false).unwrap();
/// fatalf!(logger, "cannot recover: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}
