//! Main logger implementation
//!
//! The logger routes each composed line to a persistent sink and, depending
//! on severity and configuration, mirrors it to a console stream. All
//! configuration is frozen at construction; logging methods take `&self` and
//! are safe to call from any thread.

use super::{
    compose::{CallSite, Composer},
    error::LoggerError,
    log_level::LogLevel,
};
use chrono::Local;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::process;

/// Timestamp layout on the wire: local date + time, no sub-second precision.
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Console stream a severity mirrors to, in addition to the persistent sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Per-severity write target, built once at construction.
#[derive(Debug, Clone, Copy)]
struct LevelWriter {
    /// Severity tag, padded so message bodies align across levels.
    tag: &'static str,
    console: Option<ConsoleStream>,
}

/// Leveled logger for command-line utilities and small services.
///
/// Writes every emitted line to the persistent sink (when one is configured)
/// and mirrors Error/Warn/Fatal lines to stderr. Info and Debug lines are
/// mirrored to stdout only in verbose mode. Severities above the configured
/// minimum are no-ops. [`Logger::fatal`] and [`Logger::fatalf`] always write
/// and then terminate the process, regardless of the configured level.
pub struct Logger {
    level: LogLevel,
    verbose: bool,
    sink: Option<Mutex<Box<dyn Write + Send>>>,
    composer: Composer,
    debug: Option<LevelWriter>,
    info: Option<LevelWriter>,
    warn: Option<LevelWriter>,
    error: Option<LevelWriter>,
    fatal: LevelWriter,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("verbose", &self.verbose)
            .field("sink", &self.sink.as_ref().map(|_| "dyn Write + Send"))
            .field("composer", &self.composer)
            .field("debug", &self.debug)
            .field("info", &self.info)
            .field("warn", &self.warn)
            .field("error", &self.error)
            .field("fatal", &self.fatal)
            .finish()
    }
}

impl Logger {
    /// Create a logger writing to `sink` at the minimum level named by
    /// `level` (`"disabled" | "error" | "warning" | "info" | "debug"`).
    ///
    /// A `sink` of `None` discards persistent writes; console mirroring
    /// still applies. When `level` does not parse, the returned
    /// [`ConfigError`] carries a logger whose fatal path is already wired,
    /// so callers can still report the misconfiguration and abort.
    pub fn new(
        sink: Option<Box<dyn Write + Send>>,
        level: &str,
        verbose: bool,
    ) -> Result<Logger, ConfigError> {
        // Fatal is wired before level parsing so it works even when the
        // configuration is rejected.
        let mut logger = Logger {
            level: LogLevel::Invalid,
            verbose,
            sink: sink.map(Mutex::new),
            composer: Composer::new(false),
            debug: None,
            info: None,
            warn: None,
            error: None,
            fatal: LevelWriter {
                tag: "FATAL: ",
                console: Some(ConsoleStream::Stderr),
            },
        };

        let level = match level.parse::<LogLevel>() {
            Ok(level) => level,
            Err(source) => return Err(ConfigError { logger, source }),
        };
        logger.level = level;
        logger.composer = Composer::new(level == LogLevel::Debug);

        if level >= LogLevel::Error {
            logger.error = Some(LevelWriter {
                tag: "ERROR: ",
                console: Some(ConsoleStream::Stderr),
            });
        }
        if level >= LogLevel::Warn {
            logger.warn = Some(LevelWriter {
                tag: "WARN:  ",
                console: Some(ConsoleStream::Stderr),
            });
        }
        // Info and Debug reach the console only in verbose mode; Error and
        // Warn above mirror to stderr unconditionally.
        if level >= LogLevel::Info {
            logger.info = Some(LevelWriter {
                tag: "INFO:  ",
                console: verbose.then_some(ConsoleStream::Stdout),
            });
        }
        if level >= LogLevel::Debug {
            logger.debug = Some(LevelWriter {
                tag: "DEBUG: ",
                console: verbose.then_some(ConsoleStream::Stdout),
            });
        }

        Ok(logger)
    }

    /// The configured minimum level.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether Info/Debug lines are mirrored to stdout.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Write a debug message.
    #[track_caller]
    pub fn debug(&self, parts: &[&dyn fmt::Display]) {
        let site = CallSite::here();
        if self.level < LogLevel::Debug {
            return;
        }
        if let Some(writer) = self.debug {
            self.write(writer, &self.composer.compose(site, parts));
        }
    }

    /// Write a formatted debug message.
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        let site = CallSite::here();
        if self.level < LogLevel::Debug {
            return;
        }
        if let Some(writer) = self.debug {
            self.write(writer, &self.composer.composef(site, args));
        }
    }

    /// Write an info message.
    #[track_caller]
    pub fn info(&self, parts: &[&dyn fmt::Display]) {
        let site = CallSite::here();
        if self.level < LogLevel::Info {
            return;
        }
        if let Some(writer) = self.info {
            self.write(writer, &self.composer.compose(site, parts));
        }
    }

    /// Write a formatted info message.
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        let site = CallSite::here();
        if self.level < LogLevel::Info {
            return;
        }
        if let Some(writer) = self.info {
            self.write(writer, &self.composer.composef(site, args));
        }
    }

    /// Write a warning message.
    #[track_caller]
    pub fn warn(&self, parts: &[&dyn fmt::Display]) {
        let site = CallSite::here();
        if self.level < LogLevel::Warn {
            return;
        }
        if let Some(writer) = self.warn {
            self.write(writer, &self.composer.compose(site, parts));
        }
    }

    /// Write a formatted warning message.
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        let site = CallSite::here();
        if self.level < LogLevel::Warn {
            return;
        }
        if let Some(writer) = self.warn {
            self.write(writer, &self.composer.composef(site, args));
        }
    }

    /// Write an error message.
    #[track_caller]
    pub fn error(&self, parts: &[&dyn fmt::Display]) {
        let site = CallSite::here();
        if self.level < LogLevel::Error {
            return;
        }
        if let Some(writer) = self.error {
            self.write(writer, &self.composer.compose(site, parts));
        }
    }

    /// Write a formatted error message.
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        let site = CallSite::here();
        if self.level < LogLevel::Error {
            return;
        }
        if let Some(writer) = self.error {
            self.write(writer, &self.composer.composef(site, args));
        }
    }

    /// Write a fatal message, then terminate the process with status 1.
    ///
    /// Never suppressed: the line is written to the persistent sink and
    /// stderr even under a `"disabled"` or rejected configuration. This
    /// method does not return.
    #[track_caller]
    pub fn fatal(&self, parts: &[&dyn fmt::Display]) -> ! {
        let site = CallSite::here();
        self.write_fatal(&self.composer.compose(site, parts));
        process::exit(1);
    }

    /// Write a formatted fatal message, then terminate the process with
    /// status 1. This method does not return.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let site = CallSite::here();
        self.write_fatal(&self.composer.composef(site, args));
        process::exit(1);
    }

    /// Fatal write path, separated from process exit so it can be tested.
    pub(crate) fn write_fatal(&self, body: &str) {
        self.write(self.fatal, body);
    }

    /// Fan a finished line out to the sink and the writer's console stream.
    ///
    /// Logging is fire-and-forget: write failures are swallowed here, never
    /// surfaced to the caller.
    fn write(&self, writer: LevelWriter, body: &str) {
        let line = format!(
            "{}{} {}\n",
            writer.tag,
            Local::now().format(TIMESTAMP_FORMAT),
            body
        );
        if let Some(sink) = &self.sink {
            let mut sink = sink.lock();
            let _ = sink.write_all(line.as_bytes());
            let _ = sink.flush();
        }
        match writer.console {
            Some(ConsoleStream::Stdout) => {
                let _ = io::stdout().lock().write_all(line.as_bytes());
            }
            Some(ConsoleStream::Stderr) => {
                let _ = io::stderr().lock().write_all(line.as_bytes());
            }
            None => {}
        }
    }
}

/// Error returned by [`Logger::new`] when the level string is rejected.
///
/// Carries a partially-usable [`Logger`] whose fatal path is wired, in the
/// manner of [`std::sync::PoisonError`]: callers that want to abort with a
/// logged message recover it via [`ConfigError::into_logger`].
pub struct ConfigError {
    logger: Logger,
    source: LoggerError,
}

impl ConfigError {
    /// Recover the fatal-capable logger built before parsing failed.
    pub fn into_logger(self) -> Logger {
        self.logger
    }

    /// Borrow the fatal-capable logger without consuming the error.
    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

impl fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigError")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
