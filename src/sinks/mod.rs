//! Persistent sink helpers
//!
//! The logger accepts any `Box<dyn Write + Send>` as its persistent sink;
//! this module provides the common case of an append-mode log file.

pub mod file;

pub use file::open_log_file;
