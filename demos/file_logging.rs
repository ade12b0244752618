//! File logging example
//!
//! Demonstrates the append-mode file sink helper and debug-level
//! enrichment (pid and call-site prefixes).
//!
//! Run with: cargo run --example file_logging

use clilog::{debugf, infof, open_log_file, Logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = format!("/tmp/clilog-example-{}.log", std::process::id());

    // open_log_file creates parent directories and opens in append mode.
    let file = open_log_file(&path)?;
    let logger = Logger::new(Some(Box::new(file)), "debug", false)?;

    infof!(logger, "run started, logging to {}", path);
    debugf!(logger, "debug lines carry a [pid] and file:line prefix");

    println!("wrote log lines to {}", path);
    Ok(())
}
