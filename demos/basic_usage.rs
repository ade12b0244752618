//! Basic logger usage example
//!
//! Demonstrates level configuration, verbose console mirroring, and the
//! plain/formatted call variants.
//!
//! Run with: cargo run --example basic_usage

use clilog::{debugf, error, info, warnf, Logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== clilog - Basic Usage Example ===\n");

    // No persistent sink here; verbose mode mirrors info/debug to stdout,
    // and errors/warnings always go to stderr.
    // Available levels: disabled | error | warning | info | debug
    let logger = Logger::new(None, "info", true)?;

    info!(logger, "this message is shown because the level is info");
    debugf!(logger, "this one is suppressed: {} < debug", logger.level());
    warnf!(logger, "retry {} of {}", 2, 5);
    error!(logger, "this message goes to stderr");

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
