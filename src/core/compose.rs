//! Message composition
//!
//! Builds the text of a single log line body: optional process-id and
//! call-site prefixes followed by the caller's message. Both prefixes are
//! gated on the logger's *configured* level being Debug, never on the
//! severity of the individual call; resolving caller locations and pids on
//! every call is only worth paying for in a debug configuration.

use std::fmt::{self, Write};
use std::panic::Location;
use std::process;

/// Source location of the code that invoked a logging operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    /// Placeholder when the location cannot be determined, rendered `???:0`.
    pub const UNKNOWN: CallSite = CallSite { file: "???", line: 0 };

    /// Capture the location of the caller.
    ///
    /// `#[track_caller]` propagates through the logger's own annotated
    /// methods, so the recorded location is the original call site, not the
    /// logger internals.
    #[track_caller]
    pub fn here() -> Self {
        let loc = Location::caller();
        Self {
            file: loc.file(),
            line: loc.line(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Builds log line bodies for one logger configuration.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Composer {
    /// True iff the configured minimum level is Debug.
    enrich: bool,
}

impl Composer {
    pub(crate) fn new(enrich: bool) -> Self {
        Self { enrich }
    }

    /// Concatenation mode: join the parts with single spaces.
    pub(crate) fn compose(&self, site: CallSite, parts: &[&dyn fmt::Display]) -> String {
        let mut out = self.prefix(site);
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{}", part);
        }
        out
    }

    /// Formatted mode: substitute `format_args!` output after the prefixes.
    pub(crate) fn composef(&self, site: CallSite, args: fmt::Arguments<'_>) -> String {
        let mut out = self.prefix(site);
        let _ = write!(out, "{}", args);
        out
    }

    /// Pid prefix first, call-site prefix second, empty unless enriching.
    fn prefix(&self, site: CallSite) -> String {
        if !self.enrich {
            return String::new();
        }
        format!("[{}] {} ", process::id(), site)
    }
}
