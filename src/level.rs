//! Severity levels for log entries
//!
//! The level set is deliberately small: it mirrors the four severities the
//! persisted line format carries. Levels render lowercase both in the file
//! and through the native sink.

use std::fmt;

/// Severity of a single log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Informational message
    Info,
    /// Something suspicious, but recoverable
    Warn,
    /// Developer-facing diagnostic
    Debug,
    /// Runtime error
    Error,
}

impl Level {
    /// All levels, in file-format order
    pub const ALL: [Level; 4] = [Level::Info, Level::Warn, Level::Debug, Level::Error];

    /// The lowercase name written into the log file
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Debug => "debug",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
