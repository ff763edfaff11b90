//! Error types for applog
//!
//! Provides a unified error type for all log file operations.
//!
//! These errors never reach calling threads: the log facility is
//! best-effort by policy, so every failure is caught inside the lane,
//! reported to the configured [`NativeSink`](crate::sink::NativeSink),
//! and swallowed.

use thiserror::Error;

/// Result type alias using LogError
pub type Result<T> = std::result::Result<T, LogError>;

/// Unified error type for applog operations
#[derive(Debug, Error)]
pub enum LogError {
    // -------------------------------------------------------------------------
    // File Store Errors
    // -------------------------------------------------------------------------
    #[error("failed to create log file: {0}")]
    Create(#[source] std::io::Error),

    #[error("failed to open log file: {0}")]
    Open(#[source] std::io::Error),

    #[error("failed to read log file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write log entry: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to flush log file: {0}")]
    Flush(#[source] std::io::Error),

    #[error("failed to delete log file: {0}")]
    Delete(#[source] std::io::Error),

    // -------------------------------------------------------------------------
    // Lane Errors
    // -------------------------------------------------------------------------
    #[error("log lane is closed, task dropped")]
    LaneClosed,
}
