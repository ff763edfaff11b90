//! Native sink collaborator contract and built-in sinks
//!
//! Every write is forwarded synchronously to the platform's log sink
//! before it is queued for the file; the file write proceeds only if the
//! sink reports the message as accepted. The file therefore mirrors only
//! messages that were successfully emitted to the platform log.
//!
//! The engine also uses the sink as its diagnostic side channel: internal
//! I/O failures are reported through it rather than propagated.

use parking_lot::Mutex;

use crate::level::Level;

/// The platform's native logging output.
///
/// `emit` is called on caller threads (not the lane) and its return value
/// gates the file write: `true` means accepted, `false` drops the message
/// from the file. Implementations must be cheap and non-blocking.
pub trait NativeSink: Send + Sync {
    /// Report one message at the given severity. Returns whether the
    /// message was accepted by the platform logger.
    fn emit(&self, tag: &str, level: Level, message: &str) -> bool;
}

// =============================================================================
// TracingSink
// =============================================================================

/// Default sink: forwards messages to the `tracing` ecosystem.
///
/// `tracing` offers no acceptance signal, so this sink always accepts.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NativeSink for TracingSink {
    fn emit(&self, tag: &str, level: Level, message: &str) -> bool {
        match level {
            Level::Info => tracing::info!(tag = %tag, "{}", message),
            Level::Warn => tracing::warn!(tag = %tag, "{}", message),
            Level::Debug => tracing::debug!(tag = %tag, "{}", message),
            Level::Error => tracing::error!(tag = %tag, "{}", message),
        }
        true
    }
}

// =============================================================================
// NullSink
// =============================================================================

/// A sink that discards everything and accepts everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NativeSink for NullSink {
    fn emit(&self, _tag: &str, _level: Level, _message: &str) -> bool {
        true
    }
}

// =============================================================================
// MemorySink
// =============================================================================

/// One message as seen by [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkRecord {
    pub tag: String,
    pub level: Level,
    pub message: String,
}

/// A sink that records every emit in memory.
///
/// Useful for tests and for programmatically examining what the engine
/// reported. Construct with [`MemorySink::rejecting`] to make it refuse
/// every message, which exercises the acceptance gate: rejected messages
/// never reach the file.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<SinkRecord>>,
    reject: bool,
}

impl MemorySink {
    /// A recording sink that accepts every message
    pub fn new() -> Self {
        Self::default()
    }

    /// A recording sink that rejects every message
    pub fn rejecting() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            reject: true,
        }
    }

    /// Snapshot of everything emitted so far
    pub fn records(&self) -> Vec<SinkRecord> {
        self.records.lock().clone()
    }

    /// Number of messages emitted so far
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether nothing has been emitted yet
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Drop all recorded messages
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl NativeSink for MemorySink {
    fn emit(&self, tag: &str, level: Level, message: &str) -> bool {
        self.records.lock().push(SinkRecord {
            tag: tag.to_string(),
            level,
            message: message.to_string(),
        });
        !self.reject
    }
}
