//! # applog
//!
//! A single-writer, append-only text log facility with:
//! - One serialized execution lane per log instance (strict FIFO)
//! - Lazy header injection on every empty -> non-empty transition
//! - Runtime enable/disable without losing written content
//! - Best-effort semantics: logging never crashes or blocks the app
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Caller Threads                           │
//! │          (info / warn / debug / error / get / clear)        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  emit to NativeSink, then enqueue
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Lane                                 │
//! │        (unbounded FIFO channel, single worker thread)       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  tasks drained one at a time
//!          ┌────────────┴─────────────┐
//!          │                          │
//!          ▼                          ▼
//!   ┌─────────────┐          ┌────────────────┐
//!   │  FileStore  │          │ HeaderProvider │
//!   │  (append/   │◄─────────│ (once per      │
//!   │  read/del)  │  header  │  empty file)   │
//!   └─────────────┘          └────────────────┘
//! ```
//!
//! Callers never block on file I/O: writes and clears are fire-and-forget,
//! reads deliver their result through a completion callback invoked on the
//! lane. The file is only ever touched by the lane's single worker, so
//! entries from concurrent callers are never interleaved or lost relative
//! to each other.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod level;

pub mod entry;
pub mod header;
pub mod lane;
pub mod log;
pub mod sink;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LogError, Result};
pub use header::HeaderProvider;
pub use lane::ContentConsumer;
pub use level::Level;
pub use log::{Log, LogBuilder};
pub use sink::{MemorySink, NativeSink, NullSink, TracingSink};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of applog
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
