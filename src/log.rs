//! Log engine
//!
//! The core facility that coordinates all components.
//!
//! ## Responsibilities
//! - Own the lane and file store lifecycle for one log file
//! - Gate file writes on the native sink's acceptance signal
//! - Inject the header on every empty -> non-empty transition
//! - Honor the runtime enabled flag at task execution time
//!
//! ## Concurrency Model: Single-Writer Lane
//!
//! - **Callers** (any thread): format the message, emit it to the native
//!   sink, and enqueue a task; they never block on file I/O.
//! - **Worker** (one per `Log`): drains tasks strictly FIFO and is the
//!   only code that touches the file.
//! - **Shared state**: just the enabled flag (`AtomicBool`, checked inside
//!   each write task, not snapshotted at submission) and the path.
//!
//! Errors never propagate to callers: every I/O failure is reported to
//! the sink and swallowed. Logging is best-effort by design.

use std::error::Error;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam::channel::Receiver;

use crate::entry::{render_error_chain, Entry};
use crate::error::Result;
use crate::header::HeaderProvider;
use crate::lane::{ContentConsumer, Lane, Task};
use crate::level::Level;
use crate::sink::{NativeSink, TracingSink};
use crate::store::FileStore;

/// Tag under which the engine reports its own failures to the sink
const ENGINE_TAG: &str = "applog";

/// An app-wide, append-only text log bound to one file.
///
/// Cheap to share behind an `Arc`; all methods take `&self`. Each `Log`
/// owns its own lane — two instances pointed at the same path are
/// unsupported (no cross-instance locking).
///
/// # Example
///
/// ```
/// use applog::Log;
///
/// let dir = tempfile::tempdir().unwrap();
/// let log = Log::new(dir.path().join("app.txt"), || Some("My App\n".to_string()));
///
/// log.info("startup", format!("pid {}", std::process::id()));
/// log.get(|content| {
///     // runs on the log's lane after the read completed
///     let _ = content;
/// });
/// ```
pub struct Log {
    /// The serialized task queue; joined on drop so queued tasks drain
    lane: Lane,

    /// Shared with the worker; read fresh inside each write task
    enabled: Arc<AtomicBool>,

    /// Emitted to before queuing each write; also the diagnostic channel
    sink: Arc<dyn NativeSink>,

    /// Log file path (for display/accessors only; the worker owns the store)
    path: PathBuf,
}

impl Log {
    /// Create a log writing to `path`, with `header_provider` consulted
    /// whenever the file transitions from empty to non-empty.
    ///
    /// Uses the default [`TracingSink`]. Spawns the dedicated worker
    /// thread for this instance.
    pub fn new(path: impl Into<PathBuf>, header_provider: impl HeaderProvider) -> Self {
        Self::builder(path).header(header_provider).build()
    }

    /// Start building a log (no header, custom sink, etc.)
    pub fn builder(path: impl Into<PathBuf>) -> LogBuilder {
        LogBuilder {
            path: path.into(),
            header: None,
            sink: Arc::new(TracingSink),
        }
    }

    // =========================================================================
    // Write Operations
    // =========================================================================

    /// Log an informational message
    pub fn info(&self, tag: &str, message: impl Display) {
        self.write(Level::Info, tag, message);
    }

    /// Log a warning message
    pub fn warn(&self, tag: &str, message: impl Display) {
        self.write(Level::Warn, tag, message);
    }

    /// Log a debug message
    pub fn debug(&self, tag: &str, message: impl Display) {
        self.write(Level::Debug, tag, message);
    }

    /// Log an error message
    pub fn error(&self, tag: &str, message: impl Display) {
        self.write(Level::Error, tag, message);
    }

    /// Log an error value and its cause chain at info severity
    pub fn info_err(&self, tag: &str, err: &dyn Error) {
        self.write(Level::Info, tag, render_error_chain(err));
    }

    /// Log an error value and its cause chain at warn severity
    pub fn warn_err(&self, tag: &str, err: &dyn Error) {
        self.write(Level::Warn, tag, render_error_chain(err));
    }

    /// Log an error value and its cause chain at debug severity
    pub fn debug_err(&self, tag: &str, err: &dyn Error) {
        self.write(Level::Debug, tag, render_error_chain(err));
    }

    /// Log an error value and its cause chain at error severity
    pub fn error_err(&self, tag: &str, err: &dyn Error) {
        self.write(Level::Error, tag, render_error_chain(err));
    }

    /// Log one message at the given severity.
    ///
    /// The message is forwarded synchronously to the native sink first;
    /// the file write is enqueued only if the sink accepted it. The
    /// queued write itself is fire-and-forget.
    pub fn write(&self, level: Level, tag: &str, message: impl Display) {
        let message = message.to_string();

        if !self.sink.emit(tag, level, &message) {
            return;
        }

        self.submit(Task::Append(Entry::new(level, tag, message)));
    }

    // =========================================================================
    // Read / Clear Operations
    // =========================================================================

    /// Get the current contents of the log file.
    ///
    /// `completion` is invoked on the lane with the content found: `None`
    /// when the file does not exist or a read error occurred, `Some`
    /// (possibly empty) otherwise, lines normalized to CRLF.
    pub fn get(&self, completion: impl FnOnce(Option<String>) + Send + 'static) {
        self.get_with(false, Some(Box::new(completion)));
    }

    /// Get the contents, optionally deleting the file afterwards.
    ///
    /// When `clear_after` is set and the read succeeded, the delete
    /// happens in the same queued task: no write can land between the
    /// read and the clear. A `None` completion skips the read but still
    /// honors `clear_after`.
    pub fn get_with(&self, clear_after: bool, completion: Option<ContentConsumer>) {
        self.submit(Task::Fetch { clear_after, completion });
    }

    /// Delete the log file; no-op if it does not exist. No completion.
    pub fn clear(&self) {
        self.submit(Task::Clear);
    }

    // =========================================================================
    // Control
    // =========================================================================

    /// Enable or disable file writes. Synchronous, not queued.
    ///
    /// The flag is read inside each write task as it executes, so a
    /// toggle takes effect from the next task dequeued after this call
    /// returns — not necessarily on tasks already queued ahead of it.
    /// Messages logged while disabled still reach the native sink.
    pub fn enable_logging(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    /// Whether file writes are currently enabled
    pub fn is_logging_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Enqueue a task, reporting (not propagating) submission failure
    fn submit(&self, task: Task) {
        if let Err(err) = self.lane.submit(task) {
            self.sink.emit(ENGINE_TAG, Level::Error, &err.to_string());
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`Log`]
pub struct LogBuilder {
    path: PathBuf,
    header: Option<Box<dyn HeaderProvider>>,
    sink: Arc<dyn NativeSink>,
}

impl LogBuilder {
    /// Set the header provider consulted on empty -> non-empty transitions
    pub fn header(mut self, provider: impl HeaderProvider) -> Self {
        self.header = Some(Box::new(provider));
        self
    }

    /// Replace the default [`TracingSink`]
    pub fn sink(mut self, sink: impl NativeSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Replace the default sink with an already-shared one
    pub fn shared_sink(mut self, sink: Arc<dyn NativeSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Build the log and spawn its lane worker
    pub fn build(self) -> Log {
        let enabled = Arc::new(AtomicBool::new(true));

        let worker = LogWorker {
            store: FileStore::new(&self.path),
            header: self.header,
            enabled: Arc::clone(&enabled),
            sink: Arc::clone(&self.sink),
        };

        Log {
            lane: Lane::spawn(move |rx| worker.run(rx)),
            enabled,
            sink: self.sink,
            path: self.path,
        }
    }
}

// =============================================================================
// Worker
// =============================================================================

/// Worker-side state: everything the lane needs to execute tasks.
///
/// Owned exclusively by the worker thread; only `enabled` and the sink
/// are shared with callers.
struct LogWorker {
    store: FileStore,
    header: Option<Box<dyn HeaderProvider>>,
    enabled: Arc<AtomicBool>,
    sink: Arc<dyn NativeSink>,
}

impl LogWorker {
    /// Drain loop: runs until the channel disconnects on drop
    fn run(self, rx: Receiver<Task>) {
        while let Ok(task) = rx.recv() {
            self.handle(task);
        }
    }

    fn handle(&self, task: Task) {
        match task {
            Task::Append(entry) => self.handle_append(entry),
            Task::Fetch { clear_after, completion } => self.handle_fetch(clear_after, completion),
            Task::Clear => self.handle_clear(),
        }
    }

    /// Execute one queued write
    fn handle_append(&self, entry: Entry) {
        // Checked at execution time, not snapshotted at submission: a
        // toggle applies to every task dequeued after it returns.
        if !self.enabled.load(Ordering::Acquire) {
            return;
        }

        if let Err(err) = self.append(&entry) {
            self.report(&err);
        }
    }

    fn append(&self, entry: &Entry) -> Result<()> {
        // Fresh empty check decides whether this write is the
        // empty -> non-empty transition that owns the header.
        let header = if self.store.is_empty()? {
            self.header.as_ref().and_then(|provider| provider.provide())
        } else {
            None
        };

        // Rendered after the provider returned: the stamp reflects when
        // the write executes on the lane, not when it was submitted.
        let line = entry.render();
        self.store.append(header.as_deref(), &line)
    }

    /// Execute one queued read, with optional same-task clear
    fn handle_fetch(&self, clear_after: bool, completion: Option<ContentConsumer>) {
        // No consumer: skip the read entirely, but still honor the clear.
        let Some(completion) = completion else {
            if clear_after {
                self.handle_clear();
            }
            return;
        };

        let content = match self.store.read() {
            Ok(content) => content,
            Err(err) => {
                self.report(&err);
                None
            }
        };

        // A failed read skips the clear so the content is not lost.
        if clear_after && content.is_some() {
            if let Err(err) = self.store.delete() {
                self.report(&err);
            }
        }

        completion(content);
    }

    /// Execute one queued clear
    fn handle_clear(&self) {
        if let Err(err) = self.store.delete() {
            self.report(&err);
        }
    }

    /// Report an internal failure to the sink; never propagates
    fn report(&self, err: &dyn Error) {
        self.sink.emit(ENGINE_TAG, Level::Error, &render_error_chain(err));
    }
}
