//! The serialized execution lane
//!
//! A strictly-ordered, single-consumer task queue: every mutating and
//! reading operation against a log file is a [`Task`] submitted here and
//! executed one at a time, in submission order, on one dedicated worker
//! thread. This is the concurrency primitive of the crate — never a pool,
//! since FIFO order and at-most-one-writer-at-a-time are load-bearing.
//!
//! Submission never blocks the caller (the channel is unbounded). There is
//! no cancellation and no timeout: every submitted task runs to completion
//! or fails internally.

use std::thread::{self, JoinHandle};

use crossbeam::channel::{unbounded, Receiver, Sender};

use crate::entry::Entry;
use crate::error::{LogError, Result};

/// Completion callback for a read, invoked on the lane with the content
/// found (`None` when the file is missing or the read failed).
pub type ContentConsumer = Box<dyn FnOnce(Option<String>) + Send>;

/// One queued operation against the log file
pub enum Task {
    /// Append one entry (header-injected when the file starts empty)
    Append(Entry),

    /// Read the whole file and hand it to `completion`; optionally delete
    /// it in the same task once the read succeeded
    Fetch {
        clear_after: bool,
        completion: Option<ContentConsumer>,
    },

    /// Delete the file if it exists
    Clear,
}

impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Task::Append(entry) => f.debug_tuple("Append").field(entry).finish(),
            Task::Fetch { clear_after, completion } => f
                .debug_struct("Fetch")
                .field("clear_after", clear_after)
                .field("has_completion", &completion.is_some())
                .finish(),
            Task::Clear => f.write_str("Clear"),
        }
    }
}

/// A single-worker FIFO lane bound to one log instance.
///
/// Dropping the lane closes the channel and joins the worker, so every
/// task submitted before the drop still runs to completion.
pub struct Lane {
    tx: Option<Sender<Task>>,
    worker: Option<JoinHandle<()>>,
}

impl Lane {
    /// Spawn the worker thread and hand it the receiving end.
    ///
    /// `run` is the drain loop; it owns all worker-side state and returns
    /// when the channel disconnects.
    pub fn spawn<F>(run: F) -> Self
    where
        F: FnOnce(Receiver<Task>) + Send + 'static,
    {
        let (tx, rx) = unbounded();

        let worker = thread::Builder::new()
            .name("applog-lane".to_string())
            .spawn(move || run(rx))
            .expect("failed to spawn log lane worker");

        Self {
            tx: Some(tx),
            worker: Some(worker),
        }
    }

    /// Enqueue a task; fire-and-forget.
    ///
    /// Fails only when the worker is gone (panicked or mid-drop), which
    /// callers treat as a diagnostic, not an error to propagate.
    pub fn submit(&self, task: Task) -> Result<()> {
        match &self.tx {
            Some(tx) => tx.send(task).map_err(|_| LogError::LaneClosed),
            None => Err(LogError::LaneClosed),
        }
    }
}

impl Drop for Lane {
    fn drop(&mut self) {
        // Disconnect first so the drain loop sees EOF after the last task.
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
