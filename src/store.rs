//! File store
//!
//! The on-disk append target for one log. The handle is opened, written,
//! flushed, and closed once per enqueued write operation; nothing is kept
//! open between operations.
//!
//! Only the lane's single worker touches the store, so none of these
//! operations need locking. External modification of the file outside the
//! lane is unsupported: the empty check is only fresh with respect to the
//! lane's own operations.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::entry::LINE_ENDING;
use crate::error::{LogError, Result};

/// The on-disk append target
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given path. The file itself is created
    /// lazily, on the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the log file currently exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Whether the file is absent or has zero length.
    ///
    /// Read fresh at execution time, right before each append, to decide
    /// whether this write is an empty -> non-empty transition.
    pub fn is_empty(&self) -> Result<bool> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(true),
            Err(err) => Err(LogError::Open(err)),
        }
    }

    /// Append one entry line, optionally preceded by a header block.
    ///
    /// Creates the file if absent, writes, flushes, and closes. The whole
    /// sequence is atomic relative to other operations on the same lane.
    pub fn append(&self, header: Option<&str>, line: &str) -> Result<()> {
        // A failed open is a creation failure only when the file was
        // absent; on an existing file it is an open failure.
        let existed = self.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| {
                if existed {
                    LogError::Open(err)
                } else {
                    LogError::Create(err)
                }
            })?;

        if let Some(header) = header {
            if !header.is_empty() {
                file.write_all(header.as_bytes()).map_err(LogError::Write)?;
            }
        }

        file.write_all(line.as_bytes()).map_err(LogError::Write)?;
        file.flush().map_err(LogError::Flush)?;

        // Handle closed on drop; close errors surface on the next open.
        Ok(())
    }

    /// Read the entire file, reassembling lines with a normalized CRLF
    /// terminator. Returns `Ok(None)` if the file does not exist.
    pub fn read(&self) -> Result<Option<String>> {
        if !self.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path).map_err(LogError::Read)?;

        let mut content = String::with_capacity(raw.len());
        for line in raw.lines() {
            content.push_str(line);
            content.push_str(LINE_ENDING);
        }

        Ok(Some(content))
    }

    /// Delete the log file; no-op if it does not exist.
    pub fn delete(&self) -> Result<()> {
        if !self.exists() {
            return Ok(());
        }
        fs::remove_file(&self.path).map_err(LogError::Delete)
    }
}
