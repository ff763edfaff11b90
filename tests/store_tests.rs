//! Tests for the file store
//!
//! These tests verify:
//! - Lazy file creation on first append
//! - Freshness of the empty check
//! - CRLF normalization on read
//! - Delete semantics

use std::fs;
use std::path::PathBuf;

use applog::store::FileStore;
use applog::LogError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, FileStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path().join("store.txt"));
    (temp_dir, store)
}

// =============================================================================
// Append Tests
// =============================================================================

#[test]
fn test_append_creates_file() {
    let (_temp, store) = setup_temp_store();
    assert!(!store.exists());
    assert!(store.is_empty().unwrap());

    store.append(None, "line one\r\n").unwrap();

    assert!(store.exists());
    assert!(!store.is_empty().unwrap());
}

#[test]
fn test_append_with_header_then_without() {
    let (_temp, store) = setup_temp_store();

    store.append(Some("HEADER\n"), "first\r\n").unwrap();
    store.append(None, "second\r\n").unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.starts_with("HEADER\n"));
    assert_eq!(raw.matches("HEADER").count(), 1);
    assert!(raw.contains("first"));
    assert!(raw.contains("second"));
}

#[test]
fn test_empty_header_writes_nothing() {
    let (_temp, store) = setup_temp_store();

    store.append(Some(""), "only line\r\n").unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert_eq!(raw, "only line\r\n");
}

#[test]
fn test_appends_accumulate_in_order() {
    let (_temp, store) = setup_temp_store();

    for i in 0..10 {
        store.append(None, &format!("line {}\r\n", i)).unwrap();
    }

    let content = store.read().unwrap().unwrap();
    let lines: Vec<&str> = content.split("\r\n").filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 10);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(*line, format!("line {}", i));
    }
}

#[test]
fn test_open_failure_on_existing_target() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("occupied"));

    // A directory at the log path makes the append-mode open fail on an
    // existing target: that is an open failure, not a creation failure.
    fs::create_dir(store.path()).unwrap();

    let err = store.append(None, "line\r\n").unwrap_err();
    assert!(matches!(err, LogError::Open(_)), "expected Open, got {err:?}");
}

#[test]
fn test_create_failure_on_missing_parent() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("no_such_dir").join("log.txt"));

    let err = store.append(None, "line\r\n").unwrap_err();
    assert!(matches!(err, LogError::Create(_)), "expected Create, got {err:?}");
}

// =============================================================================
// Read Tests
// =============================================================================

#[test]
fn test_read_missing_file_is_none() {
    let (_temp, store) = setup_temp_store();
    assert!(store.read().unwrap().is_none());
}

#[test]
fn test_read_empty_file_is_some_empty() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.path(), "").unwrap();

    let content = store.read().unwrap().unwrap();
    assert!(content.is_empty());
    assert!(store.is_empty().unwrap());
}

#[test]
fn test_read_normalizes_line_endings() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.path(), "plain lf\nalready crlf\r\nno terminator").unwrap();

    let content = store.read().unwrap().unwrap();
    assert_eq!(content, "plain lf\r\nalready crlf\r\nno terminator\r\n");
}

#[test]
fn test_read_invalid_utf8_is_error() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.path(), b"\xFF\xFE not text").unwrap();

    let err = store.read().unwrap_err();
    assert!(matches!(err, LogError::Read(_)), "expected Read, got {err:?}");
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_missing_file_is_noop() {
    let (_temp, store) = setup_temp_store();
    store.delete().unwrap();
}

#[test]
fn test_delete_then_empty_again() {
    let (_temp, store) = setup_temp_store();

    store.append(Some("H\n"), "entry\r\n").unwrap();
    assert!(!store.is_empty().unwrap());

    store.delete().unwrap();
    assert!(!store.exists());
    assert!(store.is_empty().unwrap());
    assert!(store.read().unwrap().is_none());
}
