//! Log entry definitions
//!
//! Defines one timestamped, leveled, tagged log line and its rendering.
//!
//! ## Line Format
//! ```text
//! MM-dd-yyyy HH:mm:ss.SSS (<level>) [<tag>]: <message>\r\n
//! ```
//!
//! Timestamps are local time with millisecond precision, captured when
//! the entry is rendered — on the lane, at execution time, not when the
//! caller submitted it. Stamps in the file are therefore monotone in
//! queue-drain order. Tag and message are written verbatim: an embedded
//! line break in the message appears as a literal extra line in the file.

use std::error::Error;
use std::fmt::Write as _;

use chrono::Local;

use crate::level::Level;

/// Timestamp format for entries: `MM-dd-yyyy HH:mm:ss.SSS`
pub const TIMESTAMP_FORMAT: &str = "%m-%d-%Y %H:%M:%S%.3f";

/// Line terminator for the persisted file
pub const LINE_ENDING: &str = "\r\n";

/// A single log entry, stamped when rendered
#[derive(Debug, Clone)]
pub struct Entry {
    /// Severity of the entry
    pub level: Level,

    /// Caller-supplied origin tag
    pub tag: String,

    /// Free-form message, already formatted by the caller
    pub message: String,
}

impl Entry {
    /// Create an entry; the timestamp is deferred to [`Entry::render`]
    pub fn new(level: Level, tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            tag: tag.into(),
            message: message.into(),
        }
    }

    /// Render the entry as one terminated file line, stamped with the
    /// current local time
    pub fn render(&self) -> String {
        format!(
            "{} ({}) [{}]: {}{}",
            Local::now().format(TIMESTAMP_FORMAT),
            self.level,
            self.tag,
            self.message,
            LINE_ENDING,
        )
    }
}

/// Render an error and its full `source()` chain as a log message.
///
/// This is the analog of logging a throwable's stack trace: the top-level
/// error first, then each cause on its own indented line.
pub fn render_error_chain(err: &dyn Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(rendered, "\n  caused by: {}", cause);
        source = cause.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::io;

    #[test]
    fn test_render_shape() {
        let entry = Entry::new(Level::Warn, "tag", "something happened");
        let line = entry.render();

        assert!(line.ends_with(LINE_ENDING));
        assert!(line.contains(" (warn) [tag]: something happened"));
    }

    #[test]
    fn test_timestamp_round_trips() {
        let entry = Entry::new(Level::Info, "t", "m");
        let line = entry.render();

        // "MM-dd-yyyy HH:mm:ss.SSS" is a fixed 23 characters.
        let stamp = &line[..23];
        let parsed = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT);
        assert!(parsed.is_ok(), "unparseable stamp: {stamp}");
    }

    #[test]
    fn test_stamp_taken_at_render_time() {
        let entry = Entry::new(Level::Info, "t", "m");
        std::thread::sleep(std::time::Duration::from_millis(50));

        let rendered_at = Local::now().naive_local();
        let line = entry.render();

        let stamp = NaiveDateTime::parse_from_str(&line[..23], TIMESTAMP_FORMAT).unwrap();
        let skew = (stamp - rendered_at).num_milliseconds().abs();
        assert!(skew < 50, "stamp should track render time, skew was {skew} ms");
    }

    #[test]
    fn test_message_written_verbatim() {
        let entry = Entry::new(Level::Debug, "t", "line one\nline two: [ok]");
        let line = entry.render();
        assert!(line.contains("line one\nline two: [ok]"));
    }

    #[test]
    fn test_render_error_chain_walks_sources() {
        let inner = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let outer = crate::error::LogError::Open(inner);

        let rendered = render_error_chain(&outer);
        assert!(rendered.starts_with("failed to open log file"));
        assert!(rendered.contains("caused by: denied"));
    }
}
