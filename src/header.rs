//! Header provider collaborator contract
//!
//! The log consults its header provider exactly once per empty ->
//! non-empty transition of the file, right before the first entry written
//! in that transition. Returning `None` (or an empty string) means no
//! header is written; the provider may then be consulted again on the
//! next write while the file remains empty.
//!
//! The provider runs inline on the log's single lane. It must not block
//! indefinitely, or it stalls every other queued operation on this log.

/// Provides header text for the log file when needed.
///
/// Blanket-implemented for closures, so a plain `Fn` is enough:
///
/// ```
/// use applog::Log;
///
/// let dir = tempfile::tempdir().unwrap();
/// let log = Log::new(dir.path().join("app.txt"), || {
///     Some(format!("App: demo\nVersion: {}\n", applog::VERSION))
/// });
/// # drop(log);
/// ```
pub trait HeaderProvider: Send + 'static {
    /// Return the header text, or `None` for "no header".
    fn provide(&self) -> Option<String>;
}

impl<F> HeaderProvider for F
where
    F: Fn() -> Option<String> + Send + 'static,
{
    fn provide(&self) -> Option<String> {
        self()
    }
}
