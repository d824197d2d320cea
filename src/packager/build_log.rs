//! Append-only build log.
//!
//! [`LogAccumulator`] is the only channel through which build detail (tool
//! output, launch errors) is surfaced. The caller owns it, hands a clone to
//! the [`Packager`](super::Packager), and decides when to persist or clear
//! it. Every entry is also forwarded to the `log` facade.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// `chrono` format used to prefix each entry.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shared, append-only text log.
///
/// Clones share the same buffer. Appends are serialized so concurrent builds
/// may write to one accumulator.
#[derive(Debug, Clone, Default)]
pub struct LogAccumulator {
    contents: Arc<Mutex<String>>,
}

impl LogAccumulator {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a timestamped informational entry.
    pub fn append(&self, entry: &str) {
        log::info!("{}", entry);
        self.push(entry);
    }

    /// Appends a timestamped error entry.
    pub fn append_error(&self, entry: &str) {
        log::error!("{}", entry);
        self.push(entry);
    }

    /// Returns a snapshot of the accumulated text.
    pub fn contents(&self) -> String {
        self.lock().clone()
    }

    /// True when nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discards all entries.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn push(&self, entry: &str) {
        let line = format!("[{}] {}\n", timestamp(), entry);
        self.lock().push_str(&line);
    }

    // A panic mid-append leaves the text intact, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, String> {
        self.contents.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Current local time formatted with [`TIMESTAMP_FORMAT`].
pub fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
