//! Audit sinks for rewrite events.

use serde::Serialize;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// One class-name literal that was rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteEvent {
    /// The class list before prefixing.
    pub original: String,
    /// The class list after prefixing.
    pub updated: String,
    /// 1-indexed line of the literal.
    pub line: usize,
}

impl fmt::Display for RewriteEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Original: \"{}\" => Updated: \"{}\"",
            self.original, self.updated
        )
    }
}

/// Receives rewrite events when debugging is enabled.
///
/// Implementations must not fail the transform: errors are handled inside
/// `record`.
pub trait AuditSink: Send + Sync {
    fn record(&self, event: &RewriteEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl AuditSink for NoopSink {
    fn record(&self, _event: &RewriteEvent) {}
}

/// Keeps events in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<RewriteEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events.
    pub fn events(&self) -> Vec<RewriteEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl AuditSink for MemorySink {
    fn record(&self, event: &RewriteEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

/// Appends one human-readable record per event to a text file.
///
/// Records look like `Original: "btn" => Updated: "app-btn"` and are separated
/// by blank lines. The file is opened on the first event; appends from
/// several threads are serialized.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: Mutex::new(None),
        }
    }

    /// Returns the destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, record: &str) -> io::Result<()> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        if file.is_none() {
            *file = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
            );
        }
        match file.as_mut() {
            Some(file) => file.write_all(record.as_bytes()),
            None => Ok(()),
        }
    }
}

impl AuditSink for FileSink {
    fn record(&self, event: &RewriteEvent) {
        if let Err(err) = self.append(&format!("{}\n\n", event)) {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "failed to append rewrite record"
            );
        }
    }
}
