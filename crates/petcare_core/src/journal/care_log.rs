//! Append-only care event journal.
//!
//! # Responsibility
//! - Write one timestamped line per care event to a caller-chosen file.
//!
//! # Invariants
//! - Writes only ever append; existing lines are never rewritten.
//! - Line breaks inside pet names, event types or notes become spaces.

use crate::journal::{single_line, JournalError, JournalResult};
use chrono::{Local, NaiveDateTime};
use log::{debug, error};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Timestamp layout used at the start of every journal line.
pub const EVENT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Append-only care event journal bound to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareJournal {
    path: PathBuf,
}

impl CareJournal {
    /// Binds a journal to `path`. The file is created on first write.
    ///
    /// # Errors
    /// - `InvalidPath` when `path` is empty.
    pub fn new(path: impl Into<PathBuf>) -> JournalResult<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(JournalError::InvalidPath(
                "journal path must not be empty".to_string(),
            ));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one event stamped with the current local time.
    pub fn record(&self, pet_name: &str, event_type: &str, notes: &str) -> JournalResult<()> {
        self.record_at(Local::now().naive_local(), pet_name, event_type, notes)
    }

    /// Appends one event stamped with `timestamp`.
    pub fn record_at(
        &self,
        timestamp: NaiveDateTime,
        pet_name: &str,
        event_type: &str,
        notes: &str,
    ) -> JournalResult<()> {
        let line = format_event_line(timestamp, pet_name, event_type, notes);
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));

        match result {
            Ok(()) => {
                debug!("event=care_event_append module=journal status=ok");
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=care_event_append module=journal status=error kind={:?}",
                    err.kind()
                );
                Err(err.into())
            }
        }
    }
}

/// Formats `<timestamp> - <pet_name> - <event_type>: <notes>` with a
/// trailing newline.
pub fn format_event_line(
    timestamp: NaiveDateTime,
    pet_name: &str,
    event_type: &str,
    notes: &str,
) -> String {
    format!(
        "{} - {} - {}: {}\n",
        timestamp.format(EVENT_TIMESTAMP_FORMAT),
        single_line(pet_name),
        single_line(event_type),
        single_line(notes)
    )
}
