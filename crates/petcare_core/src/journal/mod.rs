//! File-backed collaborators: care event journal and pet report export.
//!
//! # Responsibility
//! - Append timestamped care events to a durable text journal.
//! - Export a flat one-line-per-pet report.
//!
//! # Invariants
//! - Destinations are always passed explicitly; there is no default path.
//! - Every journal record is exactly one UTF-8, newline-terminated line.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod care_log;
mod report;

pub use care_log::{format_event_line, CareJournal, EVENT_TIMESTAMP_FORMAT};
pub use report::{export_pet_report, format_report_line};

pub type JournalResult<T> = Result<T, JournalError>;

/// Error for journal and report file operations.
#[derive(Debug)]
pub enum JournalError {
    /// Destination path is empty.
    InvalidPath(String),
    Io(std::io::Error),
}

impl Display for JournalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPath(message) => write!(f, "invalid journal path: {message}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for JournalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPath(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for JournalError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Collapses line breaks so one record never spans several lines.
pub(crate) fn single_line(value: &str) -> String {
    value.replace(['\n', '\r'], " ")
}
