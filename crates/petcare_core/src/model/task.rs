//! Recurring care task model.
//!
//! # Responsibility
//! - Bind a label and free-text notes to an exclusively owned `Schedule`.
//!
//! # Invariants
//! - `label` is non-blank and identifies the task within its owning pet.
//! - Due/complete queries always delegate to the schedule.

use crate::error::CareResult;
use crate::model::schedule::Schedule;
use crate::model::validation::normalize_name;
use chrono::NaiveDate;
use std::fmt::{Display, Formatter};

/// A named recurring obligation such as feeding or walking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareTask {
    label: String,
    schedule: Schedule,
    notes: String,
}

impl CareTask {
    /// Creates a task with empty notes.
    ///
    /// # Errors
    /// - `InvalidArgument` when `label` is blank.
    pub fn new(label: &str, schedule: Schedule) -> CareResult<Self> {
        Self::with_notes(label, schedule, "")
    }

    pub fn with_notes(
        label: &str,
        schedule: Schedule,
        notes: impl Into<String>,
    ) -> CareResult<Self> {
        Ok(Self {
            label: normalize_name("task label", label)?,
            schedule,
            notes: notes.into(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn complete(&mut self, on: NaiveDate) {
        self.schedule.mark_completed(on);
    }

    pub fn is_due(&self, on: NaiveDate) -> bool {
        self.schedule.is_due(on)
    }

    pub fn next_due(&self) -> NaiveDate {
        self.schedule.next_due()
    }
}

impl Display for CareTask {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (next due {})", self.label, self.next_due())
    }
}
