//! Recurrence state machine for care tasks.
//!
//! # Responsibility
//! - Compute the next due date from a fixed day interval.
//! - Track the last completion marker.
//!
//! # Invariants
//! - `interval_days >= 1`.
//! - Two observable states: never completed (due is derived from the anchor)
//!   and completed at least once (due = last completion + interval).
//! - Only `mark_completed` transitions state; calendar time never does.
//! - Completion dates are not required to be monotonic. An earlier
//!   completion moves `next_due` backward.

use crate::error::{CareError, CareResult};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// How the first due date is derived while a schedule was never completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstDue {
    /// First due on `anchor + interval`.
    #[default]
    AfterInterval,
    /// First due on the anchor date itself.
    OnAnchor,
}

/// Fixed-interval recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScheduleRecord")]
pub struct Schedule {
    interval_days: u32,
    anchor_date: NaiveDate,
    first_due: FirstDue,
    last_completed: Option<NaiveDate>,
}

impl Schedule {
    /// Creates a schedule first due one interval after `anchor_date`.
    ///
    /// # Errors
    /// - `InvalidArgument` when `interval_days <= 0`.
    pub fn new(interval_days: i64, anchor_date: NaiveDate) -> CareResult<Self> {
        Self::with_first_due(interval_days, anchor_date, FirstDue::AfterInterval)
    }

    /// Creates a schedule whose first due date is `anchor_date`.
    ///
    /// After the first completion it recurs exactly like [`Schedule::new`].
    pub fn first_due_on(interval_days: i64, anchor_date: NaiveDate) -> CareResult<Self> {
        Self::with_first_due(interval_days, anchor_date, FirstDue::OnAnchor)
    }

    pub fn with_first_due(
        interval_days: i64,
        anchor_date: NaiveDate,
        first_due: FirstDue,
    ) -> CareResult<Self> {
        if interval_days <= 0 {
            return Err(CareError::invalid(format!(
                "recurrence must be at least 1 day, got {interval_days}"
            )));
        }
        let interval_days = u32::try_from(interval_days).map_err(|_| {
            CareError::invalid(format!("recurrence of {interval_days} days is too large"))
        })?;

        Ok(Self {
            interval_days,
            anchor_date,
            first_due,
            last_completed: None,
        })
    }

    pub fn interval_days(&self) -> u32 {
        self.interval_days
    }

    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor_date
    }

    pub fn first_due(&self) -> FirstDue {
        self.first_due
    }

    pub fn last_completed(&self) -> Option<NaiveDate> {
        self.last_completed
    }

    /// Returns the date on which this schedule next becomes due.
    pub fn next_due(&self) -> NaiveDate {
        match (self.last_completed, self.first_due) {
            (Some(completed), _) => add_days(completed, self.interval_days),
            (None, FirstDue::AfterInterval) => add_days(self.anchor_date, self.interval_days),
            // Why: a task started "today" must already show up in today's due
            // list, so the anchor itself is the first due date.
            (None, FirstDue::OnAnchor) => self.anchor_date,
        }
    }

    /// Returns whether the schedule is due on `on`; the due date itself counts.
    pub fn is_due(&self, on: NaiveDate) -> bool {
        on >= self.next_due()
    }

    /// Records a completion, restarting the cycle from `on`.
    pub fn mark_completed(&mut self, on: NaiveDate) {
        self.last_completed = Some(on);
    }
}

#[derive(Deserialize)]
struct ScheduleRecord {
    interval_days: i64,
    anchor_date: NaiveDate,
    #[serde(default)]
    first_due: FirstDue,
    last_completed: Option<NaiveDate>,
}

impl TryFrom<ScheduleRecord> for Schedule {
    type Error = CareError;

    fn try_from(record: ScheduleRecord) -> Result<Self, Self::Error> {
        let mut schedule =
            Self::with_first_due(record.interval_days, record.anchor_date, record.first_due)?;
        schedule.last_completed = record.last_completed;
        Ok(schedule)
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "every {} day(s)", self.interval_days)
    }
}

// Why: `next_due` is infallible and feeds plain date comparisons; clamping to
// `NaiveDate::MAX` keeps a far-future schedule "not yet due" instead of
// panicking or wrapping.
fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}
