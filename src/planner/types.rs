use crate::model::{SlotId, StaffId};
use chrono::NaiveDate;
use thiserror::Error;

/// Guard rails for one planning run.
#[derive(Debug, Clone, Copy)]
pub struct PlanOptions {
    /// Longest inclusive range a single run will iterate.
    pub max_period_days: i64,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            max_period_days: 366,
        }
    }
}

/// Something worth flagging in a planned roster.
///
/// Under-coverage is a normal outcome, never an error: the planner leaves a
/// slot short rather than inventing staff. Double bookings and unknown
/// slots would mean the roster was edited or checked against the wrong
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterIssue {
    UnderCoverage {
        date: NaiveDate,
        slot: SlotId,
        assigned: u32,
        target: u32,
    },
    DoubleBooking {
        date: NaiveDate,
        staff: StaffId,
    },
    UnknownSlot {
        date: NaiveDate,
        slot: SlotId,
    },
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid period: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("period of {days} days exceeds the {max}-day limit")]
    RangeTooLong { days: i64, max: i64 },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
