#![forbid(unsafe_code)]
//! Shiftplan — local roster planning for restaurant staff (no database).
//!
//! - Bi-monthly periods (1-15, 16-end of month), submissions due two weeks
//!   before the period starts.
//! - Deterministic two-pass fill: requested slot first, flexible fallback
//!   second, one shift per person per day.
//! - File storage (JSON/CSV); dates are calendar days, timezone-agnostic.

pub mod catalog;
pub mod io;
pub mod model;
pub mod notification;
pub mod period;
pub mod planner;
pub mod storage;

pub use catalog::{export_catalog_json, load_catalog_from_file, SlotCatalog, SlotDefinition};
pub use model::{
    Assignment, DayRoster, Planbook, PeriodRoster, Preference, PreferenceRecord, SlotId, StaffId,
    StaffMember,
};
pub use notification::{prepare_submission_reminder, Reminder, ReminderRenderer, TextReminder};
pub use period::{period_for_date, periods_for_month, PeriodHalf, PeriodSpan};
pub use planner::{plan_period, PlanError, PlanOptions, Planner, PreferenceIndex, RosterIssue};
pub use storage::{JsonStorage, Storage};
