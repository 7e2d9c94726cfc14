mod assignment;
mod coverage;
mod index;
mod types;

pub use index::PreferenceIndex;
pub use types::{PlanError, PlanOptions, RosterIssue};

use crate::catalog::SlotCatalog;
use crate::model::{Planbook, PeriodRoster, PreferenceRecord, StaffMember};
use chrono::NaiveDate;

/// Compute a roster for an inclusive date range.
///
/// Pure: the result depends only on the arguments, and the supplied staff
/// and slot orders decide every tie. Two calls with identical inputs
/// produce identical rosters. Fails only on an invalid range; unmet
/// headcount is returned as-is, not signalled.
pub fn plan_period(
    start: NaiveDate,
    end: NaiveDate,
    staff: &[StaffMember],
    preferences: &[PreferenceRecord],
    catalog: &SlotCatalog,
    opts: PlanOptions,
) -> Result<PeriodRoster, PlanError> {
    assignment::plan_period(start, end, staff, preferences, catalog, opts)
}

/// Planner: wraps a Planbook being filled in.
#[derive(Debug, Default)]
pub struct Planner {
    planbook: Planbook,
}

impl Planner {
    pub fn new() -> Self {
        Self {
            planbook: Planbook::default(),
        }
    }

    pub fn planbook(&self) -> &Planbook {
        &self.planbook
    }
    pub fn planbook_mut(&mut self) -> &mut Planbook {
        &mut self.planbook
    }

    pub fn add_staff(&mut self, staff: Vec<StaffMember>) {
        self.planbook.staff.extend(staff);
    }

    /// Record availability submissions. A new record replaces any earlier
    /// one for the same (staff, day), so resubmitting a period overwrites
    /// the previous submission.
    pub fn record_preferences(&mut self, records: Vec<PreferenceRecord>) {
        for rec in records {
            self.planbook
                .preferences
                .retain(|r| !(r.staff == rec.staff && r.date == rec.date));
            self.planbook.preferences.push(rec);
        }
    }

    /// Run the planner over the planbook's staff and submissions, storing
    /// the result as the planbook's current roster.
    pub fn plan(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
        catalog: &SlotCatalog,
        opts: PlanOptions,
    ) -> Result<&PeriodRoster, PlanError> {
        let roster = assignment::plan_period(
            start,
            end,
            &self.planbook.staff,
            &self.planbook.preferences,
            catalog,
            opts,
        )?;
        Ok(self.planbook.roster.insert(roster))
    }

    /// Check the stored roster against a catalog. Empty when no roster has
    /// been planned yet.
    pub fn detect_issues(&self, catalog: &SlotCatalog) -> Vec<RosterIssue> {
        match &self.planbook.roster {
            Some(roster) => coverage::detect_issues(roster, catalog),
            None => Vec::new(),
        }
    }
}
