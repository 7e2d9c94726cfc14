use crate::model::{Preference, PreferenceRecord, StaffId};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Lookup from (staff, day) to the declared preference.
///
/// Built once per planning run from the flat submission list. Records are
/// inserted in list order, so a later record for the same (staff, day)
/// overwrites an earlier one: last write wins. The maps are only ever
/// probed by key, never iterated, so planning stays deterministic.
#[derive(Debug, Default)]
pub struct PreferenceIndex {
    by_staff: HashMap<StaffId, HashMap<NaiveDate, Preference>>,
}

impl PreferenceIndex {
    pub fn build(records: &[PreferenceRecord]) -> Self {
        let mut by_staff: HashMap<StaffId, HashMap<NaiveDate, Preference>> = HashMap::new();
        for rec in records {
            by_staff
                .entry(rec.staff.clone())
                .or_default()
                .insert(rec.date, rec.preference.clone());
        }
        Self { by_staff }
    }

    /// `None` means the member submitted nothing for that day.
    pub fn get(&self, staff: &StaffId, date: NaiveDate) -> Option<&Preference> {
        self.by_staff.get(staff)?.get(&date)
    }

    pub fn is_unavailable(&self, staff: &StaffId, date: NaiveDate) -> bool {
        matches!(self.get(staff, date), Some(Preference::Unavailable))
    }

    /// Days in `[start, end]` this member has no record for.
    pub fn missing_days(&self, staff: &StaffId, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let mut missing = Vec::new();
        let mut current = start;
        while current <= end {
            if self.get(staff, current).is_none() {
                missing.push(current);
            }
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }
        missing
    }
}
