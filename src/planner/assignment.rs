use super::index::PreferenceIndex;
use super::types::{PlanError, PlanOptions};
use crate::catalog::SlotCatalog;
use crate::model::{
    Assignment, DayRoster, PeriodRoster, Preference, PreferenceRecord, StaffId, StaffMember,
};
use anyhow::Context;
use chrono::NaiveDate;
use std::collections::HashSet;

pub(super) fn plan_period(
    start: NaiveDate,
    end: NaiveDate,
    staff: &[StaffMember],
    preferences: &[PreferenceRecord],
    catalog: &SlotCatalog,
    opts: PlanOptions,
) -> Result<PeriodRoster, PlanError> {
    if start > end {
        return Err(PlanError::InvalidRange { start, end });
    }
    let days = (end - start).num_days() + 1;
    if days > opts.max_period_days {
        return Err(PlanError::RangeTooLong {
            days,
            max: opts.max_period_days,
        });
    }

    let index = PreferenceIndex::build(preferences);

    let mut roster = PeriodRoster {
        days: Vec::with_capacity(days as usize),
    };
    let mut current = start;
    while current <= end {
        roster.days.push(assign_day(current, staff, &index, catalog));
        current = current.succ_opt().context("date overflow")?;
    }
    Ok(roster)
}

/// Fill one day's slots from the staff pool.
///
/// The pool keeps the caller's order; slots are claimed in catalog order.
/// For each slot, pass 1 takes members who asked for this slot or declared
/// themselves flexible, pass 2 tops up with members who submitted nothing
/// for the day. A member who asked for a different slot is never pulled in
/// as fallback. `claimed` lives for this one day: nobody works two slots
/// on the same date.
fn assign_day(
    date: NaiveDate,
    staff: &[StaffMember],
    index: &PreferenceIndex,
    catalog: &SlotCatalog,
) -> DayRoster {
    let pool: Vec<&StaffMember> = staff
        .iter()
        .filter(|m| m.active)
        .filter(|m| !index.is_unavailable(&m.id, date))
        .collect();

    let mut claimed: HashSet<&StaffId> = HashSet::new();
    let mut assignments = Vec::new();

    for slot in catalog.slots() {
        let mut filled = 0u32;

        // pass 1: declared matches
        for member in &pool {
            if filled >= slot.headcount {
                break;
            }
            if claimed.contains(&member.id) {
                continue;
            }
            let wants = match index.get(&member.id, date) {
                Some(Preference::Slot(id)) => id == &slot.id,
                Some(Preference::Any) => true,
                _ => false,
            };
            if wants {
                claimed.insert(&member.id);
                assignments.push(Assignment {
                    staff: member.id.clone(),
                    date,
                    slot: slot.id.clone(),
                });
                filled += 1;
            }
        }

        // pass 2: fallback fill with members who expressed nothing
        for member in &pool {
            if filled >= slot.headcount {
                break;
            }
            if claimed.contains(&member.id) {
                continue;
            }
            let flexible = matches!(
                index.get(&member.id, date),
                None | Some(Preference::Any)
            );
            if flexible {
                claimed.insert(&member.id);
                assignments.push(Assignment {
                    staff: member.id.clone(),
                    date,
                    slot: slot.id.clone(),
                });
                filled += 1;
            }
        }
        // still short? the slot stays under-filled; `check` reports it
    }

    DayRoster { date, assignments }
}
