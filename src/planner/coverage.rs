use super::types::RosterIssue;
use crate::catalog::SlotCatalog;
use crate::model::PeriodRoster;

pub(super) fn detect_issues(roster: &PeriodRoster, catalog: &SlotCatalog) -> Vec<RosterIssue> {
    let mut out = Vec::new();

    for day in &roster.days {
        for slot in catalog.slots() {
            let assigned = day.filled(&slot.id) as u32;
            if assigned < slot.headcount {
                out.push(RosterIssue::UnderCoverage {
                    date: day.date,
                    slot: slot.id.clone(),
                    assigned,
                    target: slot.headcount,
                });
            }
        }

        for (idx, a) in day.assignments.iter().enumerate() {
            if day
                .assignments
                .iter()
                .skip(idx + 1)
                .any(|b| b.staff == a.staff)
            {
                out.push(RosterIssue::DoubleBooking {
                    date: day.date,
                    staff: a.staff.clone(),
                });
            }
        }

        for a in &day.assignments {
            if catalog.get(&a.slot).is_none() {
                out.push(RosterIssue::UnknownSlot {
                    date: day.date,
                    slot: a.slot.clone(),
                });
            }
        }
    }

    out
}
