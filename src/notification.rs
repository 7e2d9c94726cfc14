use crate::model::{Planbook, StaffId, StaffMember};
use crate::period::PeriodSpan;
use crate::planner::PreferenceIndex;
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;

/// A generated submission reminder for one staff member.
#[derive(Debug, Clone)]
pub struct Reminder {
    pub staff_id: String,
    pub staff_name: String,
    pub deadline: NaiveDate,
    pub content: String,
}

/// Customizes the message rendering (text, mail, SMS, ...).
pub trait ReminderRenderer {
    fn render(&self, staff: &StaffMember, period: &PeriodSpan, missing_days: usize) -> String;
}

/// Plain-text body intended for a future mail/print integration.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReminder;

impl ReminderRenderer for TextReminder {
    fn render(&self, staff: &StaffMember, period: &PeriodSpan, missing_days: usize) -> String {
        format!(
            "Hello {name},\n\nYour availability for {start} to {end} is still missing for {days} day(s).\nPlease submit it by {deadline}.\n\nThank you.\n",
            name = staff.name,
            start = period.start,
            end = period.end,
            days = missing_days,
            deadline = period.submission_deadline,
        )
    }
}

/// Prepare a reminder for a staff member who has not yet submitted
/// availability for every day of `period`. Errors when the member is
/// unknown, inactive, or already fully submitted.
pub fn prepare_submission_reminder(
    planbook: &Planbook,
    staff_id: &StaffId,
    period: &PeriodSpan,
    renderer: &dyn ReminderRenderer,
) -> Result<Reminder> {
    let member = planbook
        .find_staff(staff_id)
        .with_context(|| format!("unknown staff id: {}", staff_id.as_str()))?;
    if !member.active {
        bail!("staff {} is inactive", member.name);
    }

    let index = PreferenceIndex::build(&planbook.preferences);
    let missing = index.missing_days(&member.id, period.start, period.end);
    if missing.is_empty() {
        bail!(
            "staff {} already submitted availability for the whole period",
            member.name
        );
    }

    let content = renderer.render(member, period, missing.len());
    Ok(Reminder {
        staff_id: member.id.as_str().to_string(),
        staff_name: member.name.clone(),
        deadline: period.submission_deadline,
        content,
    })
}
