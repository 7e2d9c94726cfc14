use crate::model::{PeriodRoster, Preference, PreferenceRecord, SlotId, StaffId, StaffMember};
use anyhow::{bail, Context};
use chrono::{DateTime, NaiveDate, Utc};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import staff from CSV: header `staff_id,name[,active]`.
pub fn import_staff_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<StaffMember>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing staff_id")?.trim();
        let name = rec.get(1).context("missing name")?.trim();
        if id.is_empty() || name.is_empty() {
            bail!("invalid staff row (empty)");
        }
        let mut member = StaffMember::new(id, name);
        if let Some(flag) = rec.get(2) {
            let flag = flag.trim();
            if !flag.is_empty() {
                member.active = parse_bool(flag)
                    .with_context(|| format!("invalid active value for staff {id}"))?;
            }
        }
        out.push(member);
    }
    Ok(out)
}

/// Import availability submissions from CSV: header
/// `staff_id,date,preference`. Dates are `YYYY-MM-DD` or RFC3339 (the
/// time-of-day is dropped). Preference values: `unavailable` (alias
/// `off`), `any`, or a slot id.
pub fn import_preferences_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<PreferenceRecord>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing staff_id")?.trim();
        if id.is_empty() {
            bail!("invalid preference row (empty staff_id)");
        }
        let date = rec.get(1).context("missing date")?.trim();
        let date = parse_day(date)?;
        let preference = rec.get(2).context("missing preference")?.trim();
        if preference.is_empty() {
            bail!("invalid preference row for staff {id} (empty preference)");
        }
        out.push(PreferenceRecord::new(
            StaffId::new(id),
            date,
            parse_preference(preference),
        ));
    }
    Ok(out)
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => bail!("expected boolean"),
    }
}

/// A calendar day, from a plain date or a full RFC3339 timestamp.
fn parse_day(raw: &str) -> anyhow::Result<NaiveDate> {
    if let Ok(dt) = raw.parse::<DateTime<Utc>>() {
        return Ok(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid date/datetime: {raw}"))
}

fn parse_preference(raw: &str) -> Preference {
    match raw.to_ascii_lowercase().as_str() {
        "unavailable" | "off" => Preference::Unavailable,
        "any" => Preference::Any,
        _ => Preference::Slot(SlotId::new(raw)),
    }
}

/// Export JSON of the roster (pretty-printed).
pub fn export_roster_json<P: AsRef<Path>>(path: P, roster: &PeriodRoster) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(roster)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV of the roster: header `date,slot,staff_id,staff_name`.
pub fn export_roster_csv<P: AsRef<Path>>(
    path: P,
    roster: &PeriodRoster,
    staff: &[StaffMember],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "slot", "staff_id", "staff_name"])?;
    for day in &roster.days {
        for a in &day.assignments {
            let name = staff
                .iter()
                .find(|m| m.id == a.staff)
                .map(|m| m.name.as_str())
                .unwrap_or("");
            let date = a.date.format("%Y-%m-%d").to_string();
            w.write_record([date.as_str(), a.slot.as_str(), a.staff.as_str(), name])?;
        }
    }
    w.flush()?;
    Ok(())
}
