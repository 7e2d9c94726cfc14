use anyhow::{bail, Context, Result};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which half of the month a period covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodHalf {
    First,
    Second,
}

/// One bi-monthly scheduling period: days 1-15, or 16 to month end.
/// Availability is due `submission_deadline`, two weeks before the period
/// starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSpan {
    pub year: i32,
    pub month: u32,
    pub half: PeriodHalf,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub submission_deadline: NaiveDate,
}

impl PeriodSpan {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Inclusive length in days.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Both scheduling periods of a month, first half then second.
pub fn periods_for_month(year: i32, month: u32) -> Result<[PeriodSpan; 2]> {
    if !(1..=12).contains(&month) {
        bail!("month must be 1-12, got {month}");
    }

    let first_day = NaiveDate::from_ymd_opt(year, month, 1)
        .with_context(|| format!("invalid month {year}-{month:02}"))?;
    let mid = NaiveDate::from_ymd_opt(year, month, 15).context("mid-month date")?;
    let sixteenth = NaiveDate::from_ymd_opt(year, month, 16).context("16th of month")?;
    let last_day = last_day_of_month(year, month).context("end of month")?;

    Ok([
        PeriodSpan {
            year,
            month,
            half: PeriodHalf::First,
            start: first_day,
            end: mid,
            submission_deadline: first_day - Duration::days(14),
        },
        PeriodSpan {
            year,
            month,
            half: PeriodHalf::Second,
            start: sixteenth,
            end: last_day,
            submission_deadline: sixteenth - Duration::days(14),
        },
    ])
}

/// The scheduling period a date falls in.
pub fn period_for_date(date: NaiveDate) -> Result<PeriodSpan> {
    let [first, second] = periods_for_month(date.year(), date.month())?;
    if first.contains(date) {
        Ok(first)
    } else {
        Ok(second)
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).and_then(|d| d.pred_opt())
}
