//! Weekend enumeration and status classification.
//!
//! A weekend is anchored on its Saturday: it belongs to the month that
//! Saturday falls in and is numbered 1..N chronologically within the month,
//! even when the paired Sunday spills into the next month.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{WkndError, WkndResult};
use crate::event::{Event, EventKind};

/// Years outside this range are rejected rather than miscomputed.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// A Saturday-anchored weekend within a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weekend {
    /// 1-based position of the weekend within its month
    pub weekend_number: u32,
    /// The Saturday beginning the weekend
    pub start_date: NaiveDate,
}

/// Aggregate classification of a weekend.
///
/// Ordered by display severity: `Travel > Plans > Free`. A single travel
/// event dominates any number of plans on the same weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekendStatus {
    Free,
    Plans,
    Travel,
}

impl EventKind {
    /// The status a single event of this kind contributes to its weekend.
    pub fn status(self) -> WeekendStatus {
        match self {
            EventKind::Plan => WeekendStatus::Plans,
            EventKind::Travel => WeekendStatus::Travel,
        }
    }
}

/// Enumerate every Saturday-anchored weekend in the given month.
///
/// Weekends are numbered 1..N in chronological order; N is always 4 or 5.
/// A weekend whose Sunday crosses into the next month still counts toward
/// the Saturday's month.
pub fn weekends_in_month(year: i32, month: u32) -> WkndResult<Vec<Weekend>> {
    if !(1..=12).contains(&month) {
        return Err(WkndError::InvalidMonth(month));
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(WkndError::InvalidYear(year));
    }

    // Inputs are validated above, so the first of the month always exists
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(WkndError::InvalidYear(year))?;

    // Walk forward to the first Saturday (no-op if the 1st already is one)
    let mut saturday = first;
    while saturday.weekday() != Weekday::Sat {
        saturday += Duration::days(1);
    }

    let mut weekends = Vec::new();
    let mut weekend_number = 1;
    while saturday.month() == month {
        weekends.push(Weekend {
            weekend_number,
            start_date: saturday,
        });
        saturday += Duration::days(7);
        weekend_number += 1;
    }

    Ok(weekends)
}

/// Classify one weekend's status from the full event collection.
///
/// Filters events by `(year, month, weekend_number)` and folds their kinds
/// by severity, so the result is independent of event order. Keys with no
/// matching events are `Free`. The collection is scanned in full on every
/// call; months have at most 5 weekends and event volume is small.
pub fn weekend_status(
    events: &[Event],
    year: i32,
    month: u32,
    weekend_number: u32,
) -> WeekendStatus {
    events
        .iter()
        .filter(|e| e.year == year && e.month == month && e.weekend_number == weekend_number)
        .map(|e| e.kind.status())
        .fold(WeekendStatus::Free, |acc, status| acc.max(status))
}

/// Enumerate a month's weekends together with their statuses.
pub fn month_statuses(
    events: &[Event],
    year: i32,
    month: u32,
) -> WkndResult<Vec<(Weekend, WeekendStatus)>> {
    Ok(weekends_in_month(year, month)?
        .into_iter()
        .map(|weekend| {
            let status = weekend_status(events, year, month, weekend.weekend_number);
            (weekend, status)
        })
        .collect())
}
