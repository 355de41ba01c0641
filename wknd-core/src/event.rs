//! Planner-neutral event types.
//!
//! An `Event` is one planned activity attached to a specific weekend,
//! identified by its `(year, month, weekend_number)` key. The time-of-day
//! and day-coverage fields are carried for display only; the status and
//! grouping calculations never look at them.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A weekend event (plan or travel)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: Option<String>,

    // Weekend key
    /// Calendar year the weekend falls in
    pub year: i32,
    /// Month 1-12
    pub month: u32,
    /// Ordinal of the Saturday-anchored weekend within its month, 1-based
    pub weekend_number: u32,

    pub kind: EventKind,

    // Display-only fields
    /// Whether the event covers the Saturday
    pub includes_saturday: bool,
    /// Whether the event covers the Sunday
    pub includes_sunday: bool,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub is_all_day: bool,
}

/// What kind of commitment an event represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A regular plan (dinner, errand, local activity)
    Plan,
    /// A trip away; dominates plans in the weekend status
    Travel,
}

impl Event {
    /// Human label for which days of the weekend the event covers
    pub fn day_coverage(&self) -> &'static str {
        match (self.includes_saturday, self.includes_sunday) {
            (true, true) => "Weekend",
            (true, false) => "Saturday",
            _ => "Sunday",
        }
    }
}
