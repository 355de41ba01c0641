//! Grouping events into a rolling month window for the calendar view.

use chrono::{Datelike, NaiveDate};

use crate::event::Event;

/// Events bucketed under one calendar month.
#[derive(Debug, Clone)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
    pub events: Vec<Event>,
}

/// The (year, month) pairs of a rolling window starting at `today`'s month.
///
/// Handles year rollover: a window opened in October runs into the next
/// calendar year.
pub fn upcoming_months(today: NaiveDate, count: u32) -> Vec<(i32, u32)> {
    let base = today.year() * 12 + today.month0() as i32;

    (0..count as i32)
        .map(|offset| {
            let total = base + offset;
            (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
        })
        .collect()
}

/// Group events into a rolling window of `months_ahead` months starting at
/// `today`'s month.
///
/// Buckets come back in ascending chronological order; months with no
/// events are omitted, and events outside the window are dropped. `today`
/// is injected by the caller so the grouping itself stays pure.
pub fn group_by_month(events: &[Event], today: NaiveDate, months_ahead: u32) -> Vec<MonthBucket> {
    upcoming_months(today, months_ahead)
        .into_iter()
        .filter_map(|(year, month)| {
            let bucket: Vec<Event> = events
                .iter()
                .filter(|e| e.year == year && e.month == month)
                .cloned()
                .collect();

            if bucket.is_empty() {
                None
            } else {
                Some(MonthBucket {
                    year,
                    month,
                    events: bucket,
                })
            }
        })
        .collect()
}

/// Display heading for a month, e.g. "June 2024".
pub fn month_label(year: i32, month: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => first.format("%B %Y").to_string(),
        None => format!("{:04}-{:02}", year, month),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    fn event(id: &str, year: i32, month: u32) -> Event {
        Event {
            id: id.to_string(),
            title: "Test event".to_string(),
            description: None,
            year,
            month,
            weekend_number: 1,
            kind: EventKind::Plan,
            includes_saturday: true,
            includes_sunday: true,
            start_time: None,
            end_time: None,
            is_all_day: true,
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_upcoming_months_rolls_over_year_boundary() {
        let months = upcoming_months(date(2024, 10, 15), 12);

        assert_eq!(months.len(), 12);
        assert_eq!(months[0], (2024, 10));
        assert_eq!(months[2], (2024, 12));
        assert_eq!(months[3], (2025, 1));
        assert_eq!(months[11], (2025, 9));
    }

    #[test]
    fn test_group_by_month_orders_buckets_and_omits_empty_months() {
        let events = vec![
            event("b", 2024, 9),
            event("a", 2024, 7),
            event("c", 2024, 7),
        ];

        let buckets = group_by_month(&events, date(2024, 6, 10), 12);

        assert_eq!(buckets.len(), 2);
        assert_eq!((buckets[0].year, buckets[0].month), (2024, 7));
        assert_eq!(buckets[0].events.len(), 2);
        assert_eq!((buckets[1].year, buckets[1].month), (2024, 9));
        assert_eq!(buckets[1].events.len(), 1);
    }

    #[test]
    fn test_group_by_month_drops_events_outside_the_window() {
        let events = vec![
            event("past", 2024, 5),
            event("in-window", 2024, 8),
            event("far-future", 2025, 7),
        ];

        let buckets = group_by_month(&events, date(2024, 6, 10), 12);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].events[0].id, "in-window");
    }

    #[test]
    fn test_group_by_month_includes_current_month() {
        let events = vec![event("now", 2024, 6)];

        let buckets = group_by_month(&events, date(2024, 6, 30), 12);

        assert_eq!(buckets.len(), 1);
        assert_eq!((buckets[0].year, buckets[0].month), (2024, 6));
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(2024, 6), "June 2024");
        assert_eq!(month_label(2025, 1), "January 2025");
    }
}
