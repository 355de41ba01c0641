//! Terminal rendering for events and the weekend grid.
//!
//! Plain-string builders colored with owo_colors; color is applied only
//! when the `preferences.color` setting allows it.

use owo_colors::OwoColorize;
use wknd_core::calendar::{month_label, MonthBucket};
use wknd_core::{Event, EventKind, Weekend, WeekendStatus};

/// Filled dot used for every weekend status; the color carries the meaning.
const DOT: &str = "●";

/// Render one status dot: green = free, yellow = plans, red = travel.
/// Without color, fall back to distinct ASCII markers.
pub fn render_dot(status: WeekendStatus, color: bool) -> String {
    if !color {
        return match status {
            WeekendStatus::Free => "o".to_string(),
            WeekendStatus::Plans => "x".to_string(),
            WeekendStatus::Travel => "X".to_string(),
        };
    }

    match status {
        WeekendStatus::Free => DOT.green().to_string(),
        WeekendStatus::Plans => DOT.yellow().to_string(),
        WeekendStatus::Travel => DOT.red().to_string(),
    }
}

/// Display word for a weekend status
pub fn status_label(status: WeekendStatus) -> &'static str {
    match status {
        WeekendStatus::Free => "free",
        WeekendStatus::Plans => "plans",
        WeekendStatus::Travel => "travel",
    }
}

/// One grid line per weekend: dot, ordinal, Saturday date, status word.
pub fn render_grid_line(weekend: &Weekend, status: WeekendStatus, color: bool) -> String {
    format!(
        "  {} weekend {}  {}  {}",
        render_dot(status, color),
        weekend.weekend_number,
        weekend.start_date.format("%b %d"),
        status_label(status),
    )
}

/// Render one event card: title with kind tag, optional description,
/// day coverage and time range, and the stored id.
pub fn render_event(event: &Event, color: bool) -> String {
    let tag = match event.kind {
        EventKind::Plan => "plan",
        EventKind::Travel => "travel",
    };
    let tag = if color {
        match event.kind {
            EventKind::Plan => tag.to_string(),
            EventKind::Travel => tag.red().to_string(),
        }
    } else {
        tag.to_string()
    };

    let mut lines = vec![format!("  {} [{}]", event.title, tag)];

    if let Some(description) = &event.description {
        lines.push(format!("    {}", description));
    }

    let mut meta = event.day_coverage().to_string();
    if !event.is_all_day {
        if let (Some(start), Some(end)) = (event.start_time, event.end_time) {
            meta.push_str(&format!(
                ", {} - {}",
                start.format("%H:%M"),
                end.format("%H:%M")
            ));
        }
    }
    meta.push_str(&format!("  (id: {})", event.id));

    let meta = if color { meta.dimmed().to_string() } else { meta };
    lines.push(format!("    {}", meta));

    lines.join("\n")
}

/// Render a month section: heading plus its event cards.
pub fn render_month(bucket: &MonthBucket, color: bool) -> String {
    let heading = month_label(bucket.year, bucket.month);
    let heading = if color {
        heading.bold().to_string()
    } else {
        heading
    };

    let mut lines = vec![heading];
    for event in &bucket.events {
        lines.push(render_event(event, color));
    }

    lines.join("\n")
}
