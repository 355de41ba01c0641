mod config;
mod render;
mod store;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveTime};
use clap::{Parser, Subcommand};
use wknd_core::{calendar, weekend, Event, EventKind};

#[derive(Parser)]
#[command(name = "wknd")]
#[command(about = "Plan your weekends from a local directory of event files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show upcoming events grouped by month
    Calendar,
    /// Show the weekend status grid for one month
    Grid {
        /// Year to show (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month to show, 1-12 (defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// Create a new weekend event
    New {
        /// Event title
        title: String,

        /// Month the weekend falls in, 1-12
        #[arg(short, long)]
        month: u32,

        /// Weekend number within the month (1 = first Saturday)
        #[arg(short, long)]
        weekend: u32,

        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Mark the event as travel instead of a plan
        #[arg(long)]
        travel: bool,

        /// Event description
        #[arg(long)]
        description: Option<String>,

        /// Only the Saturday is planned
        #[arg(long, conflicts_with = "sunday_only")]
        saturday_only: bool,

        /// Only the Sunday is planned
        #[arg(long, conflicts_with = "saturday_only")]
        sunday_only: bool,

        /// Start time (HH:MM); makes the event timed instead of all-day
        #[arg(long, requires = "end")]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(long, requires = "start")]
        end: Option<String>,
    },
    /// Remove a stored event by id
    Remove {
        /// Event id (shown by `wknd calendar`)
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calendar => cmd_calendar(),
        Commands::Grid { year, month } => cmd_grid(year, month),
        Commands::New {
            title,
            month,
            weekend,
            year,
            travel,
            description,
            saturday_only,
            sunday_only,
            start,
            end,
        } => cmd_new(
            title,
            month,
            weekend,
            year,
            travel,
            description,
            saturday_only,
            sunday_only,
            start,
            end,
        ),
        Commands::Remove { id } => cmd_remove(&id),
    }
}

fn cmd_calendar() -> Result<()> {
    let cfg = config::load_config()?;
    let dir = config::planner_dir(&cfg);
    let events = store::read_all(&dir)?;

    println!("Calendar");
    println!("Your weekend plans\n");

    if events.is_empty() {
        println!("No events scheduled. Add your first weekend plan with `wknd new`.");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let buckets = calendar::group_by_month(&events, today, cfg.preferences.months_ahead);

    if buckets.is_empty() {
        println!(
            "No events in the next {} months.",
            cfg.preferences.months_ahead
        );
        return Ok(());
    }

    let sections: Vec<String> = buckets
        .iter()
        .map(|bucket| render::render_month(bucket, cfg.preferences.color))
        .collect();
    println!("{}", sections.join("\n\n"));

    Ok(())
}

fn cmd_grid(year: Option<i32>, month: Option<u32>) -> Result<()> {
    let cfg = config::load_config()?;
    let dir = config::planner_dir(&cfg);
    let events = store::read_all(&dir)?;

    let today = Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());

    let statuses = weekend::month_statuses(&events, year, month)?;

    println!("{}", calendar::month_label(year, month));
    for (weekend, status) in &statuses {
        println!(
            "{}",
            render::render_grid_line(weekend, *status, cfg.preferences.color)
        );
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_new(
    title: String,
    month: u32,
    weekend_number: u32,
    year: Option<i32>,
    travel: bool,
    description: Option<String>,
    saturday_only: bool,
    sunday_only: bool,
    start: Option<String>,
    end: Option<String>,
) -> Result<()> {
    let cfg = config::load_config()?;
    let dir = config::planner_dir(&cfg);

    let today = Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());

    // Reject weekend numbers the month does not have
    let weekends = weekend::weekends_in_month(year, month)?;
    if !weekends.iter().any(|w| w.weekend_number == weekend_number) {
        anyhow::bail!(
            "{} has {} weekends; weekend {} does not exist",
            calendar::month_label(year, month),
            weekends.len(),
            weekend_number
        );
    }

    let start_time = start.as_deref().map(parse_time).transpose()?;
    let end_time = end.as_deref().map(parse_time).transpose()?;
    let is_all_day = start_time.is_none();

    let event = Event {
        id: format!("local-{}", uuid::Uuid::new_v4()),
        title,
        description,
        year,
        month,
        weekend_number,
        kind: if travel {
            EventKind::Travel
        } else {
            EventKind::Plan
        },
        includes_saturday: !sunday_only,
        includes_sunday: !saturday_only,
        start_time,
        end_time,
        is_all_day,
    };

    let path = store::write_event(&dir, &event)?;
    println!("Created {}", path.display());

    Ok(())
}

fn cmd_remove(id: &str) -> Result<()> {
    let cfg = config::load_config()?;
    let dir = config::planner_dir(&cfg);

    if store::delete_event(&dir, id)? {
        println!("Removed {}", id);
    } else {
        anyhow::bail!("No event with id '{}' in {}", id, dir.display());
    }

    Ok(())
}

/// Parse HH:MM into a NaiveTime
fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| anyhow::anyhow!("Invalid time '{}'. Expected HH:MM", s))
}
