//! Local event file storage.
//!
//! Each weekend event is stored as one .json file in the planner
//! directory. The directory is the event source for every command: the
//! core calculations only ever see the collection read from here.

use std::path::{Path, PathBuf};

use wknd_core::{Event, WkndError, WkndResult};

/// Read every event file in the planner directory.
pub fn read_all(dir: &Path) -> WkndResult<Vec<Event>> {
    let mut events = Vec::new();

    if !dir.exists() {
        return Ok(events);
    }

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().map(|e| e == "json").unwrap_or(false) {
            let content = std::fs::read_to_string(&path)?;
            let event: Event = serde_json::from_str(&content)
                .map_err(|e| WkndError::EventParse(format!("{}: {}", path.display(), e)))?;
            events.push(event);
        }
    }

    Ok(events)
}

/// Write an event to the planner directory, returning the path used.
///
/// Filenames are `YYYY-MM-wN__<slug>.json`; collisions get numeric
/// suffixes (-2, -3, ...).
pub fn write_event(dir: &Path, event: &Event) -> WkndResult<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let base = base_filename(event);
    let filename = unique_filename(dir, &base);
    let path = dir.join(filename);

    let content = serde_json::to_string_pretty(event)
        .map_err(|e| WkndError::Serialization(e.to_string()))?;
    std::fs::write(&path, content)?;

    Ok(path)
}

/// Delete the stored event with the given id.
/// Returns false if no file holds that id.
pub fn delete_event(dir: &Path, id: &str) -> WkndResult<bool> {
    if !dir.exists() {
        return Ok(false);
    }

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().map(|e| e == "json").unwrap_or(false) {
            let content = std::fs::read_to_string(&path)?;
            if let Ok(event) = serde_json::from_str::<Event>(&content) {
                if event.id == id {
                    std::fs::remove_file(&path)?;
                    return Ok(true);
                }
            }
        }
    }

    Ok(false)
}

/// Base filename for an event (without collision suffix).
fn base_filename(event: &Event) -> String {
    format!(
        "{:04}-{:02}-w{}__{}.json",
        event.year,
        event.month,
        event.weekend_number,
        slugify(&event.title)
    )
}

/// Find a filename not already taken in the directory.
fn unique_filename(dir: &Path, base: &str) -> String {
    if !dir.join(base).exists() {
        return base.to_string();
    }

    let stem = base.trim_end_matches(".json");
    let mut n = 2;
    loop {
        let candidate = format!("{}-{}.json", stem, n);
        if !dir.join(&candidate).exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Convert a title to a filename-safe slug
fn slugify(s: &str) -> String {
    let slug = s
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "event".to_string()
    } else {
        slug
    }
}
