//! Terminal rendering for planner types.
//!
//! Extension helpers that add colored output for events and day sections
//! using owo_colors.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use weekplan_core::Event;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        format!("{} {}", self.time.dimmed(), self.description)
    }
}

/// Header line for a day section, e.g. "Monday 03 Jun".
pub fn day_header(date: NaiveDate) -> String {
    date.format("%A %d %b").to_string().bold().to_string()
}

/// A day's events as indented lines, or a dimmed placeholder for an empty
/// day (the week view renders all seven days either way).
pub fn day_events(events: &[Event]) -> String {
    if events.is_empty() {
        return format!("   {}", "No events".dimmed());
    }

    events
        .iter()
        .map(|e| format!("   {}", e.render()))
        .collect::<Vec<_>>()
        .join("\n")
}
