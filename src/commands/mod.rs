pub mod add;
pub mod all;
pub mod day;
pub mod delete;
pub mod plan;
pub mod week;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use weekplan_core::{date_key, PlannerError};

/// Parse a date argument, defaulting to today when omitted.
pub fn date_or_today(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => Ok(date_key::parse(s)?),
        None => Ok(Local::now().date_naive()),
    }
}

/// Report a persist failure as a warning instead of failing the command.
///
/// The store keeps the mutation in memory, so the command's outcome stands;
/// the user only needs to know that durability was lost.
pub fn warn_durability(err: &PlannerError) {
    eprintln!("  {}", format!("Warning: {err}").yellow());
}

pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("  {msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
