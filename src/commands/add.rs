use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::Input;
use owo_colors::OwoColorize;
use weekplan_core::planner::Planner;
use weekplan_core::{date_key, PlannerError};

pub fn run(date: Option<String>, time: Option<String>, description: Option<String>) -> Result<()> {
    let interactive = date.is_none() || time.is_none() || description.is_none();

    // --- Date ---
    let date = match date {
        Some(s) => date_key::parse(&s)?,
        None => prompt_date_with_retry("  Date (YYYY-MM-DD)")?,
    };

    // --- Time ---
    let time = match time {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Time (HH:MM)")
            .interact_text()?,
    };

    // --- Description ---
    let description = match description {
        Some(d) => d,
        None => Input::<String>::new()
            .with_prompt("  What?")
            .interact_text()?,
    };

    if time.trim().is_empty() {
        anyhow::bail!("Time must not be empty");
    }
    if description.trim().is_empty() {
        anyhow::bail!("Description must not be empty");
    }

    let planner = Planner::load()?;
    let mut store = planner.store();

    if interactive {
        println!();
    }

    match store.add(date, &time, &description) {
        Ok(true) => println!("{}", format!("  Added: {time}: {description}").green()),
        Ok(false) => println!("  {}", "Already scheduled".dimmed()),
        Err(err @ PlannerError::Persist { .. }) => {
            println!("{}", format!("  Added: {time}: {description}").green());
            super::warn_durability(&err);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

/// Prompt for a date with retry on parse errors.
fn prompt_date_with_retry(prompt: &str) -> Result<NaiveDate> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match date_key::parse(&input) {
            Ok(date) => return Ok(date),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}
