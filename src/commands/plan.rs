use anyhow::Result;
use owo_colors::OwoColorize;
use weekplan_core::config::PlannerConfig;
use weekplan_core::planner::Planner;
use weekplan_core::{date_key, merge, PlannerError};

use crate::render;

pub async fn run(date: &str, tasks: &str) -> Result<()> {
    let date = date_key::parse(date)?;

    let tasks: Vec<String> = tasks
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if tasks.is_empty() {
        anyhow::bail!("No tasks given. Pass a comma-separated list, e.g. \"write report, gym\"");
    }

    let planner = Planner::load()?;

    let Some(generator) = planner.generator() else {
        anyhow::bail!(
            "No generator configured.\n\n\
            Set one in {}:\n  \
            generator = \"ollama\"",
            PlannerConfig::config_path()?.display()
        );
    };

    // Generation runs to completion before anything touches the store, so a
    // generator failure leaves the planner exactly as it was.
    let spinner = super::create_spinner(format!("Planning {}", date.format("%A %d %b")));
    let result = generator.generate(date, &tasks).await;
    spinner.finish_and_clear();

    let plan = result?;
    let proposed = plan.len();

    let mut store = planner.store();
    let applied = match merge::apply_generated_schedule(&mut store, date, &plan) {
        Ok(applied) => Some(applied),
        Err(err @ PlannerError::Persist { .. }) => {
            super::warn_durability(&err);
            None
        }
        Err(err) => return Err(err.into()),
    };

    println!("{}", render::day_header(date));
    println!("{}", render::day_events(store.get(date)));
    println!();

    match applied {
        Some(applied) => {
            println!("{}", format!("  {applied} added ({proposed} proposed)").green())
        }
        None => println!(
            "  {}",
            format!("Plan merged in memory ({proposed} proposed)").yellow()
        ),
    }

    Ok(())
}
