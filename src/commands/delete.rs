use anyhow::Result;
use owo_colors::OwoColorize;
use weekplan_core::planner::Planner;
use weekplan_core::{date_key, PlannerError};

pub fn run(date: &str, time: &str, description: &str) -> Result<()> {
    let date = date_key::parse(date)?;

    let planner = Planner::load()?;
    let mut store = planner.store();

    match store.delete(date, time, description) {
        Ok(true) => println!("{}", format!("  Removed: {time}: {description}").green()),
        Ok(false) => println!("  {}", "Nothing to delete".dimmed()),
        Err(err @ PlannerError::Persist { .. }) => {
            println!("{}", format!("  Removed: {time}: {description}").green());
            super::warn_durability(&err);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
