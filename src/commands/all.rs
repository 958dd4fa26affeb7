use anyhow::Result;
use owo_colors::OwoColorize;
use weekplan_core::planner::Planner;

use crate::render;

pub fn run() -> Result<()> {
    let planner = Planner::load()?;
    let store = planner.store();
    let all = store.list_all();

    if all.is_empty() {
        println!("  {}", "No events scheduled".dimmed());
        return Ok(());
    }

    for (i, (day, events)) in all.iter().enumerate() {
        println!("{}", render::day_header(*day));
        println!("{}", render::day_events(events));

        if i < all.len() - 1 {
            println!();
        }
    }

    Ok(())
}
