use anyhow::Result;
use weekplan_core::planner::Planner;

use crate::render;

pub fn run(date: Option<&str>) -> Result<()> {
    let date = super::date_or_today(date)?;

    let planner = Planner::load()?;
    let store = planner.store();

    println!("{}", render::day_header(date));
    println!("{}", render::day_events(store.get(date)));

    Ok(())
}
