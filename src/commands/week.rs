use anyhow::Result;
use chrono::Duration;
use weekplan_core::date_key;
use weekplan_core::planner::Planner;

use crate::render;

pub fn run(date: Option<&str>, offset: i64) -> Result<()> {
    let anchor = super::date_or_today(date)?;
    let start = date_key::week_start(anchor) + Duration::days(7 * offset);
    let end = start + Duration::days(6);

    let planner = Planner::load()?;
    let store = planner.store();
    let week = store.get_range(start, end);

    for (i, (day, events)) in week.iter().enumerate() {
        println!("{}", render::day_header(*day));
        println!("{}", render::day_events(events));

        if i < week.len() - 1 {
            println!();
        }
    }

    Ok(())
}
