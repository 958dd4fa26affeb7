//! Applying generated day plans to the event store.
//!
//! Generated entries go through [`EventStore::add`] one by one, so the
//! store's dedup and ordering guarantees hold for generated events exactly as
//! they do for manually entered ones. There is no separate ingestion path.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PlannerResult;
use crate::store::EventStore;

/// One proposed entry of a generated day plan.
///
/// Entries arrive as the generator produced them; times are not parsed or
/// normalized on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanEntry {
    pub time: String,
    pub description: String,
}

/// Apply a generated plan to `date`, returning how many entries actually
/// inserted a new event.
///
/// Entries already present on the date, or repeated within the plan itself,
/// are skipped by the store's idempotent add and excluded from the count, so
/// the caller can report "N added" separately from how many lines the plan
/// had.
pub fn apply_generated_schedule(
    store: &mut EventStore,
    date: NaiveDate,
    plan: &[PlanEntry],
) -> PlannerResult<usize> {
    let mut applied = 0;

    for entry in plan {
        if store.add(date, &entry.time, &entry.description)? {
            applied += 1;
        }
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(time: &str, description: &str) -> PlanEntry {
        PlanEntry {
            time: time.to_string(),
            description: description.to_string(),
        }
    }

    fn make_store(dir: &TempDir) -> EventStore {
        EventStore::load(dir.path().join("events.json"))
    }

    #[test]
    fn test_apply_counts_only_inserted_entries() {
        let dir = TempDir::new().unwrap();
        let mut store = make_store(&dir);
        let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();

        let plan = vec![
            entry("10:00", "Write report"),
            entry("10:00", "Write report"),
            entry("12:00", "Lunch"),
        ];

        let applied = apply_generated_schedule(&mut store, date, &plan).unwrap();

        assert_eq!(applied, 2);
        assert_eq!(store.get(date).len(), 2);
    }

    #[test]
    fn test_apply_skips_existing_manual_events() {
        let dir = TempDir::new().unwrap();
        let mut store = make_store(&dir);
        let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();

        store.add(date, "09:00", "Standup").unwrap();

        let plan = vec![entry("09:00", "Standup"), entry("11:00", "Review")];
        let applied = apply_generated_schedule(&mut store, date, &plan).unwrap();

        assert_eq!(applied, 1);
        assert_eq!(store.get(date).len(), 2);
    }

    #[test]
    fn test_generated_events_sort_in_with_manual_ones() {
        let dir = TempDir::new().unwrap();
        let mut store = make_store(&dir);
        let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();

        store.add(date, "14:00", "Review").unwrap();
        apply_generated_schedule(&mut store, date, &[entry("09:00", "Standup")]).unwrap();

        let lines: Vec<_> = store.get(date).iter().map(|e| e.to_string()).collect();
        assert_eq!(lines, vec!["09:00: Standup", "14:00: Review"]);
    }

    #[test]
    fn test_empty_plan_applies_nothing() {
        let dir = TempDir::new().unwrap();
        let mut store = make_store(&dir);
        let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();

        let applied = apply_generated_schedule(&mut store, date, &[]).unwrap();

        assert_eq!(applied, 0);
        assert!(store.list_all().is_empty());
    }
}
