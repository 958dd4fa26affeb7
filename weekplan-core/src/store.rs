//! Durable per-date event storage.
//!
//! The store owns the mapping from calendar date to the ordered events on
//! that date and rewrites its JSON record after every successful mutation
//! (write-through, full rewrite). All mutation goes through [`EventStore::add`]
//! and [`EventStore::delete`]; callers only ever read.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};

use crate::error::{PlannerError, PlannerResult};
use crate::event::Event;

pub struct EventStore {
    path: PathBuf,
    events: BTreeMap<NaiveDate, Vec<Event>>,
}

impl EventStore {
    /// Open the store backed by the record at `path`.
    ///
    /// An absent or unparseable record yields an empty store. The planner
    /// must always be able to start, so a broken record is treated as
    /// "no events yet", never as a startup failure.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let events = read_record(&path);
        EventStore { path, events }
    }

    /// Add an event on `date`.
    ///
    /// Adding an event that already exists on the date (same time and
    /// description) is a no-op and returns `Ok(false)`. Otherwise the event
    /// is appended, the date's events re-sorted by time (stable, so equal
    /// times keep their insertion order), the record rewritten, and
    /// `Ok(true)` returned.
    ///
    /// A persist failure comes back as [`PlannerError::Persist`] but leaves
    /// the event in the in-memory store; the session keeps working without
    /// durability.
    pub fn add(&mut self, date: NaiveDate, time: &str, description: &str) -> PlannerResult<bool> {
        let event = Event::new(time, description);
        let day = self.events.entry(date).or_default();

        if day.contains(&event) {
            return Ok(false);
        }

        day.push(event);
        day.sort_by(|a, b| a.time.cmp(&b.time));

        self.persist()?;
        Ok(true)
    }

    /// Delete the event matching `(time, description)` on `date`.
    ///
    /// Returns `Ok(false)` when no such event exists. When the last event of
    /// a date is removed, the date key is dropped with it: no empty entries
    /// persist in the mapping or the record.
    pub fn delete(&mut self, date: NaiveDate, time: &str, description: &str) -> PlannerResult<bool> {
        let Some(day) = self.events.get_mut(&date) else {
            return Ok(false);
        };

        let Some(pos) = day
            .iter()
            .position(|e| e.time == time && e.description == description)
        else {
            return Ok(false);
        };

        day.remove(pos);
        if day.is_empty() {
            self.events.remove(&date);
        }

        self.persist()?;
        Ok(true)
    }

    /// Events on `date`, ascending by time. Empty when the date has none.
    pub fn get(&self, date: NaiveDate) -> &[Event] {
        self.events.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    /// Events for every date in `[start, end]` inclusive, in date order.
    ///
    /// Dates without events are present with an empty list, so a seven-day
    /// view always gets seven entries to render.
    pub fn get_range(&self, start: NaiveDate, end: NaiveDate) -> BTreeMap<NaiveDate, Vec<Event>> {
        let mut range = BTreeMap::new();
        let mut date = start;
        while date <= end {
            range.insert(date, self.get(date).to_vec());
            date = date + Duration::days(1);
        }
        range
    }

    /// The full date-to-events mapping, read-only.
    pub fn list_all(&self) -> &BTreeMap<NaiveDate, Vec<Event>> {
        &self.events
    }

    // Full rewrite of the record: indented JSON written to a temp file and
    // renamed into place, so a crash mid-write cannot corrupt it.
    fn persist(&self) -> PlannerResult<()> {
        let content = serde_json::to_string_pretty(&self.events)
            .map_err(|e| PlannerError::Serialization(e.to_string()))?;

        write_record(&self.path, &content).map_err(|source| PlannerError::Persist {
            path: self.path.clone(),
            source,
        })
    }
}

fn read_record(path: &Path) -> BTreeMap<NaiveDate, Vec<Event>> {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => BTreeMap::new(),
    }
}

fn write_record(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp = path.with_extension("json.tmp");
    std::fs::write(&temp, content)?;
    std::fs::rename(&temp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn make_store(dir: &TempDir) -> EventStore {
        EventStore::load(dir.path().join("events.json"))
    }

    #[test]
    fn test_add_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut store = make_store(&dir);

        assert!(store.add(june(3), "09:00", "Standup").unwrap());
        assert!(!store.add(june(3), "09:00", "Standup").unwrap());

        assert_eq!(store.get(june(3)).len(), 1);
    }

    #[test]
    fn test_events_sorted_by_time() {
        let dir = TempDir::new().unwrap();
        let mut store = make_store(&dir);

        store.add(june(3), "14:00", "Review").unwrap();
        store.add(june(3), "09:00", "Standup").unwrap();

        let times: Vec<_> = store.get(june(3)).iter().map(|e| e.to_string()).collect();
        assert_eq!(times, vec!["09:00: Standup", "14:00: Review"]);
    }

    #[test]
    fn test_equal_times_keep_insertion_order() {
        let dir = TempDir::new().unwrap();
        let mut store = make_store(&dir);

        store.add(june(3), "09:00", "Standup").unwrap();
        store.add(june(3), "09:00", "Coffee").unwrap();

        let descriptions: Vec<_> = store
            .get(june(3))
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Standup", "Coffee"]);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let dir = TempDir::new().unwrap();
        let mut store = make_store(&dir);

        store.add(june(3), "09:00", "Standup").unwrap();
        store.add(june(3), "09:00", "Coffee").unwrap();

        assert!(store.delete(june(3), "09:00", "Standup").unwrap());
        let remaining: Vec<_> = store
            .get(june(3))
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(remaining, vec!["Coffee"]);

        // Deleting it again is a reported no-op
        assert!(!store.delete(june(3), "09:00", "Standup").unwrap());
        assert_eq!(store.get(june(3)).len(), 1);
    }

    #[test]
    fn test_deleting_last_event_drops_date_key() {
        let dir = TempDir::new().unwrap();
        let mut store = make_store(&dir);

        store.add(june(3), "09:00", "Standup").unwrap();
        store.delete(june(3), "09:00", "Standup").unwrap();

        assert!(!store.list_all().contains_key(&june(3)));
    }

    #[test]
    fn test_round_trip_across_restart() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.json");

        let mut store = EventStore::load(path.clone());
        store.add(june(3), "14:00", "Review").unwrap();
        store.add(june(3), "09:00", "Standup").unwrap();
        store.add(june(5), "10:00", "Dentist").unwrap();
        let before = store.list_all().clone();
        drop(store);

        let reloaded = EventStore::load(path);
        assert_eq!(reloaded.list_all(), &before);
    }

    #[test]
    fn test_missing_record_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = make_store(&dir);
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_corrupt_record_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "{ this is not json").unwrap();

        let store = EventStore::load(path);
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_get_range_includes_empty_dates() {
        let dir = TempDir::new().unwrap();
        let mut store = make_store(&dir);

        store.add(june(3), "09:00", "Standup").unwrap();
        store.add(june(7), "18:00", "Dinner").unwrap();

        let week = store.get_range(june(3), june(9));
        assert_eq!(week.len(), 7);

        let keys: Vec<_> = week.keys().copied().collect();
        assert_eq!(keys, (3..=9).map(june).collect::<Vec<_>>());

        assert_eq!(week[&june(3)].len(), 1);
        assert!(week[&june(4)].is_empty());
    }
}
