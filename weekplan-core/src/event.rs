//! Event types for the planner.
//!
//! An event is a `(time, description)` pair scoped to one calendar date. The
//! date itself is the store's partition key and is not carried on the record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single timed entry on one day.
///
/// `time` is kept as the opaque string it was entered with and events sort
/// lexicographically by it. That matches chronological order only for
/// zero-padded 24-hour `HH:MM` values ("9:00" sorts after "14:00"); inputs
/// are not normalized.
///
/// Two events are the same event when both time and description match.
/// Events are immutable once stored; editing is delete-then-add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub time: String,
    pub description: String,
}

impl Event {
    pub fn new(time: &str, description: &str) -> Self {
        Event {
            time: time.to_string(),
            description: description.to_string(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.time, self.description)
    }
}
