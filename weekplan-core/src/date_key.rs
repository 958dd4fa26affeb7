//! Date-key parsing and week math.
//!
//! A date key is a `YYYY-MM-DD` string identifying one calendar day. Every
//! date argument crossing the CLI boundary goes through [`parse`] before it
//! reaches the store. Weeks start on Monday.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{PlannerError, PlannerResult};

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Parse a date key, rejecting anything that is not a valid calendar date
/// in `YYYY-MM-DD` form. The error names the offending value.
pub fn parse(s: &str) -> PlannerResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_KEY_FORMAT)
        .map_err(|_| PlannerError::InvalidDate(s.to_string()))
}

/// The Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// The seven consecutive days starting at `start`.
pub fn week_days(start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| start + Duration::days(i as i64))
}
