use chrono::{Duration, NaiveDate};

use crate::models::timeline::DayKey;

/// Produce the stable day key for a calendar date (`YYYY-MM-DD`).
/// One key per calendar day; lexicographic order matches chronological order.
#[must_use]
pub fn day_key(date: NaiveDate) -> DayKey {
    date.format("%Y-%m-%d").to_string()
}

/// Shift a date forward (or backward, with negative `n`) by whole days.
#[must_use]
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    date + Duration::days(n)
}

/// Distance between two dates in whole days (`to - from`).
#[must_use]
pub fn day_distance(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Long display form, e.g. `"Friday, January 3, 2025"`.
#[must_use]
pub fn long_format(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
