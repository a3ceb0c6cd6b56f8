//! The time interval primitive and day-window clamping.
//!
//! An [`Interval`] is a half-open span of local wall-clock time. Clamping an
//! interval to a calendar day is the single place day boundaries are
//! materialized; everything downstream (merging, grouping, gap detection)
//! operates on already-clamped local intervals.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Milliseconds in an hour, the divisor for all duration arithmetic.
const MS_PER_HOUR: f64 = 3_600_000.0;

/// A half-open interval `[start, end)` of local wall-clock time.
///
/// The invariant `start < end` is enforced at construction: degenerate
/// intervals (zero or negative length) never exist as values, they are
/// discarded at the boundary via [`Interval::new`] returning `None`.
///
/// # Example
///
/// ```
/// use coverage_engine::models::Interval;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let interval = Interval::new(
///     day.and_hms_opt(8, 0, 0).unwrap(),
///     day.and_hms_opt(12, 0, 0).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(interval.duration_hours(), 4.0);
///
/// // Degenerate spans are rejected, not constructed.
/// let start = day.and_hms_opt(8, 0, 0).unwrap();
/// assert!(Interval::new(start, start).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// The inclusive start instant.
    pub start: NaiveDateTime,
    /// The exclusive end instant.
    pub end: NaiveDateTime,
}

impl Interval {
    /// Creates an interval, or `None` when `end <= start`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
        if end <= start {
            None
        } else {
            Some(Self { start, end })
        }
    }

    /// Returns the length of the interval in hours.
    ///
    /// Computed as the millisecond difference divided by 3 600 000, so
    /// sub-minute precision survives into the fractional part.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / MS_PER_HOUR
    }

    /// Returns true when this interval and `other` share any instant.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Clamps this interval to a calendar day's `[00:00, 24:00)` bounds.
    ///
    /// Returns `None` when the interval does not overlap the day at all.
    ///
    /// # Example
    ///
    /// ```
    /// use coverage_engine::models::Interval;
    /// use chrono::NaiveDate;
    ///
    /// let mon = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    /// let tue = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
    ///
    /// // An overnight span clamps to the portion inside each day.
    /// let overnight = Interval::new(
    ///     mon.and_hms_opt(22, 0, 0).unwrap(),
    ///     tue.and_hms_opt(6, 0, 0).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// let monday_part = overnight.clamp_to_day(mon).unwrap();
    /// assert_eq!(monday_part.duration_hours(), 2.0);
    ///
    /// let tuesday_part = overnight.clamp_to_day(tue).unwrap();
    /// assert_eq!(tuesday_part.duration_hours(), 6.0);
    /// ```
    pub fn clamp_to_day(&self, day: NaiveDate) -> Option<Interval> {
        let (day_start, day_end) = day_bounds(day);
        Interval::new(self.start.max(day_start), self.end.min(day_end))
    }
}

/// Returns the `[midnight, midnight + 24h)` bounds of a calendar day.
pub fn day_bounds(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = day.and_hms_opt(0, 0, 0).expect("Valid midnight time");
    (start, start + Duration::days(1))
}

/// Formats a day as its `YYYY-MM-DD` grouping key.
pub fn date_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}
