//! Service records and their daily recurring windows.
//!
//! A service is a recurring obligation on a property ("guard post staffed
//! 22:00–06:00"). Its window is expressed as times of day, not absolute
//! instants, and may wrap past midnight; composing the window with a
//! concrete day is the gap detector's first step.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::interval::Interval;

/// A service as delivered by the scheduling API.
///
/// The window fields accept both `HH:MM:SS` and `HH:MM` strings, in either
/// camelCase or snake_case spelling. A malformed time string degrades to an
/// absent one: the service becomes vacuous rather than an error, matching
/// the engine-wide policy of excluding bad records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    /// Unique identifier for the service.
    pub id: i64,
    /// The property this service is assigned to.
    #[serde(default)]
    pub property: Option<i64>,
    /// The nominal start of the daily window.
    #[serde(default, alias = "start_time", deserialize_with = "de_time_of_day")]
    pub start_time: Option<NaiveTime>,
    /// The nominal end of the daily window. Earlier than (or equal to) the
    /// start means the window wraps into the next calendar day.
    #[serde(default, alias = "end_time", deserialize_with = "de_time_of_day")]
    pub end_time: Option<NaiveTime>,
}

impl ServiceRecord {
    /// Composes the service's absolute window for a given day.
    ///
    /// When the end time of day is not after the start, the window is taken
    /// to span midnight and the end gains 24 hours. Returns `None` when
    /// either time of day is missing — a service with no window produces no
    /// gaps.
    ///
    /// # Example
    ///
    /// ```
    /// use coverage_engine::models::ServiceRecord;
    /// use chrono::NaiveDate;
    ///
    /// let service: ServiceRecord = serde_json::from_str(
    ///     r#"{ "id": 1, "property": 4, "startTime": "22:00", "endTime": "06:00:00" }"#,
    /// )
    /// .unwrap();
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    /// let window = service.window_on(day).unwrap();
    /// assert_eq!(window.duration_hours(), 8.0);
    /// assert_eq!(window.end.date(), NaiveDate::from_ymd_opt(2025, 3, 11).unwrap());
    /// ```
    pub fn window_on(&self, day: NaiveDate) -> Option<Interval> {
        let start = day.and_time(self.start_time?);
        let mut end = day.and_time(self.end_time?);
        if end <= start {
            end += Duration::days(1);
        }
        Interval::new(start, end)
    }

    /// Returns the nominal window length in hours.
    ///
    /// The length does not depend on the day the window is composed with.
    pub fn window_hours(&self) -> Option<f64> {
        let day = NaiveDate::from_ymd_opt(2000, 1, 1).expect("Valid reference date");
        self.window_on(day).map(|window| window.duration_hours())
    }
}

/// Deserializes an optional `HH:MM:SS` or `HH:MM` time-of-day string.
///
/// Malformed strings resolve to `None` instead of failing the whole record.
fn de_time_of_day<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|text| {
        NaiveTime::parse_from_str(&text, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(&text, "%H:%M"))
            .ok()
    }))
}
