//! Calendar grid building.
//!
//! Produces the ordered day sequence a calendar view displays for a given
//! anchor date and view mode.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// The calendar view mode selecting how many days the grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Seven consecutive days starting at the anchor.
    Week,
    /// Every day of the anchor's calendar month.
    Month,
    /// Every day of the anchor's calendar year.
    Year,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Week => write!(f, "week"),
            ViewMode::Month => write!(f, "month"),
            ViewMode::Year => write!(f, "year"),
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            "year" => Ok(ViewMode::Year),
            other => Err(format!("unknown view mode: {other}")),
        }
    }
}

/// Builds the ordered day sequence for a view.
///
/// - `week`: exactly 7 consecutive days starting at the anchor — the grid is
///   anchored to the given day, not aligned to a fixed weekday.
/// - `month`: every day of the anchor's month, first to last.
/// - `year`: every day from Jan 1 to Dec 31 of the anchor's year (365 or
///   366 entries).
///
/// # Example
///
/// ```
/// use coverage_engine::coverage::{ViewMode, build_days};
/// use chrono::NaiveDate;
///
/// let anchor = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
///
/// let week = build_days(anchor, ViewMode::Week);
/// assert_eq!(week.len(), 7);
/// assert_eq!(week[0], anchor);
///
/// let month = build_days(anchor, ViewMode::Month);
/// assert_eq!(month.len(), 31);
/// assert_eq!(month[0], NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
/// ```
pub fn build_days(anchor: NaiveDate, mode: ViewMode) -> Vec<NaiveDate> {
    match mode {
        ViewMode::Week => (0..7).map(|offset| anchor + Duration::days(offset)).collect(),
        ViewMode::Month => {
            let first = anchor.with_day(1).expect("Valid first of month");
            first
                .iter_days()
                .take_while(|day| day.month() == anchor.month())
                .collect()
        }
        ViewMode::Year => {
            let jan_first =
                NaiveDate::from_ymd_opt(anchor.year(), 1, 1).expect("Valid first of year");
            jan_first
                .iter_days()
                .take_while(|day| day.year() == anchor.year())
                .collect()
        }
    }
}
