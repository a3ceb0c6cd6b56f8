//! Per-day coverage grouping.
//!
//! Partitions a day's shifts along a dimension (guard or property), clamps
//! each shift to the day, merges the per-group intervals into coverage
//! blocks, and attaches a deterministic color and display label to each
//! group. The result is what the coverage bar renders.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::config::Palette;
use crate::models::{Dimension, Directory, Interval, ShiftRecord};

use super::merge::merge_intervals;

/// One renderable group of merged coverage intervals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageSegment {
    /// The dimension id this group covers (guard id or property id).
    pub key: i64,
    /// The display label: guard name or property name/alias, `#<id>` when
    /// neither resolves.
    pub label: String,
    /// The deterministic palette color assigned to this id.
    pub color: String,
    /// The merged, sorted, disjoint intervals of coverage inside the day.
    pub intervals: Vec<Interval>,
}

impl CoverageSegment {
    /// Returns the total covered hours across this group's intervals.
    pub fn covered_hours(&self) -> f64 {
        self.intervals.iter().map(Interval::duration_hours).sum()
    }
}

/// Computes a day's coverage segments grouped along a dimension.
///
/// Shifts missing the dimension id or a resolvable effective interval are
/// excluded. Each surviving shift is clamped to the day's `[00:00, 24:00)`
/// bounds and the per-group intervals merged; groups whose shifts all fall
/// outside the day are not emitted. Segments come out in ascending id order
/// and the whole computation is a pure function of its inputs — it never
/// fails, it only excludes.
///
/// # Example
///
/// ```
/// use coverage_engine::config::Palette;
/// use coverage_engine::coverage::build_day_coverage;
/// use coverage_engine::models::{Dimension, Directory, ShiftRecord};
/// use chrono::NaiveDate;
///
/// let shifts: Vec<ShiftRecord> = serde_json::from_str(
///     r#"[
///         { "id": 1, "guard": 7, "startTime": "2025-03-10T08:00:00", "endTime": "2025-03-10T12:00:00" },
///         { "id": 2, "guard": 7, "startTime": "2025-03-10T12:00:00", "endTime": "2025-03-10T16:00:00" }
///     ]"#,
/// )
/// .unwrap();
///
/// let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let segments = build_day_coverage(
///     day,
///     &shifts,
///     Dimension::Guard,
///     &Directory::default(),
///     &Palette::default(),
/// );
///
/// // The touching shifts merge into one 8-hour block for guard 7.
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].key, 7);
/// assert_eq!(segments[0].intervals.len(), 1);
/// assert_eq!(segments[0].covered_hours(), 8.0);
/// ```
pub fn build_day_coverage(
    day: NaiveDate,
    shifts: &[ShiftRecord],
    dimension: Dimension,
    directory: &Directory,
    palette: &Palette,
) -> Vec<CoverageSegment> {
    // BTreeMap keeps group emission order deterministic across runs.
    let mut groups: BTreeMap<i64, Vec<Interval>> = BTreeMap::new();

    for shift in shifts {
        let Some(id) = dimension.id_of(shift) else {
            continue;
        };
        let Some(interval) = shift.effective_interval() else {
            continue;
        };
        let Some(clamped) = interval.clamp_to_day(day) else {
            continue;
        };
        groups.entry(id).or_default().push(clamped);
    }

    let segments: Vec<CoverageSegment> = groups
        .into_iter()
        .map(|(id, intervals)| CoverageSegment {
            key: id,
            label: directory.label(dimension, id),
            color: palette.color_for(id).to_string(),
            intervals: merge_intervals(intervals),
        })
        .collect();

    debug!(
        day = %day,
        dimension = %dimension,
        shifts = shifts.len(),
        groups = segments.len(),
        "built day coverage"
    );

    segments
}
