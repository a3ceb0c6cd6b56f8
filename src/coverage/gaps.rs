//! Service-window gap detection.
//!
//! Given one service's nominal daily window and the shifts assigned to it,
//! computes the complement of covered time inside the window: a leading
//! gap before the first coverage block, interior gaps between blocks, and a
//! trailing gap after the last one. A window with no coverage at all is
//! reported as a single leading gap spanning the whole window.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

use crate::models::{Interval, ServiceRecord, ShiftRecord, day_bounds};

use super::merge::merge_intervals;

/// The position of a gap inside the service window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapKind {
    /// Uncovered time at the start of the window. Also used for a window
    /// with no coverage anywhere.
    Start,
    /// Uncovered time between two coverage blocks.
    Middle,
    /// Uncovered time at the end of the window.
    End,
}

impl std::fmt::Display for GapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GapKind::Start => write!(f, "start"),
            GapKind::Middle => write!(f, "middle"),
            GapKind::End => write!(f, "end"),
        }
    }
}

/// An uncovered sub-interval of a service's window on a given day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gap {
    /// The gap's position inside the window.
    #[serde(rename = "type")]
    pub kind: GapKind,
    /// The local clock time at which the gap begins, as `HH:MM`.
    pub time: String,
    /// The gap's length in hours.
    pub duration: f64,
}

impl Gap {
    fn between(kind: GapKind, from: NaiveDateTime, to: NaiveDateTime) -> Self {
        let length = Interval::new(from, to).map_or(0.0, |i| i.duration_hours());
        Self {
            kind,
            time: from.format("%H:%M").to_string(),
            duration: length,
        }
    }
}

/// Detects uncovered time inside a service's window on a given day.
///
/// The service's absolute window is composed from its times of day; an end
/// not after the start wraps past midnight. Candidate shifts must reference
/// the service, resolve to an effective interval, and touch the calendar
/// day at all; each candidate is then clipped to the service window (which
/// may legitimately extend past midnight, so the clip is against the
/// window, not the day). Clipped coverage is merged with touching-interval
/// semantics before classification, so back-to-back shifts produce no gap
/// at their seam.
///
/// A service with no resolvable window produces no gaps. A window with no
/// surviving coverage produces exactly one `start` gap spanning the whole
/// window.
///
/// # Example
///
/// ```
/// use coverage_engine::coverage::{GapKind, detect_service_gaps};
/// use coverage_engine::models::{ServiceRecord, ShiftRecord};
/// use chrono::NaiveDate;
///
/// let service: ServiceRecord = serde_json::from_str(
///     r#"{ "id": 3, "property": 4, "startTime": "22:00", "endTime": "06:00" }"#,
/// )
/// .unwrap();
/// let shifts: Vec<ShiftRecord> = serde_json::from_str(
///     r#"[{ "id": 1, "guard": 7, "service": 3,
///           "startTime": "2025-03-10T23:00:00", "endTime": "2025-03-11T02:00:00" }]"#,
/// )
/// .unwrap();
///
/// let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let gaps = detect_service_gaps(&service, day, &shifts);
///
/// assert_eq!(gaps.len(), 2);
/// assert_eq!(gaps[0].kind, GapKind::Start);
/// assert_eq!(gaps[0].time, "22:00");
/// assert_eq!(gaps[0].duration, 1.0);
/// assert_eq!(gaps[1].kind, GapKind::End);
/// assert_eq!(gaps[1].time, "02:00");
/// assert_eq!(gaps[1].duration, 4.0);
/// ```
pub fn detect_service_gaps(
    service: &ServiceRecord,
    day: NaiveDate,
    shifts: &[ShiftRecord],
) -> Vec<Gap> {
    let Some(window) = service.window_on(day) else {
        return Vec::new();
    };

    let (day_start, day_end) = day_bounds(day);

    let covered: Vec<Interval> = shifts
        .iter()
        .filter(|shift| shift.service == Some(service.id))
        .filter_map(ShiftRecord::effective_interval)
        .filter(|interval| interval.start < day_end && interval.end > day_start)
        .filter_map(|interval| {
            // Clip to the service window, not the calendar day; the window
            // may extend past midnight.
            Interval::new(
                interval.start.max(window.start),
                interval.end.min(window.end),
            )
        })
        .collect();

    if covered.is_empty() {
        // No coverage anywhere in the window: one whole-window gap,
        // reported under the `start` classification.
        return vec![Gap::between(GapKind::Start, window.start, window.end)];
    }

    let merged = merge_intervals(covered);
    let mut gaps = Vec::new();

    if merged[0].start > window.start {
        gaps.push(Gap::between(GapKind::Start, window.start, merged[0].start));
    }
    for pair in merged.windows(2) {
        if pair[1].start > pair[0].end {
            gaps.push(Gap::between(GapKind::Middle, pair[0].end, pair[1].start));
        }
    }
    if let Some(last) = merged.last() {
        if last.end < window.end {
            gaps.push(Gap::between(GapKind::End, last.end, window.end));
        }
    }

    debug!(
        service = service.id,
        day = %day,
        blocks = merged.len(),
        gaps = gaps.len(),
        "detected service gaps"
    );

    gaps
}
