//! The date-keyed shift bucket index.
//!
//! Calendar cells and per-day detail panels look shifts up by dimension id
//! and local date key; building the two-level index once avoids re-scanning
//! the full shift collection per cell.

use std::collections::HashMap;

use crate::models::{Dimension, ShiftRecord};

/// A two-level lookup: dimension id → `YYYY-MM-DD` date key → shifts,
/// each bucket sorted ascending by effective start.
pub type ShiftIndex = HashMap<i64, HashMap<String, Vec<ShiftRecord>>>;

/// Builds the bucket index for a shift collection along a dimension.
///
/// A shift lands in exactly one bucket, chosen by its resolved dimension id
/// and the local date of its effective start. Shifts missing either are
/// skipped, so the sum of all bucket lengths equals the count of shifts
/// with both resolvable. Bucket ordering is stable: shifts sharing an
/// effective start keep their input order.
///
/// # Example
///
/// ```
/// use coverage_engine::coverage::build_shift_index;
/// use coverage_engine::models::{Dimension, ShiftRecord};
///
/// let shifts: Vec<ShiftRecord> = serde_json::from_str(
///     r#"[
///         { "id": 1, "guard": 7, "startTime": "2025-03-10T14:00:00", "endTime": "2025-03-10T22:00:00" },
///         { "id": 2, "guard": 7, "startTime": "2025-03-10T06:00:00", "endTime": "2025-03-10T14:00:00" },
///         { "id": 3, "guard": 9, "startTime": "2025-03-11T06:00:00", "endTime": "2025-03-11T14:00:00" }
///     ]"#,
/// )
/// .unwrap();
///
/// let index = build_shift_index(&shifts, Dimension::Guard);
///
/// let day = &index[&7]["2025-03-10"];
/// assert_eq!(day.len(), 2);
/// // Buckets are time-sorted, not input-ordered.
/// assert_eq!(day[0].id, 2);
/// assert_eq!(day[1].id, 1);
/// assert_eq!(index[&9]["2025-03-11"].len(), 1);
/// ```
pub fn build_shift_index(shifts: &[ShiftRecord], dimension: Dimension) -> ShiftIndex {
    let mut index: ShiftIndex = HashMap::new();

    for shift in shifts {
        let Some(id) = dimension.id_of(shift) else {
            continue;
        };
        let Some(key) = shift.date_key() else {
            continue;
        };
        index
            .entry(id)
            .or_default()
            .entry(key)
            .or_default()
            .push(shift.clone());
    }

    for buckets in index.values_mut() {
        for bucket in buckets.values_mut() {
            // sort_by_key is stable; equal starts keep input order.
            bucket.sort_by_key(ShiftRecord::effective_start);
        }
    }

    index
}
