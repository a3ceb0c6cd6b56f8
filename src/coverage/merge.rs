//! Interval merging.
//!
//! Collapses a set of possibly overlapping intervals into the minimal
//! sorted, pairwise-disjoint set. Touching intervals merge: two shifts
//! where one ends at the exact instant the other begins form one continuous
//! coverage block. Changing that boundary to a strict comparison would
//! alter coverage totals at shift seams.

use crate::models::Interval;

/// Merges intervals into a minimal sorted, non-overlapping set.
///
/// The input may arrive in any order. The output is sorted ascending by
/// start, no two output intervals overlap or touch, and the operation is
/// idempotent. Total merged duration never exceeds the sum of the input
/// durations, with equality exactly when no two inputs overlap or touch.
///
/// # Example
///
/// ```
/// use coverage_engine::coverage::merge_intervals;
/// use coverage_engine::models::Interval;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let at = |h| day.and_hms_opt(h, 0, 0).unwrap();
///
/// // 08:00-12:00 and 12:00-16:00 touch, so they merge into one block.
/// let merged = merge_intervals(vec![
///     Interval::new(at(12), at(16)).unwrap(),
///     Interval::new(at(8), at(12)).unwrap(),
/// ]);
///
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].start, at(8));
/// assert_eq!(merged[0].end, at(16));
/// ```
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    // Intervals built through Interval::new are never degenerate, but the
    // fields are public; drop anything empty before sweeping.
    intervals.retain(|interval| interval.start < interval.end);
    if intervals.is_empty() {
        return intervals;
    }

    intervals.sort_by_key(|interval| interval.start);

    let mut merged = Vec::with_capacity(intervals.len());
    let mut current = intervals[0];

    for next in intervals.into_iter().skip(1) {
        if next.start <= current.end {
            // Touching or overlapping: extend the accumulator.
            current.end = current.end.max(next.end);
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDateTime};
    use proptest::prelude::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn interval(start: &str, end: &str) -> Interval {
        Interval::new(
            make_datetime("2025-03-10", start),
            make_datetime("2025-03-10", end),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_intervals(vec![]).is_empty());
    }

    #[test]
    fn test_single_interval_passes_through() {
        let merged = merge_intervals(vec![interval("08:00:00", "12:00:00")]);
        assert_eq!(merged, vec![interval("08:00:00", "12:00:00")]);
    }

    #[test]
    fn test_disjoint_intervals_stay_separate() {
        let merged = merge_intervals(vec![
            interval("13:00:00", "15:00:00"),
            interval("08:00:00", "12:00:00"),
        ]);
        assert_eq!(
            merged,
            vec![
                interval("08:00:00", "12:00:00"),
                interval("13:00:00", "15:00:00"),
            ]
        );
    }

    #[test]
    fn test_overlapping_intervals_merge() {
        let merged = merge_intervals(vec![
            interval("08:00:00", "12:00:00"),
            interval("10:00:00", "14:00:00"),
        ]);
        assert_eq!(merged, vec![interval("08:00:00", "14:00:00")]);
    }

    #[test]
    fn test_touching_intervals_merge() {
        // 08:00-12:00 then 12:00-16:00: the boundary comparison is <=,
        // so the seam disappears.
        let merged = merge_intervals(vec![
            interval("08:00:00", "12:00:00"),
            interval("12:00:00", "16:00:00"),
        ]);
        assert_eq!(merged, vec![interval("08:00:00", "16:00:00")]);
    }

    #[test]
    fn test_contained_interval_absorbed() {
        let merged = merge_intervals(vec![
            interval("08:00:00", "18:00:00"),
            interval("10:00:00", "12:00:00"),
        ]);
        assert_eq!(merged, vec![interval("08:00:00", "18:00:00")]);
    }

    #[test]
    fn test_duplicate_intervals_collapse() {
        let merged = merge_intervals(vec![
            interval("08:00:00", "12:00:00"),
            interval("08:00:00", "12:00:00"),
        ]);
        assert_eq!(merged, vec![interval("08:00:00", "12:00:00")]);
    }

    #[test]
    fn test_chain_of_touching_intervals() {
        let merged = merge_intervals(vec![
            interval("16:00:00", "20:00:00"),
            interval("08:00:00", "12:00:00"),
            interval("12:00:00", "16:00:00"),
        ]);
        assert_eq!(merged, vec![interval("08:00:00", "20:00:00")]);
    }

    #[test]
    fn test_mixed_merge_and_gap() {
        let merged = merge_intervals(vec![
            interval("14:00:00", "16:00:00"),
            interval("08:00:00", "10:00:00"),
            interval("09:00:00", "11:00:00"),
        ]);
        assert_eq!(
            merged,
            vec![
                interval("08:00:00", "11:00:00"),
                interval("14:00:00", "16:00:00"),
            ]
        );
    }

    fn arb_intervals() -> impl Strategy<Value = Vec<Interval>> {
        proptest::collection::vec((0i64..5000, 1i64..600), 0..40).prop_map(|pairs| {
            let base = make_datetime("2025-03-10", "00:00:00");
            pairs
                .into_iter()
                .map(|(start_min, len_min)| {
                    Interval::new(
                        base + Duration::minutes(start_min),
                        base + Duration::minutes(start_min + len_min),
                    )
                    .unwrap()
                })
                .collect()
        })
    }

    proptest! {
        /// Output is sorted ascending and pairwise neither touching nor
        /// overlapping.
        #[test]
        fn prop_output_sorted_and_disjoint(intervals in arb_intervals()) {
            let merged = merge_intervals(intervals);
            for pair in merged.windows(2) {
                prop_assert!(pair[0].start < pair[1].start);
                prop_assert!(pair[0].end < pair[1].start);
            }
        }

        /// Merging is idempotent.
        #[test]
        fn prop_idempotent(intervals in arb_intervals()) {
            let once = merge_intervals(intervals);
            let twice = merge_intervals(once.clone());
            prop_assert_eq!(once, twice);
        }

        /// Merged duration never exceeds the input total, and every input
        /// instant stays covered.
        #[test]
        fn prop_duration_bounded_and_covering(intervals in arb_intervals()) {
            let input_total: f64 = intervals.iter().map(Interval::duration_hours).sum();
            let merged = merge_intervals(intervals.clone());
            let merged_total: f64 = merged.iter().map(Interval::duration_hours).sum();

            prop_assert!(merged_total <= input_total + 1e-9);
            for original in &intervals {
                prop_assert!(
                    merged
                        .iter()
                        .any(|m| m.start <= original.start && original.end <= m.end)
                );
            }
        }
    }
}
