//! Coverage computations for the scheduling dashboard.
//!
//! This module contains the engine's algorithmic core: interval merging,
//! per-day coverage grouping by guard or property, service-window gap
//! detection with midnight wrap, calendar day grids, and the date-keyed
//! shift bucket index. Everything here is a synchronous pure function of
//! its inputs: no clock reads, no mutation, and no errors — malformed
//! records degrade by exclusion.

mod buckets;
mod calendar;
mod gaps;
mod grouper;
mod merge;

pub use buckets::{ShiftIndex, build_shift_index};
pub use calendar::{ViewMode, build_days};
pub use gaps::{Gap, GapKind, detect_service_gaps};
pub use grouper::{CoverageSegment, build_day_coverage};
pub use merge::merge_intervals;
