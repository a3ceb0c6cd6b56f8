//! Shift records and the coverage grouping dimension.
//!
//! This module defines the inbound shift record shape as supplied by the
//! scheduling API, the priority rules for resolving a shift's effective
//! times and its guard/property ids, and the [`Dimension`] axis used to
//! group coverage by guard or by property.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::interval::{Interval, date_key};

/// A reference to an embedded entity sub-object carrying only its id.
///
/// Upstream list endpoints sometimes expand a shift's guard or property into
/// a `guardDetails`/`propertyDetails` object; only the id participates in
/// coverage computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    /// The referenced entity's id.
    pub id: i64,
}

/// A work shift as delivered by the scheduling API.
///
/// Every field other than `id` is optional: upstream records are frequently
/// partial, and the engine degrades by exclusion rather than failing. Both
/// camelCase and snake_case field spellings deserialize.
///
/// Effective times follow a priority order: the actual `start_time`/`end_time`
/// when present, else the planned ones. A shift lacking a resolvable pair of
/// bounds participates in no interval computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    /// Unique identifier for the shift.
    pub id: i64,
    /// The assigned guard's id, when given directly.
    #[serde(default)]
    pub guard: Option<i64>,
    /// The assigned guard expanded as a sub-object.
    #[serde(default, alias = "guard_details")]
    pub guard_details: Option<EntityRef>,
    /// The covered property's id, when given directly.
    #[serde(default)]
    pub property: Option<i64>,
    /// The covered property expanded as a sub-object.
    #[serde(default, alias = "property_details")]
    pub property_details: Option<EntityRef>,
    /// The service this shift fulfills, if any.
    #[serde(default)]
    pub service: Option<i64>,
    /// The actual start of the shift.
    #[serde(default, alias = "start_time")]
    pub start_time: Option<NaiveDateTime>,
    /// The actual end of the shift.
    #[serde(default, alias = "end_time")]
    pub end_time: Option<NaiveDateTime>,
    /// The planned start of the shift.
    #[serde(default, alias = "planned_start_time")]
    pub planned_start_time: Option<NaiveDateTime>,
    /// The planned end of the shift.
    #[serde(default, alias = "planned_end_time")]
    pub planned_end_time: Option<NaiveDateTime>,
}

impl ShiftRecord {
    /// Resolves the shift's effective start: actual if present, else planned.
    pub fn effective_start(&self) -> Option<NaiveDateTime> {
        self.start_time.or(self.planned_start_time)
    }

    /// Resolves the shift's effective end: actual if present, else planned.
    pub fn effective_end(&self) -> Option<NaiveDateTime> {
        self.end_time.or(self.planned_end_time)
    }

    /// Resolves the shift's effective interval.
    ///
    /// Returns `None` when either bound is unresolvable or the resolved span
    /// is degenerate (`end <= start`); such shifts are excluded from all
    /// interval computations.
    pub fn effective_interval(&self) -> Option<Interval> {
        Interval::new(self.effective_start()?, self.effective_end()?)
    }

    /// Resolves the guard id: the direct field first, then the details
    /// sub-object.
    pub fn guard_id(&self) -> Option<i64> {
        self.guard.or_else(|| self.guard_details.map(|d| d.id))
    }

    /// Resolves the property id: the direct field first, then the details
    /// sub-object.
    pub fn property_id(&self) -> Option<i64> {
        self.property.or_else(|| self.property_details.map(|d| d.id))
    }

    /// Returns the `YYYY-MM-DD` key of the day the shift effectively starts.
    pub fn date_key(&self) -> Option<String> {
        self.effective_start().map(|start| date_key(start.date()))
    }
}

/// The grouping axis for coverage: by guard or by property.
///
/// The same clamp/merge/bucket machinery serves both the guard view and the
/// property view of the dashboard; this enum selects which id a shift is
/// partitioned under.
///
/// # Example
///
/// ```
/// use coverage_engine::models::{Dimension, ShiftRecord};
///
/// let shift: ShiftRecord = serde_json::from_str(
///     r#"{ "id": 1, "guard": 7, "propertyDetails": { "id": 12 } }"#,
/// )
/// .unwrap();
///
/// assert_eq!(Dimension::Guard.id_of(&shift), Some(7));
/// assert_eq!(Dimension::Property.id_of(&shift), Some(12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Group shifts by their assigned guard.
    Guard,
    /// Group shifts by the property they cover.
    Property,
}

impl Dimension {
    /// Resolves the shift id for this dimension.
    ///
    /// Accessors are probed in priority order: the direct id field, then the
    /// embedded details sub-object's id. Shifts resolving to neither are
    /// excluded from grouping and bucketing.
    pub fn id_of(&self, shift: &ShiftRecord) -> Option<i64> {
        match self {
            Dimension::Guard => shift.guard_id(),
            Dimension::Property => shift.property_id(),
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Guard => write!(f, "guard"),
            Dimension::Property => write!(f, "property"),
        }
    }
}
