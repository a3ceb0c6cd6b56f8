//! Guard and property records, and the label directory.
//!
//! Coverage segments carry a display label resolved from the caller's known
//! guards and properties. Label resolution never fails: an unknown or
//! unnamed entity degrades to the `#<id>` form.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::shift::Dimension;

/// A guard as delivered by the personnel API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardRecord {
    /// Unique identifier for the guard.
    pub id: i64,
    /// The guard's first name.
    #[serde(default, alias = "first_name")]
    pub first_name: Option<String>,
    /// The guard's last name.
    #[serde(default, alias = "last_name")]
    pub last_name: Option<String>,
}

impl GuardRecord {
    /// Returns the guard's display name, or `None` when no name is on record.
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// A property (guarded site) as delivered by the property API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    /// Unique identifier for the property.
    pub id: i64,
    /// The property's name.
    #[serde(default)]
    pub name: Option<String>,
    /// A short alias for the property, shown when no name exists.
    #[serde(default)]
    pub alias: Option<String>,
}

impl PropertyRecord {
    /// Returns the property's display name: name first, alias as fallback.
    pub fn display_name(&self) -> Option<String> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .or_else(|| {
                self.alias
                    .as_deref()
                    .map(str::trim)
                    .filter(|alias| !alias.is_empty())
            })
            .map(str::to_string)
    }
}

/// A lookup table of known guards and properties for labeling.
///
/// # Example
///
/// ```
/// use coverage_engine::models::{Dimension, Directory, GuardRecord, PropertyRecord};
///
/// let guards = vec![GuardRecord {
///     id: 7,
///     first_name: Some("Ana".to_string()),
///     last_name: Some("Reyes".to_string()),
/// }];
/// let directory = Directory::new(&guards, &[]);
///
/// assert_eq!(directory.label(Dimension::Guard, 7), "Ana Reyes");
/// // Unknown ids degrade to the "#<id>" form.
/// assert_eq!(directory.label(Dimension::Guard, 99), "#99");
/// assert_eq!(directory.label(Dimension::Property, 3), "#3");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Directory {
    guards: HashMap<i64, GuardRecord>,
    properties: HashMap<i64, PropertyRecord>,
}

impl Directory {
    /// Builds a directory from guard and property record slices.
    pub fn new(guards: &[GuardRecord], properties: &[PropertyRecord]) -> Self {
        Self {
            guards: guards.iter().map(|g| (g.id, g.clone())).collect(),
            properties: properties.iter().map(|p| (p.id, p.clone())).collect(),
        }
    }

    /// Resolves the display label for an id along the given dimension.
    ///
    /// Falls back to `#<id>` when the entity is unknown or carries no
    /// usable name.
    pub fn label(&self, dimension: Dimension, id: i64) -> String {
        let name = match dimension {
            Dimension::Guard => self.guards.get(&id).and_then(GuardRecord::display_name),
            Dimension::Property => self
                .properties
                .get(&id)
                .and_then(PropertyRecord::display_name),
        };
        name.unwrap_or_else(|| format!("#{id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard(id: i64, first: Option<&str>, last: Option<&str>) -> GuardRecord {
        GuardRecord {
            id,
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
        }
    }

    fn property(id: i64, name: Option<&str>, alias: Option<&str>) -> PropertyRecord {
        PropertyRecord {
            id,
            name: name.map(str::to_string),
            alias: alias.map(str::to_string),
        }
    }

    #[test]
    fn test_guard_full_name() {
        assert_eq!(
            guard(1, Some("Ana"), Some("Reyes")).display_name(),
            Some("Ana Reyes".to_string())
        );
    }

    #[test]
    fn test_guard_partial_name() {
        assert_eq!(
            guard(1, Some("Ana"), None).display_name(),
            Some("Ana".to_string())
        );
        assert_eq!(
            guard(1, None, Some("Reyes")).display_name(),
            Some("Reyes".to_string())
        );
    }

    #[test]
    fn test_guard_blank_name_is_none() {
        assert_eq!(guard(1, Some("  "), Some("")).display_name(), None);
        assert_eq!(guard(1, None, None).display_name(), None);
    }

    #[test]
    fn test_property_name_beats_alias() {
        assert_eq!(
            property(1, Some("North Plant"), Some("NP")).display_name(),
            Some("North Plant".to_string())
        );
    }

    #[test]
    fn test_property_alias_fallback() {
        assert_eq!(
            property(1, None, Some("NP")).display_name(),
            Some("NP".to_string())
        );
        assert_eq!(
            property(1, Some(""), Some("NP")).display_name(),
            Some("NP".to_string())
        );
    }

    #[test]
    fn test_directory_label_fallbacks() {
        let directory = Directory::new(
            &[guard(7, Some("Ana"), Some("Reyes")), guard(8, None, None)],
            &[property(12, None, Some("NP"))],
        );

        assert_eq!(directory.label(Dimension::Guard, 7), "Ana Reyes");
        // Known but unnamed degrades the same way as unknown.
        assert_eq!(directory.label(Dimension::Guard, 8), "#8");
        assert_eq!(directory.label(Dimension::Guard, 99), "#99");
        assert_eq!(directory.label(Dimension::Property, 12), "NP");
        assert_eq!(directory.label(Dimension::Property, 1), "#1");
    }

    #[test]
    fn test_guard_record_deserialization() {
        let json = r#"{ "id": 3, "firstName": "Luis", "last_name": "Ortiz" }"#;
        let guard: GuardRecord = serde_json::from_str(json).unwrap();
        assert_eq!(guard.display_name(), Some("Luis Ortiz".to_string()));
    }
}
