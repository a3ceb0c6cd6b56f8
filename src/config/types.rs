//! Configuration types for the coverage engine.
//!
//! The only configurable piece of the engine is the coverage color palette;
//! everything else is pure computation over caller-supplied records.

use serde::Deserialize;

/// The compiled-in palette, matching the dashboard's eight-color cycle.
const DEFAULT_COLORS: [&str; 8] = [
    "#2563eb", "#16a34a", "#d97706", "#dc2626", "#7c3aed", "#0d9488", "#db2777", "#65a30d",
];

/// Palette configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteConfig {
    /// The ordered list of hex color strings.
    pub colors: Vec<String>,
}

/// A coverage color palette.
///
/// Colors are assigned by `id mod palette_length` — explicit indexing, not
/// hashing — so an id keeps its color across renders and across processes.
/// Collisions between distant ids are an accepted trade-off.
///
/// # Example
///
/// ```
/// use coverage_engine::config::Palette;
///
/// let palette = Palette::default();
/// // Identical ids always receive identical colors.
/// assert_eq!(palette.color_for(7), palette.color_for(7));
/// // Ids one palette-length apart share a color.
/// let len = palette.len() as i64;
/// assert_eq!(palette.color_for(3), palette.color_for(3 + len));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Creates a palette from an ordered color list.
    ///
    /// Returns `None` when the list is empty; an empty palette has no valid
    /// modulo index.
    pub fn new(colors: Vec<String>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// Returns the deterministic color for an id.
    pub fn color_for(&self, id: i64) -> &str {
        let index = id.rem_euclid(self.colors.len() as i64) as usize;
        &self.colors[index]
    }

    /// Returns the number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true when the palette has no colors. Never true for palettes
    /// built through [`Palette::new`].
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}
