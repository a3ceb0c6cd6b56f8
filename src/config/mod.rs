//! Configuration for the coverage engine.
//!
//! The engine runs with a compiled-in default palette; deployments that
//! want different coverage colors provide a YAML palette file loaded
//! through [`ConfigLoader`].
//!
//! # Example
//!
//! ```
//! use coverage_engine::config::Palette;
//!
//! let palette = Palette::default();
//! assert!(!palette.is_empty());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{Palette, PaletteConfig};
