//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the coverage
//! palette from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{Palette, PaletteConfig};

/// Loads and provides access to the engine configuration.
///
/// # File Structure
///
/// The palette file is a single YAML document:
/// ```yaml
/// colors:
///   - "#2563eb"
///   - "#16a34a"
/// ```
///
/// # Example
///
/// ```no_run
/// use coverage_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/palette.yaml").unwrap();
/// let palette = loader.palette();
/// println!("First color: {}", palette.color_for(0));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    palette: Palette,
}

impl ConfigLoader {
    /// Loads the palette configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] when the file cannot be read
    /// - [`EngineError::ConfigParseError`] when the YAML is malformed
    /// - [`EngineError::InvalidPalette`] when the color list is empty
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let display_path = path.display().to_string();

        let raw = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: display_path.clone(),
        })?;

        let parsed: PaletteConfig =
            serde_yaml::from_str(&raw).map_err(|err| EngineError::ConfigParseError {
                path: display_path.clone(),
                message: err.to_string(),
            })?;

        let palette = Palette::new(parsed.colors).ok_or_else(|| EngineError::InvalidPalette {
            message: "color list is empty".to_string(),
        })?;

        info!(path = %display_path, colors = palette.len(), "Loaded palette configuration");

        Ok(Self { palette })
    }

    /// Returns the loaded palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}
