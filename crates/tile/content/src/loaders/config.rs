//! Engine configuration loader.

use std::path::Path;

use tile_core::TileConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing TileConfig
    ///
    /// # Returns
    ///
    /// Returns a TileConfig. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<TileConfig> {
        let content = read_file(path)?;
        let config: TileConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
