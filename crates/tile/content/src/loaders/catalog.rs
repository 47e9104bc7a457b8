//! Tile catalog loader.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tile_core::{Color, StaticCatalog};

use crate::loaders::{LoadResult, read_file};

/// Catalog structure for RON files: one `name: code` table per color.
///
/// ```ron
/// (
///     yellow: { "7": "path=a:0,b:1" },
///     green: { "16": "path=a:0,b:2;path=a:1,b:3" },
/// )
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CatalogRon {
    white: BTreeMap<String, String>,
    yellow: BTreeMap<String, String>,
    green: BTreeMap<String, String>,
    brown: BTreeMap<String, String>,
    gray: BTreeMap<String, String>,
    red: BTreeMap<String, String>,
    blue: BTreeMap<String, String>,
}

impl CatalogRon {
    fn into_catalog(self) -> StaticCatalog {
        let tables = [
            (Color::White, self.white),
            (Color::Yellow, self.yellow),
            (Color::Green, self.green),
            (Color::Brown, self.brown),
            (Color::Gray, self.gray),
            (Color::Red, self.red),
            (Color::Blue, self.blue),
        ];

        let mut catalog = StaticCatalog::new();
        for (color, table) in tables {
            for (name, code) in table {
                catalog.insert(color, name, code);
            }
        }
        catalog
    }
}

/// Loader for tile catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a tile catalog from a RON file.
    ///
    /// Codes are stored as-is; they are decoded when a tile is looked up.
    pub fn load(path: &Path) -> LoadResult<StaticCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a tile catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<StaticCatalog> {
        let catalog: CatalogRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tile catalog RON: {}", e))?;
        let catalog = catalog.into_catalog();

        tracing::info!(tiles = catalog.len(), "loaded tile catalog");
        Ok(catalog)
    }
}
