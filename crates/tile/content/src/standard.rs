//! The standard tile set shared by most 18xx titles.

use tile_core::StaticCatalog;

use crate::loaders::{CatalogLoader, LoadResult};

const STANDARD_TILES: &str = include_str!("../data/tiles.ron");

/// Parses the embedded standard catalog.
///
/// Game-specific tiles are usually layered on top with
/// [`StaticCatalog::insert`].
pub fn standard_catalog() -> LoadResult<StaticCatalog> {
    CatalogLoader::parse(STANDARD_TILES)
}
