//! Tile catalogs and engine configuration as data.
//!
//! This crate houses the standard tile catalog and provides loaders for
//! RON/TOML data files:
//! - Tile catalogs (per-color name to tile-code tables, RON)
//! - Engine configuration (reservation policy, default rotations, TOML)
//!
//! Everything here is handed to `tile-core` as a [`CatalogOracle`] or a
//! [`TileConfig`]; the engine itself never reads files.
//!
//! [`CatalogOracle`]: tile_core::CatalogOracle
//! [`TileConfig`]: tile_core::TileConfig

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub mod standard;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, LoadResult};

#[cfg(feature = "loaders")]
pub use standard::standard_catalog;
