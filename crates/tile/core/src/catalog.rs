//! Tile catalogs: where tile codes come from.
//!
//! Catalogs are injected into [`Tile::lookup`](crate::Tile::lookup) through
//! [`CatalogOracle`], so the engine never knows whether the codes were embedded,
//! loaded from disk, or assembled by a game's rules module.

use std::collections::BTreeMap;

use crate::color::Color;

/// A tile code together with the color table it was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry<'a> {
    pub color: Color,
    pub code: &'a str,
}

pub trait CatalogOracle: Send + Sync {
    /// Finds `name`, searching color tables in upgrade order.
    fn entry(&self, name: &str) -> Option<CatalogEntry<'_>>;

    /// Every tile name the catalog knows, in search order.
    fn names(&self) -> Vec<&str>;
}

/// In-memory catalog keyed by color, then tile name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticCatalog {
    tables: BTreeMap<Color, BTreeMap<String, String>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a tile in the `color` table.
    pub fn insert(&mut self, color: Color, name: impl Into<String>, code: impl Into<String>) {
        self.tables
            .entry(color)
            .or_default()
            .insert(name.into(), code.into());
    }

    #[must_use]
    pub fn with_tile(mut self, color: Color, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.insert(color, name, code);
        self
    }

    pub fn len(&self) -> usize {
        self.tables.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tile names of one color table.
    pub fn table(&self, color: Color) -> impl Iterator<Item = (&str, &str)> {
        self.tables
            .get(&color)
            .into_iter()
            .flatten()
            .map(|(name, code)| (name.as_str(), code.as_str()))
    }
}

impl CatalogOracle for StaticCatalog {
    fn entry(&self, name: &str) -> Option<CatalogEntry<'_>> {
        self.tables.iter().find_map(|(color, table)| {
            table.get(name).map(|code| CatalogEntry {
                color: *color,
                code: code.as_str(),
            })
        })
    }

    fn names(&self) -> Vec<&str> {
        self.tables
            .values()
            .flat_map(BTreeMap::keys)
            .map(String::as_str)
            .collect()
    }
}
