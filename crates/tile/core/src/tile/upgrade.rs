//! Upgrade legality between two tiles.

use crate::edge::Edge;
use crate::part::Path;

use super::Tile;

/// First rule an upgrade candidate failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum UpgradeRejection {
    /// The replacement's color is not the next one in the upgrade chain.
    Color,
    /// No rotation of the existing track fits inside the replacement's track.
    Track,
    Label,
    TownCount,
    CityCount,
}

impl Tile {
    /// Whether `other` may replace this tile on the map.
    ///
    /// `special` relaxes everything but color and track preservation, for
    /// private abilities that allow otherwise illegal lays.
    pub fn upgrades_to(&self, other: &Tile, special: bool) -> bool {
        match self.upgrade_rejection(other, special) {
            None => true,
            Some(reason) => {
                tracing::debug!(from = %self.name, to = %other.name, %reason, "upgrade rejected");
                false
            }
        }
    }

    /// Like [`upgrades_to`](Self::upgrades_to), but names the failed rule.
    pub fn upgrade_rejection(&self, other: &Tile, special: bool) -> Option<UpgradeRejection> {
        if !self.color.precedes(other.color) {
            return Some(UpgradeRejection::Color);
        }
        if !self.paths_are_subset_of(other.paths()) {
            return Some(UpgradeRejection::Track);
        }
        if special {
            return None;
        }
        if self.label() != other.label() {
            return Some(UpgradeRejection::Label);
        }
        if self.towns.len() != other.towns.len() {
            return Some(UpgradeRejection::TownCount);
        }
        // Labeled tiles may merge or split cities (e.g. OO into a single city).
        if self.label().is_none() && self.cities.len() != other.cities.len() {
            return Some(UpgradeRejection::CityCount);
        }
        None
    }

    /// True if some rotation of this tile's unrotated paths lands every path
    /// inside one of `other_paths`.
    pub fn paths_are_subset_of(&self, other_paths: &[Path]) -> bool {
        Edge::ALL.iter().any(|ticks| {
            let ticks = i64::from(ticks.num());
            self.raw_paths().all(|path| {
                let rotated = path.rotate(ticks);
                other_paths.iter().any(|other| rotated.is_subset_of(other))
            })
        })
    }
}
