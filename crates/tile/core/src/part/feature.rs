//! Non-track tile features: borders, junctions, terrain upgrades, labels,
//! icons and lay blockers.

use crate::edge::Edge;
use crate::entity::Entity;

/// Kind of a hex-side border.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BorderKind {
    Impassable,
    Mountain,
    Water,
    Province,
    Divider,
}

/// A border along one edge; crossing it may cost money or be forbidden.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    pub index: usize,
    pub edge: Edge,
    pub kind: Option<BorderKind>,
    pub cost: Option<u32>,
}

impl Border {
    pub fn new(edge: Edge) -> Self {
        Self {
            index: 0,
            edge,
            kind: None,
            cost: None,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: BorderKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = Some(cost);
        self
    }
}

/// Unbranched convergence point of several paths, e.g. the center of a
/// Lawson-style track tile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Junction {
    pub index: usize,
}

/// Terrain that must be paid for when laying track on the hex.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Upgrade {
    pub index: usize,
    pub cost: u32,
    /// Terrain tags such as `mountain` or `water`; games define their own.
    pub terrains: Vec<String>,
}

impl Upgrade {
    pub fn new(cost: u32, terrains: Vec<String>) -> Self {
        Self {
            index: 0,
            cost,
            terrains,
        }
    }
}

/// Display text that also constrains upgrades (`OO`, `B`, `NY`...).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    pub index: usize,
    pub text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            index: 0,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Icon {
    pub index: usize,
    pub image: String,
    pub name: String,
    /// Sticky icons survive when the tile is upgraded.
    pub sticky: bool,
    /// Track may not be laid while this icon is on the hex.
    pub blocks_lay: bool,
}

impl Icon {
    /// Builds an icon named after the image's file stem.
    pub fn new(image: impl Into<String>) -> Self {
        let image = image.into();
        let name = image_stem(&image).to_string();
        Self {
            index: 0,
            image,
            name,
            sticky: false,
            blocks_lay: false,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

fn image_stem(image: &str) -> &str {
    let file = image.rsplit('/').next().unwrap_or(image);
    file.split('.').next().unwrap_or(file)
}

/// An entity that prevents track lays on the tile while it is active.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blocker {
    pub index: usize,
    pub entity: Entity,
}

impl Blocker {
    pub fn new(entity: Entity) -> Self {
        Self { index: 0, entity }
    }
}
