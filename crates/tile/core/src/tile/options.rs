use crate::config::{ReservationBlocks, TileConfig};
use crate::edge::Edge;

/// Construction options for a [`Tile`](super::Tile).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TileOptions {
    pub rotation: Edge,
    /// Printed on the map rather than laid from the tile supply.
    pub preprinted: bool,
    /// Disambiguates several physical copies of the same tile name.
    pub index: usize,
    pub location_name: Option<String>,
    pub reservation_blocks: ReservationBlocks,
    pub legal_rotations: Vec<Edge>,
}

impl TileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying the engine-wide defaults from `config`.
    pub fn from_config(config: &TileConfig) -> Self {
        Self {
            reservation_blocks: config.reservation_blocks,
            legal_rotations: config.default_legal_rotations.clone(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: Edge) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_preprinted(mut self, preprinted: bool) -> Self {
        self.preprinted = preprinted;
        self
    }

    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    #[must_use]
    pub fn with_location_name(mut self, location_name: impl Into<String>) -> Self {
        self.location_name = Some(location_name.into());
        self
    }

    #[must_use]
    pub fn with_reservation_blocks(mut self, reservation_blocks: impl Into<ReservationBlocks>) -> Self {
        self.reservation_blocks = reservation_blocks.into();
        self
    }

    #[must_use]
    pub fn with_legal_rotations(mut self, legal_rotations: Vec<Edge>) -> Self {
        self.legal_rotations = legal_rotations;
        self
    }
}
