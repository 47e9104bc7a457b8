use crate::edge::Edge;

/// Number of edges on a hex tile.
pub const EDGE_COUNT: usize = 6;

/// Reservation-blocking policy for tiles whose cities carry reservations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ReservationBlocks {
    /// Reservations only block once they use up every open slot.
    #[default]
    Never,
    /// Any reservation blocks every entity that does not hold one.
    Always,
    /// Behaves like `Always` on yellow tiles and like `Never` otherwise.
    YellowOnly,
}

impl From<bool> for ReservationBlocks {
    fn from(blocks: bool) -> Self {
        if blocks { Self::Always } else { Self::Never }
    }
}

/// Engine-wide defaults applied to tiles built from a catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TileConfig {
    /// Reservation policy for newly constructed tiles.
    pub reservation_blocks: ReservationBlocks,
    /// Rotations an argument-less `rotate` cycles through. Empty means the
    /// tile stays put until the rules engine supplies its own set.
    pub default_legal_rotations: Vec<Edge>,
}

impl TileConfig {
    // ===== edge placement weights, in tenths of a track =====
    /// Weight added to an edge for each track or committed city/town on it.
    pub const EDGE_WEIGHT: u32 = 10;
    /// Weight spilled onto each neighboring edge.
    pub const NEIGHBOR_SPILLOVER: u32 = 1;
    /// Initial bias on edge 0, keeping the bottom free for the location name.
    pub const LOCATION_NAME_BIAS: u32 = 1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reservation_blocks(mut self, reservation_blocks: ReservationBlocks) -> Self {
        self.reservation_blocks = reservation_blocks;
        self
    }

    pub fn with_default_legal_rotations(mut self, rotations: Vec<Edge>) -> Self {
        self.default_legal_rotations = rotations;
        self
    }
}
