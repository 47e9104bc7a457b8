//! Tile construction and mutation errors.

use crate::decode::DecodeError;
use crate::error::{EngineError, ErrorSeverity};
use crate::part::PartRef;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TileError {
    /// No color table of the catalog knows the name.
    #[error("tile '{0}' not found")]
    NotFound(String),

    #[error("invalid tile code: {0}")]
    Decode(#[from] DecodeError),

    /// A path built from explicit parts points at a missing slot or at a part
    /// that is not the node kind the endpoint claims.
    #[error("path {path} refers to {part}, which is not a matching node")]
    DanglingReference { path: PartRef, part: PartRef },

    #[error("tile has more than one junction")]
    MultipleJunctions,

    #[error("tile has no city {city} (cities: {cities})")]
    CityOutOfRange { city: usize, cities: usize },

    #[error("city {city} has no slot {slot} (slots: {slots})")]
    SlotOutOfRange { city: usize, slot: usize, slots: usize },
}

impl EngineError for TileError {
    fn severity(&self) -> ErrorSeverity {
        use TileError::*;
        match self {
            NotFound(_) | CityOutOfRange { .. } | SlotOutOfRange { .. } => {
                ErrorSeverity::Validation
            }
            Decode(_) | MultipleJunctions => ErrorSeverity::Fatal,
            DanglingReference { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use TileError::*;
        match self {
            NotFound(_) => "TILE_NOT_FOUND",
            Decode(inner) => inner.error_code(),
            DanglingReference { .. } => "TILE_DANGLING_REFERENCE",
            MultipleJunctions => "TILE_MULTIPLE_JUNCTIONS",
            CityOutOfRange { .. } => "TILE_CITY_OUT_OF_RANGE",
            SlotOutOfRange { .. } => "TILE_SLOT_OUT_OF_RANGE",
        }
    }
}
