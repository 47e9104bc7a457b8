//! Hex tile geometry and connectivity for 18xx-style track-laying games.
//!
//! `tile-core` decodes compact tile codes into typed parts, aggregates them into
//! [`Tile`]s, and answers the geometric questions a rules engine asks: which
//! edges track leaves through under a rotation, whether one tile may replace
//! another, where cities and towns should be drawn, and who holds claims on
//! the tile. Catalogs and configuration are supplied by the caller; see the
//! `tile-content` crate for loaders.
pub mod catalog;
pub mod color;
pub mod config;
pub mod decode;
pub mod edge;
pub mod entity;
pub mod error;
pub mod part;
pub mod tile;

pub use catalog::{CatalogEntry, CatalogOracle, StaticCatalog};
pub use color::Color;
pub use config::{EDGE_COUNT, ReservationBlocks, TileConfig};
pub use decode::{DecodeError, decode};
pub use edge::{Edge, EdgeSet, InvalidEdge};
pub use entity::{Entity, EntityId};
pub use error::{EngineError, ErrorSeverity};
pub use part::{
    Blocker, Border, BorderKind, City, Endpoint, Icon, InvalidRevenue, Junction, Label, NodeKind,
    Offboard, Part, PartKind, PartRef, Path, Revenue, RevenueCenter, RevenuePhase,
    RouteEligibility, TrackKind, Town, Upgrade,
};
pub use tile::{ReservationSlot, Tile, TileError, TileOptions, UpgradeRejection};
