//! Typed features a tile is composed of.
//!
//! [`Part`] is a closed sum type. The decoder produces an ordered arena of
//! parts; anything that refers to another part (a path ending at a city) does
//! so by [`PartRef`], the referenced part's slot in that arena.
mod feature;
mod path;
mod revenue;
mod stop;

pub use feature::{Blocker, Border, BorderKind, Icon, Junction, Label, Upgrade};
pub use path::{Endpoint, NodeKind, Path, TrackKind};
pub use revenue::{InvalidRevenue, Revenue, RevenueCenter, RevenuePhase, RouteEligibility};
pub use stop::{City, Offboard, Town};

use core::fmt;

/// Slot of a part in its tile's arena, in decode order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartRef(pub usize);

impl fmt::Display for PartRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part[{}]", self.0)
    }
}

/// Variant tag of a [`Part`], used for grouping and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PartKind {
    Path,
    City,
    Town,
    Offboard,
    Border,
    Junction,
    Upgrade,
    Label,
    Icon,
    Blocker,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Part {
    Path(Path),
    City(City),
    Town(Town),
    Offboard(Offboard),
    Border(Border),
    Junction(Junction),
    Upgrade(Upgrade),
    Label(Label),
    Icon(Icon),
    Blocker(Blocker),
}

impl Part {
    pub fn kind(&self) -> PartKind {
        match self {
            Part::Path(_) => PartKind::Path,
            Part::City(_) => PartKind::City,
            Part::Town(_) => PartKind::Town,
            Part::Offboard(_) => PartKind::Offboard,
            Part::Border(_) => PartKind::Border,
            Part::Junction(_) => PartKind::Junction,
            Part::Upgrade(_) => PartKind::Upgrade,
            Part::Label(_) => PartKind::Label,
            Part::Icon(_) => PartKind::Icon,
            Part::Blocker(_) => PartKind::Blocker,
        }
    }

    /// Role this part plays as a path endpoint, if it can be one.
    pub fn node_kind(&self) -> Option<NodeKind> {
        match self {
            Part::City(_) => Some(NodeKind::City),
            Part::Town(_) => Some(NodeKind::Town),
            Part::Offboard(_) => Some(NodeKind::Offboard),
            Part::Junction(_) => Some(NodeKind::Junction),
            _ => None,
        }
    }

    pub fn is_node(&self) -> bool {
        self.node_kind().is_some()
    }

    pub fn is_stop(&self) -> bool {
        self.node_kind().is_some_and(NodeKind::is_stop)
    }

    /// Whether later segments of a tile code may refer back to this part.
    pub fn is_back_referenceable(&self) -> bool {
        matches!(
            self,
            Part::City(_)
                | Part::Town(_)
                | Part::Offboard(_)
                | Part::Label(_)
                | Part::Upgrade(_)
                | Part::Junction(_)
        )
    }

    pub fn blocks_lay(&self) -> bool {
        match self {
            Part::Icon(icon) => icon.blocks_lay,
            _ => false,
        }
    }

    /// Position among parts of the same kind on the owning tile.
    pub fn index(&self) -> usize {
        match self {
            Part::Path(p) => p.index,
            Part::City(p) => p.index,
            Part::Town(p) => p.index,
            Part::Offboard(p) => p.index,
            Part::Border(p) => p.index,
            Part::Junction(p) => p.index,
            Part::Upgrade(p) => p.index,
            Part::Label(p) => p.index,
            Part::Icon(p) => p.index,
            Part::Blocker(p) => p.index,
        }
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        match self {
            Part::Path(p) => p.index = index,
            Part::City(p) => p.index = index,
            Part::Town(p) => p.index = index,
            Part::Offboard(p) => p.index = index,
            Part::Border(p) => p.index = index,
            Part::Junction(p) => p.index = index,
            Part::Upgrade(p) => p.index = index,
            Part::Label(p) => p.index = index,
            Part::Icon(p) => p.index = index,
            Part::Blocker(p) => p.index = index,
        }
    }

    pub fn revenue_center(&self) -> Option<&RevenueCenter> {
        match self {
            Part::City(city) => Some(&city.center),
            Part::Town(town) => Some(&town.center),
            Part::Offboard(offboard) => Some(&offboard.center),
            _ => None,
        }
    }

    /// Explicit placement edge of a city or town.
    pub fn loc(&self) -> Option<crate::edge::Edge> {
        match self {
            Part::City(city) => city.loc,
            Part::Town(town) => town.loc,
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Part::Path(path) => Some(path),
            _ => None,
        }
    }

    pub fn as_city(&self) -> Option<&City> {
        match self {
            Part::City(city) => Some(city),
            _ => None,
        }
    }

    pub fn as_city_mut(&mut self) -> Option<&mut City> {
        match self {
            Part::City(city) => Some(city),
            _ => None,
        }
    }

    pub fn as_town(&self) -> Option<&Town> {
        match self {
            Part::Town(town) => Some(town),
            _ => None,
        }
    }

    pub fn as_offboard(&self) -> Option<&Offboard> {
        match self {
            Part::Offboard(offboard) => Some(offboard),
            _ => None,
        }
    }

    pub fn as_border(&self) -> Option<&Border> {
        match self {
            Part::Border(border) => Some(border),
            _ => None,
        }
    }

    pub fn as_upgrade(&self) -> Option<&Upgrade> {
        match self {
            Part::Upgrade(upgrade) => Some(upgrade),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Part::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_icon(&self) -> Option<&Icon> {
        match self {
            Part::Icon(icon) => Some(icon),
            _ => None,
        }
    }
}
