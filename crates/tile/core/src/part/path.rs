//! Track segments.
//!
//! A path joins two endpoints. An endpoint is either a raw edge of the hex or a
//! node part (city, town, offboard, junction) shared with other paths. Shared
//! nodes are referenced by arena slot, so two paths ending at `_0` see the same
//! city rather than two copies of it.

use arrayvec::ArrayVec;

use crate::edge::{Edge, EdgeSet};

use super::PartRef;

/// Structural role of a node endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    City,
    Town,
    Offboard,
    Junction,
}

impl NodeKind {
    /// Cities, towns and offboards earn revenue; junctions only route track.
    pub const fn is_stop(self) -> bool {
        !matches!(self, Self::Junction)
    }
}

/// One end of a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Edge(Edge),
    Node { part: PartRef, kind: NodeKind },
}

impl Endpoint {
    pub const fn node(part: PartRef, kind: NodeKind) -> Self {
        Self::Node { part, kind }
    }

    pub fn edge(self) -> Option<Edge> {
        match self {
            Self::Edge(edge) => Some(edge),
            Self::Node { .. } => None,
        }
    }

    pub fn node_ref(self) -> Option<PartRef> {
        match self {
            Self::Node { part, .. } => Some(part),
            Self::Edge(_) => None,
        }
    }

    pub fn rotate(self, ticks: i64) -> Self {
        match self {
            Self::Edge(edge) => Self::Edge(edge.rotate(ticks)),
            node => node,
        }
    }

    /// Endpoint containment: edges must match exactly, nodes by kind.
    pub fn fits_within(self, other: Self) -> bool {
        match (self, other) {
            (Self::Edge(a), Self::Edge(b)) => a == b,
            (Self::Node { kind: a, .. }, Self::Node { kind: b, .. }) => a == b,
            _ => false,
        }
    }
}

/// Track gauge of a path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TrackKind {
    #[default]
    Broad,
    Narrow,
    /// Carries both gauges, so it can replace either.
    Dual,
}

impl TrackKind {
    pub fn accepts(self, existing: Self) -> bool {
        self == existing || self == Self::Dual
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub index: usize,
    pub a: Endpoint,
    pub b: Endpoint,
    /// Terminal marker (`terminal:1`): routes may end here but not pass through.
    pub terminal: Option<u8>,
    pub track: TrackKind,
}

impl Path {
    pub fn new(a: Endpoint, b: Endpoint) -> Self {
        Self {
            index: 0,
            a,
            b,
            terminal: None,
            track: TrackKind::default(),
        }
    }

    /// Shorthand for a plain edge-to-edge track.
    pub fn between(a: Edge, b: Edge) -> Self {
        Self::new(Endpoint::Edge(a), Endpoint::Edge(b))
    }

    #[must_use]
    pub fn with_terminal(mut self, terminal: u8) -> Self {
        self.terminal = Some(terminal);
        self
    }

    #[must_use]
    pub fn with_track(mut self, track: TrackKind) -> Self {
        self.track = track;
        self
    }

    pub fn endpoints(&self) -> [Endpoint; 2] {
        [self.a, self.b]
    }

    /// Edges this path touches, in endpoint order.
    pub fn exits(&self) -> ArrayVec<Edge, 2> {
        self.endpoints().into_iter().filter_map(Endpoint::edge).collect()
    }

    pub fn edge_set(&self) -> EdgeSet {
        self.exits().into_iter().collect()
    }

    /// Node parts this path touches, in endpoint order.
    pub fn nodes(&self) -> ArrayVec<(PartRef, NodeKind), 2> {
        self.endpoints()
            .into_iter()
            .filter_map(|endpoint| match endpoint {
                Endpoint::Node { part, kind } => Some((part, kind)),
                Endpoint::Edge(_) => None,
            })
            .collect()
    }

    /// First node endpoint of the given kind.
    pub fn node_of(&self, kind: NodeKind) -> Option<PartRef> {
        self.nodes()
            .into_iter()
            .find(|(_, k)| *k == kind)
            .map(|(part, _)| part)
    }

    /// The city this path ends at, else its town. Used for edge placement.
    pub fn city_or_town(&self) -> Option<PartRef> {
        self.node_of(NodeKind::City)
            .or_else(|| self.node_of(NodeKind::Town))
    }

    pub fn touches(&self, part: PartRef) -> bool {
        self.nodes().iter().any(|(p, _)| *p == part)
    }

    /// A copy with both edge endpoints rotated by `ticks`.
    pub fn rotate(&self, ticks: i64) -> Self {
        Self {
            a: self.a.rotate(ticks),
            b: self.b.rotate(ticks),
            ..self.clone()
        }
    }

    /// True if this path is contained in `other`: same terminal marker, a
    /// compatible gauge, and endpoints that fit in either orientation.
    ///
    /// Endpoints are matched as a pair (`a` into one end of `other`, `b` into
    /// the other end), never both into the same end. A city-to-city path is
    /// therefore not contained in a city-to-edge path.
    pub fn is_subset_of(&self, other: &Path) -> bool {
        if self.terminal != other.terminal || !other.track.accepts(self.track) {
            return false;
        }

        (self.a.fits_within(other.a) && self.b.fits_within(other.b))
            || (self.a.fits_within(other.b) && self.b.fits_within(other.a))
    }
}
