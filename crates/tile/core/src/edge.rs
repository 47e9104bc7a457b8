//! Hex edge directions and rotation arithmetic.
//!
//! Edges are numbered 0 through 5 going clockwise, edge 0 being the bottom
//! edge of a flat-bottomed hex. Rotating a tile by one tick moves every edge to
//! the next number, wrapping modulo six.

use core::fmt;
use core::str::FromStr;

use crate::config::EDGE_COUNT;

/// One of the six edges of a hex tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Edge(u8);

impl Edge {
    pub const ALL: [Edge; EDGE_COUNT] = [Edge(0), Edge(1), Edge(2), Edge(3), Edge(4), Edge(5)];

    /// Builds an edge from any integer, wrapping it into `[0, 6)`.
    pub const fn new(value: i64) -> Self {
        Self(value.rem_euclid(EDGE_COUNT as i64) as u8)
    }

    pub const fn num(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Rotates the edge clockwise by `ticks`. Negative ticks rotate the other way.
    pub const fn rotate(self, ticks: i64) -> Self {
        Self::new(self.0 as i64 + ticks.rem_euclid(EDGE_COUNT as i64))
    }

    pub const fn opposite(self) -> Self {
        self.rotate(3)
    }

    /// The two edges adjacent to this one: counter-clockwise first.
    pub const fn neighbors(self) -> [Self; 2] {
        [self.rotate(-1), self.rotate(1)]
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when an integer or token does not name an edge.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not an edge in 0..6")]
pub struct InvalidEdge(pub String);

impl TryFrom<u8> for Edge {
    type Error = InvalidEdge;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (value as usize) < EDGE_COUNT {
            Ok(Self(value))
        } else {
            Err(InvalidEdge(value.to_string()))
        }
    }
}

impl From<Edge> for u8 {
    fn from(edge: Edge) -> Self {
        edge.0
    }
}

impl FromStr for Edge {
    type Err = InvalidEdge;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| InvalidEdge(s.to_string()))
            .and_then(Edge::try_from)
    }
}

bitflags::bitflags! {
    /// Order-free set of edges, one bit per edge.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EdgeSet: u8 {
        const E0 = 1 << 0;
        const E1 = 1 << 1;
        const E2 = 1 << 2;
        const E3 = 1 << 3;
        const E4 = 1 << 4;
        const E5 = 1 << 5;
    }
}

impl EdgeSet {
    pub const fn of(edge: Edge) -> Self {
        Self::from_bits_truncate(1 << edge.num())
    }

    pub fn has(self, edge: Edge) -> bool {
        self.contains(Self::of(edge))
    }

    /// Inserts the edge, returning true if it was not already present.
    pub fn add(&mut self, edge: Edge) -> bool {
        let fresh = !self.has(edge);
        self.insert(Self::of(edge));
        fresh
    }

    /// Iterates members in ascending edge order.
    pub fn edges(self) -> impl Iterator<Item = Edge> {
        Edge::ALL.into_iter().filter(move |edge| self.has(*edge))
    }

    /// The same set with every member rotated by `ticks`.
    pub fn rotated(self, ticks: i64) -> Self {
        self.edges().map(|edge| Self::of(edge.rotate(ticks))).collect()
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut set = Self::empty();
        for edge in iter {
            set.add(edge);
        }
        set
    }
}
