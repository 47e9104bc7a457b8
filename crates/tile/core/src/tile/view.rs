//! Rotation and the rotation-dependent views of a tile.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use crate::config::EDGE_COUNT;
use crate::edge::Edge;
use crate::part::{Label, Part, PartRef, Path};

use super::Tile;

/// Everything that depends on the current rotation or label.
#[derive(Clone, Debug, Default)]
pub(super) struct RotatedView {
    pub paths: Vec<Path>,
    pub exits: ArrayVec<Edge, EDGE_COUNT>,
    /// Index into `paths` of every path touching a node.
    pub node_paths: BTreeMap<PartRef, Vec<usize>>,
    pub city_town_edges: BTreeMap<PartRef, Edge>,
}

impl Tile {
    /// Rotates the tile to `to`, or to the next legal rotation if `to` is `None`.
    ///
    /// Without a target the tile advances to the smallest legal rotation
    /// greater than the current one, wrapping to the first. With no legal
    /// rotations at all it stays put.
    pub fn rotate(&mut self, to: Option<Edge>) -> &mut Self {
        let target = to
            .or_else(|| {
                self.legal_rotations
                    .iter()
                    .copied()
                    .find(|rotation| *rotation > self.rotation)
            })
            .or_else(|| self.legal_rotations.first().copied())
            .unwrap_or(self.rotation);

        tracing::debug!(tile = %self.name, from = %self.rotation, to = %target, "rotating tile");
        self.rotation = target;
        self.refresh_views();
        self
    }

    /// Replaces the tile's label, or removes all labels with `None`.
    ///
    /// The old label parts stay in the arena but drop out of the live set.
    pub fn set_label(&mut self, text: Option<&str>) {
        self.labels.clear();
        if let Some(text) = text {
            let mut label = Label::new(text);
            label.index = self.parts.iter().filter(|part| part.as_label().is_some()).count();
            self.labels.push(PartRef(self.parts.len()));
            self.parts.push(Part::Label(label));
        }
        self.refresh_views();
    }

    /// Paths under the current rotation.
    pub fn paths(&self) -> &[Path] {
        &self.view.paths
    }

    /// Distinct edges touched by track under the current rotation.
    pub fn exits(&self) -> &[Edge] {
        &self.view.exits
    }

    /// Rotated paths touching `node`.
    pub fn node_paths(&self, node: PartRef) -> impl Iterator<Item = &Path> {
        self.view
            .node_paths
            .get(&node)
            .into_iter()
            .flatten()
            .filter_map(|index| self.view.paths.get(*index))
    }

    /// Edge each city and town is drawn towards.
    pub fn preferred_city_town_edges(&self) -> &BTreeMap<PartRef, Edge> {
        &self.view.city_town_edges
    }

    /// Rebuilds every rotation-dependent view. The only writer of `view`.
    pub(super) fn refresh_views(&mut self) {
        let ticks = i64::from(self.rotation.num());

        let paths: Vec<Path> = self.raw_paths().map(|path| path.rotate(ticks)).collect();
        let exits = self.edges.iter().map(|edge| edge.rotate(ticks)).collect();

        let mut node_paths: BTreeMap<PartRef, Vec<usize>> = BTreeMap::new();
        for (index, path) in paths.iter().enumerate() {
            for (node, _) in path.nodes() {
                let touching = node_paths.entry(node).or_default();
                if touching.last() != Some(&index) {
                    touching.push(index);
                }
            }
        }

        self.view = RotatedView {
            paths,
            exits,
            node_paths,
            city_town_edges: BTreeMap::new(),
        };
        self.view.city_town_edges = self.compute_city_town_edges();
    }
}
