//! The tile aggregate.
//!
//! A [`Tile`] owns the part arena produced by the decoder and classifies every
//! part into exactly one live collection. Rotation-dependent views (rotated
//! paths, exits, city/town placement) are rebuilt by a single hook whenever the
//! rotation or the label changes; nothing else mutates them.
mod claims;
mod error;
mod options;
mod placement;
mod upgrade;
mod view;

pub use claims::ReservationSlot;
pub use error::TileError;
pub use options::TileOptions;
pub use upgrade::UpgradeRejection;

use std::collections::BTreeMap;

use crate::catalog::CatalogOracle;
use crate::color::Color;
use crate::config::ReservationBlocks;
use crate::decode::decode;
use crate::edge::{Edge, EdgeSet};
use crate::entity::Entity;
use crate::part::{
    City, Icon, Junction, Label, Offboard, Part, PartKind, PartRef, Path, Revenue,
    RevenueCenter, Town, Upgrade,
};

use view::RotatedView;

#[derive(Clone, Debug)]
pub struct Tile {
    name: String,
    color: Color,
    rotation: Edge,
    preprinted: bool,
    index: usize,
    location_name: Option<String>,
    reservation_blocks: ReservationBlocks,
    /// Sorted, deduplicated.
    legal_rotations: Vec<Edge>,

    /// Append-only part arena. Slots never move, so `PartRef`s stay valid.
    parts: Vec<Part>,

    // ===== live classification of the arena =====
    paths: Vec<PartRef>,
    cities: Vec<PartRef>,
    towns: Vec<PartRef>,
    offboards: Vec<PartRef>,
    junction: Option<PartRef>,
    upgrades: Vec<PartRef>,
    labels: Vec<PartRef>,
    icons: Vec<PartRef>,
    blockers: Vec<PartRef>,
    original_borders: Vec<PartRef>,
    /// Subset of `original_borders` still in play.
    borders: Vec<PartRef>,
    blocks_lay: bool,

    // ===== derived once from the paths =====
    nodes: Vec<PartRef>,
    stops: Vec<PartRef>,
    edges: Vec<Edge>,

    /// Tile-level reservations that did not land on a city slot.
    reservations: Vec<Entity>,

    view: RotatedView,
}

impl Tile {
    /// Builds a tile from an already decoded part arena.
    ///
    /// # Errors
    ///
    /// Returns `TileError::DanglingReference` if a path names a slot that is
    /// missing or of another node kind, and `TileError::MultipleJunctions` if
    /// more than one junction is supplied.
    pub fn new(
        name: impl Into<String>,
        color: Color,
        parts: Vec<Part>,
        options: TileOptions,
    ) -> Result<Self, TileError> {
        let TileOptions {
            rotation,
            preprinted,
            index,
            location_name,
            reservation_blocks,
            mut legal_rotations,
        } = options;
        legal_rotations.sort();
        legal_rotations.dedup();

        let mut tile = Self {
            name: name.into(),
            color,
            rotation,
            preprinted,
            index,
            location_name,
            reservation_blocks,
            legal_rotations,
            parts,
            paths: Vec::new(),
            cities: Vec::new(),
            towns: Vec::new(),
            offboards: Vec::new(),
            junction: None,
            upgrades: Vec::new(),
            labels: Vec::new(),
            icons: Vec::new(),
            blockers: Vec::new(),
            original_borders: Vec::new(),
            borders: Vec::new(),
            blocks_lay: false,
            nodes: Vec::new(),
            stops: Vec::new(),
            edges: Vec::new(),
            reservations: Vec::new(),
            view: RotatedView::default(),
        };

        tile.separate_parts()?;
        tile.derive_from_paths();
        tile.refresh_views();

        tracing::debug!(
            tile = %tile.name,
            color = %tile.color,
            paths = tile.paths.len(),
            cities = tile.cities.len(),
            towns = tile.towns.len(),
            "built tile"
        );
        Ok(tile)
    }

    /// Decodes `code` and builds the tile, bypassing any catalog.
    pub fn from_code(
        name: impl Into<String>,
        color: Color,
        code: &str,
        options: TileOptions,
    ) -> Result<Self, TileError> {
        let parts = decode(code)?;
        Self::new(name, color, parts, options)
    }

    /// Resolves `name` against the catalog's color tables.
    ///
    /// # Errors
    ///
    /// Returns `TileError::NotFound` if no color table has the name, or a
    /// decode error if its code is corrupt.
    pub fn lookup<C>(catalog: &C, name: &str, options: TileOptions) -> Result<Self, TileError>
    where
        C: CatalogOracle + ?Sized,
    {
        let entry = catalog
            .entry(name)
            .ok_or_else(|| TileError::NotFound(name.to_string()))?;
        Self::from_code(name, entry.color, entry.code, options)
    }

    /// Classifies every part exactly once and numbers parts per kind.
    fn separate_parts(&mut self) -> Result<(), TileError> {
        let mut counts: BTreeMap<PartKind, usize> = BTreeMap::new();

        for (slot, part) in self.parts.iter_mut().enumerate() {
            let count = counts.entry(part.kind()).or_default();
            part.set_index(*count);
            *count += 1;

            self.blocks_lay |= part.blocks_lay();

            let slot = PartRef(slot);
            match part {
                Part::Path(_) => self.paths.push(slot),
                Part::City(_) => self.cities.push(slot),
                Part::Town(_) => self.towns.push(slot),
                Part::Offboard(_) => self.offboards.push(slot),
                Part::Junction(_) => {
                    if self.junction.replace(slot).is_some() {
                        return Err(TileError::MultipleJunctions);
                    }
                }
                Part::Upgrade(_) => self.upgrades.push(slot),
                Part::Label(_) => self.labels.push(slot),
                Part::Icon(_) => self.icons.push(slot),
                Part::Blocker(_) => self.blockers.push(slot),
                Part::Border(_) => {
                    self.original_borders.push(slot);
                    self.borders.push(slot);
                }
            }
        }

        self.check_path_references()
    }

    fn check_path_references(&self) -> Result<(), TileError> {
        for &path_ref in &self.paths {
            let Some(path) = self.parts[path_ref.0].as_path() else {
                continue;
            };
            for (part, kind) in path.nodes() {
                let actual = self.parts.get(part.0).and_then(Part::node_kind);
                if actual != Some(kind) {
                    return Err(TileError::DanglingReference {
                        path: path_ref,
                        part,
                    });
                }
            }
        }
        Ok(())
    }

    fn derive_from_paths(&mut self) {
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        let mut seen = EdgeSet::empty();

        for path in self.raw_paths() {
            for (node, _) in path.nodes() {
                if !nodes.contains(&node) {
                    nodes.push(node);
                }
            }
            for edge in path.exits() {
                if seen.add(edge) {
                    edges.push(edge);
                }
            }
        }

        self.stops = nodes
            .iter()
            .copied()
            .filter(|node| self.parts[node.0].is_stop())
            .collect();
        self.nodes = nodes;
        self.edges = edges;
    }

    fn typed<'a, T: 'a>(
        &'a self,
        refs: &'a [PartRef],
        as_typed: fn(&'a Part) -> Option<&'a T>,
    ) -> impl Iterator<Item = &'a T> + 'a {
        refs.iter()
            .filter_map(move |part| self.parts.get(part.0).and_then(as_typed))
    }

    // ===== identity =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn rotation(&self) -> Edge {
        self.rotation
    }

    pub fn preprinted(&self) -> bool {
        self.preprinted
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn location_name(&self) -> Option<&str> {
        self.location_name.as_deref()
    }

    pub fn reservation_blocks(&self) -> ReservationBlocks {
        self.reservation_blocks
    }

    pub fn legal_rotations(&self) -> &[Edge] {
        &self.legal_rotations
    }

    /// Replaces the rotations an argument-less [`rotate`](Self::rotate) cycles through.
    pub fn set_legal_rotations(&mut self, mut rotations: Vec<Edge>) {
        rotations.sort();
        rotations.dedup();
        self.legal_rotations = rotations;
    }

    // ===== parts =====

    /// Resolves a part reference against the arena.
    pub fn part(&self, part: PartRef) -> Option<&Part> {
        self.parts.get(part.0)
    }

    /// Every part ever attached to the tile, in arena order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Paths as decoded, before rotation.
    pub fn raw_paths(&self) -> impl Iterator<Item = &Path> {
        self.typed(&self.paths, Part::as_path)
    }

    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.typed(&self.cities, Part::as_city)
    }

    pub fn city_refs(&self) -> &[PartRef] {
        &self.cities
    }

    pub fn towns(&self) -> impl Iterator<Item = &Town> {
        self.typed(&self.towns, Part::as_town)
    }

    pub fn town_refs(&self) -> &[PartRef] {
        &self.towns
    }

    pub fn offboards(&self) -> impl Iterator<Item = &Offboard> {
        self.typed(&self.offboards, Part::as_offboard)
    }

    pub fn junction(&self) -> Option<&Junction> {
        match self.part(self.junction?)? {
            Part::Junction(junction) => Some(junction),
            _ => None,
        }
    }

    pub fn upgrades(&self) -> impl Iterator<Item = &Upgrade> {
        self.typed(&self.upgrades, Part::as_upgrade)
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.typed(&self.labels, Part::as_label)
    }

    pub fn icons(&self) -> impl Iterator<Item = &Icon> {
        self.typed(&self.icons, Part::as_icon)
    }

    /// Cities followed by towns.
    pub fn city_towns(&self) -> impl Iterator<Item = PartRef> + '_ {
        self.cities.iter().chain(&self.towns).copied()
    }

    /// Every city, town and offboard in arena order.
    pub fn revenue_centers(&self) -> impl Iterator<Item = (PartRef, &RevenueCenter)> {
        self.parts
            .iter()
            .enumerate()
            .filter_map(|(slot, part)| Some((PartRef(slot), part.revenue_center()?)))
    }

    // ===== derived sets =====

    /// Distinct structural endpoints referenced by paths, in path order.
    pub fn nodes(&self) -> &[PartRef] {
        &self.nodes
    }

    /// Nodes that earn revenue: cities, towns and offboards reached by a path.
    pub fn stops(&self) -> &[PartRef] {
        &self.stops
    }

    /// Distinct unrotated edges touched by any path.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The label that constrains upgrades; the last one if several are present.
    pub fn label(&self) -> Option<&str> {
        self.labels().last().map(|label| label.text.as_str())
    }

    /// Distinct terrain tags across all upgrades.
    pub fn terrain(&self) -> Vec<&str> {
        let mut terrain: Vec<&str> = Vec::new();
        for tag in self.upgrades().flat_map(|upgrade| &upgrade.terrains) {
            if !terrain.contains(&tag.as_str()) {
                terrain.push(tag);
            }
        }
        terrain
    }

    /// Revenue each visible revenue center should display.
    pub fn revenue_to_render(&self) -> Vec<(PartRef, Revenue)> {
        self.revenue_centers()
            .filter(|(_, center)| !center.hidden)
            .map(|(part, center)| (part, center.revenue.to_render()))
            .collect()
    }

    pub fn blocks_lay(&self) -> bool {
        self.blocks_lay
    }

    /// True if all track converges on a single unbranched point: a junction,
    /// a lone city, or a lone town reached from more than two edges.
    ///
    /// For a lone town only the edges of paths that touch the town count;
    /// track that bypasses the town does not make it a convergence point.
    pub fn is_lawson(&self) -> bool {
        if self.junction.is_some() {
            return true;
        }

        match (self.cities.as_slice(), self.towns.as_slice()) {
            ([_], []) => true,
            ([], [town]) => {
                let town_edges: EdgeSet = self
                    .raw_paths()
                    .filter(|path| path.touches(*town))
                    .flat_map(|path| path.exits())
                    .collect();
                town_edges.edges().count() > 2
            }
            _ => false,
        }
    }
}
