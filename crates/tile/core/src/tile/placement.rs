//! Edge placement for cities and towns.
//!
//! Every city or town reached by track is drawn towards one of the edges its
//! paths leave through. Edges already claimed by track or by a previously
//! placed stop are avoided; ties fall to the lowest-numbered candidate.

use std::collections::BTreeMap;

use crate::config::{EDGE_COUNT, TileConfig};
use crate::edge::Edge;
use crate::part::PartRef;

use super::Tile;

/// Crowding of each edge, in tenths of a track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct EdgeWeights([u32; EDGE_COUNT]);

impl EdgeWeights {
    fn get(&self, edge: Edge) -> u32 {
        self.0[edge.index()]
    }

    /// Marks `edge` as taken and spills a little onto its neighbors.
    fn occupy(&mut self, edge: Edge) {
        self.0[edge.index()] += TileConfig::EDGE_WEIGHT;
        for neighbor in edge.neighbors() {
            self.0[neighbor.index()] += TileConfig::NEIGHBOR_SPILLOVER;
        }
    }
}

impl Tile {
    pub(super) fn compute_city_town_edges(&self) -> BTreeMap<PartRef, Edge> {
        let mut placement = BTreeMap::new();

        // Trackless multi-city tiles (OO, NY...) spread their cities evenly.
        if self.view.paths.is_empty() && self.cities.len() >= 2 {
            let step = EDGE_COUNT / self.cities.len();
            for (i, city) in self.cities.iter().enumerate() {
                placement.insert(*city, Edge::new((i * step) as i64));
            }
            return placement;
        }

        let mut weights = EdgeWeights::default();
        weights.0[0] += TileConfig::LOCATION_NAME_BIAS;

        let mut candidates: Vec<(PartRef, Vec<Edge>)> = Vec::new();
        for path in &self.view.paths {
            let Some(city_town) = path.city_or_town() else {
                continue;
            };
            for edge in path.exits() {
                match candidates.iter_mut().find(|(part, _)| *part == city_town) {
                    Some((_, edges)) => edges.push(edge),
                    None => candidates.push((city_town, vec![edge])),
                }
                weights.occupy(edge);
            }
        }

        for (_, edges) in &mut candidates {
            edges.sort();
        }
        candidates.sort_by(|(_, a), (_, b)| a.cmp(b));

        let mut first_placed = None;
        for (city_town, edges) in candidates {
            let loc = self.part(city_town).and_then(|part| part.loc());
            let Some(edge) = loc.or_else(|| edges.iter().copied().min_by_key(|e| weights.get(*e)))
            else {
                continue;
            };
            weights.occupy(edge);
            first_placed.get_or_insert(edge);
            placement.insert(city_town, edge);
        }

        // A lone trackless stop beside a placed one sits opposite it.
        let pathless: Vec<PartRef> = self
            .city_towns()
            .filter(|part| !self.view.node_paths.contains_key(part))
            .collect();
        let city_town_count = self.cities.len() + self.towns.len();
        if let ([city_town], 2) = (pathless.as_slice(), city_town_count) {
            let loc = self.part(*city_town).and_then(|part| part.loc());
            if let Some(edge) = loc.or_else(|| first_placed.map(Edge::opposite)) {
                placement.insert(*city_town, edge);
            }
        }

        placement
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Color;
    use crate::edge::Edge;
    use crate::part::PartRef;
    use crate::tile::{Tile, TileOptions};

    fn placement(code: &str) -> Vec<(PartRef, Edge)> {
        Tile::from_code("t", Color::Yellow, code, TileOptions::default())
            .unwrap()
            .preferred_city_town_edges()
            .iter()
            .map(|(part, edge)| (*part, *edge))
            .collect()
    }

    #[test]
    fn trackless_cities_spread_evenly() {
        assert_eq!(
            placement("city=revenue:0;city=revenue:0;label=OO"),
            vec![(PartRef(0), Edge::new(0)), (PartRef(1), Edge::new(3))]
        );
        assert_eq!(
            placement("city=revenue:0;city=revenue:0;city=revenue:0"),
            vec![
                (PartRef(0), Edge::new(0)),
                (PartRef(1), Edge::new(2)),
                (PartRef(2), Edge::new(4))
            ]
        );
    }

    #[test]
    fn single_city_avoids_biased_edge_zero() {
        // Edges 0 and 3 both carry track; edge 0 also carries the name bias.
        assert_eq!(
            placement("city=revenue:20;path=a:0,b:_0;path=a:3,b:_0"),
            vec![(PartRef(0), Edge::new(3))]
        );
    }

    #[test]
    fn second_stop_avoids_the_first() {
        // Both cities run to edges 1 and 4 via their own paths. The first city
        // takes 1; 4 is then the less crowded choice for the second.
        assert_eq!(
            placement("city=revenue:20;city=revenue:20;path=a:1,b:_0;path=a:4,b:_0;path=a:1,b:_1;path=a:4,b:_1"),
            vec![(PartRef(0), Edge::new(1)), (PartRef(1), Edge::new(4))]
        );
    }

    #[test]
    fn explicit_loc_wins() {
        assert_eq!(
            placement("city=revenue:20,loc:5;path=a:0,b:_0;path=a:3,b:_0"),
            vec![(PartRef(0), Edge::new(5))]
        );
    }

    #[test]
    fn lone_pathless_stop_sits_opposite() {
        assert_eq!(
            placement("city=revenue:20;town=revenue:10;path=a:1,b:_0"),
            vec![(PartRef(0), Edge::new(1)), (PartRef(1), Edge::new(4))]
        );
    }

    #[test]
    fn placement_follows_rotation() {
        let mut tile = Tile::from_code(
            "t",
            Color::Yellow,
            "town=revenue:10;path=a:1,b:_0",
            TileOptions::default(),
        )
        .unwrap();
        tile.rotate(Some(Edge::new(2)));
        assert_eq!(
            tile.preferred_city_town_edges().get(&PartRef(0)),
            Some(&Edge::new(3))
        );
    }
}
