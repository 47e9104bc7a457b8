//! Reservations, lay blockers and borders: the mutable claims on a placed tile.

use crate::color::Color;
use crate::config::ReservationBlocks;
use crate::edge::Edge;
use crate::entity::{Entity, EntityId};
use crate::part::{Blocker, Border, Part, PartRef};

use super::{Tile, TileError};

/// Where a reservation ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReservationSlot {
    City { city: usize, slot: usize },
    /// No city slot was available; the tile itself holds the claim.
    Tile,
}

impl Tile {
    // ===== reservations =====

    /// Reserves a token slot for `entity`.
    ///
    /// With a single city and no explicit `city`, that city is used. Without
    /// an explicit `slot`, the city's first open slot is taken. Tiles without
    /// cities, and full cities, hold the reservation at tile level.
    ///
    /// # Errors
    ///
    /// `CityOutOfRange` or `SlotOutOfRange` if an explicit index does not exist.
    pub fn add_reservation(
        &mut self,
        entity: Entity,
        city: Option<usize>,
        slot: Option<usize>,
    ) -> Result<ReservationSlot, TileError> {
        let city = city.or((self.cities.len() == 1).then_some(0));

        let placed = match city {
            Some(city) => self.reserve_city_slot(entity, city, slot)?,
            None => ReservationSlot::Tile,
        };
        if placed == ReservationSlot::Tile {
            self.reservations.push(entity);
        }

        tracing::debug!(tile = %self.name, entity = %entity.id, ?placed, "added reservation");
        Ok(placed)
    }

    fn reserve_city_slot(
        &mut self,
        entity: Entity,
        city: usize,
        slot: Option<usize>,
    ) -> Result<ReservationSlot, TileError> {
        let cities = self.cities.len();
        let target = self
            .cities
            .get(city)
            .and_then(|part| self.parts.get_mut(part.0))
            .and_then(Part::as_city_mut)
            .ok_or(TileError::CityOutOfRange { city, cities })?;

        let Some(slot) = slot.or_else(|| target.open_slot()) else {
            return Ok(ReservationSlot::Tile);
        };
        if !target.reserve(entity, slot) {
            return Err(TileError::SlotOutOfRange {
                city,
                slot,
                slots: target.slots,
            });
        }
        Ok(ReservationSlot::City { city, slot })
    }

    /// Reservations held by the tile itself, outside any city.
    pub fn reservations(&self) -> &[Entity] {
        &self.reservations
    }

    /// True if `id` holds or answers for any reservation on the tile.
    pub fn reserved_by(&self, id: EntityId) -> bool {
        self.reservations.iter().any(|entity| entity.answers_to(id))
            || self.cities().any(|city| city.reserved_by(id))
    }

    /// Whether tile-level reservations keep `id` from placing a token here.
    pub fn token_blocked_by_reservation(&self, id: EntityId) -> bool {
        if self.reservations.is_empty() {
            return false;
        }

        let strict = match self.reservation_blocks {
            ReservationBlocks::Always => true,
            ReservationBlocks::YellowOnly => self.color == Color::Yellow,
            ReservationBlocks::Never => false,
        };
        if strict {
            return !self.reservations.iter().any(|entity| entity.answers_to(id));
        }

        let others = self
            .reservations
            .iter()
            .filter(|entity| !entity.answers_to(id))
            .count();
        let open: usize = self.cities().map(|city| city.available_slots()).sum();
        others >= open
    }

    // ===== blockers =====

    /// Attaches a lay blocker owned by `entity`.
    pub fn add_blocker(&mut self, entity: Entity) -> PartRef {
        let mut blocker = Blocker::new(entity);
        blocker.index = self.blockers.len();

        let part = PartRef(self.parts.len());
        self.parts.push(Part::Blocker(blocker));
        self.blockers.push(part);
        part
    }

    pub fn blockers(&self) -> impl Iterator<Item = &Entity> {
        self.blockers
            .iter()
            .filter_map(|part| match self.parts.get(part.0)? {
                Part::Blocker(blocker) => Some(&blocker.entity),
                _ => None,
            })
    }

    pub fn is_blocked_by(&self, id: EntityId) -> bool {
        self.blockers().any(|entity| entity.answers_to(id))
    }

    // ===== borders =====

    /// Borders still in play.
    pub fn borders(&self) -> impl Iterator<Item = &Border> {
        self.typed(&self.borders, Part::as_border)
    }

    /// Every border the tile was built with, removed or not.
    pub fn original_borders(&self) -> impl Iterator<Item = &Border> {
        self.typed(&self.original_borders, Part::as_border)
    }

    /// Takes the border on `edge` out of play. Returns false if none was there.
    pub fn remove_border(&mut self, edge: Edge) -> bool {
        let Some(position) = self.borders.iter().position(|part| {
            self.parts
                .get(part.0)
                .and_then(Part::as_border)
                .is_some_and(|border| border.edge == edge)
        }) else {
            return false;
        };
        self.borders.remove(position);
        true
    }

    /// Puts removed borders back, optionally only those on `edges`.
    ///
    /// Returns the borders restored by this call; restoring twice restores
    /// nothing the second time.
    pub fn restore_borders(&mut self, edges: Option<&[Edge]>) -> Vec<Border> {
        let mut restored = Vec::new();

        for &part in &self.original_borders {
            let Some(border) = self.parts.get(part.0).and_then(Part::as_border) else {
                continue;
            };
            if self.borders.contains(&part) {
                continue;
            }
            if edges.is_some_and(|edges| !edges.contains(&border.edge)) {
                continue;
            }
            restored.push(border.clone());
            self.borders.push(part);
        }

        self.borders.sort();
        if !restored.is_empty() {
            tracing::debug!(tile = %self.name, count = restored.len(), "restored borders");
        }
        restored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileOptions;

    fn tile(color: Color, code: &str, blocks: ReservationBlocks) -> Tile {
        let options = TileOptions::default().with_reservation_blocks(blocks);
        Tile::from_code("t", color, code, options).unwrap()
    }

    fn corp(id: u32) -> Entity {
        Entity::new(EntityId(id))
    }

    #[test]
    fn single_city_takes_reservation_by_default() {
        let mut tile = tile(Color::Yellow, "city=revenue:20,slots:2", ReservationBlocks::Never);
        let placed = tile.add_reservation(corp(1), None, None).unwrap();
        assert_eq!(placed, ReservationSlot::City { city: 0, slot: 0 });
        assert!(tile.reservations().is_empty());
        assert!(tile.reserved_by(EntityId(1)));
        assert_eq!(tile.cities().next().unwrap().available_slots(), 1);
    }

    #[test]
    fn full_or_missing_city_falls_back_to_tile() {
        let mut tile = tile(Color::Yellow, "city=revenue:20", ReservationBlocks::Never);
        tile.add_reservation(corp(1), None, None).unwrap();
        let placed = tile.add_reservation(corp(2), None, None).unwrap();
        assert_eq!(placed, ReservationSlot::Tile);
        assert_eq!(tile.reservations(), &[corp(2)]);

        let mut plain = Tile::from_code("x", Color::Yellow, "path=a:0,b:3", TileOptions::default())
            .unwrap();
        assert_eq!(plain.add_reservation(corp(3), None, None), Ok(ReservationSlot::Tile));
    }

    #[test]
    fn explicit_indices_are_checked() {
        let mut tile = tile(Color::Green, "city=revenue:20;city=revenue:20", ReservationBlocks::Never);
        assert_eq!(
            tile.add_reservation(corp(1), Some(2), None),
            Err(TileError::CityOutOfRange { city: 2, cities: 2 })
        );
        assert_eq!(
            tile.add_reservation(corp(1), Some(1), Some(3)),
            Err(TileError::SlotOutOfRange { city: 1, slot: 3, slots: 1 })
        );
        assert_eq!(
            tile.add_reservation(corp(1), Some(1), Some(0)),
            Ok(ReservationSlot::City { city: 1, slot: 0 })
        );
        // Two cities and no explicit choice: the tile holds it.
        assert_eq!(tile.add_reservation(corp(2), None, None), Ok(ReservationSlot::Tile));
    }

    #[test]
    fn lenient_policy_blocks_once_slots_run_out() {
        let mut tile = tile(Color::Yellow, "city=revenue:20,slots:2", ReservationBlocks::Never);
        assert!(!tile.token_blocked_by_reservation(EntityId(9)));

        tile.add_reservation(corp(1), None, Some(0)).unwrap();
        tile.reservations.push(corp(2));
        // One open slot, one foreign tile-level reservation.
        assert!(tile.token_blocked_by_reservation(EntityId(9)));
        assert!(!tile.token_blocked_by_reservation(EntityId(2)));
    }

    #[test]
    fn strict_policy_blocks_everyone_else() {
        let mut tile = tile(Color::Yellow, "city=revenue:20,slots:3", ReservationBlocks::YellowOnly);
        tile.reservations.push(corp(2).with_owner(EntityId(7)));
        assert!(tile.token_blocked_by_reservation(EntityId(9)));
        assert!(!tile.token_blocked_by_reservation(EntityId(7)));

        let mut green = self::tile(Color::Green, "city=revenue:20,slots:3", ReservationBlocks::YellowOnly);
        green.reservations.push(corp(2));
        assert!(!green.token_blocked_by_reservation(EntityId(9)));
    }

    #[test]
    fn blockers_are_tracked_as_parts() {
        let mut tile = tile(Color::White, "", ReservationBlocks::Never);
        let part = tile.add_blocker(corp(4).with_owner(EntityId(1)));
        assert!(matches!(tile.part(part), Some(Part::Blocker(_))));
        assert!(tile.is_blocked_by(EntityId(4)));
        assert!(tile.is_blocked_by(EntityId(1)));
        assert!(!tile.is_blocked_by(EntityId(2)));
    }

    #[test]
    fn borders_restore_once() {
        let mut tile = tile(
            Color::White,
            "border=edge:0,type:water,cost:40;border=edge:3",
            ReservationBlocks::Never,
        );
        assert!(tile.remove_border(Edge::new(0)));
        assert!(tile.remove_border(Edge::new(3)));
        assert!(!tile.remove_border(Edge::new(3)));
        assert_eq!(tile.borders().count(), 0);

        let restored = tile.restore_borders(Some(&[Edge::new(3)]));
        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].edge, Edge::new(3));

        let restored = tile.restore_borders(None);
        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].cost, Some(40));
        assert!(tile.restore_borders(None).is_empty());

        let edges: Vec<_> = tile.borders().map(|border| border.edge).collect();
        assert_eq!(edges, vec![Edge::new(0), Edge::new(3)]);
        assert_eq!(tile.original_borders().count(), 2);
    }
}
