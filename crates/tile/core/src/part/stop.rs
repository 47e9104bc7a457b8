use crate::config::EDGE_COUNT;
use crate::edge::Edge;
use crate::entity::{Entity, EntityId};

use super::revenue::RevenueCenter;

/// A city: a revenue center with token slots that entities can reserve.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub index: usize,
    pub center: RevenueCenter,
    pub slots: usize,
    /// Explicit edge placement, overriding the edge heuristic.
    pub loc: Option<Edge>,
    reservations: Vec<Option<Entity>>,
}

impl City {
    pub const DEFAULT_SLOTS: usize = 1;
    /// One token slot per hex edge at most.
    pub const MAX_SLOTS: usize = EDGE_COUNT;

    /// Builds a city; `slots` is clamped to [`MAX_SLOTS`](Self::MAX_SLOTS).
    pub fn new(center: RevenueCenter, slots: usize) -> Self {
        let slots = slots.min(Self::MAX_SLOTS);
        Self {
            index: 0,
            center,
            slots,
            loc: None,
            reservations: vec![None; slots],
        }
    }

    #[must_use]
    pub fn with_loc(mut self, loc: Edge) -> Self {
        self.loc = Some(loc);
        self
    }

    /// Reservation held on each slot, `None` for open slots.
    pub fn reservations(&self) -> &[Option<Entity>] {
        &self.reservations
    }

    /// Number of slots without a reservation.
    pub fn available_slots(&self) -> usize {
        self.reservations.iter().filter(|slot| slot.is_none()).count()
    }

    /// First slot nobody has reserved.
    pub fn open_slot(&self) -> Option<usize> {
        self.reservations.iter().position(Option::is_none)
    }

    pub fn reserved_by(&self, id: EntityId) -> bool {
        self.reservations
            .iter()
            .flatten()
            .any(|entity| entity.answers_to(id))
    }

    /// Places `entity` on `slot`, replacing any previous claim. Returns false if
    /// the slot does not exist.
    pub fn reserve(&mut self, entity: Entity, slot: usize) -> bool {
        match self.reservations.get_mut(slot) {
            Some(held) => {
                *held = Some(entity);
                true
            }
            None => false,
        }
    }
}

/// A town (dit): a revenue center without token slots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Town {
    pub index: usize,
    pub center: RevenueCenter,
    pub loc: Option<Edge>,
}

impl Town {
    pub fn new(center: RevenueCenter) -> Self {
        Self {
            index: 0,
            center,
            loc: None,
        }
    }

    #[must_use]
    pub fn with_loc(mut self, loc: Edge) -> Self {
        self.loc = Some(loc);
        self
    }
}

/// An off-board destination, usually a red hex on the map edge.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offboard {
    pub index: usize,
    pub center: RevenueCenter,
}

impl Offboard {
    pub fn new(center: RevenueCenter) -> Self {
        Self { index: 0, center }
    }
}
