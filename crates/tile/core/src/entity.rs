use std::fmt;

/// Identifier of a game entity (corporation, private company, player) owned by
/// the rules engine. Tiles only ever hold these as references.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An entity holding a claim on a tile: a reservation or a lay blocker.
///
/// Private companies carry their owner so that a claim made by a company also
/// counts for the corporation owning it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: EntityId,
    pub owner: Option<EntityId>,
}

impl Entity {
    pub const fn new(id: EntityId) -> Self {
        Self { id, owner: None }
    }

    #[must_use]
    pub const fn with_owner(mut self, owner: EntityId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// True if `id` is this entity or its owner.
    pub fn answers_to(&self, id: EntityId) -> bool {
        self.id == id || self.owner == Some(id)
    }
}

impl From<EntityId> for Entity {
    fn from(id: EntityId) -> Self {
        Self::new(id)
    }
}
