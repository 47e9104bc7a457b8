/// Tile color tier. Declaration order is the upgrade order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Color {
    White,
    Yellow,
    Green,
    Brown,
    Gray,
    Red,
    Blue,
}

impl Color {
    /// Position in the upgrade order, `White` being 0.
    pub const fn tier(self) -> u8 {
        self as u8
    }

    /// The color one step up, if any.
    pub fn next(self) -> Option<Self> {
        use Color::*;
        match self {
            White => Some(Yellow),
            Yellow => Some(Green),
            Green => Some(Brown),
            Brown => Some(Gray),
            Gray => Some(Red),
            Red => Some(Blue),
            Blue => None,
        }
    }

    /// True if `other` sits exactly one tier above `self`.
    pub fn precedes(self, other: Self) -> bool {
        self.next() == Some(other)
    }
}
