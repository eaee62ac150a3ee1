//! Tile kinds.
//!
//! The playable kinds form a closed palette. Two sentinel kinds exist for
//! slots that hold no playable tile:
//!
//! - `Blank`: empty slot, only seen between a clear and its refill
//! - `Hole`: permanently unfillable slot, never swapped or refilled
//!
//! Neither sentinel ever matches anything, including itself.

use serde::{Deserialize, Serialize};

/// Kind of tile occupying a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Hole,
    Blank,
    Cobblestone,
    CryingObsidian,
    Dirt,
    Endstone,
    Mud,
    Netherrack,
    Sandstone,
    Prismarine,
}

/// Every playable kind, in palette order.
///
/// A board configured with `n` tile kinds draws from the first `n` entries.
pub const PLAYABLE_TILES: [TileType; 8] = [
    TileType::Cobblestone,
    TileType::CryingObsidian,
    TileType::Dirt,
    TileType::Endstone,
    TileType::Mud,
    TileType::Netherrack,
    TileType::Sandstone,
    TileType::Prismarine,
];

impl TileType {
    /// Playable kind at a palette index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<TileType> {
        PLAYABLE_TILES.get(index).copied()
    }

    /// Palette index, or `None` for sentinels.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        PLAYABLE_TILES.iter().position(|&t| t == self)
    }

    /// Is this a real, matchable tile?
    #[must_use]
    pub fn is_playable(self) -> bool {
        !matches!(self, TileType::Hole | TileType::Blank)
    }

    /// Can this tile take part in a swap?
    #[must_use]
    pub fn is_movable(self) -> bool {
        self.is_playable()
    }

    /// Two tiles match when they are the same playable kind.
    ///
    /// ```
    /// use rust_match3::TileType;
    ///
    /// assert!(TileType::Mud.matches(TileType::Mud));
    /// assert!(!TileType::Mud.matches(TileType::Dirt));
    /// assert!(!TileType::Hole.matches(TileType::Hole));
    /// ```
    #[must_use]
    pub fn matches(self, other: TileType) -> bool {
        self.is_playable() && self == other
    }

    /// Single-character glyph for debug rendering.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            TileType::Hole => '#',
            TileType::Blank => '.',
            TileType::Cobblestone => 'C',
            TileType::CryingObsidian => 'O',
            TileType::Dirt => 'D',
            TileType::Endstone => 'E',
            TileType::Mud => 'M',
            TileType::Netherrack => 'N',
            TileType::Sandstone => 'S',
            TileType::Prismarine => 'P',
        }
    }

    /// Inverse of [`TileType::glyph`].
    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<TileType> {
        [TileType::Hole, TileType::Blank]
            .into_iter()
            .chain(PLAYABLE_TILES)
            .find(|t| t.glyph() == glyph)
    }
}

impl std::fmt::Display for TileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
