//! Board configuration.
//!
//! `BoardConfig` fixes everything that stays constant for a playthrough:
//! dimensions, palette size, permanent holes, the cascade safety limit and
//! the key under which the best score is persisted.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use super::tile::PLAYABLE_TILES;
use super::Point;

/// Largest number of slots a board may have.
pub const MAX_CELLS: i32 = 1 << 20;

/// Default store key for the best score.
pub const DEFAULT_BEST_SCORE_KEY: &str = "best_score";

/// Board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of columns.
    pub width: i32,

    /// Number of rows.
    pub height: i32,

    /// How many playable kinds are drawn from the palette (2-8).
    pub tile_kinds: usize,

    /// Slots that permanently hold a `Hole`.
    pub holes: Vec<Point>,

    /// Upper bound on full-board passes in one resolution.
    pub max_cascade_passes: usize,

    /// Store key for the persisted best score.
    pub best_score_key: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            tile_kinds: PLAYABLE_TILES.len(),
            holes: Vec::new(),
            max_cascade_passes: 10_000,
            best_score_key: DEFAULT_BEST_SCORE_KEY.to_string(),
        }
    }
}

impl BoardConfig {
    /// Create a config with the given dimensions and defaults elsewhere.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the number of playable kinds.
    #[must_use]
    pub fn with_tile_kinds(mut self, kinds: usize) -> Self {
        self.tile_kinds = kinds;
        self
    }

    /// Add a permanent hole.
    #[must_use]
    pub fn with_hole(mut self, point: Point) -> Self {
        self.holes.push(point);
        self
    }

    /// Set the cascade pass limit.
    #[must_use]
    pub fn with_max_cascade_passes(mut self, passes: usize) -> Self {
        self.max_cascade_passes = passes;
        self
    }

    /// Set the best-score store key.
    #[must_use]
    pub fn with_best_score_key(mut self, key: impl Into<String>) -> Self {
        self.best_score_key = key.into();
        self
    }

    /// Is `point` configured as a hole?
    #[must_use]
    pub fn is_hole(&self, point: Point) -> bool {
        self.holes.contains(&point)
    }

    /// Check the configuration for errors that would make play impossible.
    pub fn validate(&self) -> EngineResult<()> {
        let cells = self.width.checked_mul(self.height);
        if self.width < 1 || self.height < 1 || !cells.is_some_and(|n| n <= MAX_CELLS) {
            return Err(EngineError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.tile_kinds < 2 {
            return Err(EngineError::TooFewTileKinds {
                kinds: self.tile_kinds,
            });
        }
        if self.tile_kinds > PLAYABLE_TILES.len() {
            return Err(EngineError::TooManyTileKinds {
                kinds: self.tile_kinds,
                max: PLAYABLE_TILES.len(),
            });
        }
        if self.max_cascade_passes == 0 {
            return Err(EngineError::ZeroCascadeLimit);
        }
        if let Some(&point) = self
            .holes
            .iter()
            .find(|p| p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height)
        {
            return Err(EngineError::HoleOutOfBounds { point });
        }
        Ok(())
    }
}
