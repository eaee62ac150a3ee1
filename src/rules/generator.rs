//! Tile generation by rejection sampling.
//!
//! A candidate is rejected while it would complete a run with the two tiles
//! directly to its left or directly above it. Only those two directions are
//! inspected: generation walks the board in scan order, so tiles to the right
//! and below are not placed yet. Runs that form later are left for the match
//! engine's stabilization pass.

use crate::core::{EngineError, EngineResult, Point, TileSource, TileType, PLAYABLE_TILES};
use crate::grid::Grid;

/// Draws playable tiles that do not immediately complete a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileGenerator {
    kinds: usize,
}

impl TileGenerator {
    /// Create a generator drawing from the first `kinds` palette entries.
    ///
    /// Fewer than two kinds would make rejection sampling loop forever, so
    /// that is refused up front.
    pub fn new(kinds: usize) -> EngineResult<Self> {
        if kinds < 2 {
            return Err(EngineError::TooFewTileKinds { kinds });
        }
        if kinds > PLAYABLE_TILES.len() {
            return Err(EngineError::TooManyTileKinds {
                kinds,
                max: PLAYABLE_TILES.len(),
            });
        }
        Ok(Self { kinds })
    }

    /// Number of kinds this generator draws from.
    #[must_use]
    pub fn kinds(&self) -> usize {
        self.kinds
    }

    /// Draw a tile for `p` that does not complete a left or upward run.
    pub fn generate(&self, grid: &Grid, p: Point, rng: &mut impl TileSource) -> TileType {
        loop {
            let candidate = PLAYABLE_TILES[rng.next_index(self.kinds)];
            if !completes_run(grid, p, candidate) {
                return candidate;
            }
        }
    }
}

/// Would placing `candidate` at `p` complete a run with the two tiles to its
/// left or the two tiles above it?
#[must_use]
pub fn completes_run(grid: &Grid, p: Point, candidate: TileType) -> bool {
    let same = |q: Point| grid.get(q).is_some_and(|t| candidate.matches(t));

    let left = same(p + Point::LEFT) && same(p + Point::LEFT * 2);
    let above = same(p + Point::DOWN) && same(p + Point::DOWN * 2);
    left || above
}
