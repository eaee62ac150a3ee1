//! # rust-match3
//!
//! A deterministic rules engine for tile-matching (match-3) puzzles.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The engine never renders. Every mutation comes back as a
//!    structured report (`Resolution`, `SwapOutcome`, `GameOverReport`) that a
//!    presentation layer can replay.
//!
//! 2. **Deterministic**: All randomness flows through a `TileSource`. The same
//!    seed and the same swaps produce the same board.
//!
//! 3. **Explicit Ownership**: A `Board` owns its grid, random source and score
//!    store. There is no global instance; the composition root creates the
//!    board and lends it to the input layer.
//!
//! ## Rules
//!
//! - Swaps exchange two orthogonally adjacent tiles and are legal only if
//!   the resulting board contains a run of three anywhere
//! - Runs are cleared and refilled in place, never by gravity
//! - Each cleared run scores one point
//! - The session ends when no adjacent swap can create a run
//!
//! ## Modules
//!
//! - `core`: Points, tile kinds, random sources, configuration, errors
//! - `grid`: Bounds-checked tile storage
//! - `rules`: Tile generation, match resolution, swap validation
//! - `board`: The session controller
//! - `input`: Click-to-swap selection helper
//! - `storage`: Best-score persistence
//!
//! ## Example
//!
//! ```
//! use rust_match3::{Board, BoardConfig, GameRng, MemoryStore, Point};
//!
//! let config = BoardConfig::new(8, 8).with_tile_kinds(6);
//! let mut board = Board::new(config, MemoryStore::new(), GameRng::new(42)).unwrap();
//!
//! // Diagonal swaps are never legal
//! let outcome = board.try_swap(Point::new(0, 0), Point::new(1, 1)).unwrap();
//! assert!(!outcome.is_applied());
//! ```

pub mod core;
pub mod grid;
pub mod rules;
pub mod board;
pub mod input;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, EngineError, EngineResult, GameRng, Point, ScriptedSource, StoreError,
    TileSource, TileType, PLAYABLE_TILES,
};

pub use crate::grid::Grid;

pub use crate::rules::{
    MatchEngine, MatchEvent, Orientation, Resolution, Run, Swap, TileGenerator,
};

pub use crate::board::{Board, GameOverReport, Phase, SwapOutcome, SwapRejection};

pub use crate::input::Selection;

pub use crate::storage::{FileStore, MemoryStore, ScoreStore};
