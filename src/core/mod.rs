//! Core value types: points, tiles, random sources, configuration, errors.
//!
//! Nothing in here knows about grids or rules; the higher modules build on
//! these types.

pub mod point;
pub mod tile;
pub mod rng;
pub mod config;
pub mod error;

pub use point::Point;
pub use tile::{TileType, PLAYABLE_TILES};
pub use rng::{GameRng, ScriptedSource, TileSource};
pub use config::{BoardConfig, DEFAULT_BEST_SCORE_KEY, MAX_CELLS};
pub use error::{EngineError, EngineResult, StoreError};
