//! Puzzle rules: tile generation, match resolution, swap legality.
//!
//! - `generator`: rejection-sampled tiles that avoid left/upward runs
//! - `matcher`: run detection and the scan-and-refill resolution loop
//! - `swap`: non-mutating swap trials and deadlock detection
//!
//! Everything here works on a borrowed [`Grid`](crate::grid::Grid); the
//! [`Board`](crate::board::Board) owns the grid and decides when to call in.

pub mod generator;
pub mod matcher;
pub mod swap;

pub use generator::{completes_run, TileGenerator};
pub use matcher::{
    find_runs, has_any_run, run_at, MatchEngine, MatchEvent, Orientation, Resolution, Run,
    RUN_LENGTH,
};
pub use swap::{find_legal_swap, is_deadlocked, legal_swaps, would_create_match, Swap};
