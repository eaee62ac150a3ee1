//! Error types for the engine and its persistence layer.
//!
//! Rejected swaps are not errors; they come back as ordinary
//! [`SwapOutcome`](crate::board::SwapOutcome) values. Errors here are either
//! programming errors (bad coordinates), configuration errors found at
//! construction time, or persistence failures.

use thiserror::Error;

use super::Point;

/// Errors raised by grid access, configuration and resolution.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Grid access with a coordinate outside the board.
    #[error("point {point} is outside the {width}x{height} grid")]
    OutOfBounds { point: Point, width: i32, height: i32 },

    /// Board dimensions must be at least 1 and within `MAX_CELLS` slots.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// Rejection sampling cannot terminate with fewer than two kinds.
    #[error("at least 2 tile kinds are required, got {kinds}")]
    TooFewTileKinds { kinds: usize },

    /// More kinds requested than the palette provides.
    #[error("{kinds} tile kinds requested, palette has {max}")]
    TooManyTileKinds { kinds: usize, max: usize },

    /// A configured hole lies outside the board.
    #[error("hole {point} is outside the board")]
    HoleOutOfBounds { point: Point },

    /// The cascade limit must allow at least one clearing pass.
    #[error("max_cascade_passes must be at least 1")]
    ZeroCascadeLimit,

    /// Match resolution kept cascading past the configured pass limit.
    #[error("match resolution did not stabilize after {passes} passes")]
    CascadeLimit { passes: usize },
}

/// Errors raised by a [`ScoreStore`](crate::storage::ScoreStore).
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying I/O failure.
    #[error("score store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded.
    #[error("score store encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
