//! Results reported by the board to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::rules::Resolution;

/// Externally visible board state.
///
/// Resolution is synchronous and never observable, so there is no
/// "resolving" phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Playing,
    /// Terminal for the session; only `initialize` leaves it.
    GameOver,
}

/// Why a swap request was turned down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapRejection {
    /// The points are not one step apart on a single axis.
    NotAdjacent,
    /// One of the tiles is a hole or blank.
    Immovable,
    /// The exchange would not create a run anywhere.
    NoMatch,
    /// The session is over.
    GameOver,
}

/// Terminal score pair, emitted once when the board deadlocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverReport {
    pub final_score: u32,
    pub best_score: u32,
    /// The session beat the previous best.
    pub new_best: bool,
    /// The new best reached the store. Always false without a new best.
    pub persisted: bool,
}

/// Result of [`Board::try_swap`](super::Board::try_swap).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOutcome {
    /// Set when the swap was refused; the grid and score are untouched.
    pub rejection: Option<SwapRejection>,
    /// Clears and refills triggered by an applied swap.
    pub resolution: Resolution,
    /// Set when this attempt ended the session.
    pub game_over: Option<GameOverReport>,
}

impl SwapOutcome {
    pub(crate) fn applied(resolution: Resolution, game_over: Option<GameOverReport>) -> Self {
        Self {
            rejection: None,
            resolution,
            game_over,
        }
    }

    pub(crate) fn rejected(rejection: SwapRejection, game_over: Option<GameOverReport>) -> Self {
        Self {
            rejection: Some(rejection),
            resolution: Resolution::default(),
            game_over,
        }
    }

    /// Was the swap committed?
    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.rejection.is_none()
    }

    /// Match events fired by this swap (0 when rejected).
    #[must_use]
    pub fn match_events(&self) -> usize {
        self.resolution.event_count()
    }
}
