//! The board controller: the engine's public surface.
//!
//! A [`Board`] owns the grid, the random source and the score store for one
//! session. `new`/`initialize` and `try_swap` are the only mutating entry
//! points, and each runs to completion (cascades included) before returning.
//! Intermediate grids are never observable.

use tracing::{debug, info, trace, warn};

use crate::core::{BoardConfig, EngineResult, GameRng, Point, TileSource, TileType};
use crate::grid::Grid;
use crate::rules::{find_legal_swap, would_create_match, MatchEngine, Resolution, Swap};
use crate::storage::ScoreStore;

use super::outcome::{GameOverReport, Phase, SwapOutcome, SwapRejection};

/// A match-3 session.
///
/// Generic over the best-score store `S` and the tile source `R`.
///
/// ```
/// use rust_match3::{Board, BoardConfig, GameRng, MemoryStore};
/// use rust_match3::rules::has_any_run;
///
/// let mut board = Board::new(BoardConfig::new(6, 6), MemoryStore::new(), GameRng::new(7)).unwrap();
/// assert!(!has_any_run(board.grid()));
///
/// if let Some(hint) = board.hint() {
///     let outcome = board.try_swap(hint.a, hint.b).unwrap();
///     assert!(outcome.is_applied());
///     assert!(!has_any_run(board.grid()));
/// }
/// ```
#[derive(Debug)]
pub struct Board<S, R = GameRng> {
    config: BoardConfig,
    engine: MatchEngine,
    grid: Grid,
    rng: R,
    store: S,
    score: u32,
    best_score: u32,
    phase: Phase,
    game_over: Option<GameOverReport>,
}

impl<S: ScoreStore, R: TileSource> Board<S, R> {
    /// Validate `config`, then build and stabilize a fresh board.
    pub fn new(config: BoardConfig, store: S, rng: R) -> EngineResult<Self> {
        config.validate()?;
        let engine = MatchEngine::from_config(&config)?;
        let grid = Grid::new(config.width, config.height, TileType::Blank);

        let mut board = Self {
            config,
            engine,
            grid,
            rng,
            store,
            score: 0,
            best_score: 0,
            phase: Phase::Playing,
            game_over: None,
        };
        board.initialize()?;
        Ok(board)
    }

    /// Adopt an existing grid as-is, without generation or stabilization.
    ///
    /// The config's dimensions and holes are taken from the grid. Used for
    /// fixtures and for restoring saved boards.
    pub fn from_grid(mut config: BoardConfig, grid: Grid, store: S, rng: R) -> EngineResult<Self> {
        config.width = grid.width();
        config.height = grid.height();
        config.holes = grid
            .iter()
            .filter(|&(_, t)| t == TileType::Hole)
            .map(|(p, _)| p)
            .collect();
        config.validate()?;
        let engine = MatchEngine::from_config(&config)?;

        let mut board = Self {
            config,
            engine,
            grid,
            rng,
            store,
            score: 0,
            best_score: 0,
            phase: Phase::Playing,
            game_over: None,
        };
        board.best_score = board.load_best_score();
        Ok(board)
    }

    /// Start (or restart) the session.
    ///
    /// Resets the score, reloads the best score, fills every slot in scan
    /// order and runs one stabilization pass. Matches cleared by that pass
    /// count toward the session score.
    pub fn initialize(&mut self) -> EngineResult<Resolution> {
        let mut grid = Grid::new(self.config.width, self.config.height, TileType::Blank);
        for p in grid.positions().collect::<Vec<_>>() {
            let tile = if self.config.is_hole(p) {
                TileType::Hole
            } else {
                self.engine.generator().generate(&grid, p, &mut self.rng)
            };
            grid.set(p, tile)?;
        }
        let resolution = self.engine.resolve_all(&mut grid, &mut self.rng)?;

        self.grid = grid;
        self.score = resolution.event_count() as u32;
        self.phase = Phase::Playing;
        self.game_over = None;
        self.best_score = self.load_best_score();

        info!(
            width = self.config.width,
            height = self.config.height,
            score = self.score,
            best_score = self.best_score,
            "board initialized"
        );
        Ok(resolution)
    }

    /// Ask to exchange the tiles at `a` and `b`.
    ///
    /// Fails for out-of-bounds points, and with `CascadeLimit` when the
    /// resolution does not settle; the board is then left exactly as it was
    /// before the call. Illegal swaps come back as a rejected outcome with
    /// the grid and score untouched. Any attempt
    /// outside `GameOver` ends with a deadlock check; a deadlocked board
    /// switches to `GameOver` and the outcome carries the final report.
    pub fn try_swap(&mut self, a: Point, b: Point) -> EngineResult<SwapOutcome> {
        let ta = self.grid.tile(a)?;
        let tb = self.grid.tile(b)?;

        if self.phase == Phase::GameOver {
            return Ok(SwapOutcome::rejected(SwapRejection::GameOver, None));
        }

        let rejection = if !self.grid.are_neighbors(a, b) {
            SwapRejection::NotAdjacent
        } else if !ta.is_movable() || !tb.is_movable() {
            SwapRejection::Immovable
        } else if !would_create_match(&self.grid, a, b) {
            SwapRejection::NoMatch
        } else {
            return self.commit_swap(a, b);
        };

        trace!(%a, %b, ?rejection, "swap rejected");
        let game_over = self.check_deadlock();
        Ok(SwapOutcome::rejected(rejection, game_over))
    }

    fn commit_swap(&mut self, a: Point, b: Point) -> EngineResult<SwapOutcome> {
        let mut grid = self.grid.clone();
        grid.swap(a, b)?;
        let resolution = self.engine.resolve_all(&mut grid, &mut self.rng)?;
        self.grid = grid;
        self.score = self.score.saturating_add(resolution.event_count() as u32);

        debug!(
            %a,
            %b,
            events = resolution.event_count(),
            score = self.score,
            "swap applied"
        );
        let game_over = self.check_deadlock();
        Ok(SwapOutcome::applied(resolution, game_over))
    }

    fn check_deadlock(&mut self) -> Option<GameOverReport> {
        if self.has_legal_move() {
            return None;
        }
        Some(self.finish())
    }

    fn finish(&mut self) -> GameOverReport {
        self.phase = Phase::GameOver;

        let new_best = self.score > self.best_score;
        let mut persisted = false;
        if new_best {
            match self
                .store
                .set_int(&self.config.best_score_key, i64::from(self.score))
            {
                Ok(()) => persisted = true,
                Err(err) => warn!(error = %err, "failed to persist best score"),
            }
            self.best_score = self.score;
        }

        let report = GameOverReport {
            final_score: self.score,
            best_score: self.best_score,
            new_best,
            persisted,
        };
        info!(
            final_score = report.final_score,
            best_score = report.best_score,
            new_best,
            "game over"
        );
        self.game_over = Some(report);
        report
    }

    fn load_best_score(&self) -> u32 {
        let fallback = i64::from(self.best_score);
        match self.store.get_int(&self.config.best_score_key, fallback) {
            Ok(value) => u32::try_from(value.max(0)).unwrap_or(u32::MAX),
            Err(err) => {
                warn!(error = %err, "failed to load best score, keeping {}", self.best_score);
                self.best_score
            }
        }
    }

    /// Current tiles.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Session score: one point per match event.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best score known to this session.
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Terminal report, once the session has ended.
    #[must_use]
    pub fn game_over(&self) -> Option<GameOverReport> {
        self.game_over
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The best-score store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Is there at least one legal swap on the board?
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        self.hint().is_some()
    }

    /// A legal swap, if one exists.
    #[must_use]
    pub fn hint(&self) -> Option<Swap> {
        find_legal_swap(&self.grid)
    }
}
