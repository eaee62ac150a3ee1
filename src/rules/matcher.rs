//! Run detection and scan-and-refill resolution.
//!
//! ## Algorithm
//!
//! A resolution repeats full passes over the board in scan order (x outer,
//! y inner). At each slot the horizontal window `(x..=x+2, y)` is checked,
//! then the vertical window `(x, y..=y+2)`. A window whose three tiles are
//! the same playable kind is a match event:
//!
//! 1. The three slots are cleared to `Blank`
//! 2. Each slot is refilled in order by the generator, so later refills see
//!    earlier ones as context
//! 3. The pass carries on from the next check
//!
//! Passes repeat until one finds nothing. Nothing falls: cleared slots are
//! replaced where they stand. Refills are fresh random draws and can form new
//! runs, which a later check or pass picks up (a cascade).
//!
//! Each event scores exactly one point regardless of how long the visible
//! run was; only length-3 windows are ever evaluated.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{BoardConfig, EngineError, EngineResult, Point, TileSource, TileType};
use crate::grid::Grid;

use super::generator::TileGenerator;

/// Length of a matching window.
pub const RUN_LENGTH: i32 = 3;

/// Direction of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Along a row, increasing x.
    Horizontal,
    /// Along a column, increasing y.
    Vertical,
}

impl Orientation {
    /// Step between consecutive cells of a run.
    #[must_use]
    pub fn step(self) -> Point {
        match self {
            Orientation::Horizontal => Point::RIGHT,
            Orientation::Vertical => Point::UP,
        }
    }
}

/// Three aligned tiles of the same playable kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    /// Leftmost or topmost cell.
    pub origin: Point,
    pub orientation: Orientation,
    pub kind: TileType,
}

impl Run {
    /// The three cells, starting at the origin.
    #[must_use]
    pub fn cells(&self) -> [Point; 3] {
        let step = self.orientation.step();
        [self.origin, self.origin + step, self.origin + step * 2]
    }

    /// Does this run cover `p`?
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.cells().contains(&p)
    }
}

/// One cleared-and-refilled run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    /// Zero-based pass in which the run was found.
    pub pass: usize,
    /// The run that was cleared.
    pub run: Run,
    /// New tiles, in refill order.
    pub refills: SmallVec<[(Point, TileType); 3]>,
}

/// Structured report of a full resolution.
///
/// The presentation layer replays `events` in order to animate clears and
/// refills; the engine itself never touches visual state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Match events in the order they fired.
    pub events: Vec<MatchEvent>,
    /// Passes that cleared at least one run. The final clean pass is not
    /// counted, so a board that was already stable reports 0.
    pub passes: usize,
}

impl Resolution {
    /// Number of match events, i.e. points scored.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// True if nothing was cleared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Every cleared cell with the kind it held, in event order.
    pub fn cleared(&self) -> impl Iterator<Item = (Point, TileType)> + '_ {
        self.events
            .iter()
            .flat_map(|e| e.run.cells().into_iter().map(move |p| (p, e.run.kind)))
    }

    /// Every refill, in event order.
    pub fn refills(&self) -> impl Iterator<Item = (Point, TileType)> + '_ {
        self.events.iter().flat_map(|e| e.refills.iter().copied())
    }
}

/// The run starting at `p` in `orientation`, if the window matches.
///
/// Windows that would leave the board are never runs.
#[must_use]
pub fn run_at(grid: &Grid, p: Point, orientation: Orientation) -> Option<Run> {
    run_at_with(p, orientation, |q| grid.get(q))
}

/// Window check over an arbitrary tile lookup.
///
/// The swap validator uses this to scan a board as if two cells were
/// exchanged, without touching the grid.
pub(crate) fn run_at_with(
    p: Point,
    orientation: Orientation,
    lookup: impl Fn(Point) -> Option<TileType>,
) -> Option<Run> {
    let step = orientation.step();
    let kind = lookup(p)?;
    if !kind.is_playable() {
        return None;
    }
    for i in 1..RUN_LENGTH {
        if !kind.matches(lookup(p + step * i)?) {
            return None;
        }
    }
    Some(Run {
        origin: p,
        orientation,
        kind,
    })
}

/// Does the board contain any matching window? Never mutates.
#[must_use]
pub fn has_any_run(grid: &Grid) -> bool {
    grid.positions().any(|p| {
        run_at(grid, p, Orientation::Horizontal).is_some()
            || run_at(grid, p, Orientation::Vertical).is_some()
    })
}

/// Every matching window on the board, in scan order. Never mutates.
///
/// Overlapping windows are all reported: a run of four shows up as two.
#[must_use]
pub fn find_runs(grid: &Grid) -> Vec<Run> {
    grid.positions()
        .flat_map(move |p| {
            [Orientation::Horizontal, Orientation::Vertical]
                .into_iter()
                .filter_map(move |o| run_at(grid, p, o))
        })
        .collect()
}

/// Clears runs and refills them in place until the board is stable.
#[derive(Clone, Copy, Debug)]
pub struct MatchEngine {
    generator: TileGenerator,
    max_passes: usize,
}

impl MatchEngine {
    /// Create an engine refilling through `generator`, giving up after
    /// `max_passes` clearing passes.
    pub fn new(generator: TileGenerator, max_passes: usize) -> Self {
        Self {
            generator,
            max_passes,
        }
    }

    /// Create an engine from a board configuration.
    pub fn from_config(config: &BoardConfig) -> EngineResult<Self> {
        Ok(Self::new(
            TileGenerator::new(config.tile_kinds)?,
            config.max_cascade_passes,
        ))
    }

    /// The generator used for refills.
    #[must_use]
    pub fn generator(&self) -> &TileGenerator {
        &self.generator
    }

    /// Resolve every run, cascading until a full pass finds nothing.
    ///
    /// Fails with `CascadeLimit` if more than `max_passes` passes clear
    /// something; the grid is then left mid-cascade.
    pub fn resolve_all(
        &self,
        grid: &mut Grid,
        rng: &mut impl TileSource,
    ) -> EngineResult<Resolution> {
        let mut resolution = Resolution::default();

        loop {
            let pass = resolution.passes;
            let before = resolution.events.len();
            let positions: Vec<Point> = grid.positions().collect();

            for p in positions {
                for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                    if let Some(run) = run_at(grid, p, orientation) {
                        let refills = self.clear_and_refill(grid, &run, rng)?;
                        trace!(
                            pass,
                            origin = %run.origin,
                            ?orientation,
                            kind = %run.kind,
                            "match cleared"
                        );
                        resolution.events.push(MatchEvent { pass, run, refills });
                    }
                }
            }

            if resolution.events.len() == before {
                break;
            }

            resolution.passes += 1;
            if resolution.passes > self.max_passes {
                warn!(passes = resolution.passes, "cascade limit exceeded");
                return Err(EngineError::CascadeLimit {
                    passes: resolution.passes,
                });
            }
        }

        debug!(
            events = resolution.event_count(),
            passes = resolution.passes,
            "resolution complete"
        );
        Ok(resolution)
    }

    fn clear_and_refill(
        &self,
        grid: &mut Grid,
        run: &Run,
        rng: &mut impl TileSource,
    ) -> EngineResult<SmallVec<[(Point, TileType); 3]>> {
        let cells = run.cells();
        for &p in &cells {
            grid.set(p, TileType::Blank)?;
        }

        let mut refills = SmallVec::new();
        for &p in &cells {
            let tile = self.generator.generate(grid, p, rng);
            grid.set(p, tile)?;
            refills.push((p, tile));
        }
        Ok(refills)
    }
}
