//! Swap validation and deadlock detection.
//!
//! A swap of two adjacent tiles is legal when the board, with those two
//! tiles exchanged, contains a run **anywhere**. The run does not have to
//! touch the swapped cells.
//!
//! The trial never mutates the grid: the exchange is applied through a
//! coordinate remap while scanning, so callers only need `&Grid`.
//!
//! A board is deadlocked when no adjacent pair passes the trial.

use serde::{Deserialize, Serialize};

use crate::core::{Point, TileType};
use crate::grid::Grid;

use super::matcher::{run_at_with, Orientation};

/// An exchange of two tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Swap {
    pub a: Point,
    pub b: Point,
}

impl Swap {
    /// Create a swap between `a` and `b`.
    #[must_use]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// The same swap with its endpoints exchanged.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self::new(self.b, self.a)
    }

    /// Does the swap involve `p`?
    #[must_use]
    pub fn touches(&self, p: Point) -> bool {
        self.a == p || self.b == p
    }
}

/// Tile at `q` on `grid` as if `a` and `b` were exchanged.
fn swapped_lookup(grid: &Grid, a: Point, b: Point) -> impl Fn(Point) -> Option<TileType> + '_ {
    move |q| {
        if q == a {
            grid.get(b)
        } else if q == b {
            grid.get(a)
        } else {
            grid.get(q)
        }
    }
}

/// Would exchanging `a` and `b` leave a run anywhere on the board?
///
/// Returns `false` for non-adjacent or out-of-bounds points, and for swaps
/// involving a hole or a blank. Symmetric in `a` and `b`.
#[must_use]
pub fn would_create_match(grid: &Grid, a: Point, b: Point) -> bool {
    if !grid.are_neighbors(a, b) {
        return false;
    }
    match (grid.get(a), grid.get(b)) {
        (Some(ta), Some(tb)) if ta.is_movable() && tb.is_movable() => {}
        _ => return false,
    }

    let lookup = swapped_lookup(grid, a, b);
    grid.positions().any(|p| {
        run_at_with(p, Orientation::Horizontal, &lookup).is_some()
            || run_at_with(p, Orientation::Vertical, &lookup).is_some()
    })
}

/// Every adjacent pair whose exchange would create a run, in scan order.
///
/// Each pair appears once, as (cell, right neighbour) or (cell, lower
/// neighbour).
#[must_use]
pub fn legal_swaps(grid: &Grid) -> Vec<Swap> {
    candidate_swaps(grid)
        .filter(|s| would_create_match(grid, s.a, s.b))
        .collect()
}

/// First legal swap in scan order, if any. Useful as a hint.
#[must_use]
pub fn find_legal_swap(grid: &Grid) -> Option<Swap> {
    candidate_swaps(grid).find(|s| would_create_match(grid, s.a, s.b))
}

/// True iff no adjacent pair on the board is a legal swap.
#[must_use]
pub fn is_deadlocked(grid: &Grid) -> bool {
    find_legal_swap(grid).is_none()
}

fn candidate_swaps(grid: &Grid) -> impl Iterator<Item = Swap> + '_ {
    grid.positions().flat_map(move |p| {
        [Point::RIGHT, Point::UP]
            .into_iter()
            .map(move |step| Swap::new(p, p + step))
            .filter(move |s| grid.in_bounds(s.b))
    })
}
