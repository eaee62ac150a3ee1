//! Click-to-swap reduction for the input layer.
//!
//! The engine only accepts atomic two-point swaps. [`Selection`] turns a
//! stream of clicked cells into those pairs: the first click is held, the
//! second click releases both points and clears the selection, whether or
//! not the resulting swap is accepted.
//!
//! ```
//! use rust_match3::{Point, Selection};
//!
//! let mut selection = Selection::new();
//! assert_eq!(selection.select(Point::new(1, 1)), None);
//! assert_eq!(
//!     selection.select(Point::new(1, 2)),
//!     Some((Point::new(1, 1), Point::new(1, 2)))
//! );
//! assert!(selection.pending().is_none());
//! ```

use crate::core::Point;

/// At most one pending selected cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    first: Option<Point>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a click on `p`.
    ///
    /// Returns the `(first, second)` pair on the second click and clears the
    /// selection; returns `None` after the first click.
    pub fn select(&mut self, p: Point) -> Option<(Point, Point)> {
        match self.first.take() {
            Some(first) => Some((first, p)),
            None => {
                self.first = Some(p);
                None
            }
        }
    }

    /// The held first click, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Point> {
        self.first
    }

    /// Drop any held click.
    pub fn clear(&mut self) {
        self.first = None;
    }
}
