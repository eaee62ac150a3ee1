//! Integer grid coordinates.
//!
//! A `Point` doubles as a slot index and as a delta vector, so it supports
//! addition, subtraction and scaling. `y` grows downward on screen but the
//! named unit vectors keep the original game's convention of `UP = (0, 1)`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D integer coordinate with value semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point::new(0, 0);
    pub const UP: Point = Point::new(0, 1);
    pub const DOWN: Point = Point::new(0, -1);
    pub const LEFT: Point = Point::new(-1, 0);
    pub const RIGHT: Point = Point::new(1, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another point, saturating at `u32::MAX`.
    #[must_use]
    pub fn manhattan(self, other: Point) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// True iff `other` is one step away along a single axis.
    ///
    /// ```
    /// use rust_match3::Point;
    ///
    /// assert!(Point::new(2, 3).is_adjacent(Point::new(2, 4)));
    /// assert!(!Point::new(2, 3).is_adjacent(Point::new(3, 4)));
    /// assert!(!Point::new(2, 3).is_adjacent(Point::new(2, 3)));
    /// ```
    #[must_use]
    pub fn is_adjacent(self, other: Point) -> bool {
        self.manhattan(other) == 1
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, rhs: i32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
