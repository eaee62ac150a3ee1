//! Fixed-size tile storage.
//!
//! The grid is opaque: callers go through bounds-checked accessors and never
//! touch the backing vector. Storage is column-major (`index = x * height + y`)
//! to match the engine's x-outer, y-inner scan order.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult, Point, TileType};

/// A `width × height` board of tile slots.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<TileType>,
}

impl Grid {
    /// Create a grid with every slot set to `fill`.
    ///
    /// Non-positive dimensions produce an empty grid.
    pub fn new(width: i32, height: i32, fill: TileType) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![fill; width as usize * height as usize],
        }
    }

    /// Build a grid from row-major rows, `rows[y][x]`.
    ///
    /// Returns `None` if the rows are ragged or empty.
    pub fn from_rows(rows: &[Vec<TileType>]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut grid = Grid::new(width as i32, height as i32, TileType::Blank);
        for (y, row) in rows.iter().enumerate() {
            for (x, &tile) in row.iter().enumerate() {
                let i = grid.idx(x as i32, y as i32);
                grid.tiles[i] = tile;
            }
        }
        Some(grid)
    }

    /// Build a grid from glyph rows (see [`TileType::glyph`]).
    ///
    /// ```
    /// use rust_match3::{Grid, Point, TileType};
    ///
    /// let grid = Grid::from_glyphs(&["CDM", "D#C"]).unwrap();
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid.height(), 2);
    /// assert_eq!(grid.get(Point::new(1, 1)), Some(TileType::Hole));
    /// ```
    pub fn from_glyphs(rows: &[&str]) -> Option<Self> {
        let rows = rows
            .iter()
            .map(|row| row.chars().map(TileType::from_glyph).collect::<Option<Vec<_>>>())
            .collect::<Option<Vec<_>>>()?;
        Self::from_rows(&rows)
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> usize {
        x as usize * self.height as usize + y as usize
    }

    /// Is `p` on the board?
    #[must_use]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// True iff `a` and `b` are one step apart on a single axis.
    ///
    /// Pure geometry: bounds are not checked.
    #[must_use]
    pub fn are_neighbors(&self, a: Point, b: Point) -> bool {
        a.is_adjacent(b)
    }

    /// Tile at `p`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, p: Point) -> Option<TileType> {
        self.in_bounds(p).then(|| self.tiles[self.idx(p.x, p.y)])
    }

    /// Tile at `p`, failing with `OutOfBounds`.
    pub fn tile(&self, p: Point) -> EngineResult<TileType> {
        self.get(p).ok_or_else(|| self.out_of_bounds(p))
    }

    /// Overwrite the tile at `p`.
    pub fn set(&mut self, p: Point, tile: TileType) -> EngineResult<()> {
        self.check(p)?;
        let i = self.idx(p.x, p.y);
        self.tiles[i] = tile;
        Ok(())
    }

    /// Exchange the tiles at `a` and `b`.
    pub fn swap(&mut self, a: Point, b: Point) -> EngineResult<()> {
        self.check(a)?;
        self.check(b)?;
        let (i, j) = (self.idx(a.x, a.y), self.idx(b.x, b.y));
        self.tiles.swap(i, j);
        Ok(())
    }

    /// Fail with `OutOfBounds` unless `p` is on the board.
    pub fn check(&self, p: Point) -> EngineResult<()> {
        if self.in_bounds(p) {
            Ok(())
        } else {
            Err(self.out_of_bounds(p))
        }
    }

    fn out_of_bounds(&self, p: Point) -> EngineError {
        EngineError::OutOfBounds {
            point: p,
            width: self.width,
            height: self.height,
        }
    }

    /// Every slot position in scan order (x outer, y inner).
    pub fn positions(&self) -> impl Iterator<Item = Point> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| Point::new(x, y)))
    }

    /// Every slot with its tile, in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, TileType)> + '_ {
        self.positions().zip(self.tiles.iter().copied())
    }

    /// Number of slots holding `tile`.
    #[must_use]
    pub fn count(&self, tile: TileType) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.tiles[self.idx(x, y)].glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
