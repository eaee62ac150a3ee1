//! Random tile sources.
//!
//! The engine only ever asks for "a uniform index below `bound`", expressed by
//! the [`TileSource`] trait. Two sources ship with the crate:
//!
//! - [`GameRng`]: seeded ChaCha8, deterministic per seed
//! - [`ScriptedSource`]: replays a fixed index sequence, for tests
//!
//! ```
//! use rust_match3::core::{GameRng, TileSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! for _ in 0..10 {
//!     assert_eq!(a.next_index(8), b.next_index(8));
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform integer source over `0..bound`.
pub trait TileSource {
    /// Draw an index in `0..bound`. `bound` is always at least 1.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<T: TileSource + ?Sized> TileSource for &mut T {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Deterministic RNG used for tile generation.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl TileSource for GameRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range_usize(0..bound)
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
///
/// Each scripted value is reduced modulo the requested bound, so a script
/// written for an 8-kind palette stays valid on smaller boards.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source from a non-empty script.
    ///
    /// An empty script behaves like `[0]`.
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        let mut script = script.into();
        if script.is_empty() {
            script.push(0);
        }
        Self { script, cursor: 0 }
    }

    /// Number of indices drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl TileSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % bound.max(1)
    }
}
