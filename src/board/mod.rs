//! Session orchestration.
//!
//! [`Board`] ties the grid, the rules and the score store together and is
//! the only type the input and presentation layers need to hold.

mod controller;
mod outcome;

pub use controller::Board;
pub use outcome::{GameOverReport, Phase, SwapOutcome, SwapRejection};
