//! # diceroll
//!
//! This crate is a dice game for any number of players. Every round, each player rolls a six-sided
//! die, and whoever rolls the highest face scores a point. Ties are not broken, so every player
//! sharing the highest roll scores.
//!
//! The board shows every player's die, score and name, and the winners of the last round are
//! announced above it. Thousands of rounds can be simulated at once, with the board redrawn at a
//! fixed frame rate while they are played.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use diceroll::init;

fn main() -> Result<()> {
    init()
}
