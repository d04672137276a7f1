//! The library components of the game. They hold the players and their scores, play the rounds,
//! announce the winners, and draw all of it on the terminal.
//!
//! The starting point of the library is the game.rs file, which contains the main game loop and the
//! `Game` type the rest of the state hangs off.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod error;
mod frame;
mod game;
mod input;
mod logging;
mod messages;
mod names;
mod player;
mod roster;
mod round;
mod simulation;

pub use error::GameError;
pub use game::{init, Game};
pub use messages::{format_announcement, format_announcement_with_width, MESSAGE_LINE_LENGTH};
pub use player::{Face, Player};
pub use roster::{parse_count, Roster, MAX_PLAYERS};
pub use round::{play_round, RoundResult};
pub use simulation::{SimulationSummary, Throttle};
