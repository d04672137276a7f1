//! This module contains the errors the game state can report back to the presentation layer.

use console::style;

/// This enum holds the failures of the operations that mutate the game state. Invalid player
/// counts are not part of it, as those are silently ignored rather than reported.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GameError {
    /// This variant is returned when a round is requested on a roster without any players, as
    /// there is no maximum roll to speak of.
    #[error("{}", style("cannot play a round without players").bold().underlined())]
    EmptyRoster,
    /// This variant is returned when a player is addressed by an index past the end of the roster.
    #[error("{}", unknown_player(*.0))]
    UnknownPlayer(usize),
}

/// This function builds the message for an unknown player, numbering players from one as they
/// are shown on the board.
fn unknown_player(index: usize) -> String {
    format!(
        "{}",
        style(format!("there is no player number {}", index.saturating_add(1)))
            .bold()
            .underlined()
    )
}
