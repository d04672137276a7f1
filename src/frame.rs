//! This module holds the terminal rendering of the game: the title, the announcement of the last
//! round and the board with every player, plus the entries of the menu shown below them.

pub(crate) mod board;
pub(crate) mod faces;

use anyhow::Result;
use console::{style, Term};

use crate::frame::faces::FaceSet;
use crate::game::Game;

/// The title drawn at the top of every frame.
const TITLE: &str = "Dice Roller";

/// This enum holds the entries of the menu shown under the board, in the order they are listed.
#[expect(
    clippy::arbitrary_source_item_ordering,
    reason = "It's best if the items reflect the actual order they are displayed in the menu."
)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum MenuItem {
    /// This variant is used to play a single round.
    Roll,
    /// This variant is used to play the configured number of rounds in a row.
    Simulate,
    /// This variant is used to type in a new number of players.
    PlayerCount,
    /// This variant is used to change the name of one of the players.
    Rename,
    /// This variant is used to leave the game.
    Exit,
}

impl MenuItem {
    /// This function returns all the enum variants as a vector.
    pub(crate) fn list() -> Vec<Self> {
        vec![
            Self::Roll,
            Self::Simulate,
            Self::PlayerCount,
            Self::Rename,
            Self::Exit,
        ]
    }

    /// This function returns the label of the entry as shown in the menu. The simulation entry
    /// names the number of rounds it plays.
    pub(crate) fn label(self, simulate_rolls: u64) -> String {
        match self {
            Self::Roll => "Roll the Dice!".to_owned(),
            Self::Simulate => format!("Simulate {simulate_rolls} rolls"),
            Self::PlayerCount => "Change the number of players".to_owned(),
            Self::Rename => "Rename a player".to_owned(),
            Self::Exit => "Exit".to_owned(),
        }
    }
}

/// This function clears the screen and draws the whole game: the title, the announcement of the
/// last round wrapped at `line_length`, and the board fitted to the width of the terminal.
pub(crate) fn draw_game(
    term: &Term,
    game: &Game,
    faces: &FaceSet,
    line_length: usize,
) -> Result<()> {
    let (_, cols) = term.size();

    term.clear_screen()?;
    term.write_line(&format!("{}", style(TITLE).bold()))?;

    for line in game.announcement(line_length).split('\n') {
        term.write_line(&format!("{}", style(line).bold()))?;
    }

    for line in board::render(game, faces, usize::from(cols)) {
        term.write_line(&line)?;
    }

    Ok(())
}
