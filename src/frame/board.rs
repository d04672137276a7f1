//! This module lays out the players on a grid. Every player gets a cell with their die, their
//! score, a high score marker and their name.

use console::{pad_str, style, truncate_str, Alignment};

use crate::frame::faces::{FaceSet, FACE_HEIGHT};
use crate::game::Game;
use crate::player::Player;

/// The number of columns a cell takes up, the gap to the next cell included.
pub(crate) const CELL_WIDTH: usize = 22;

/// The number of lines a cell takes up: the face, the score, the marker, the name and a gap.
const CELL_HEIGHT: usize = FACE_HEIGHT + 4;

/// Names longer than this are cut short on the board.
const NAME_WIDTH: usize = 20;

/// The marker shown under the score of the leading players.
const HIGH_SCORE: &str = "* High Score! *";

/// This function returns the square root of `value` rounded to the nearest integer.
const fn rounded_sqrt(value: usize) -> usize {
    let root = value.isqrt();

    // halfway between `root` and `root + 1` is `root * root + root + 1/4`
    if value > root * root + root {
        root + 1
    } else {
        root
    }
}

/// This function returns the number of columns for a board of `players`, which is as close to a
/// square as it gets. Small boards always get three columns.
pub(crate) fn columns_for(players: usize) -> usize {
    let rows = rounded_sqrt(players);

    if players > 3 && rows > 0 {
        players.div_ceil(rows)
    } else {
        3
    }
}

/// This function caps the number of columns to what fits in a terminal `width` columns wide,
/// keeping at least one.
pub(crate) fn fit_columns(columns: usize, width: usize) -> usize {
    columns.min(width / CELL_WIDTH).max(1)
}

/// This function draws the lines of a single cell.
fn cell(player: &Player, face: &[String], high_score: Option<u64>) -> Vec<String> {
    let mut lines = face.to_vec();

    lines.push(format!("Score: {} points", player.score()));
    lines.push(if high_score == Some(player.score()) {
        format!("{}", style(HIGH_SCORE).bold())
    } else {
        String::new()
    });
    lines.push(truncate_str(player.name(), NAME_WIDTH, "...").into_owned());
    lines.push(String::new());

    lines
}

/// This function draws the board of the given game on a terminal `width` columns wide. The faces
/// of the players who won the last round are the winning variants, and the high score markers are
/// only shown once a round has been played.
pub(crate) fn render(game: &Game, faces: &FaceSet, width: usize) -> Vec<String> {
    let roster = game.roster();
    let columns = fit_columns(columns_for(roster.len()), width);
    let high_score = game.last_round().and_then(|_| game.high_score());
    let cells: Vec<Vec<String>> = roster
        .iter()
        .enumerate()
        .map(|(index, player)| {
            let face = faces.lines(player.last_roll(), game.is_winner(index));
            cell(player, face, high_score)
        })
        .collect();

    let mut lines = Vec::with_capacity(cells.len().div_ceil(columns) * CELL_HEIGHT);
    for row in cells.chunks(columns) {
        for line in 0..CELL_HEIGHT {
            let joined: String = row
                .iter()
                .map(|cell| {
                    let text = cell.get(line).map_or("", String::as_str);
                    pad_str(text, CELL_WIDTH, Alignment::Center, Some("...")).into_owned()
                })
                .collect();
            lines.push(joined.trim_end().to_owned());
        }
    }

    lines
}
