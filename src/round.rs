//! This module contains the round resolver: every player rolls once, and everyone who rolled the
//! highest face scores a point. Ties are not broken.

use fastrand::Rng;
use tracing::trace;

use crate::error::GameError;
use crate::player::{Face, Player};
use crate::roster::Roster;

/// This structure holds the outcome of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// This field contains the highest face rolled in the round.
    max_roll: Face,
    /// This field contains the board positions of the players who rolled the highest face, in
    /// roster order. It is never empty.
    winners: Vec<usize>,
}

impl RoundResult {
    /// Whether the player at the given board position won the round.
    #[must_use]
    pub fn is_winner(&self, index: usize) -> bool {
        self.winners.binary_search(&index).is_ok()
    }

    /// The highest face rolled in the round.
    #[must_use]
    pub const fn max_roll(&self) -> Face {
        self.max_roll
    }

    /// The names of the winners as they appear on the roster the round was played on.
    #[must_use]
    pub fn winner_names<'roster>(&self, roster: &'roster Roster) -> Vec<&'roster str> {
        self.winners
            .iter()
            .filter_map(|index| roster.get(*index))
            .map(Player::name)
            .collect()
    }

    /// The board positions of the round winners, in roster order.
    #[must_use]
    pub fn winners(&self) -> &[usize] {
        &self.winners
    }
}

/// This function plays one round on the given roster.
///
/// Each player rolls the die once, and every player whose roll matches the highest one gets a
/// point. Only the rolls and scores of the players are changed.
///
/// # Errors
///
/// Returns `GameError::EmptyRoster` if the roster has no players, in which case nothing changes.
pub fn play_round(roster: &mut Roster, rng: &mut Rng) -> Result<RoundResult, GameError> {
    if roster.is_empty() {
        return Err(GameError::EmptyRoster);
    }

    let players = roster.players_mut();
    let mut max_roll = None;

    for player in players.iter_mut() {
        let face = Face::roll(rng);
        player.record_roll(face);
        max_roll = max_roll.max(Some(face));
    }

    let max_roll = max_roll.ok_or(GameError::EmptyRoster)?;
    let mut winners = Vec::new();

    for (index, player) in players.iter_mut().enumerate() {
        if player.last_roll() == Some(max_roll) {
            player.award_point();
            winners.push(index);
        }
    }

    trace!(%max_roll, winners = winners.len(), "round played");

    Ok(RoundResult { max_roll, winners })
}
