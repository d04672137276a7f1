//! This module contains the roster, the ordered list of players taking part in the game, and the
//! parsing of the player count typed in by the user.
//!
//! A roster is never resized in place. Changing the number of players builds a brand new roster
//! with freshly generated names, and every score from the previous one is dropped.

use std::sync::LazyLock;

use fastrand::Rng;
use tracing::debug;

use crate::error::GameError;
use crate::names::generate_name;
use crate::player::Player;

/// The largest roster that will be built. Larger requests are ignored like any other invalid
/// count, as they could not be drawn anyway.
pub const MAX_PLAYERS: usize = 1_000_000;

/// This expression matches integer literals the way a lenient number field reads them: optional
/// surrounding whitespace, an optional sign and underscores between digits.
static COUNT_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"\A\s*[+-]?[0-9]+(?:_[0-9]+)*\s*\z").expect("the count pattern is valid")
});

/// This structure holds the players of the current game in the order they are shown on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    /// This field contains the players, in board order.
    players: Vec<Player>,
}

impl Roster {
    /// This function builds a roster of `count` players, each with a generated name and no score.
    #[must_use]
    pub fn generate(count: usize, rng: &mut Rng) -> Self {
        (0..count).map(|_| Player::new(generate_name(rng))).collect()
    }

    /// The player at the given board position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// The highest score on the roster, or nothing for an empty roster.
    #[must_use]
    pub fn high_score(&self) -> Option<u64> {
        self.players.iter().map(Player::score).max()
    }

    /// Whether the roster has no players at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// An iterator over the players, in board order.
    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    /// The number of players on the roster.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.players.len()
    }

    /// The players, in board order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Mutable access to the players for the round resolver.
    pub(crate) fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    /// This function renames the player at the given board position.
    ///
    /// # Errors
    ///
    /// Returns `GameError::UnknownPlayer` if there is no player at that position.
    pub fn rename(&mut self, index: usize, name: String) -> Result<(), GameError> {
        let player = self
            .players
            .get_mut(index)
            .ok_or(GameError::UnknownPlayer(index))?;
        player.rename(name);

        Ok(())
    }

    /// The sum of the scores of every player.
    #[must_use]
    pub fn total_score(&self) -> u64 {
        self.players
            .iter()
            .map(Player::score)
            .fold(0, u64::saturating_add)
    }
}

impl FromIterator<Player> for Roster {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self {
            players: iter.into_iter().collect(),
        }
    }
}

impl<'roster> IntoIterator for &'roster Roster {
    type IntoIter = std::slice::Iter<'roster, Player>;
    type Item = &'roster Player;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// This function reads a player count out of free-form text. Anything that is not an integer, or
/// is not a positive one, or exceeds `MAX_PLAYERS`, yields nothing.
#[must_use]
pub fn parse_count(text: &str) -> Option<usize> {
    if !COUNT_RE.is_match(text) {
        return None;
    }

    let digits: String = text.trim().chars().filter(|ch| *ch != '_').collect();
    let count = digits.parse::<i64>().ok()?;

    usize::try_from(count)
        .ok()
        .filter(|count| (1..=MAX_PLAYERS).contains(count))
}

/// This function builds the roster requested by the text in the player count field, or nothing if
/// the text does not hold a valid count. Invalid input is not reported to the user, as the field
/// is read while it is still being typed.
pub(crate) fn resize(text: &str, rng: &mut Rng) -> Option<Roster> {
    let Some(count) = parse_count(text) else {
        debug!(input = text, "ignoring invalid player count");
        return None;
    };

    Some(Roster::generate(count, rng))
}

/// This function serves as a value parser for the command line argument parser, so the initial
/// player count follows the same rules as the count typed in during the game.
pub(crate) fn verify_count(text: &str) -> Result<usize, String> {
    parse_count(text)
        .ok_or_else(|| format!("the number of players must be between 1 and {MAX_PLAYERS}"))
}
