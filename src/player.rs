//! This module contains the two smallest pieces of game state: the face a die lands on and the
//! player that rolls it.

use std::fmt;

use fastrand::Rng;

/// This structure holds the outcome of a single six-sided die roll. It can only be built through
/// its checked constructor or by rolling, so the value always lies in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Face(u8);

impl Face {
    /// The number of sides of the die in play.
    pub const SIDES: u8 = 6;

    /// This function returns the face with the given value, or nothing if the value is not one a
    /// six-sided die can land on.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= Self::SIDES {
            Some(Self(value))
        } else {
            None
        }
    }

    /// This function rolls the die once with the given random number generator.
    #[must_use]
    pub fn roll(rng: &mut Rng) -> Self {
        Self(rng.u8(1..=Self::SIDES))
    }

    /// The value shown on the face.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// This structure holds a single participant in the game. The name can be changed by the user at
/// any time, while the score and the last roll are only ever changed by playing rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// This field contains the outcome of the most recent roll, absent until the first round.
    last_roll: Option<Face>,
    /// This field contains the name shown on the board and in the round announcements.
    name: String,
    /// This field contains the number of rounds the player has won or tied for the win.
    score: u64,
}

impl Player {
    /// Awards one point for a won round.
    pub(crate) const fn award_point(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    /// The face of the most recent roll, if any round has been played.
    #[must_use]
    pub const fn last_roll(&self) -> Option<Face> {
        self.last_roll
    }

    /// The display name of the player.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This function creates a player with the given name that has not played any round yet.
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            last_roll: None,
            name,
            score: 0,
        }
    }

    /// Stores the outcome of a roll.
    pub(crate) const fn record_roll(&mut self, face: Face) {
        self.last_roll = Some(face);
    }

    /// This function replaces the display name of the player. Scores are kept, as renaming a
    /// player does not make them a different participant.
    pub fn rename(&mut self, name: String) {
        self.name = name;
    }

    /// The number of rounds this player has won, ties included.
    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_rejects_values_off_the_die() {
        assert_eq!(Face::new(0), None, "zero is not a face");
        assert_eq!(Face::new(7), None, "seven is not a face");
        assert_eq!(Face::new(6).map(Face::value), Some(6), "six is a face");
    }

    #[test]
    fn rolls_stay_on_the_die() {
        let mut rng = Rng::with_seed(7);

        for _ in 0..1_000 {
            let face = Face::roll(&mut rng);
            assert!((1..=6).contains(&face.value()), "rolled {face}");
        }
    }

    #[test]
    fn every_face_comes_up() {
        let mut rng = Rng::with_seed(11);
        let mut seen = [false; 6];

        for _ in 0..1_000 {
            let face = Face::roll(&mut rng);
            if let Some(slot) = seen.get_mut(usize::from(face.value() - 1)) {
                *slot = true;
            }
        }

        assert!(seen.iter().all(|seen| *seen), "missing faces: {seen:?}");
    }

    #[test]
    fn new_player_has_not_played() {
        let player = Player::new("Ada Lovelace".to_owned());

        assert_eq!(player.name(), "Ada Lovelace", "name");
        assert_eq!(player.score(), 0, "score");
        assert_eq!(player.last_roll(), None, "last roll");
    }

    #[test]
    fn rename_keeps_the_score() {
        let mut player = Player::new("Ada".to_owned());
        player.award_point();
        player.rename("Grace".to_owned());

        assert_eq!(player.name(), "Grace", "name");
        assert_eq!(player.score(), 1, "score");
    }
}
