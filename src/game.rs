//! The game module contains the core parts of the game, except for input and drawing.
//!
//! It contains the `init()` function to set up and run the game loop, the command-line options,
//! and the `Game` type owning the roster and the random number generator the rounds are played
//! with.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::Term;
use fastrand::Rng;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::{debug, info};

use crate::error::GameError;
use crate::frame::faces::FaceSet;
use crate::frame::{draw_game, MenuItem};
use crate::input::{take_action, take_player_count, take_rename};
use crate::logging::init_logging;
use crate::messages::{format_announcement_with_width, MESSAGE_LINE_LENGTH};
use crate::roster::{resize, verify_count, Roster};
use crate::round::{play_round, RoundResult};
use crate::simulation::{SimulationSummary, Throttle};

/// This struct holds information about the application when it comes to the command-line argument
/// parser of choice, which is clap. Every option can also be set through the environment.
#[derive(Parser, Debug)]
#[command(name = "diceroll", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// The number of times per second the board is redrawn while simulating rounds.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=1000))]
    #[arg(env = "DICEROLL_FPS", value_name = "FPS")]
    fps: u32,
    /// The width at which the round announcement is wrapped.
    #[arg(long, default_value_t = MESSAGE_LINE_LENGTH, value_parser = verify_line_length)]
    #[arg(env = "DICEROLL_LINE_LENGTH", value_name = "COLUMNS")]
    line_length: usize,
    /// The directory the log file is written to.
    ///
    /// By default, logs go to the platform cache directory, as the terminal is taken up by the
    /// game itself.
    #[arg(long, env = "DICEROLL_LOG_DIR", value_name = "DIR")]
    log_dir: Option<PathBuf>,
    /// The number of players the game starts with.
    ///
    /// It can be changed at any time during the game, which replaces every player with a new one.
    #[arg(short, long, default_value = "100", value_parser = verify_count)]
    #[arg(env = "DICEROLL_PLAYERS", value_name = "COUNT")]
    players: usize,
    /// The seed of the random number generator, to replay the exact same rolls.
    #[arg(long, env = "DICEROLL_SEED", value_name = "SEED")]
    seed: Option<u64>,
    /// The number of rounds played by the "simulate" menu entry.
    #[arg(short, long, default_value_t = 100_000, value_parser = clap::value_parser!(u64).range(1..))]
    #[arg(env = "DICEROLL_SIMULATE_ROLLS", value_name = "ROUNDS")]
    simulate_rolls: u64,
}

/// This structure holds the whole state of a game: the players, the generator their dice are
/// rolled with, and the outcome of the last round, if any.
#[derive(Debug)]
pub struct Game {
    /// This field contains the outcome of the most recent round on the current roster.
    last_round: Option<RoundResult>,
    /// This field contains the random number generator shared by the dice and the name generator.
    rng: Rng,
    /// This field contains the players, in board order.
    roster: Roster,
}

impl Game {
    /// This function returns the announcement of the last round, wrapped at `line_length`. Before
    /// the first round it holds only the padding lines, so the announcement area keeps its height.
    #[must_use]
    pub fn announcement(&self, line_length: usize) -> String {
        let names = self
            .last_round
            .as_ref()
            .map(|round| round.winner_names(&self.roster))
            .unwrap_or_default();

        format_announcement_with_width(&names, line_length)
    }

    /// The highest score on the roster.
    #[must_use]
    pub fn high_score(&self) -> Option<u64> {
        self.roster.high_score()
    }

    /// Whether the player at the given board position won the last round.
    #[must_use]
    pub fn is_winner(&self, index: usize) -> bool {
        self.last_round
            .as_ref()
            .is_some_and(|round| round.is_winner(index))
    }

    /// The outcome of the last round played on the current roster.
    #[must_use]
    pub const fn last_round(&self) -> Option<&RoundResult> {
        self.last_round.as_ref()
    }

    /// This function starts a game with `players` generated players. Giving a seed makes every
    /// name and roll reproducible.
    #[must_use]
    pub fn new(players: usize, seed: Option<u64>) -> Self {
        let mut rng = seed.map_or_else(Rng::new, Rng::with_seed);
        let roster = Roster::generate(players, &mut rng);

        Self {
            last_round: None,
            rng,
            roster,
        }
    }

    /// This function plays one round and keeps its outcome as the last round.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyRoster` if the game has no players.
    pub fn play_round(&mut self) -> Result<&RoundResult, GameError> {
        let result = play_round(&mut self.roster, &mut self.rng)?;

        Ok(self.last_round.insert(result))
    }

    /// This function renames the player at the given board position.
    ///
    /// # Errors
    ///
    /// Returns `GameError::UnknownPlayer` if there is no player at that position.
    pub fn rename(&mut self, index: usize, name: String) -> Result<(), GameError> {
        debug!(index, name = name.as_str(), "renaming player");
        self.roster.rename(index, name)
    }

    /// This function replaces the roster with the one requested by the text of the player count
    /// field, and returns whether it did. Invalid text leaves the game untouched.
    pub fn resize(&mut self, text: &str) -> bool {
        let Some(roster) = resize(text, &mut self.rng) else {
            return false;
        };

        self.roster = roster;
        self.last_round = None;
        true
    }

    /// The players of the game, in board order.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// This function plays `rounds` rounds in a row, calling `redraw` after a round only when
    /// `fps` allows another frame. It uses the wall clock.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `redraw`, or `GameError::EmptyRoster` converted into the
    /// redraw error type if the game has no players.
    pub fn simulate<R, E>(
        &mut self,
        rounds: u64,
        fps: u32,
        redraw: R,
    ) -> Result<SimulationSummary, E>
    where
        R: FnMut(&Self, u64) -> Result<(), E>,
        E: From<GameError>,
    {
        let mut throttle = Throttle::new(fps, Instant::now());

        self.simulate_with_clock(rounds, &mut throttle, Instant::now, redraw)
    }

    /// This function plays `rounds` rounds in a row, reading the time from `clock`. A round is
    /// followed by a call to `redraw`, with the number of the round, only if the throttle says a
    /// frame is due when the round starts; the throttle is then restarted once the redraw is done.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `redraw`, or `GameError::EmptyRoster` converted into the
    /// redraw error type if the game has no players.
    pub fn simulate_with_clock<C, R, E>(
        &mut self,
        rounds: u64,
        throttle: &mut Throttle,
        mut clock: C,
        mut redraw: R,
    ) -> Result<SimulationSummary, E>
    where
        C: FnMut() -> Instant,
        R: FnMut(&Self, u64) -> Result<(), E>,
        E: From<GameError>,
    {
        let mut summary = SimulationSummary::default();

        for round in 1..=rounds {
            let due = throttle.is_due(clock());
            let winners = self.play_round()?.winners().len();

            summary.rounds = round;
            summary.points_awarded = summary
                .points_awarded
                .saturating_add(u64::try_from(winners).unwrap_or(u64::MAX));

            if due {
                redraw(self, round)?;
                summary.frames = summary.frames.saturating_add(1);
                throttle.reset(clock());
            }
        }

        Ok(summary)
    }

    /// This function starts a game with an existing roster.
    #[must_use]
    pub fn with_roster(roster: Roster, seed: Option<u64>) -> Self {
        Self {
            last_round: None,
            rng: seed.map_or_else(Rng::new, Rng::with_seed),
            roster,
        }
    }
}

/// Initializes the game state and runs the game loop until the user exits. This is a `main()`
/// function of sorts though it is still called from main.rs.
///
/// The die faces are drawn once here and reused for every frame.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - io::Error
/// - dialoguer::Error
/// - indicatif::style::TemplateError
/// - tracing_subscriber::util::TryInitError
/// - diceroll::GameError
pub fn init() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_dir.clone())?;
    let term = Term::stdout();
    let faces = FaceSet::new();
    let mut game = Game::new(cli.players, cli.seed);

    info!(
        players = cli.players,
        simulate_rolls = cli.simulate_rolls,
        line_length = cli.line_length,
        fps = cli.fps,
        seed = ?cli.seed,
        "starting game"
    );

    term.set_title("Dice Roller");
    term.hide_cursor()?;

    // game loop
    loop {
        draw_game(&term, &game, &faces, cli.line_length)?;

        match take_action(&term, cli.simulate_rolls)? {
            MenuItem::Roll => {
                let result = game.play_round()?;
                debug!(
                    max_roll = %result.max_roll(),
                    winners = result.winners().len(),
                    "round played"
                );
            }
            MenuItem::Simulate => simulate_rolls(&term, &mut game, &faces, &cli)?,
            MenuItem::PlayerCount => {
                let text = take_player_count(&term, game.roster().len())?;
                if game.resize(&text) {
                    info!(players = game.roster().len(), "roster replaced");
                }
            }
            MenuItem::Rename => {
                if let Some((index, name)) = take_rename(&term, game.roster())? {
                    game.rename(index, name)?;
                }
            }
            MenuItem::Exit => break,
        }
    }

    term.clear_screen()?;
    term.show_cursor()?;
    info!("game finished");

    Ok(())
}

/// This function plays the configured number of rounds in a row, redrawing the board at the
/// configured frame rate with a progress bar below it.
fn simulate_rolls(term: &Term, game: &mut Game, faces: &FaceSet, cli: &Cli) -> Result<()> {
    let refresh = u8::try_from(cli.fps).unwrap_or(u8::MAX);
    let bar = ProgressBar::with_draw_target(
        Some(cli.simulate_rolls),
        ProgressDrawTarget::term(term.clone(), refresh),
    );
    bar.set_style(ProgressStyle::with_template(
        "{msg} [{bar:40.cyan/blue}] {human_pos}/{human_len} ({eta})",
    )?);
    bar.set_message("Simulating");

    let started = Instant::now();
    let summary = game.simulate(cli.simulate_rolls, cli.fps, |game, round| -> Result<()> {
        bar.set_position(round);
        bar.suspend(|| draw_game(term, game, faces, cli.line_length))
    })?;
    bar.finish_and_clear();

    info!(
        rounds = summary.rounds,
        frames = summary.frames,
        points = summary.points_awarded,
        elapsed = ?started.elapsed(),
        "simulation finished"
    );

    Ok(())
}

/// This function serves as a value parser for the command line argument parser in the
/// `line_length` field, as an announcement cannot be wrapped at zero columns.
fn verify_line_length(string: &str) -> Result<usize, String> {
    match string.trim().parse::<usize>() {
        Ok(0) => Err("the line length must be at least one column".to_owned()),
        Ok(columns) => Ok(columns),
        Err(err) => Err(format!("invalid line length: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::CommandFactory as _;

    use super::*;
    use crate::player::Player;

    /// A clock moving forward by `step` every time it is read.
    fn ticking_clock(start: Instant, step: Duration) -> impl FnMut() -> Instant {
        let mut now = start;
        move || {
            now += step;
            now
        }
    }

    #[test]
    fn resize_with_a_valid_count_replaces_everyone() {
        let mut game = Game::new(3, Some(1));
        let _ = game.play_round().expect("non-empty roster");

        assert!(game.resize("5"), "5 is a valid count");
        assert_eq!(game.roster().len(), 5, "roster size");
        assert_eq!(game.roster().total_score(), 0, "scores are dropped");
        assert!(game.last_round().is_none(), "the last round belonged to the old roster");
    }

    #[test]
    fn resize_to_the_same_count_draws_new_players() {
        let mut game = Game::new(5, Some(9));

        assert!(game.resize("5"), "5 is a valid count");
        let first = game.roster().clone();
        assert!(game.resize("5"), "5 is still a valid count");

        assert_eq!(game.roster().len(), first.len(), "roster size");
        assert_ne!(game.roster(), &first, "the roster was not rebuilt");
    }

    #[test]
    fn resize_with_an_invalid_count_keeps_everything() {
        let mut game = Game::new(4, Some(2));
        let _ = game.play_round().expect("non-empty roster");
        let roster = game.roster().clone();
        let last_round = game.last_round().cloned();

        for text in ["0", "-3", "abc"] {
            assert!(!game.resize(text), "accepted {text:?}");
            assert_eq!(game.roster(), &roster, "roster changed by {text:?}");
            assert_eq!(game.last_round(), last_round.as_ref(), "round changed by {text:?}");
        }
    }

    #[test]
    fn same_seed_same_game() {
        let mut first = Game::new(8, Some(42));
        let mut second = Game::new(8, Some(42));

        for _ in 0..10 {
            let left = first.play_round().expect("non-empty roster").clone();
            let right = second.play_round().expect("non-empty roster").clone();
            assert_eq!(left, right, "rounds diverged");
        }
        assert_eq!(first.roster(), second.roster(), "rosters diverged");
    }

    #[test]
    fn empty_game_cannot_play() {
        let mut game = Game::with_roster(Roster::default(), Some(0));

        assert_eq!(game.play_round().err(), Some(GameError::EmptyRoster), "empty roster");
        let summary = game.simulate(3, 30, |_, _| Ok::<(), GameError>(()));
        assert_eq!(summary, Err(GameError::EmptyRoster), "empty simulation");
    }

    #[test]
    fn announcement_names_the_winners() {
        let roster: Roster = ["Alice", "Bob"]
            .into_iter()
            .map(|name| Player::new(name.to_owned()))
            .collect();
        let mut game = Game::with_roster(roster, Some(3));

        assert_eq!(game.announcement(100), "\n\n\n", "nothing to announce yet");

        let winners = game.play_round().expect("non-empty roster").winners().len();
        let announcement = game.announcement(100);
        let expected = if winners == 2 {
            "Alice and Bob won the round!"
        } else if game.is_winner(0) {
            "Alice won the round!"
        } else {
            "Bob won the round!"
        };

        assert_eq!(announcement.trim_end(), expected, "announcement");
    }

    #[test]
    fn simulation_awards_at_least_one_point_per_round() {
        let mut game = Game::new(10, Some(7));
        let mut throttle = Throttle::new(30, Instant::now());
        let summary = game
            .simulate_with_clock(
                1_000,
                &mut throttle,
                ticking_clock(Instant::now(), Duration::ZERO),
                |_, _| Ok::<(), GameError>(()),
            )
            .expect("non-empty roster");

        assert_eq!(summary.rounds, 1_000, "rounds");
        assert_eq!(game.roster().total_score(), summary.points_awarded, "points");
        assert!(summary.points_awarded >= 1_000, "points: {}", summary.points_awarded);
    }

    #[test]
    fn frozen_clock_never_redraws() {
        let mut game = Game::new(5, Some(8));
        let start = Instant::now();
        let mut throttle = Throttle::new(30, start);
        let summary = game
            .simulate_with_clock(
                50,
                &mut throttle,
                ticking_clock(start, Duration::ZERO),
                |_, _| -> Result<(), GameError> { panic!("no frame is due") },
            )
            .expect("non-empty roster");

        assert_eq!(summary.frames, 0, "frames");
    }

    #[test]
    fn slow_clock_redraws_every_round() {
        let mut game = Game::new(5, Some(9));
        let start = Instant::now();
        let mut throttle = Throttle::with_interval(Duration::from_millis(10), start);
        let mut drawn = Vec::new();
        let summary = game
            .simulate_with_clock(
                20,
                &mut throttle,
                ticking_clock(start, Duration::from_millis(10)),
                |_, round| {
                    drawn.push(round);
                    Ok::<(), GameError>(())
                },
            )
            .expect("non-empty roster");

        assert_eq!(summary.frames, 20, "frames");
        assert_eq!(drawn, (1..=20).collect::<Vec<u64>>(), "rounds drawn");
    }

    #[test]
    fn throttle_skips_rounds_between_frames() {
        let mut game = Game::new(5, Some(10));
        let start = Instant::now();
        let mut throttle = Throttle::with_interval(Duration::from_millis(25), start);
        let mut drawn = Vec::new();
        let summary = game
            .simulate_with_clock(
                9,
                &mut throttle,
                ticking_clock(start, Duration::from_millis(10)),
                |_, round| {
                    drawn.push(round);
                    Ok::<(), GameError>(())
                },
            )
            .expect("non-empty roster");

        // 10 ms per clock read: a frame every third round, each frame read costing one tick
        assert_eq!(drawn, vec![3, 6, 9], "rounds drawn");
        assert_eq!(summary.frames, 3, "frames");
    }

    #[test]
    fn redraw_errors_stop_the_simulation() {
        let mut game = Game::new(5, Some(11));
        let start = Instant::now();
        let mut throttle = Throttle::with_interval(Duration::ZERO, start);
        let result = game.simulate_with_clock(
            10,
            &mut throttle,
            ticking_clock(start, Duration::from_millis(1)),
            |_, round| {
                if round == 4 {
                    Err(anyhow::anyhow!("terminal closed"))
                } else {
                    Ok(())
                }
            },
        );

        assert!(result.is_err(), "the redraw error is returned");
        assert!(
            game.roster().iter().all(|player| player.last_roll().is_some()),
            "every player rolled"
        );
        assert!(game.roster().total_score() >= 4, "four rounds were played");
    }

    #[test]
    fn line_length_must_be_positive() {
        assert_eq!(verify_line_length("80"), Ok(80), "valid width");
        assert!(verify_line_length("0").is_err(), "zero width");
        assert!(verify_line_length("wide").is_err(), "not a number");
    }

    #[test]
    fn cli_defaults() {
        // read from the argument definitions, as parsing would pick up `DICEROLL_*` variables
        let command = Cli::command();
        let default_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_default_values().first())
                .and_then(|value| value.to_str())
                .map(str::to_owned)
        };

        assert_eq!(default_of("players").as_deref(), Some("100"), "players");
        assert_eq!(default_of("simulate_rolls").as_deref(), Some("100000"), "simulate rolls");
        assert_eq!(
            default_of("line_length"),
            Some(MESSAGE_LINE_LENGTH.to_string()),
            "line length"
        );
        assert_eq!(default_of("fps").as_deref(), Some("30"), "fps");
        assert_eq!(default_of("seed"), None, "seed");
        assert_eq!(verify_count("100"), Ok(100), "the default count is valid");
    }

    #[test]
    fn cli_rejects_invalid_player_counts() {
        assert!(Cli::try_parse_from(["diceroll", "--players", "0"]).is_err(), "zero players");
        assert!(Cli::try_parse_from(["diceroll", "--players", "many"]).is_err(), "not a number");
        let cli = Cli::try_parse_from(["diceroll", "-p", "12"]).expect("valid count");
        assert_eq!(cli.players, 12, "players");
    }
}
