//! This module contains the pieces of the batch simulation that do not depend on the game state:
//! the frame throttle deciding when a simulated round is worth drawing, and the summary of a run.

use std::time::{Duration, Instant};

/// This structure limits how often the board is redrawn while rounds are being simulated. Rounds
/// played before a frame interval has passed since the last redraw are resolved without drawing.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    /// This field contains the shortest time allowed between two redraws.
    interval: Duration,
    /// This field contains the moment the last redraw finished.
    last_frame: Instant,
}

impl Throttle {
    /// The shortest time allowed between two redraws.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a whole frame interval has elapsed since the last redraw.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_frame) >= self.interval
    }

    /// This function creates a throttle allowing `fps` redraws per second, starting its clock at
    /// `now`. A rate of zero is taken as one frame per second.
    #[must_use]
    pub fn new(fps: u32, now: Instant) -> Self {
        Self::with_interval(Duration::from_secs(1) / fps.max(1), now)
    }

    /// Restarts the clock after a redraw.
    pub const fn reset(&mut self, now: Instant) {
        self.last_frame = now;
    }

    /// This function creates a throttle with an explicit interval between redraws.
    #[must_use]
    pub const fn with_interval(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_frame: now,
        }
    }
}

/// This structure holds what happened during a batch simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationSummary {
    /// This field contains the number of rounds that were followed by a redraw.
    pub frames: u64,
    /// This field contains the points handed out over all rounds, ties counting once per winner.
    pub points_awarded: u64,
    /// This field contains the number of rounds played.
    pub rounds: u64,
}
