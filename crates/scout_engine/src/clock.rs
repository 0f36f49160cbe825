//! Timing source for the iterative deepening driver
//!
//! The engine asks three questions of its clock: how long the current move has
//! been running, how much time the side to move has left on its game clock,
//! and how much it started the game with. All answers are in milliseconds.

use instant::Instant;
use std::time::Duration;

/// Source of elapsed and remaining time.
pub trait Clock {
    /// Milliseconds spent on the current move so far.
    fn elapsed_ms(&self) -> u64;

    /// Milliseconds left on the side to move's game clock.
    fn remaining_ms(&self) -> u64;

    /// Milliseconds the side to move started the game with.
    fn initial_ms(&self) -> u64;
}

/// Wall-clock [`Clock`]. The move timer starts when the value is created.
#[derive(Debug, Clone)]
pub struct GameClock {
    started: Instant,
    initial: Duration,
    remaining: Duration,
}

impl GameClock {
    /// Clock for a side that started with `initial` and has `remaining` left.
    pub fn new(initial: Duration, remaining: Duration) -> Self {
        Self {
            started: Instant::now(),
            initial,
            remaining,
        }
    }

    /// Clock at the start of a game: nothing used yet.
    pub fn fresh(total: Duration) -> Self {
        Self::new(total, total)
    }

    /// Time left after the move currently being timed.
    pub fn remaining_after_move(&self) -> Duration {
        self.remaining.saturating_sub(self.started.elapsed())
    }
}

impl Clock for GameClock {
    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn remaining_ms(&self) -> u64 {
        self.remaining.as_millis() as u64
    }

    fn initial_ms(&self) -> u64 {
        self.initial.as_millis() as u64
    }
}
