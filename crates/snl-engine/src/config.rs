//! Configuration for a game engine instance.

use std::time::Duration;

/// Configuration for a [`crate::GameEngine`].
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for the dice roller.
    pub seed: u64,
    /// Delay between rolling the dice and resolving the move.
    pub roll_delay: Duration,
    /// Delay between landing on a transit and applying the slide.
    pub slide_delay: Duration,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            roll_delay: Duration::from_millis(500),
            slide_delay: Duration::from_millis(500),
            max_events: 0,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the delay between rolling and resolving the move.
    pub fn with_roll_delay(mut self, delay: Duration) -> Self {
        self.roll_delay = delay;
        self
    }

    /// Set the delay between landing on a transit and the slide.
    pub fn with_slide_delay(mut self, delay: Duration) -> Self {
        self.slide_delay = delay;
        self
    }

    /// Zero both delays, so every scheduled step fires on the next
    /// [`crate::GameEngine::advance`] call. Useful for headless play.
    pub fn immediate(mut self) -> Self {
        self.roll_delay = Duration::ZERO;
        self.slide_delay = Duration::ZERO;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }
}
