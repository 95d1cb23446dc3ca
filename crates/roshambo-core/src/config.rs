//! Configuration for a match session.

use crate::score::GameMode;

/// Configuration for a match session.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Win target for the match.
    pub mode: GameMode,
    /// RNG seed for reproducible opponent draws.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the win target.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
