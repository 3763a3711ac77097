//! Match configuration.

use serde::{Deserialize, Serialize};

/// Configuration for an [`Arena`](super::Arena) series.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Games per series.
    pub games: u32,

    /// Base seed. Game `i` draws its random plies from `seed + i`.
    pub seed: u64,

    /// Uniformly random plies played before the policies take over.
    /// 0 = policies play the whole game.
    pub random_opening_moves: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            seed: 42,
            random_opening_moves: 0,
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set games per series.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of random opening plies.
    pub fn with_random_opening_moves(mut self, plies: u8) -> Self {
        self.random_opening_moves = plies;
        self
    }

    /// Seed for the game at `game_index`.
    #[must_use]
    pub fn game_seed(&self, game_index: u64) -> u64 {
        self.seed.wrapping_add(game_index)
    }
}
