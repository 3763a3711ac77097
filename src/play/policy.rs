//! Move-selection policies.
//!
//! A policy picks an action for the player to move. The arena asks the
//! policy assigned to each side in turn and never calls it on a
//! terminal board.

use crate::core::{Action, Board, GameRng};
use crate::rules::{is_terminal, legal_actions};
use crate::search::{Minimax, SearchStats};

/// Chooses moves for one side of a game.
pub trait Policy {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Action to play on `board`, `None` if the policy has no move.
    fn select(&mut self, board: &Board) -> Option<Action>;
}

/// Perfect play via exhaustive minimax.
#[derive(Clone, Debug, Default)]
pub struct MinimaxPolicy {
    search: Minimax,
}

impl MinimaxPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the last move search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl Policy for MinimaxPolicy {
    fn name(&self) -> &str {
        "minimax"
    }

    fn select(&mut self, board: &Board) -> Option<Action> {
        self.search.best_move(board)
    }
}

/// Uniformly random legal moves from a seeded stream.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Policy for RandomPolicy {
    fn name(&self) -> &str {
        "random"
    }

    fn select(&mut self, board: &Board) -> Option<Action> {
        if is_terminal(board) {
            return None;
        }
        self.rng.choose(&legal_actions(board)).copied()
    }
}
