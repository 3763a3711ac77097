//! Exhaustive census of the reachable game tree.
//!
//! Walks every legal game from a starting board, counting complete games
//! by outcome and distinct positions. It also checks the assumption the
//! winner scan relies on: no reachable board has completed lines for both
//! players.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::core::{Board, Player};
use crate::rules::engine::successor;
use crate::rules::{has_line, initial_state, legal_actions, outcome, GameResult};

/// Counts over every game reachable from a board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTreeCensus {
    /// Distinct reachable boards, including the start.
    pub positions: usize,

    /// Distinct reachable terminal boards.
    pub terminal_positions: usize,

    /// Complete move sequences ending in a terminal board.
    pub games: u64,
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,

    /// Reachable boards where both players own a completed line.
    pub conflicting_positions: usize,
}

impl GameTreeCensus {
    /// Census of the full game from the empty board.
    pub fn explore() -> Self {
        Self::explore_from(&initial_state())
    }

    /// Census of every game continuing from `board`.
    #[instrument(level = "debug", skip_all, fields(board = %board))]
    pub fn explore_from(board: &Board) -> Self {
        let mut walker = Walker::default();
        walker.visit(board);

        let mut census = walker.census;
        census.positions = walker.seen.len();

        info!(
            positions = census.positions,
            terminal_positions = census.terminal_positions,
            games = census.games,
            conflicting_positions = census.conflicting_positions,
            "game tree census complete"
        );
        census
    }
}

#[derive(Default)]
struct Walker {
    seen: FxHashSet<Board>,
    census: GameTreeCensus,
}

impl Walker {
    fn visit(&mut self, board: &Board) {
        let first_visit = self.seen.insert(*board);
        if first_visit && has_line(board, Player::X) && has_line(board, Player::O) {
            self.census.conflicting_positions += 1;
        }

        let Some(result) = outcome(board) else {
            for action in legal_actions(board) {
                self.visit(&successor(board, action));
            }
            return;
        };

        if first_visit {
            self.census.terminal_positions += 1;
        }
        self.census.games += 1;
        match result {
            GameResult::Winner(Player::X) => self.census.x_wins += 1,
            GameResult::Winner(Player::O) => self.census.o_wins += 1,
            GameResult::Draw => self.census.draws += 1,
        }
    }
}
