//! Exhaustive minimax search.
//!
//! `max_value` and `min_value` recurse over the full game tree until a
//! terminal board, where they return its utility. There is no pruning
//! and no memoization: from the empty board the search walks every game
//! path, roughly 550,000 nodes.
//!
//! X maximizes, O minimizes. The move selector evaluates successors in
//! [`legal_actions`] order and keeps the first action reaching a strictly
//! better value, so ties go to the earliest square in row-major order.

use std::time::Instant;

use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::core::{Action, ActionList, Board, Player};
use crate::rules::engine::successor;
use crate::rules::{current_player, is_terminal, legal_actions, utility};

use super::stats::SearchStats;

/// Minimax value of each legal action, in legal-action order.
pub type ActionValues = SmallVec<[(Action, i32); 9]>;

/// Minimax search context.
///
/// Owns the statistics of the last search. Top-level calls
/// ([`best_move`](Self::best_move), [`action_values`](Self::action_values),
/// [`optimal_actions`](Self::optimal_actions)) reset them;
/// [`max_value`](Self::max_value) and [`min_value`](Self::min_value)
/// accumulate into them.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    stats: SearchStats,
}

impl Minimax {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the searches run so far.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Value of `board` with X to choose.
    pub fn max_value(&mut self, board: &Board) -> i32 {
        self.max_at(board, 0)
    }

    /// Value of `board` with O to choose.
    pub fn min_value(&mut self, board: &Board) -> i32 {
        self.min_at(board, 0)
    }

    /// Value of `board` for whichever player is to move.
    pub fn game_value(&mut self, board: &Board) -> i32 {
        match current_player(board) {
            Player::X => self.max_value(board),
            Player::O => self.min_value(board),
        }
    }

    fn max_at(&mut self, board: &Board, depth: u16) -> i32 {
        self.stats.record_visit(depth);
        if is_terminal(board) {
            self.stats.terminal_evaluations += 1;
            return utility(board);
        }

        legal_actions(board)
            .into_iter()
            .map(|action| self.min_at(&successor(board, action), depth + 1))
            .fold(i32::MIN, i32::max)
    }

    fn min_at(&mut self, board: &Board, depth: u16) -> i32 {
        self.stats.record_visit(depth);
        if is_terminal(board) {
            self.stats.terminal_evaluations += 1;
            return utility(board);
        }

        legal_actions(board)
            .into_iter()
            .map(|action| self.max_at(&successor(board, action), depth + 1))
            .fold(i32::MAX, i32::min)
    }

    /// Minimax value of playing each legal action, in legal-action order.
    ///
    /// Empty for terminal boards.
    #[instrument(level = "debug", skip_all, fields(board = %board))]
    pub fn action_values(&mut self, board: &Board) -> ActionValues {
        let start = Instant::now();
        self.stats.reset();

        if is_terminal(board) {
            return ActionValues::new();
        }

        let mover = current_player(board);
        let values = legal_actions(board)
            .into_iter()
            .map(|action| {
                let child = successor(board, action);
                let value = match mover {
                    Player::X => self.min_at(&child, 1),
                    Player::O => self.max_at(&child, 1),
                };
                (action, value)
            })
            .collect();

        self.stats.time_us = start.elapsed().as_micros() as u64;
        values
    }

    /// Optimal action for the player to move, `None` on a terminal board.
    ///
    /// Ties resolve to the first action in legal-action order.
    pub fn best_move(&mut self, board: &Board) -> Option<Action> {
        let mover = current_player(board);
        let values = self.action_values(board);
        let (action, value) = select_best(mover, &values)?;

        debug!(
            %board,
            %mover,
            %action,
            value,
            nodes = self.stats.nodes_visited,
            time_us = self.stats.time_us,
            "selected move"
        );
        Some(action)
    }

    /// Every action achieving the optimal value, in legal-action order.
    ///
    /// The first element is the action [`best_move`](Self::best_move) returns.
    pub fn optimal_actions(&mut self, board: &Board) -> ActionList {
        let mover = current_player(board);
        let values = self.action_values(board);
        let Some((_, best)) = select_best(mover, &values) else {
            return ActionList::new();
        };

        values
            .into_iter()
            .filter(|&(_, value)| value == best)
            .map(|(action, _)| action)
            .collect()
    }
}

/// First action whose value strictly improves on every earlier one.
fn select_best(mover: Player, values: &[(Action, i32)]) -> Option<(Action, i32)> {
    let mut best: Option<(Action, i32)> = None;

    for &(action, value) in values {
        let improves = match (best, mover) {
            (None, _) => true,
            (Some((_, current)), Player::X) => value > current,
            (Some((_, current)), Player::O) => value < current,
        };
        if improves {
            best = Some((action, value));
        }
    }

    best
}

/// Value of `board` with X to choose. See [`Minimax::max_value`].
#[must_use]
pub fn max_value(board: &Board) -> i32 {
    Minimax::new().max_value(board)
}

/// Value of `board` with O to choose. See [`Minimax::min_value`].
#[must_use]
pub fn min_value(board: &Board) -> i32 {
    Minimax::new().min_value(board)
}

/// Optimal action for the player to move. See [`Minimax::best_move`].
#[must_use]
pub fn best_move(board: &Board) -> Option<Action> {
    Minimax::new().best_move(board)
}

/// Per-action minimax values. See [`Minimax::action_values`].
#[must_use]
pub fn action_values(board: &Board) -> ActionValues {
    Minimax::new().action_values(board)
}

/// All optimal actions. See [`Minimax::optimal_actions`].
#[must_use]
pub fn optimal_actions(board: &Board) -> ActionList {
    Minimax::new().optimal_actions(board)
}
