//! Minimax search over the full tic-tac-toe game tree.
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_minimax::core::{Action, Board};
//! use tictactoe_minimax::search::{best_move, Minimax};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(best_move(&board), Some(Action::new(0, 2)));
//!
//! // Keep a context around to inspect the cost of the last search
//! let mut search = Minimax::new();
//! search.best_move(&board);
//! assert!(search.stats().nodes_visited > 0);
//! ```

pub mod minimax;
pub mod stats;

pub use minimax::{
    action_values, best_move, max_value, min_value, optimal_actions, ActionValues, Minimax,
};
pub use stats::SearchStats;
