//! # tictactoe-minimax
//!
//! Optimal tic-tac-toe play by exhaustive minimax search.
//!
//! Given a board, the engine answers whose turn it is, which squares are
//! legal, whether the game is over and how it scored, and which move is
//! optimal for the player to act.
//!
//! ## Design Principles
//!
//! 1. **Boards are values**: `Board` is `Copy` with no public mutators.
//!    Every transition returns a new board, so search branches never
//!    interfere.
//!
//! 2. **Derived turn**: the player to move is computed from mark counts,
//!    never stored.
//!
//! 3. **Deterministic tie-breaks**: legal actions come in row-major order
//!    and the move selector keeps the first strictly better action.
//!
//! 4. **Full tree, no shortcuts**: no pruning, no memoization. The 3x3
//!    tree is small enough to search exhaustively.
//!
//! ## Modules
//!
//! - `core`: players, cells, boards, actions, errors, RNG
//! - `rules`: turn order, legal actions, transitions, winner and utility
//! - `search`: minimax value functions and move selection
//! - `play`: policies, the arena turn loop, game records
//! - `analysis`: census of the reachable game tree
//!
//! ## Example
//!
//! ```
//! use tictactoe_minimax::{apply_action, best_move, initial_state, is_terminal, utility};
//!
//! let mut board = initial_state();
//! while let Some(action) = best_move(&board) {
//!     board = apply_action(&board, action).unwrap();
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(utility(&board), 0);
//! ```

pub mod analysis;
pub mod core;
pub mod play;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Action, ActionList, Board, Cell, Error, GameRng, Player, Result};

pub use crate::rules::{
    apply_action, current_player, initial_state, is_terminal, legal_actions, outcome, utility,
    winner, GameResult,
};

pub use crate::search::{best_move, max_value, min_value, Minimax, SearchStats};

pub use crate::play::{Arena, GameRecord, MatchConfig, MinimaxPolicy, Policy, RandomPolicy, SeriesSummary};

pub use crate::analysis::GameTreeCensus;
