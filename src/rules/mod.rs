//! Tic-tac-toe rules.
//!
//! - Whose turn it is and which squares are legal
//! - How an action produces the next board
//! - Win, draw and terminal utility
//!
//! Search and play call into these functions but never inspect board
//! cells directly.

pub mod engine;

pub use engine::{
    apply_action, current_player, has_line, initial_state, is_terminal, legal_actions, outcome,
    utility, winner, GameResult, LINES,
};
