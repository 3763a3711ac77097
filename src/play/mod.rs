//! Playing full games: policies, the arena turn loop, and game records.
//!
//! ## Overview
//!
//! - **Policy**: picks a move for one side (`MinimaxPolicy`, `RandomPolicy`)
//! - **Arena**: alternates two policies from the empty board to a terminal one
//! - **GameRecord**: the moves and result of one game
//! - **SeriesSummary**: win/draw tally over many games
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_minimax::play::{Arena, MatchConfig, MinimaxPolicy, RandomPolicy};
//! use tictactoe_minimax::core::Player;
//!
//! let arena = Arena::new(MatchConfig::new().with_games(2));
//! let mut random = RandomPolicy::new(7);
//! let mut perfect = MinimaxPolicy::new();
//!
//! let summary = arena.play_series(&mut random, &mut perfect).unwrap();
//! assert_eq!(summary.losses_for(Player::O), 0);
//! ```

pub mod arena;
pub mod config;
pub mod policy;
pub mod record;

pub use arena::Arena;
pub use config::MatchConfig;
pub use policy::{MinimaxPolicy, Policy, RandomPolicy};
pub use record::{GameRecord, MoveRecord, SeriesSummary};
