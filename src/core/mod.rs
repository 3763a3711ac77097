//! Core value types: players, cells, boards, actions, errors, RNG.
//!
//! Everything here is plain data. Game rules live in [`crate::rules`].

pub mod action;
pub mod board;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionList};
pub use board::{Board, SIZE};
pub use error::{Error, Result};
pub use player::{Cell, Player};
pub use rng::{GameRng, GameRngState};
