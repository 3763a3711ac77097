//! Error types for the engine.

use thiserror::Error;

use super::action::Action;
use super::player::Player;

/// Errors reported by the engine.
///
/// Every variant is recoverable: boards are values, so a failed call
/// leaves nothing half-modified.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action {action}: square is off the 3x3 board")]
    ActionOutOfRange { action: Action },

    #[error("invalid action {action}: square is already occupied by {occupant}")]
    CellOccupied { action: Action, occupant: Player },

    #[error("board notation must contain 9 cells, got {got}")]
    InvalidBoardLength { got: usize },

    #[error("invalid character '{character}' at cell {position} in board notation")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("{player} chose no action on a board that is still in play")]
    NoActionChosen { player: Player },
}

impl Error {
    /// True for errors raised by rejecting an action against a board.
    #[must_use]
    pub fn is_invalid_action(&self) -> bool {
        matches!(
            self,
            Error::ActionOutOfRange { .. } | Error::CellOccupied { .. }
        )
    }
}

/// Engine result type.
pub type Result<T> = std::result::Result<T, Error>;
