//! The 3x3 board.
//!
//! `Board` is a small `Copy` value. It exposes no public mutators: new
//! positions come from [`crate::rules::apply_action`], which returns a
//! fresh board and leaves its input untouched. Search branches therefore
//! never observe each other's moves.
//!
//! ## Notation
//!
//! Boards print and parse as three rows separated by `/`, one character
//! per square: `X`, `O` or `.`.
//!
//! ```
//! use tictactoe_minimax::core::{Board, Cell};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(board.get(0, 1), Some(Cell::X));
//! assert_eq!(board.to_string(), "XX./OO./...");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::error::Error;
use super::player::Cell;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A tic-tac-toe position.
///
/// Boards built with [`Board::from_rows`] or parsed from notation are
/// trusted: the engine does not check that they are reachable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// The empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Build a board from a grid of cells, top row first.
    #[must_use]
    pub const fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Cell at `(row, col)`, or `None` if off the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Cell targeted by an action, or `None` if off the board.
    #[must_use]
    pub fn cell(&self, action: Action) -> Option<Cell> {
        self.get(action.row, action.col)
    }

    /// The grid, top row first.
    #[must_use]
    pub const fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Iterate over all squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = (Action, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &cell)| (Action::new(row, col), cell))
        })
    }

    /// Number of squares holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Number of marked squares.
    #[must_use]
    pub fn filled(&self) -> usize {
        SIZE * SIZE - self.count(Cell::Empty)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled() == SIZE * SIZE
    }

    /// Copy of this board with `mark` written at `action`.
    ///
    /// `action` must be in bounds; callers validate first.
    #[must_use]
    pub(crate) fn with_mark(mut self, action: Action, mark: Cell) -> Self {
        self.cells[action.row][action.col] = mark;
        self
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse board notation. Row separators (`/`) and whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        let mut position = 0;

        for character in s.chars().filter(|c| *c != '/' && !c.is_whitespace()) {
            let cell = Cell::from_char(character).ok_or(Error::InvalidCellCharacter {
                character,
                position,
            })?;
            if position < SIZE * SIZE {
                cells[position / SIZE][position % SIZE] = cell;
            }
            position += 1;
        }

        if position != SIZE * SIZE {
            return Err(Error::InvalidBoardLength { got: position });
        }

        Ok(Self { cells })
    }
}
