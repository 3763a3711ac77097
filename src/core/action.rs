//! Action representation: a `(row, col)` coordinate.
//!
//! An action names the square the player to move marks. It carries no
//! player; the mark comes from the board it is applied to. Actions are
//! only meaningful relative to a board, so constructing an out-of-range
//! action is allowed and rejected later by [`crate::rules::apply_action`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::SIZE;

/// Legal actions of a board, in row-major order.
///
/// SmallVec keeps all 9 candidates inline, so enumeration never allocates.
pub type ActionList = SmallVec<[Action; 9]>;

/// Place the mover's mark at `(row, col)`.
///
/// ## Example
///
/// ```
/// use tictactoe_minimax::core::Action;
///
/// let center = Action::new(1, 1);
/// assert_eq!(center.index(), Some(4));
/// assert_eq!(Action::from_index(4), Some(center));
/// assert_eq!(Action::new(3, 0).index(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Action {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Action for a row-major square index (0-8).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < SIZE * SIZE {
            Some(Self::new(index / SIZE, index % SIZE))
        } else {
            None
        }
    }

    /// Row-major square index, or `None` if off the board.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.in_bounds() {
            Some(self.row * SIZE + self.col)
        } else {
            None
        }
    }

    /// Both coordinates lie in `0..3`.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Corner squares.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        (self.row == 0 || self.row == SIZE - 1) && (self.col == 0 || self.col == SIZE - 1)
    }

    #[must_use]
    pub const fn is_center(self) -> bool {
        self.row == 1 && self.col == 1
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
