//! Tic-tac-toe rules: turn order, legal actions, transitions, outcomes.
//!
//! All functions are pure over `&Board`. They are called on every node
//! of the minimax tree, so none of them allocate or log.

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionList, Board, Cell, Error, Player, Result, SIZE};

/// Winning lines in scan order: rows top-to-bottom, columns
/// left-to-right, main diagonal, anti-diagonal.
pub const LINES: [[Action; SIZE]; 8] = [
    [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)],
    [Action::new(1, 0), Action::new(1, 1), Action::new(1, 2)],
    [Action::new(2, 0), Action::new(2, 1), Action::new(2, 2)],
    [Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)],
    [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)],
    [Action::new(0, 2), Action::new(1, 2), Action::new(2, 2)],
    [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
    [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)],
];

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// A player completed a line.
    Winner(Player),
    /// Board filled with no line.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Terminal utility: `+1` X won, `-1` O won, `0` draw.
    #[must_use]
    pub fn utility(&self) -> i32 {
        match self {
            GameResult::Winner(player) => player.win_utility(),
            GameResult::Draw => 0,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(player) => Some(*player),
            GameResult::Draw => None,
        }
    }
}

/// The starting position: an empty board, X to move.
#[must_use]
pub const fn initial_state() -> Board {
    Board::empty()
}

/// Player to move, derived from mark counts.
///
/// X if both players have placed the same number of marks, else O.
/// Defined for every board, including terminal ones.
#[must_use]
pub fn current_player(board: &Board) -> Player {
    if board.count(Cell::X) == board.count(Cell::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Empty squares in row-major order.
///
/// The order is fixed; [`crate::search::best_move`] breaks ties by it.
#[must_use]
pub fn legal_actions(board: &Board) -> ActionList {
    board
        .squares()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(action, _)| action)
        .collect()
}

/// Board after the player to move marks `action`.
///
/// The mover is computed on `board` before the move. `board` itself is
/// never modified.
///
/// # Errors
///
/// [`Error::ActionOutOfRange`] if the square is off the board,
/// [`Error::CellOccupied`] if it is already marked.
pub fn apply_action(board: &Board, action: Action) -> Result<Board> {
    let cell = board
        .cell(action)
        .ok_or(Error::ActionOutOfRange { action })?;

    match cell.owner() {
        Some(occupant) => Err(Error::CellOccupied { action, occupant }),
        None => Ok(successor(board, action)),
    }
}

/// Unchecked transition for actions taken from [`legal_actions`].
#[must_use]
pub(crate) fn successor(board: &Board, action: Action) -> Board {
    board.with_mark(action, current_player(board).mark())
}

/// Owner of the first completed line in [`LINES`] order.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| line_owner(board, line))
}

/// True if `player` owns at least one completed line.
#[must_use]
pub fn has_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line_owner(board, line) == Some(player))
}

fn line_owner(board: &Board, line: &[Action; SIZE]) -> Option<Player> {
    let first = board.cell(line[0])?.owner()?;
    line[1..]
        .iter()
        .all(|&square| board.cell(square) == Some(first.mark()))
        .then_some(first)
}

/// The game is over: someone won or no empty square remains.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Terminal score: `+1` X won, `-1` O won, `0` otherwise.
///
/// Only meaningful on terminal boards; a live board scores `0`.
#[must_use]
pub fn utility(board: &Board) -> i32 {
    winner(board).map_or(0, Player::win_utility)
}

/// Result of the game on `board`, `None` while it is still in play.
#[must_use]
pub fn outcome(board: &Board) -> Option<GameResult> {
    match winner(board) {
        Some(player) => Some(GameResult::Winner(player)),
        None if board.is_full() => Some(GameResult::Draw),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::O);
        assert!(!result.is_winner(Player::X));
        assert!(result.is_winner(Player::O));
        assert_eq!(result.utility(), -1);
        assert_eq!(result.winner(), Some(Player::O));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(Player::X));
        assert!(!draw.is_winner(Player::O));
        assert_eq!(draw.utility(), 0);
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn test_current_player() {
        assert_eq!(current_player(&initial_state()), Player::X);
        assert_eq!(current_player(&board("X../.../...")), Player::O);
        assert_eq!(current_player(&board("X../.O./...")), Player::X);
    }

    #[test]
    fn test_legal_actions_row_major() {
        let actions = legal_actions(&board("X.O/.X./O.X"));
        assert_eq!(
            actions.as_slice(),
            &[
                Action::new(0, 1),
                Action::new(1, 0),
                Action::new(1, 2),
                Action::new(2, 1)
            ]
        );
        assert_eq!(legal_actions(&initial_state()).len(), 9);
        assert!(legal_actions(&board("XOX/XOO/OXX")).is_empty());
    }

    #[test]
    fn test_apply_action_marks_mover() {
        let start = initial_state();
        let after_x = apply_action(&start, Action::new(1, 1)).unwrap();
        let after_o = apply_action(&after_x, Action::new(0, 0)).unwrap();

        assert_eq!(after_x.get(1, 1), Some(Cell::X));
        assert_eq!(after_o.get(0, 0), Some(Cell::O));
        assert_eq!(start, initial_state());
    }

    #[test]
    fn test_apply_action_rejects() {
        let b = board("X../.../...");
        assert_eq!(
            apply_action(&b, Action::new(0, 0)),
            Err(Error::CellOccupied {
                action: Action::new(0, 0),
                occupant: Player::X
            })
        );
        assert_eq!(
            apply_action(&b, Action::new(0, 3)),
            Err(Error::ActionOutOfRange {
                action: Action::new(0, 3)
            })
        );
    }

    #[test]
    fn test_winner_lines() {
        assert_eq!(winner(&board("XXX/OO./...")), Some(Player::X));
        assert_eq!(winner(&board("XX./OOO/X..")), Some(Player::O));
        assert_eq!(winner(&board("OX./OX./.X.")), Some(Player::X));
        assert_eq!(winner(&board("O.X/.OX/X.O")), Some(Player::O));
        assert_eq!(winner(&board("O.X/.XO/X..")), Some(Player::X));
        assert_eq!(winner(&initial_state()), None);
        assert_eq!(winner(&board("XX./.../...")), None);
    }

    #[test]
    fn test_winner_skips_empty_lines() {
        // Row 0 is empty; the completed column below it must still be found.
        assert_eq!(winner(&board(".X./.X./OXO")), Some(Player::X));
    }

    #[test]
    fn test_winner_scan_order() {
        // Unreachable board with two owners: rows are scanned first.
        let b = board("OOO/XXX/...");
        assert_eq!(winner(&b), Some(Player::O));
        assert!(has_line(&b, Player::X));
        assert!(has_line(&b, Player::O));
    }

    #[test]
    fn test_terminal_and_utility() {
        let x_win = board("XXX/OO./...");
        let o_win = board("XX./OOO/X..");
        let draw = board("XOX/XOO/OXX");
        let live = board("X../.O./...");

        assert!(is_terminal(&x_win));
        assert!(is_terminal(&o_win));
        assert!(is_terminal(&draw));
        assert!(!is_terminal(&live));

        assert_eq!(utility(&x_win), 1);
        assert_eq!(utility(&o_win), -1);
        assert_eq!(utility(&draw), 0);
        assert_eq!(utility(&live), 0);
    }

    #[test]
    fn test_outcome() {
        assert_eq!(
            outcome(&board("XXX/OO./...")),
            Some(GameResult::Winner(Player::X))
        );
        assert_eq!(outcome(&board("XOX/XOO/OXX")), Some(GameResult::Draw));
        assert_eq!(outcome(&initial_state()), None);
    }

    #[test]
    fn test_game_result_serialization() {
        let result = GameResult::Winner(Player::X);
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: GameResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }
}
