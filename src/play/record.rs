//! Game records and series tallies.
//!
//! Records live in memory only. Moves are kept in an `im::Vector` so a
//! record can be cloned and extended without copying its history.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, Player, Result};
use crate::rules::{apply_action, initial_state, GameResult};

/// One ply of a recorded game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    /// Ply number, 0 for the first move.
    pub ply: u8,

    /// Player who moved.
    pub player: Player,

    /// Square marked.
    pub action: Action,

    /// Played by the random opening rather than a policy.
    pub opening: bool,
}

/// A finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    /// Every move in order.
    pub moves: Vector<MoveRecord>,

    /// Terminal board.
    pub final_board: Board,

    pub result: GameResult,

    /// Seed of the random opening stream.
    pub seed: u64,
}

impl GameRecord {
    /// Number of plies played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Terminal utility of the game.
    pub fn utility(&self) -> i32 {
        self.result.utility()
    }

    /// Moves made by one player.
    pub fn player_moves(&self, player: Player) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter().filter(move |m| m.player == player)
    }

    /// Rebuild the final board by re-applying every move to the empty board.
    ///
    /// # Errors
    ///
    /// The first invalid action, if the record was tampered with.
    pub fn replay(&self) -> Result<Board> {
        self.moves
            .iter()
            .try_fold(initial_state(), |board, m| apply_action(&board, m.action))
    }
}

/// Win/draw tally over a series of games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl SeriesSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a list of finished games.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a GameRecord>) -> Self {
        let mut summary = Self::new();
        for record in records {
            summary.record(&record.result);
        }
        summary
    }

    /// Count one game.
    pub fn record(&mut self, result: &GameResult) {
        match result {
            GameResult::Winner(Player::X) => self.x_wins += 1,
            GameResult::Winner(Player::O) => self.o_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    #[must_use]
    pub fn wins_for(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    #[must_use]
    pub fn losses_for(&self, player: Player) -> u32 {
        self.wins_for(player.opponent())
    }
}
