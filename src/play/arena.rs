//! Game driver: pits two policies against each other.
//!
//! The arena is the turn loop the engine itself leaves out. It asks the
//! policy of the side to move for an action, applies it, and checks for a
//! terminal board after every move. Optional random opening plies make
//! series between deterministic policies explore different games.

use im::Vector;
use tracing::{debug, info, instrument};

use crate::core::{Error, GameRng, Player, Result};
use crate::rules::{apply_action, current_player, initial_state, legal_actions, outcome};

use super::config::MatchConfig;
use super::policy::Policy;
use super::record::{GameRecord, MoveRecord, SeriesSummary};

/// Runs games between an X policy and an O policy.
#[derive(Clone, Debug, Default)]
pub struct Arena {
    config: MatchConfig,
}

impl Arena {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play one game from the empty board.
    ///
    /// `game_index` selects the seed of the random opening.
    ///
    /// # Errors
    ///
    /// [`Error::NoActionChosen`] if a policy declines to move on a live
    /// board, or the invalid-action error if it picks an illegal square.
    #[instrument(level = "debug", skip_all, fields(x = x.name(), o = o.name(), game = game_index))]
    pub fn play_game(
        &self,
        x: &mut dyn Policy,
        o: &mut dyn Policy,
        game_index: u64,
    ) -> Result<GameRecord> {
        let seed = self.config.game_seed(game_index);
        let mut rng = GameRng::new(seed);
        let mut board = initial_state();
        let mut moves: Vector<MoveRecord> = Vector::new();

        let result = loop {
            if let Some(result) = outcome(&board) {
                break result;
            }

            let ply = moves.len() as u8;
            let player = current_player(&board);
            let opening = ply < self.config.random_opening_moves;

            let choice = if opening {
                rng.choose(&legal_actions(&board)).copied()
            } else {
                match player {
                    Player::X => x.select(&board),
                    Player::O => o.select(&board),
                }
            };
            let action = choice.ok_or(Error::NoActionChosen { player })?;

            board = apply_action(&board, action)?;
            moves.push_back(MoveRecord {
                ply,
                player,
                action,
                opening,
            });
        };

        debug!(?result, plies = moves.len(), final_board = %board, "game finished");

        Ok(GameRecord {
            moves,
            final_board: board,
            result,
            seed,
        })
    }

    /// Play `config.games` games, returning every record.
    ///
    /// # Errors
    ///
    /// The first error any game reports.
    pub fn play_games(&self, x: &mut dyn Policy, o: &mut dyn Policy) -> Result<Vec<GameRecord>> {
        (0..u64::from(self.config.games))
            .map(|game_index| self.play_game(&mut *x, &mut *o, game_index))
            .collect()
    }

    /// Play `config.games` games and tally the results.
    ///
    /// # Errors
    ///
    /// The first error any game reports.
    pub fn play_series(&self, x: &mut dyn Policy, o: &mut dyn Policy) -> Result<SeriesSummary> {
        let records = self.play_games(x, o)?;
        let summary = SeriesSummary::from_records(&records);

        info!(
            x = x.name(),
            o = o.name(),
            x_wins = summary.x_wins,
            o_wins = summary.o_wins,
            draws = summary.draws,
            "series finished"
        );
        Ok(summary)
    }
}
