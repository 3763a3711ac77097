//! Full-game tests through the arena.

use tictactoe_minimax::core::Player;
use tictactoe_minimax::play::{Arena, MatchConfig, MinimaxPolicy, Policy, RandomPolicy, SeriesSummary};
use tictactoe_minimax::rules::{is_terminal, winner, GameResult};

// =============================================================================
// Perfect Play
// =============================================================================

#[test]
fn test_minimax_self_play_is_draw() {
    let arena = Arena::new(MatchConfig::new().with_games(1));
    let mut x = MinimaxPolicy::new();
    let mut o = MinimaxPolicy::new();

    let record = arena.play_game(&mut x, &mut o, 0).unwrap();

    assert_eq!(record.result, GameResult::Draw);
    assert_eq!(record.len(), 9);
    assert!(record.final_board.is_full());
    assert_eq!(winner(&record.final_board), None);
}

#[test]
fn test_minimax_self_play_after_random_opening_draws() {
    // One random ply cannot hand either side a forced win.
    let arena = Arena::new(
        MatchConfig::new()
            .with_games(4)
            .with_random_opening_moves(1),
    );
    let mut x = MinimaxPolicy::new();
    let mut o = MinimaxPolicy::new();

    let summary = arena.play_series(&mut x, &mut o).unwrap();
    assert_eq!(summary.draws, 4);
}

#[test]
fn test_minimax_as_o_never_loses_to_random() {
    let arena = Arena::new(MatchConfig::new().with_games(12).with_seed(3));
    let mut random = RandomPolicy::new(11);
    let mut perfect = MinimaxPolicy::new();

    let summary = arena.play_series(&mut random, &mut perfect).unwrap();

    assert_eq!(summary.total(), 12);
    assert_eq!(summary.losses_for(Player::O), 0);
}

#[test]
fn test_minimax_as_x_never_loses_to_random() {
    // A random first ply keeps each game's root search small.
    let arena = Arena::new(
        MatchConfig::new()
            .with_games(6)
            .with_random_opening_moves(1),
    );
    let mut perfect = MinimaxPolicy::new();
    let mut random = RandomPolicy::new(5);

    let summary = arena.play_series(&mut perfect, &mut random).unwrap();

    assert_eq!(summary.total(), 6);
    assert_eq!(summary.losses_for(Player::X), 0);
}

#[test]
fn test_minimax_policy_reports_search_stats() {
    let mut policy = MinimaxPolicy::new();
    let board = "X../.O./...".parse().unwrap();

    assert!(policy.select(&board).is_some());
    assert!(policy.stats().nodes_visited > 0);
    assert_eq!(policy.name(), "minimax");
}

// =============================================================================
// Records
// =============================================================================

#[test]
fn test_records_replay_to_final_board() {
    let arena = Arena::new(MatchConfig::new().with_games(8).with_seed(99));
    let mut x = RandomPolicy::new(1);
    let mut o = RandomPolicy::new(2);

    for record in arena.play_games(&mut x, &mut o).unwrap() {
        assert!(is_terminal(&record.final_board));
        assert_eq!(record.replay(), Ok(record.final_board));
        assert_eq!(record.len(), record.final_board.filled());

        // Plies alternate starting with X.
        for (i, m) in record.moves.iter().enumerate() {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(m.player, expected);
            assert_eq!(usize::from(m.ply), i);
        }

        let x_moves = record.player_moves(Player::X).count();
        let o_moves = record.player_moves(Player::O).count();
        assert!(x_moves == o_moves || x_moves == o_moves + 1);
    }
}

#[test]
fn test_record_result_matches_final_board() {
    let arena = Arena::new(MatchConfig::new().with_games(10));
    let mut x = RandomPolicy::new(21);
    let mut o = RandomPolicy::new(22);

    for record in arena.play_games(&mut x, &mut o).unwrap() {
        match record.result {
            GameResult::Winner(player) => {
                assert_eq!(winner(&record.final_board), Some(player));
                assert_eq!(record.utility(), player.win_utility());
            }
            GameResult::Draw => {
                assert!(record.final_board.is_full());
                assert_eq!(record.utility(), 0);
            }
        }
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_series_is_reproducible() {
    let config = MatchConfig::new().with_games(10).with_seed(7);
    let arena = Arena::new(config);

    let first = arena
        .play_games(&mut RandomPolicy::new(1), &mut RandomPolicy::new(2))
        .unwrap();
    let second = arena
        .play_games(&mut RandomPolicy::new(1), &mut RandomPolicy::new(2))
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_summary_matches_records() {
    let arena = Arena::new(MatchConfig::new().with_games(15).with_seed(5));
    let records = arena
        .play_games(&mut RandomPolicy::new(3), &mut RandomPolicy::new(4))
        .unwrap();
    let summary = arena
        .play_series(&mut RandomPolicy::new(3), &mut RandomPolicy::new(4))
        .unwrap();

    assert_eq!(summary, SeriesSummary::from_records(&records));
    assert_eq!(summary.total(), 15);
    assert_eq!(
        summary.wins_for(Player::X) + summary.wins_for(Player::O) + summary.draws,
        15
    );
}

#[test]
fn test_summary_serializes() {
    let summary = SeriesSummary {
        x_wins: 3,
        o_wins: 1,
        draws: 6,
    };

    let json = serde_json::to_string(&summary).unwrap();
    let back: SeriesSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
}
