//! Integration tests for seqduel
//!
//! These exercise the public API the way a front end would: build a state,
//! apply human moves by position, ask the search for a computer move and
//! commit it by value.

use fastrand::Rng;

use seqduel::GameError;
use seqduel::config::GameConfig;
use seqduel::constants::SCORE_LIMIT;
use seqduel::depth::{depth_for_remaining, select_depth};
use seqduel::playout::heuristic;
use seqduel::rules::{
    Outcome, apply_move_at_position, apply_move_by_value, current_player, is_terminal,
    legal_move_values, winner,
};
use seqduel::search::{Algorithm, alpha_beta_best_move, choose_computer_move, minimax_best_move, search};
use seqduel::session::Session;
use seqduel::state::{GameState, Player, new_game};

// =============================================================================
// Helper functions
// =============================================================================

/// Play a full game with random legal moves, returning every state visited.
fn random_game(length: usize, seed: u64) -> Vec<GameState> {
    let mut rng = Rng::with_seed(seed);
    let mut state = new_game(length, &mut rng).unwrap();
    let mut history = vec![state.clone()];
    while !is_terminal(&state) {
        let position = rng.usize(..state.len());
        state = apply_move_at_position(&state, position).unwrap();
        history.push(state.clone());
    }
    history
}

// =============================================================================
// Worked example
// =============================================================================

#[test]
fn test_three_ones_scenario() {
    let mut rng = Rng::with_seed(0);
    let state = GameState::from_items(vec![1, 1, 1]).unwrap();
    assert_eq!(current_player(&state), Player::First);

    let (state, _) = apply_move_by_value(&state, 1, &mut rng).unwrap();
    assert_eq!((state.score_a(), state.score_b()), (100, 101));
    assert_eq!(current_player(&state), Player::Second);

    let (state, _) = apply_move_by_value(&state, 1, &mut rng).unwrap();
    assert_eq!((state.score_a(), state.score_b()), (101, 101));

    let (state, _) = apply_move_by_value(&state, 1, &mut rng).unwrap();
    assert_eq!((state.score_a(), state.score_b()), (101, 102));

    assert!(is_terminal(&state));
    assert_eq!(winner(&state), Outcome::Win(Player::First));
}

// =============================================================================
// Rules properties
// =============================================================================

#[test]
fn test_turns_strictly_alternate() {
    for seed in 0..10 {
        let history = random_game(20, seed);
        for pair in history.windows(2) {
            assert_ne!(current_player(&pair[0]), current_player(&pair[1]));
        }
    }
}

#[test]
fn test_value_counts_sum_to_length() {
    for seed in 0..10 {
        for state in random_game(17, seed) {
            let total: usize = legal_move_values(&state)
                .iter()
                .map(|&v| state.items().iter().filter(|&&x| x == v).count())
                .sum();
            assert_eq!(total, state.len());
        }
    }
}

#[test]
fn test_score_law_on_every_move() {
    let mut rng = Rng::with_seed(31);
    let mut state = new_game(25, &mut rng).unwrap();
    while !is_terminal(&state) {
        let mover = current_player(&state);
        let legal = legal_move_values(&state);
        let value = legal[rng.usize(..legal.len())];
        let (next, position) = apply_move_by_value(&state, value, &mut rng).unwrap();
        assert_eq!(state.items()[position], value);

        let v = value as i32;
        if value % 2 == 1 {
            assert_eq!(next.score(mover), state.score(mover));
            assert_eq!(next.score(mover.opponent()), state.score(mover.opponent()) + v);
        } else {
            assert_eq!(next.score(mover), state.score(mover) - 2 * v);
            assert_eq!(next.score(mover.opponent()), state.score(mover.opponent()));
        }
        state = next;
    }
}

#[test]
fn test_every_position_in_range_shrinks_by_one() {
    let mut rng = Rng::with_seed(8);
    let state = new_game(15, &mut rng).unwrap();
    for position in 0..state.len() {
        let next = apply_move_at_position(&state, position).unwrap();
        assert_eq!(next.len(), state.len() - 1);
    }
    let err = apply_move_at_position(&state, state.len()).unwrap_err();
    assert!(err.is_invalid_move());
}

#[test]
fn test_scores_can_go_negative() {
    let state = GameState::with_scores(vec![4, 4], 5, 5).unwrap();
    let state = apply_move_at_position(&state, 0).unwrap();
    assert_eq!(state.score_a(), -3);
}

#[test]
fn test_extreme_starting_scores_are_rejected_not_played() {
    let err = GameState::with_scores(vec![4, 1], i32::MIN, i32::MIN).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfiguration { .. }));

    let config = GameConfig {
        start_score: i32::MIN,
        ..GameConfig::default()
    };
    assert!(config.new_game(&mut Rng::with_seed(1)).is_err());

    // The largest accepted scores play out and search without trouble
    let state = GameState::with_scores(vec![4, 1], SCORE_LIMIT - 16, -(SCORE_LIMIT - 16)).unwrap();
    let value = choose_computer_move(&state, Algorithm::AlphaBeta, Some(2)).unwrap();
    let (state, _) = apply_move_by_value(&state, value, &mut Rng::with_seed(1)).unwrap();
    let state = apply_move_at_position(&state, 0).unwrap();
    assert!(is_terminal(&state));
}

#[test]
fn test_failed_move_leaves_state_alone() {
    let mut rng = Rng::with_seed(2);
    let state = GameState::from_items(vec![1, 3]).unwrap();
    let before = state.clone();
    assert_eq!(
        apply_move_by_value(&state, 2, &mut rng).unwrap_err(),
        GameError::ValueNotPresent { value: 2 }
    );
    assert_eq!(state, before);
}

// =============================================================================
// Heuristic and depth selection
// =============================================================================

#[test]
fn test_heuristic_on_terminal_state() {
    for seed in 0..5 {
        let last = random_game(16, seed).pop().unwrap();
        assert!(is_terminal(&last));
        assert_eq!(heuristic(&last), last.score_a() - last.score_b());
    }
}

#[test]
fn test_depth_brackets() {
    let expected = [(23, 7), (22, 8), (17, 8), (16, 9), (13, 9), (12, 10), (1, 10)];
    for (n, depth) in expected {
        assert_eq!(depth_for_remaining(n), depth, "n = {n}");
        let state = GameState::from_items(vec![2; n]).unwrap();
        assert_eq!(select_depth(&state), depth);
    }
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_alpha_beta_matches_minimax_on_seeded_games() {
    let mut rng = Rng::with_seed(1234);
    for length in [6, 12, 15, 20, 25] {
        let state = new_game(length, &mut rng).unwrap();
        // Also check from the second player's perspective
        let reply = apply_move_at_position(&state, 0).unwrap();
        for start in [&state, &reply] {
            for depth in [1, 2, 3, 5] {
                assert_eq!(
                    minimax_best_move(start, Some(depth)),
                    alpha_beta_best_move(start, Some(depth)),
                    "{start} at depth {depth}"
                );
            }
        }
    }
}

#[test]
fn test_search_returns_a_legal_value() {
    for seed in 0..5 {
        for state in random_game(12, seed) {
            let mv = choose_computer_move(&state, Algorithm::AlphaBeta, Some(4));
            if is_terminal(&state) {
                assert_eq!(mv, None);
            } else {
                assert!(legal_move_values(&state).contains(&mv.unwrap()));
            }
        }
    }
}

#[test]
fn test_pruning_reduces_work() {
    let mut rng = Rng::with_seed(77);
    let state = new_game(14, &mut rng).unwrap();
    let mm = search(&state, Algorithm::Minimax, Some(6));
    let ab = search(&state, Algorithm::AlphaBeta, Some(6));
    assert_eq!(mm.best_move, ab.best_move);
    assert!(ab.stats.evaluations <= mm.stats.evaluations);
}

#[test]
fn test_computer_vs_computer_game_finishes() {
    let config = GameConfig {
        length: 15,
        seed: Some(5),
        depth: Some(4),
        ..GameConfig::default()
    };
    let mut rng = config.rng();
    let mut state = config.new_game(&mut rng).unwrap();
    let mut moves = 0;
    while !is_terminal(&state) {
        let value = choose_computer_move(&state, config.algorithm, config.depth).unwrap();
        state = apply_move_by_value(&state, value, &mut rng).unwrap().0;
        moves += 1;
    }
    assert_eq!(moves, 15);
    assert_eq!(state.original_length(), 15);
}

// =============================================================================
// Session protocol
// =============================================================================

#[test]
fn test_session_full_match() {
    let mut session = Session::new(GameConfig {
        seed: Some(9),
        ..GameConfig::default()
    });
    let script = "\
1 algorithm minimax
2 depth 3
3 set_sequence 1 1 1
4 play 2
5 genmove
6 showboard
7 play 0
8 score
9 winner
10 quit
";
    let mut output = Vec::new();
    session.run(script.as_bytes(), &mut output).unwrap();
    let text = String::from_utf8(output).unwrap();

    assert!(text.contains("=4 1\n"));
    assert!(text.contains("=5 1 "));
    assert!(text.contains("=6 [1] A=101 B=101 to_move=A\n"));
    assert!(text.contains("=8 101 102\n"));
    assert!(text.contains("=9 human\n"));
    assert!(!text.contains('?'));
}
