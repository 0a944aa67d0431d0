//! Integration tests for the rules engine.
//!
//! Positions are either played out from the start or built directly with
//! `Board::with`, so each test states the exact seed counts it relies on.

use mancala_rust::board::{Board, Pit, Player};
use mancala_rust::constants::TOTAL_SEEDS;
use mancala_rust::rules::{
    apply_move, check_winner, valid_moves, GameState, MoveError, Outcome,
};
use proptest::prelude::*;

// =============================================================================
// Helper functions
// =============================================================================

/// Play a sequence of pit labels from the starting position.
/// Panics on an illegal move, naming it.
fn setup_game(moves: &str) -> GameState {
    let mut game = GameState::new();
    for label in moves.split_whitespace() {
        let pit: Pit = label.parse().unwrap();
        if let Err(e) = game.play(pit) {
            panic!("Illegal move {label} in setup: {e}");
        }
    }
    game
}

/// Pick moves by index into the current valid move list until the game ends
/// or the picks run out, checking conservation after every move.
fn play_by_index(picks: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &i in picks {
        let moves = game.valid_moves();
        if moves.is_empty() {
            break;
        }
        game.play(moves[i % moves.len()]).unwrap();
        assert_eq!(game.board.total(), TOTAL_SEEDS, "seeds lost after move {}", game.n);
    }
    game
}

// =============================================================================
// New game
// =============================================================================

#[test]
fn test_new_game() {
    let game = GameState::new();
    assert_eq!(game.turn, Player::Player1);
    assert_eq!(game.outcome, None);
    assert_eq!(game.board.total(), 48);
    assert_eq!(game.board.side_total(Player::Player1), 24);
    assert_eq!(game.board.side_total(Player::Player2), 24);
}

// =============================================================================
// Extra turns
// =============================================================================

#[test]
fn test_move_a_from_start() {
    let mut board = Board::new();
    let next = apply_move(&mut board, Player::Player1, Pit::A).unwrap();
    assert_eq!(next, Player::Player2);
    assert_eq!(board[Pit::E], 5);
    assert_eq!(board[Pit::F], 4);
}

#[test]
fn test_extra_turn_for_each_player() {
    // Four seeds from C (Player 1) or J (Player 2) end in the mover's store
    let game = setup_game("C");
    assert_eq!(game.turn, Player::Player1);

    let game = setup_game("A J");
    assert_eq!(game.turn, Player::Player2);
    assert_eq!(game.board[Pit::Store2], 1);
}

#[test]
fn test_extra_turn_regardless_of_store_content() {
    let board = Board::new().with(&[(Pit::Store1, 20), (Pit::E, 2)]);
    let mut board = board;
    assert_eq!(apply_move(&mut board, Player::Player1, Pit::E), Ok(Player::Player1));
    assert_eq!(board[Pit::Store1], 21);
}

#[test]
fn test_chained_extra_turns() {
    // F then E, both with exactly enough seeds to reach the store
    let board = Board::new().with(&[(Pit::E, 2), (Pit::F, 1)]);
    let mut game = GameState::from_board(board, Player::Player1);
    assert!(game.play(Pit::F).unwrap().extra_turn);
    assert!(game.play(Pit::E).unwrap().extra_turn);
    assert_eq!(game.turn, Player::Player1);
    assert_eq!(game.board[Pit::Store1], 2);
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_capture_into_c() {
    // B has one seed and lands in the empty C, opposite I
    let board = Board::new().with(&[(Pit::B, 1), (Pit::C, 0), (Pit::I, 6)]);
    let total = board.total();
    let mut game = GameState::from_board(board, Player::Player1);

    let report = game.play(Pit::B).unwrap();
    assert_eq!(report.landing, Pit::C);
    assert_eq!(report.captured, 7);
    assert_eq!(game.board[Pit::I], 0);
    assert_eq!(game.board[Pit::C], 0);
    assert_eq!(game.board[Pit::Store1], 7);
    assert_eq!(game.board.total(), total);
    assert_eq!(game.turn, Player::Player2);
}

#[test]
fn test_capture_after_full_lap() {
    // 13 seeds from A come all the way back to the emptied A
    let board = Board::new().with(&[(Pit::A, 13)]);
    let mut game = GameState::from_board(board, Player::Player1);
    let report = game.play(Pit::A).unwrap();
    assert_eq!(report.landing, Pit::A);
    // G had 4 and received one seed on the way round
    assert_eq!(report.captured, 6);
    assert_eq!(game.board[Pit::G], 0);
    assert_eq!(game.board[Pit::A], 0);
    assert_eq!(game.board[Pit::Store1], 1 + 6);
    assert_eq!(game.board[Pit::Store2], 0);
}

#[test]
fn test_captured_seeds_go_to_own_store() {
    // Player 2's capture lands in Store2 even though sowing never reached it
    let board = Board::empty().with(&[(Pit::K, 1), (Pit::E, 9), (Pit::A, 1), (Pit::G, 2)]);
    let mut game = GameState::from_board(board, Player::Player2);
    let report = game.play(Pit::K).unwrap();
    assert_eq!(report.landing, Pit::J);
    assert_eq!(report.captured, 0, "J faces D, which is empty");

    let board = Board::empty().with(&[(Pit::J, 1), (Pit::E, 9), (Pit::A, 1), (Pit::G, 2)]);
    let mut game = GameState::from_board(board, Player::Player2);
    let report = game.play(Pit::J).unwrap();
    assert_eq!(report.landing, Pit::I);
    assert_eq!(report.captured, 0);

    let board = Board::empty().with(&[(Pit::L, 1), (Pit::E, 9), (Pit::A, 1), (Pit::G, 2)]);
    let mut game = GameState::from_board(board, Player::Player2);
    let report = game.play(Pit::L).unwrap();
    assert_eq!(report.landing, Pit::K);
    assert_eq!(report.captured, 10);
    assert_eq!(game.board[Pit::Store2], 10);
    assert_eq!(game.board[Pit::Store1], 0);
}

// =============================================================================
// Harvest and winner
// =============================================================================

#[test]
fn test_harvest_when_player1_runs_out() {
    // Player 1's last seed goes into the store; Player 2 keeps 9 seeds
    let board = Board::empty().with(&[
        (Pit::F, 1),
        (Pit::Store1, 20),
        (Pit::H, 4),
        (Pit::K, 5),
        (Pit::Store2, 18),
    ]);
    let mut game = GameState::from_board(board, Player::Player1);
    let report = game.play(Pit::F).unwrap();

    assert_eq!(report.outcome, Some(Outcome::Winner(Player::Player2)));
    assert_eq!(game.board[Pit::Store1], 21);
    assert_eq!(game.board[Pit::Store2], 27);
    assert_eq!(game.board.side_total(Player::Player2), 0);
    assert_eq!(game.board.total(), 48);
}

#[test]
fn test_harvest_decides_tie_and_winner() {
    let mut board = Board::empty().with(&[(Pit::Store1, 24), (Pit::Store2, 20), (Pit::L, 4)]);
    assert_eq!(check_winner(&mut board), Some(Outcome::Tie));

    let mut board = Board::empty().with(&[(Pit::Store1, 25), (Pit::Store2, 20), (Pit::L, 3)]);
    assert_eq!(check_winner(&mut board), Some(Outcome::Winner(Player::Player1)));
}

#[test]
fn test_finished_game_is_frozen() {
    let board = Board::empty().with(&[(Pit::Store1, 30), (Pit::G, 18)]);
    let mut game = GameState::from_board(board, Player::Player2);
    assert!(game.is_over());
    assert_eq!(game.board[Pit::Store2], 18);
    assert_eq!(game.play(Pit::G), Err(MoveError::GameOver));
    let mut board = game.board;
    assert_eq!(check_winner(&mut board), game.outcome);
    assert_eq!(board, game.board);
}

// =============================================================================
// Full games
// =============================================================================

#[test]
fn test_first_move_every_time_finishes() {
    let game = play_by_index(&[0; 500]);
    assert!(game.is_over());
    let board = &game.board;
    assert_eq!(board.store(Player::Player1) + board.store(Player::Player2), 48);
}

proptest! {
    #[test]
    fn prop_seeds_are_conserved(picks in prop::collection::vec(0usize..6, 0..200)) {
        let game = play_by_index(&picks);
        prop_assert_eq!(game.board.total(), TOTAL_SEEDS);
        if game.is_over() {
            prop_assert_eq!(game.board.side_total(Player::Player1), 0);
            prop_assert_eq!(game.board.side_total(Player::Player2), 0);
        }
    }

    #[test]
    fn prop_valid_moves_are_accepted(picks in prop::collection::vec(0usize..6, 0..60)) {
        let game = play_by_index(&picks);
        if !game.is_over() {
            let moves = valid_moves(&game.board, game.turn);
            prop_assert!(!moves.is_empty());
            for pit in moves {
                let mut board = game.board;
                prop_assert!(apply_move(&mut board, game.turn, pit).is_ok());
            }
        }
    }
}
