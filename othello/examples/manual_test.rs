/// Manual walkthrough to verify game logic correctness
use othello::{GameState, Move, Player};

fn main() {
    println!("=== Othello Engine Manual Test ===\n");

    let mut state = GameState::new();

    // Test 1: Initial state
    println!("Test 1: Initial Board State");
    println!("{}", state.board());
    println!(
        "Black: {}, White: {}",
        state.count_stones(Player::Black),
        state.count_stones(Player::White)
    );
    println!("To move: {:?}", state.to_move());
    assert_eq!(state.count_stones(Player::Black), 2);
    assert_eq!(state.count_stones(Player::White), 2);
    assert_eq!(state.to_move(), Some(Player::Black));
    println!("* Initial state correct\n");

    // Test 2: Legal move enumeration
    println!("Test 2: Legal Moves");
    let moves = state.legal_moves();
    for &(row, col) in &moves {
        println!("  {} ({}, {})", Move::Place { row, col }, row, col);
    }
    assert_eq!(moves, vec![(2, 3), (3, 2), (4, 5), (5, 4)]);
    println!("* Legal move enumeration correct\n");

    // Test 3: Apply a move
    println!("Test 3: Black plays D3");
    let flipped = state.play(Move::Place { row: 2, col: 3 }).unwrap();
    println!("Stones flipped: {}", flipped);
    println!("{}", state.board());
    assert_eq!(flipped, 1);
    assert_eq!(state.count_stones(Player::Black), 4);
    assert_eq!(state.count_stones(Player::White), 1);
    assert_eq!(state.to_move(), Some(Player::White));
    println!("* Move application correct\n");

    // Test 4: Illegal move is rejected
    println!("Test 4: White tries A1");
    let err = state.play(Move::Place { row: 0, col: 0 }).unwrap_err();
    println!("Rejected: {}", err);
    assert_eq!(state.count_stones(Player::White), 1);
    println!("* Illegal move rejected, state unchanged\n");

    // Test 5: Move log
    println!("Test 5: Move Log");
    for record in state.move_log() {
        println!("  turn {}: {:?} -> {}", record.turn, record.player, record.mv);
    }
    assert_eq!(state.turn_count(), 1);
    println!("* Move log consistent\n");

    println!("=== All Manual Tests Passed! ===");
}
