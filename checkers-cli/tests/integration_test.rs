//! Integration tests for the checkers engine
//!
//! Drives full turns through the public API the way the play command
//! does: parse coordinates, validate, apply, check the result.

use checkers_core::{GameResult, GameState, MoveKind, Player, Square};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn parse(coord: &str) -> Square {
    coord.parse().unwrap_or_else(|e| panic!("{coord}: {e}"))
}

/// Validate then apply one turn, asserting the expected classification
fn turn(state: &mut GameState, player: Player, from: &str, to: &str, expect: MoveKind) {
    let (from, to) = (parse(from), parse(to));
    assert_eq!(
        state.piece_at(from).map(|(owner, _)| owner),
        Some(player),
        "player {player} has no piece at {from}"
    );
    assert_eq!(state.is_move_valid(from, to, player), expect);
    state.make_move(from, to, player);
}

// ============================================================================
// FULL-GAME SCENARIOS
// ============================================================================

#[test]
fn test_opening_exchange() {
    let mut state = GameState::new();

    turn(&mut state, Player::One, "C3", "B4", MoveKind::Simple);
    turn(&mut state, Player::Two, "D6", "C5", MoveKind::Simple);
    // B4 now has a capture over C5, so it is forced
    assert!(state.has_any_captures(Player::One));
    turn(&mut state, Player::One, "B4", "D6", MoveKind::Capture);
    assert_eq!(state.pieces(Player::Two).count_ones(), 11);
    // Player 2 recaptures
    turn(&mut state, Player::Two, "C7", "E5", MoveKind::Capture);
    assert_eq!(state.pieces(Player::One).count_ones(), 11);
    assert_eq!(state.result(), GameResult::Ongoing);
}

#[test]
fn test_capture_is_forced_across_pieces() {
    let mut state = GameState::new();
    turn(&mut state, Player::One, "C3", "B4", MoveKind::Simple);
    turn(&mut state, Player::Two, "D6", "C5", MoveKind::Simple);

    // A quiet move elsewhere is rejected while B4 can jump
    let (from, to) = (parse("E3"), parse("D4"));
    assert_eq!(state.is_move_valid(from, to, Player::One), MoveKind::Invalid);
    assert!(state.mandatory_capture_violation(from, to, Player::One));
}

#[test]
fn test_promotion_during_play() {
    let mut state = GameState::empty();
    state.add_piece(Player::Two, parse("B2"), false);
    state.add_piece(Player::One, parse("H8"), false);

    // Player 2 promotes on coordinate row 1
    turn(&mut state, Player::Two, "B2", "A1", MoveKind::Simple);
    assert_eq!(state.piece_at(parse("A1")), Some((Player::Two, true)));

    let mut state = GameState::empty();
    state.add_piece(Player::One, parse("B7"), false);
    state.add_piece(Player::Two, parse("H2"), false);

    turn(&mut state, Player::One, "B7", "C8", MoveKind::Simple);
    assert_eq!(state.piece_at(parse("C8")), Some((Player::One, true)));
    // The new king may now move back down
    turn(&mut state, Player::One, "C8", "D7", MoveKind::Simple);
    assert_eq!(state.piece_at(parse("D7")), Some((Player::One, true)));
}

#[test]
fn test_capturing_down_to_a_win() {
    let mut state = GameState::empty();
    state.add_piece(Player::One, parse("C3"), false);
    state.add_piece(Player::Two, parse("D4"), false);
    state.add_piece(Player::Two, parse("D6"), false);

    turn(&mut state, Player::One, "C3", "E5", MoveKind::Capture);
    assert_eq!(state.result(), GameResult::Ongoing);
    turn(&mut state, Player::One, "E5", "C7", MoveKind::Capture);

    assert_eq!(state.pieces(Player::Two), 0);
    assert_eq!(state.result(), GameResult::PlayerOneWins);
}

// ============================================================================
// COORDINATE CONTRACT
// ============================================================================

#[test]
fn test_coordinate_convention() {
    // Row 8 is array row 0; column A is 0
    assert_eq!(parse("A1").index(), 56);
    assert_eq!(parse("H8").index(), 7);
    assert_eq!(parse("B6").index(), 17);
}

#[test]
fn test_unplayable_coordinates_rejected() {
    assert!("A2".parse::<Square>().is_err()); // light square
    assert!("I1".parse::<Square>().is_err());
    assert!("A0".parse::<Square>().is_err());
}
