//! Game state, move generation and move application
//!
//! The board is three 64-bit masks: one per player's pieces and one for
//! king status. Squares are identified purely by flat index; ownership
//! is recovered by testing the two piece masks. Everything here is
//! synchronous and allocation-free.

use crate::bits;
use crate::board::{Square, NUM_SQUARES};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CONSTANTS
// ============================================================================

/// A 64-bit set of board squares, one bit per square index
pub type Bitboard = u64;

/// Diagonal step deltas toward row 0 (up-left, up-right)
const UP_DELTAS: [i8; 2] = [-9, -7];

/// Diagonal step deltas toward row 7 (down-left, down-right)
const DOWN_DELTAS: [i8; 2] = [7, 9];

/// All four diagonal deltas, for kings
const KING_DELTAS: [i8; 4] = [-9, -7, 7, 9];

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player identity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row that promotes this player's pieces to kings
    pub fn back_rank(self) -> u8 {
        match self {
            Player::One => 0,
            Player::Two => 7,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "1"),
            Player::Two => write!(f, "2"),
        }
    }
}

/// Classification of a proposed move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    Invalid,
    Simple,
    Capture,
}

/// Game result, derived from the piece masks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    PlayerOneWins,
    PlayerTwoWins,
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Game state, mutated in place by [`GameState::make_move`]
///
/// Invariants:
/// - the two piece masks are disjoint
/// - every king bit has a matching piece bit
/// - only playable squares (`(row + col) % 2 == 1`) are ever set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    player_one_pieces: Bitboard,
    player_two_pieces: Bitboard,
    kings: Bitboard,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Standard initial layout: Player 2 on the playable squares of
    /// rows 0-2, Player 1 on rows 5-7, twelve pieces each, no kings.
    pub fn new() -> Self {
        let mut state = Self::empty();
        for row in 0..3 {
            for col in 0..8 {
                let sq = Square::from_row_col(row, col);
                if sq.is_playable() {
                    bits::set(&mut state.player_two_pieces, sq.index());
                }
            }
        }
        for row in 5..8 {
            for col in 0..8 {
                let sq = Square::from_row_col(row, col);
                if sq.is_playable() {
                    bits::set(&mut state.player_one_pieces, sq.index());
                }
            }
        }
        state
    }

    /// Empty board, for setting up custom positions
    pub fn empty() -> Self {
        Self {
            player_one_pieces: 0,
            player_two_pieces: 0,
            kings: 0,
        }
    }

    /// Place a piece on an empty playable square
    pub fn add_piece(&mut self, player: Player, square: Square, king: bool) {
        debug_assert!(square.is_playable(), "piece on unplayable square");
        debug_assert!(self.piece_at(square).is_none(), "square already occupied");
        bits::set(self.pieces_mut(player), square.index());
        if king {
            bits::set(&mut self.kings, square.index());
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Piece mask for one player
    pub fn pieces(&self, player: Player) -> Bitboard {
        match player {
            Player::One => self.player_one_pieces,
            Player::Two => self.player_two_pieces,
        }
    }

    /// King mask (both players)
    pub fn kings(&self) -> Bitboard {
        self.kings
    }

    /// Owner and king status of the piece on a square, if any
    pub fn piece_at(&self, square: Square) -> Option<(Player, bool)> {
        let king = bits::get(self.kings, square.index());
        if bits::get(self.player_one_pieces, square.index()) {
            Some((Player::One, king))
        } else if bits::get(self.player_two_pieces, square.index()) {
            Some((Player::Two, king))
        } else {
            None
        }
    }

    /// Game result: a side with no pieces left has lost
    pub fn result(&self) -> GameResult {
        if self.player_one_pieces == 0 {
            GameResult::PlayerTwoWins
        } else if self.player_two_pieces == 0 {
            GameResult::PlayerOneWins
        } else {
            GameResult::Ongoing
        }
    }

    fn occupied(&self) -> Bitboard {
        self.player_one_pieces | self.player_two_pieces
    }

    fn pieces_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::One => &mut self.player_one_pieces,
            Player::Two => &mut self.player_two_pieces,
        }
    }

    fn step_deltas(&self, from: Square, player: Player) -> &'static [i8] {
        if bits::get(self.kings, from.index()) {
            &KING_DELTAS
        } else {
            match player {
                Player::One => &UP_DELTAS,
                Player::Two => &DOWN_DELTAS,
            }
        }
    }

    // ========================================================================
    // MOVE GENERATION
    // ========================================================================

    /// Destinations reachable by a single diagonal step from `from`
    pub fn generate_moves(&self, from: Square, player: Player) -> Bitboard {
        let mut moves: Bitboard = 0;
        let occupied = self.occupied();

        for &delta in self.step_deltas(from, player) {
            let target = from.index() as i16 + delta as i16;
            if !(0..NUM_SQUARES as i16).contains(&target) {
                continue;
            }
            let target = Square::new(target as u8);
            if bits::get(occupied, target.index()) {
                continue;
            }
            if !is_diagonal(from, target, 1) || !target.is_playable() {
                continue;
            }
            bits::set(&mut moves, target.index());
        }
        moves
    }

    /// Landing squares of legal jumps from `from`
    ///
    /// A jump is legal when the adjacent diagonal square holds an
    /// opponent piece and the square beyond it is empty and playable.
    pub fn generate_captures(&self, from: Square, player: Player) -> Bitboard {
        let mut captures: Bitboard = 0;
        let occupied = self.occupied();
        let opponent_pieces = self.pieces(player.opponent());

        for &delta in self.step_deltas(from, player) {
            let middle = from.index() as i16 + delta as i16;
            let target = from.index() as i16 + 2 * delta as i16;
            if !(0..NUM_SQUARES as i16).contains(&middle)
                || !(0..NUM_SQUARES as i16).contains(&target)
            {
                continue;
            }
            let target = Square::new(target as u8);
            if !bits::get(opponent_pieces, middle as u8) || bits::get(occupied, target.index()) {
                continue;
            }
            if !is_diagonal(from, target, 2) || !target.is_playable() {
                continue;
            }
            bits::set(&mut captures, target.index());
        }
        captures
    }

    /// Check whether any of the player's pieces can capture
    ///
    /// Recomputed from the live masks on every call; capture
    /// availability depends on global occupancy and must not be cached.
    pub fn has_any_captures(&self, player: Player) -> bool {
        let pieces = self.pieces(player);
        for idx in 0..NUM_SQUARES {
            if bits::get(pieces, idx) && self.generate_captures(Square::new(idx), player) != 0 {
                return true;
            }
        }
        false
    }

    // ========================================================================
    // VALIDATION
    // ========================================================================

    /// Classify a proposed move. Pure; does not touch the state.
    ///
    /// When any of the player's pieces can capture, capture is
    /// mandatory: only a jump by this piece is accepted, even if a
    /// different piece holds the capture.
    pub fn is_move_valid(&self, from: Square, to: Square, player: Player) -> MoveKind {
        let moves = self.generate_moves(from, player);
        let captures = self.generate_captures(from, player);

        if self.has_any_captures(player) {
            if bits::get(captures, to.index()) {
                MoveKind::Capture
            } else {
                MoveKind::Invalid
            }
        } else if bits::get(captures, to.index()) {
            MoveKind::Capture
        } else if bits::get(moves, to.index()) {
            MoveKind::Simple
        } else {
            MoveKind::Invalid
        }
    }

    /// Check whether (from, to) is an otherwise-legal simple move that
    /// was rejected only because a capture exists elsewhere. Lets the
    /// caller surface a specific "you must capture" message.
    pub fn mandatory_capture_violation(&self, from: Square, to: Square, player: Player) -> bool {
        self.has_any_captures(player)
            && !bits::get(self.generate_captures(from, player), to.index())
            && bits::get(self.generate_moves(from, player), to.index())
    }

    // ========================================================================
    // APPLY MOVE
    // ========================================================================

    /// Apply a move that was already accepted by [`is_move_valid`].
    ///
    /// The classification is re-derived here rather than taken as a
    /// parameter, so callers cannot skip validation and hand in a stale
    /// result. Applying a pair that was never validated leaves the
    /// board in an undefined state.
    ///
    /// [`is_move_valid`]: GameState::is_move_valid
    pub fn make_move(&mut self, from: Square, to: Square, player: Player) {
        let kind = self.is_move_valid(from, to, player);

        // Move the piece
        let mover = self.pieces_mut(player);
        bits::clear(mover, from.index());
        bits::set(mover, to.index());

        // King status: promote on the back rank, otherwise carry the
        // flag from the source square
        let was_king = bits::get(self.kings, from.index());
        bits::clear(&mut self.kings, from.index());
        if to.row() == player.back_rank() || was_king {
            bits::set(&mut self.kings, to.index());
        } else {
            // Stale bit left by a previously captured king
            bits::clear(&mut self.kings, to.index());
        }

        // Remove the jumped piece
        if kind == MoveKind::Capture {
            let from_idx = from.index() as i16;
            let captured = (from_idx + (to.index() as i16 - from_idx) / 2) as u8;
            let opponent = self.pieces_mut(player.opponent());
            bits::clear(opponent, captured);
            bits::clear(&mut self.kings, captured);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// GEOMETRY
// ============================================================================

/// True diagonal displacement of exactly `distance` in both axes
///
/// Raw index arithmetic on a flat 64-square board conflates diagonal
/// steps with same-row wraparounds near the edges; the row/col deltas
/// have to be checked explicitly.
fn is_diagonal(from: Square, to: Square, distance: u8) -> bool {
    let d_row = (to.row() as i8 - from.row() as i8).unsigned_abs();
    let d_col = (to.col() as i8 - from.col() as i8).unsigned_abs();
    d_row == distance && d_col == distance
}

// ============================================================================
// TESTS
// ============================================================================
