//! Board and bitboard rendering
//!
//! Pure string builders; the play loop decides when to print them.

use checkers_core::{Bitboard, GameState, Player, Square, BOARD_WIDTH};
use std::fmt::Write;

const RULE: &str = "  +---+---+---+---+---+---+---+---+";

/// Render the board as a bordered ASCII grid.
///
/// Men print as `1`/`2`, kings as `K` (Player 1) and `k` (Player 2),
/// empty playable squares as `.`, light squares as blanks.
pub fn board_to_string(state: &GameState) -> String {
    let mut out = String::new();
    out.push_str("\n    A   B   C   D   E   F   G   H\n");
    out.push_str(RULE);
    out.push('\n');
    for row in 0..BOARD_WIDTH {
        let _ = write!(out, "{} ", 8 - row);
        for col in 0..BOARD_WIDTH {
            out.push('|');
            let square = Square::from_row_col(row, col);
            if !square.is_playable() {
                out.push_str("   ");
                continue;
            }
            let cell = match state.piece_at(square) {
                Some((Player::One, true)) => " K ",
                Some((Player::One, false)) => " 1 ",
                Some((Player::Two, true)) => " k ",
                Some((Player::Two, false)) => " 2 ",
                None => " . ",
            };
            out.push_str(cell);
        }
        out.push_str("|\n");
        out.push_str(RULE);
        out.push('\n');
    }
    out
}

/// Bitboard as 64 binary digits, most significant first, byte-grouped
pub fn bitboard_binary(bb: Bitboard) -> String {
    let mut out = String::new();
    for i in (0..64).rev() {
        out.push(if (bb >> i) & 1 == 1 { '1' } else { '0' });
        if i % 8 == 0 && i != 0 {
            out.push(' ');
        }
    }
    out
}

/// Bitboard as a zero-padded hex literal
pub fn bitboard_hex(bb: Bitboard) -> String {
    format!("0x{bb:016X}")
}
