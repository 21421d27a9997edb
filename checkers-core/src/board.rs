//! Board geometry: row-major square indexing and coordinate text
//!
//! Squares are numbered 0..63, row 0 topmost (`index = row * 8 + col`).
//! Pieces may only sit on the dark squares, where `(row + col) % 2 == 1`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Squares per row / rows per board
pub const BOARD_WIDTH: u8 = 8;

/// Total squares on the board
pub const NUM_SQUARES: u8 = 64;

/// A board square, identified by its flat index 0..63
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    /// Wrap a flat index. Caller guarantees `index < 64`.
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn row(self) -> u8 {
        self.0 / BOARD_WIDTH
    }

    pub const fn col(self) -> u8 {
        self.0 % BOARD_WIDTH
    }

    pub const fn from_row_col(row: u8, col: u8) -> Self {
        Self(row * BOARD_WIDTH + col)
    }

    /// Check if pieces may sit on this square
    pub const fn is_playable(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }
}

/// Why a coordinate string did not resolve to a square
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseSquareError {
    #[error("expected a column letter followed by a row digit, e.g. B6")]
    Malformed,
    #[error("column {0:?} out of range, use A-H")]
    ColumnOutOfRange(char),
    #[error("row {0} out of range, use 1-8")]
    RowOutOfRange(u8),
    #[error("that square is not playable")]
    Unplayable,
}

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Parse a board coordinate like "B6" (case-insensitive).
    ///
    /// Column letters A-H map to columns 0-7; row digits 1-8 map to
    /// array rows 7-0 (row 8 prints at the top of the board).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col_char = chars.next().ok_or(ParseSquareError::Malformed)?;
        let row_digits = chars.as_str();

        let col_char = col_char.to_ascii_uppercase();
        if !col_char.is_ascii_alphabetic() {
            return Err(ParseSquareError::Malformed);
        }
        if !('A'..='H').contains(&col_char) {
            return Err(ParseSquareError::ColumnOutOfRange(col_char));
        }
        let col = col_char as u8 - b'A';

        let row: u8 = row_digits
            .parse()
            .map_err(|_| ParseSquareError::Malformed)?;
        if !(1..=8).contains(&row) {
            return Err(ParseSquareError::RowOutOfRange(row));
        }
        let row_idx = 8 - row; // row 8 -> array row 0

        let square = Square::from_row_col(row_idx, col);
        if !square.is_playable() {
            return Err(ParseSquareError::Unplayable);
        }
        Ok(square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col()) as char, 8 - self.row())
    }
}
