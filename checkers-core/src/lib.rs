//! Checkers rules engine
//!
//! This crate provides the core game logic:
//! - Bit-mask primitives over 64-bit boards
//! - Board geometry (row-major square indexing, coordinate text)
//! - Game state, move/capture generation, validation and application

pub mod bits;
pub mod board;
pub mod game;

// Re-exports for convenient access
pub use board::{ParseSquareError, Square, BOARD_WIDTH, NUM_SQUARES};
pub use game::{Bitboard, GameResult, GameState, MoveKind, Player};
