//! Play command - interactive two-player game
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_game() - the turn loop
//! - Level 3: read_turn(), parse_turn(), apply_turn() - one turn
//! - Level 4: prompts and summary formatting

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use checkers_core::{GameResult, GameState, MoveKind, Player, Square};

use crate::render;

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Show raw piece and king bitboards every turn
    #[arg(long)]
    pub show_bitboards: bool,

    /// Print the end-of-game summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// End-of-game summary
#[derive(Clone, Debug, Serialize)]
pub struct GameSummary {
    pub result: GameResult,
    pub turns: usize,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run the play command against stdin/stdout
pub fn run(args: PlayArgs) -> Result<()> {
    tracing::info!("starting interactive game");

    let stdin = io::stdin();
    let summary = play_game(&args, &mut stdin.lock())?;

    report_summary(&summary, &args)?;
    Ok(())
}

// ============================================================================
// LEVEL 2 - TURN LOOP
// ============================================================================

/// Run turns until one side runs out of pieces or input ends
fn play_game(args: &PlayArgs, input: &mut impl BufRead) -> Result<GameSummary> {
    let mut state = GameState::new();
    let mut player = Player::One;
    let mut turns = 0;

    loop {
        println!("{}", render::board_to_string(&state));
        if args.show_bitboards {
            print_bitboards(&state);
        }

        let result = state.result();
        if result != GameResult::Ongoing {
            return Ok(GameSummary { result, turns });
        }

        let line = match read_turn(player, input)? {
            Some(line) => line,
            None => return Ok(GameSummary { result, turns }), // input closed
        };

        let (from, to) = match parse_turn(&line) {
            Ok(pair) => pair,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        if apply_turn(&mut state, from, to, player) {
            turns += 1;
            player = player.opponent();
        }
    }
}

// ============================================================================
// LEVEL 3 - SINGLE TURN
// ============================================================================

/// Prompt and read one line; `None` on end of input
fn read_turn(player: Player, input: &mut impl BufRead) -> Result<Option<String>> {
    print!("Player {player}'s turn. Enter move (e.g. B6 to A5): ");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let bytes = input.read_line(&mut line).context("failed to read move")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Parse "B6 to A5" (or "B6 A5") into a pair of squares
fn parse_turn(line: &str) -> Result<(Square, Square), String> {
    let tokens: Vec<&str> = line
        .split_whitespace()
        .filter(|t| !t.eq_ignore_ascii_case("to"))
        .collect();

    let &[from, to] = tokens.as_slice() else {
        return Err("Invalid input. Please enter moves like 'B6 to A5'.".to_string());
    };

    let from = from
        .parse::<Square>()
        .map_err(|e| format!("Bad source square: {e}"))?;
    let to = to
        .parse::<Square>()
        .map_err(|e| format!("Bad target square: {e}"))?;
    Ok((from, to))
}

/// Validate and apply one move; false means the player must retry
fn apply_turn(state: &mut GameState, from: Square, to: Square, player: Player) -> bool {
    if state.piece_at(from).map(|(owner, _)| owner) != Some(player) {
        println!("You don't have a piece at {from}.");
        return false;
    }

    match state.is_move_valid(from, to, player) {
        MoveKind::Invalid => {
            if state.mandatory_capture_violation(from, to, player) {
                println!("You must capture if possible.");
            } else {
                println!("Invalid move. Try again.");
            }
            false
        }
        kind => {
            state.make_move(from, to, player);
            tracing::debug!(%from, %to, ?kind, "applied move");
            true
        }
    }
}

// ============================================================================
// LEVEL 4 - OUTPUT
// ============================================================================

fn print_bitboards(state: &GameState) {
    for (label, bb) in [
        ("Player 1 pieces", state.pieces(Player::One)),
        ("Player 2 pieces", state.pieces(Player::Two)),
        ("Kings", state.kings()),
    ] {
        println!("{label}:");
        println!("  Binary:      {}", render::bitboard_binary(bb));
        println!("  Hexadecimal: {}", render::bitboard_hex(bb));
    }
}

fn report_summary(summary: &GameSummary, args: &PlayArgs) -> Result<()> {
    tracing::info!(?summary.result, summary.turns, "game over");

    if args.json {
        let json =
            serde_json::to_string_pretty(summary).context("failed to serialize summary")?;
        println!("{json}");
        return Ok(());
    }

    match summary.result {
        GameResult::PlayerOneWins => println!("Player 1 wins!"),
        GameResult::PlayerTwoWins => println!("Player 2 wins!"),
        GameResult::Ongoing => println!("Game abandoned after {} turns.", summary.turns),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_turn_variants() {
        let b6: Square = "B6".parse().unwrap();
        let a5: Square = "A5".parse().unwrap();
        assert_eq!(parse_turn("B6 to A5"), Ok((b6, a5)));
        assert_eq!(parse_turn("B6 A5"), Ok((b6, a5)));
        assert_eq!(parse_turn("b6 TO a5"), Ok((b6, a5)));
    }

    #[test]
    fn test_parse_turn_rejects_garbage() {
        assert!(parse_turn("").is_err());
        assert!(parse_turn("B6").is_err());
        assert!(parse_turn("B6 to A5 to B4").is_err());
        assert!(parse_turn("Z9 to A5").is_err());
    }

    #[test]
    fn test_scripted_game_reaches_summary() {
        // One simple move each, then input ends
        let script = "C3 to B4\nB6 to C5\n";
        let args = PlayArgs {
            show_bitboards: false,
            json: false,
        };
        let summary = play_game(&args, &mut script.as_bytes()).unwrap();
        assert_eq!(summary.result, GameResult::Ongoing);
        assert_eq!(summary.turns, 2);
    }

    #[test]
    fn test_rejected_move_does_not_consume_turn() {
        // Backward opening move is illegal for Player 1
        let script = "C3 to B2\n";
        let args = PlayArgs {
            show_bitboards: false,
            json: false,
        };
        let summary = play_game(&args, &mut script.as_bytes()).unwrap();
        assert_eq!(summary.turns, 0);
    }
}
