//! Move parser: notation strings to `Move` values
//!
//! Accepted token grammar: `<face>` then nothing, `'` or `2`,
//! with face one of U R F D L B.

use lazy_static::lazy_static;
use regex::Regex;
use crate::types::{CubeError, Face, Move, Result, Turn};

lazy_static! {
    // =========================================================================
    // Standard notation token: R, R', R2
    // =========================================================================
    static ref RE_MOVE: Regex = Regex::new(r"^([URFDLB])('|2)?$").unwrap();

    // =========================================================================
    // Two-phase solver output token: R1, R2, R3, R' (bare face = R1)
    // =========================================================================
    static ref RE_SOLVER_MOVE: Regex = Regex::new(r"^([URFDLB])([123'])?$").unwrap();

    // =========================================================================
    // Solver statistics such as "(19f)"
    // =========================================================================
    static ref RE_SOLVER_STATS: Regex = Regex::new(r"\([^)]*\)").unwrap();
}

/// Parse one move token
pub fn parse_move(token: &str) -> Result<Move> {
    let trimmed = token.trim();
    let caps = RE_MOVE
        .captures(trimmed)
        .ok_or_else(|| CubeError::unknown_move(token))?;

    let face = face_from_capture(&caps[1], token)?;
    let suffix = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    let turn = Turn::from_suffix(suffix).ok_or_else(|| CubeError::unknown_move(token))?;

    Ok(Move::new(face, turn))
}

/// Parse whitespace-separated notation, e.g. "R U R' U'"
///
/// Fails on the first bad token; nothing is partially returned.
pub fn parse_sequence(notation: &str) -> Result<Vec<Move>> {
    notation.split_whitespace().map(parse_move).collect()
}

/// Parse a list of individual tokens
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Move>> {
    tokens.iter().map(|t| parse_move(t.as_ref())).collect()
}

/// Format moves back to notation
pub fn format_sequence(moves: &[Move]) -> String {
    moves.iter().map(Move::to_string).collect::<Vec<_>>().join(" ")
}

/// Parse raw two-phase solver output, e.g. "F3 D3 L2 U1 (19f)"
///
/// Suffix `1` is clockwise, `2` half, `3` or `'` counter-clockwise.
/// Parenthesised statistics are dropped.
pub fn parse_solver_output(raw: &str) -> Result<Vec<Move>> {
    let cleaned = RE_SOLVER_STATS.replace_all(raw, " ");

    cleaned
        .split_whitespace()
        .map(|token| {
            let caps = RE_SOLVER_MOVE
                .captures(token)
                .ok_or_else(|| CubeError::unknown_move(token))?;
            let face = face_from_capture(&caps[1], token)?;
            let turn = match caps.get(2).map(|m| m.as_str()) {
                None | Some("1") => Turn::Clockwise,
                Some("2") => Turn::Half,
                Some("3") | Some("'") => Turn::CounterClockwise,
                Some(_) => return Err(CubeError::unknown_move(token)),
            };
            Ok(Move::new(face, turn))
        })
        .collect()
}

fn face_from_capture(letter: &str, token: &str) -> Result<Face> {
    letter
        .chars()
        .next()
        .and_then(Face::from_letter)
        .ok_or_else(|| CubeError::unknown_move(token))
}

// =============================================================================
// TESTS
// =============================================================================
