//! Move Engine: applies face turns to a facelet state
//!
//! Every operation here mutates the `FaceletState` it is given, in place.
//! Callers that need the previous state keep a `clone()`.
//!
//! A clockwise quarter turn of face X is two permutations applied together:
//! - the 9 stickers of X rotate as a 3x3 grid (`FACE_ROTATION`)
//! - the 12 neighbouring stickers bordering X shift one step around X
//!   (`*_BAND` tables)
//!
//! `'` and `2` are three and two clockwise quarter turns.

use tracing::debug;
use crate::core::move_parser::{parse_move, parse_sequence, parse_tokens};
use crate::types::{Color, Face, FaceletState, Move, Result};

/// Clockwise grid rotation: `new[i] = old[FACE_ROTATION[i]]`
///
/// ```text
/// 0 1 2      6 3 0
/// 3 4 5  ->  7 4 1
/// 6 7 8      8 5 2
/// ```
pub const FACE_ROTATION: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Three stickers of one neighbouring face that border the turned face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandSegment {
    pub face: Face,
    pub stickers: [usize; 3],
}

const fn seg(face: Face, stickers: [usize; 3]) -> BandSegment {
    BandSegment { face, stickers }
}

// =============================================================================
// BAND TABLES [C]
//
// For a clockwise quarter turn, the sticker at `band[k].stickers[j]` moves to
// `band[(k + 1) % 4].stickers[j]`. Order within a segment is significant: a
// reversed triple is how a row on one face maps onto a column read the other
// way round on the next.
// =============================================================================

pub static U_BAND: [BandSegment; 4] = [
    seg(Face::Front, [0, 1, 2]),
    seg(Face::Left, [0, 1, 2]),
    seg(Face::Back, [0, 1, 2]),
    seg(Face::Right, [0, 1, 2]),
];

pub static D_BAND: [BandSegment; 4] = [
    seg(Face::Front, [6, 7, 8]),
    seg(Face::Right, [6, 7, 8]),
    seg(Face::Back, [6, 7, 8]),
    seg(Face::Left, [6, 7, 8]),
];

pub static R_BAND: [BandSegment; 4] = [
    seg(Face::Front, [2, 5, 8]),
    seg(Face::Up, [2, 5, 8]),
    seg(Face::Back, [6, 3, 0]),
    seg(Face::Down, [2, 5, 8]),
];

pub static L_BAND: [BandSegment; 4] = [
    seg(Face::Up, [0, 3, 6]),
    seg(Face::Front, [0, 3, 6]),
    seg(Face::Down, [0, 3, 6]),
    seg(Face::Back, [8, 5, 2]),
];

pub static F_BAND: [BandSegment; 4] = [
    seg(Face::Up, [6, 7, 8]),
    seg(Face::Right, [0, 3, 6]),
    seg(Face::Down, [2, 1, 0]),
    seg(Face::Left, [8, 5, 2]),
];

pub static B_BAND: [BandSegment; 4] = [
    seg(Face::Up, [2, 1, 0]),
    seg(Face::Left, [0, 3, 6]),
    seg(Face::Down, [6, 7, 8]),
    seg(Face::Right, [8, 5, 2]),
];

/// Band table for a face
pub fn band(face: Face) -> &'static [BandSegment; 4] {
    match face {
        Face::Up => &U_BAND,
        Face::Down => &D_BAND,
        Face::Right => &R_BAND,
        Face::Left => &L_BAND,
        Face::Front => &F_BAND,
        Face::Back => &B_BAND,
    }
}

/// One clockwise quarter turn of `face`
fn quarter_turn(state: &mut FaceletState, face: Face) {
    let old = *state.face(face);
    let turned = state.face_mut(face);
    for (i, &src) in FACE_ROTATION.iter().enumerate() {
        turned[i] = old[src];
    }

    let band = band(face);
    let mut carried = [[Color::White; 3]; 4];
    for (k, segment) in band.iter().enumerate() {
        for (j, &i) in segment.stickers.iter().enumerate() {
            carried[k][j] = state.sticker(segment.face, i);
        }
    }
    for (k, colors) in carried.iter().enumerate() {
        let dst = &band[(k + 1) % 4];
        for (j, &color) in colors.iter().enumerate() {
            state.set_sticker(dst.face, dst.stickers[j], color);
        }
    }
}

/// Apply one move in place
pub fn apply_move(state: &mut FaceletState, mv: Move) {
    for _ in 0..mv.turn.quarter_turns() {
        quarter_turn(state, mv.face);
    }
}

/// Parse and apply one token; the state is untouched on error
pub fn apply_token(state: &mut FaceletState, token: &str) -> Result<Move> {
    let mv = parse_move(token)?;
    apply_move(state, mv);
    Ok(mv)
}

/// Apply moves left to right
pub fn apply_sequence(state: &mut FaceletState, moves: &[Move]) {
    debug!(count = moves.len(), "applying move sequence");
    for &mv in moves {
        apply_move(state, mv);
    }
}

/// Parse every token first, then apply; the state is untouched on error
pub fn apply_tokens<S: AsRef<str>>(state: &mut FaceletState, tokens: &[S]) -> Result<Vec<Move>> {
    let moves = parse_tokens(tokens)?;
    apply_sequence(state, &moves);
    Ok(moves)
}

/// Parse whitespace-separated notation, then apply
pub fn apply_notation(state: &mut FaceletState, notation: &str) -> Result<Vec<Move>> {
    let moves = parse_sequence(notation)?;
    apply_sequence(state, &moves);
    Ok(moves)
}

/// Solved state with `notation` applied
pub fn state_after(notation: &str) -> Result<FaceletState> {
    let mut state = FaceletState::solved();
    apply_notation(&mut state, notation)?;
    Ok(state)
}

/// Token that undoes `token`: `R` -> `R'`, `R'` -> `R`, `R2` -> `R2`
pub fn invert_move(token: &str) -> Result<String> {
    Ok(parse_move(token)?.inverse().to_string())
}

/// Sequence that undoes `moves`: reversed, each move inverted
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CubeError, Turn};
    use crate::CENTER_INDEX;

    fn all_moves() -> Vec<Move> {
        let mut moves = Vec::new();
        for face in Face::ALL {
            for turn in [Turn::Clockwise, Turn::Half, Turn::CounterClockwise] {
                moves.push(Move::new(face, turn));
            }
        }
        moves
    }

    /// A state where every sticker is distinguishable enough to catch
    /// off-by-one table errors
    fn scrambled() -> FaceletState {
        state_after("R U2 F' L D B2 R' U F2 D' L2 B").unwrap()
    }

    #[test]
    fn test_face_rotation_is_grid_rotation() {
        // new[r][c] = old[2 - c][r]
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(FACE_ROTATION[r * 3 + c], (2 - c) * 3 + r);
            }
        }
    }

    #[test]
    fn test_band_segments_lie_on_face_border() {
        let border_lines: [[usize; 3]; 4] = [[0, 1, 2], [6, 7, 8], [0, 3, 6], [2, 5, 8]];
        for face in Face::ALL {
            for segment in band(face) {
                assert_ne!(segment.face, face);
                let mut sorted = segment.stickers;
                sorted.sort();
                assert!(border_lines.contains(&sorted), "{:?} not a border line", segment);
            }
        }
    }

    #[test]
    fn test_band_visits_four_distinct_neighbours() {
        for face in Face::ALL {
            let mut faces: Vec<Face> = band(face).iter().map(|s| s.face).collect();
            faces.sort();
            faces.dedup();
            assert_eq!(faces.len(), 4);
        }
    }

    #[test]
    fn test_move_then_inverse_restores() {
        let start = scrambled();
        for mv in all_moves() {
            let mut state = start.clone();
            apply_move(&mut state, mv);
            apply_move(&mut state, mv.inverse());
            assert_eq!(state, start, "{} then {} did not restore", mv, mv.inverse());
        }
    }

    #[test]
    fn test_periodicity() {
        let start = scrambled();
        for face in Face::ALL {
            let mut state = start.clone();
            for _ in 0..4 {
                apply_move(&mut state, Move::new(face, Turn::Clockwise));
            }
            assert_eq!(state, start, "{}x4", face);

            let mut state = start.clone();
            for _ in 0..2 {
                apply_move(&mut state, Move::new(face, Turn::Half));
            }
            assert_eq!(state, start, "{}2x2", face);
        }
    }

    #[test]
    fn test_single_moves_change_state() {
        for mv in all_moves() {
            let mut state = FaceletState::solved();
            apply_move(&mut state, mv);
            assert!(!state.is_solved(), "{} left cube solved", mv);
        }
    }

    #[test]
    fn test_centers_never_move() {
        let mut state = FaceletState::solved();
        for mv in all_moves() {
            apply_move(&mut state, mv);
            for face in Face::ALL {
                assert_eq!(state.sticker(face, CENTER_INDEX), face.home_color());
            }
        }
    }

    #[test]
    fn test_color_counts_preserved() {
        let state = scrambled();
        assert!(state.check_color_counts().is_ok());
    }

    #[test]
    fn test_prime_is_three_quarters() {
        for face in Face::ALL {
            let mut a = scrambled();
            let mut b = a.clone();
            apply_move(&mut a, Move::new(face, Turn::CounterClockwise));
            for _ in 0..3 {
                apply_move(&mut b, Move::new(face, Turn::Clockwise));
            }
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_r_moves_front_column_to_up() {
        let mut state = FaceletState::solved();
        apply_token(&mut state, "R").unwrap();
        for i in [2, 5, 8] {
            assert_eq!(state.sticker(Face::Up, i), Color::Green);
            assert_eq!(state.sticker(Face::Front, i), Color::Yellow);
            assert_eq!(state.sticker(Face::Down, i), Color::Blue);
        }
        for i in [0, 3, 6] {
            assert_eq!(state.sticker(Face::Back, i), Color::White);
        }
    }

    #[test]
    fn test_u_moves_front_row_to_left() {
        let mut state = FaceletState::solved();
        apply_token(&mut state, "U").unwrap();
        for i in 0..3 {
            assert_eq!(state.sticker(Face::Left, i), Color::Green);
            assert_eq!(state.sticker(Face::Front, i), Color::Red);
        }
    }

    #[test]
    fn test_sexy_move_has_order_six() {
        let mut state = FaceletState::solved();
        for i in 1..=6 {
            apply_notation(&mut state, "R U R' U'").unwrap();
            assert_eq!(state.is_solved(), i == 6, "after {} repetitions", i);
        }
    }

    #[test]
    fn test_apply_token_rejects_and_leaves_state() {
        let mut state = scrambled();
        let before = state.clone();
        assert!(matches!(apply_token(&mut state, "X"), Err(CubeError::UnknownMove { .. })));
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_tokens_is_atomic() {
        let mut state = FaceletState::solved();
        assert!(apply_tokens(&mut state, &["R", "U", "Z", "F"]).is_err());
        assert!(state.is_solved());
    }

    #[test]
    fn test_invert_move() {
        assert_eq!(invert_move("R").unwrap(), "R'");
        assert_eq!(invert_move("U'").unwrap(), "U");
        assert_eq!(invert_move("F2").unwrap(), "F2");
        assert!(invert_move("R3").is_err());
    }

    #[test]
    fn test_invert_sequence_undoes() {
        let moves = parse_sequence("R U2 F' L D B2").unwrap();
        let mut state = FaceletState::solved();
        apply_sequence(&mut state, &moves);
        apply_sequence(&mut state, &invert_sequence(&moves));
        assert!(state.is_solved());
    }
}
