//! Algorithm catalog: the 21 PLL cases as static data
//!
//! `notation` is what a speedcuber reads and may use slice moves or cube
//! rotations. `demo` is the face-turn-only equivalent the move engine can
//! play. Setups are never stored: a setup is the inverse of the demo, so
//! setup followed by demo always returns to solved.

use crate::core::move_engine::{apply_sequence, invert_sequence};
use crate::core::move_parser::{format_sequence, parse_sequence};
use crate::types::{Algorithm, AlgorithmCategory, FaceletState, Move, Result};
use AlgorithmCategory::{Adjacent, Corners, Diagonal, Edges};

const fn pll(
    id: &'static str,
    name: &'static str,
    category: AlgorithmCategory,
    difficulty: u8,
    notation: &'static str,
    demo: Option<&'static str>,
    recognition: &'static str,
) -> Algorithm {
    Algorithm { id, name, category, difficulty, notation, demo, recognition }
}

pub static PLL_ALGORITHMS: [Algorithm; 21] = [
    // Edges only
    pll("pll-ua", "Ua Perm", Edges, 1,
        "R U' R U R U R U' R' U' R2", None,
        "Solid bar on one side, three edges cycle counter-clockwise"),
    pll("pll-ub", "Ub Perm", Edges, 1,
        "R2 U R U R' U' R' U' R' U R'", None,
        "Solid bar on one side, three edges cycle clockwise"),
    pll("pll-h", "H Perm", Edges, 1,
        "M2 U M2 U2 M2 U M2", Some("R2 U2 R U2 R2 U2 R2 U2 R U2 R2"),
        "Opposite edges swap in both directions; every side shows a checker"),
    pll("pll-z", "Z Perm", Edges, 2,
        "M' U M2 U M2 U M' U2 M2", Some("R' U' R U' R U R U' R' U R U R2 U' R'"),
        "Two pairs of adjacent edges swap"),
    // Corners only
    pll("pll-aa", "Aa Perm", Corners, 2,
        "x R' U R' D2 R U' R' D2 R2", Some("R' F R' B2 R F' R' B2 R2"),
        "Headlights on one side, three corners cycle clockwise"),
    pll("pll-ab", "Ab Perm", Corners, 2,
        "x R2 D2 R U R' D2 R U' R", Some("R B' R F2 R' B R F2 R2"),
        "Headlights on one side, three corners cycle counter-clockwise"),
    pll("pll-e", "E Perm", Corners, 3,
        "x' R U' R' D R U R' D' R U R' D R U' R' D'",
        Some("R B' R' F R B R' F' R B R' F R B' R' F'"),
        "No headlights anywhere; corners swap in two pairs"),
    // Adjacent corner swap
    pll("pll-t", "T Perm", Adjacent, 2,
        "R U R' U' R' F R2 U' R' U' R U R' F'", None,
        "Headlights on one side, a bar opposite them"),
    pll("pll-ja", "Ja Perm", Adjacent, 2,
        "R' U L' U2 R U' R' U2 R L", None,
        "Solid 1x3 block on the left side"),
    pll("pll-jb", "Jb Perm", Adjacent, 2,
        "R U R' F' R U R' U' R' F R2 U' R'", None,
        "Solid 1x3 block on the right side"),
    pll("pll-ra", "Ra Perm", Adjacent, 3,
        "R U R' F' R U2 R' U2 R' F R U R U2 R'", None,
        "Headlights on the left with a 1x2 block opposite"),
    pll("pll-rb", "Rb Perm", Adjacent, 3,
        "R' U2 R U2 R' F R U R' U' R' F' R2", None,
        "Headlights on the right with a 1x2 block opposite"),
    pll("pll-f", "F Perm", Adjacent, 3,
        "R' U' F' R U R' U' R' F R2 U' R' U' R U R' U R", None,
        "Solid bar on one side, the opposite side shows all three colors"),
    pll("pll-ga", "Ga Perm", Adjacent, 3,
        "R2 U R' U R' U' R U' R2 D U' R' U R D'", None,
        "Headlights with a 1x2 block beside them on the right"),
    pll("pll-gb", "Gb Perm", Adjacent, 3,
        "R' U' R U D' R2 U R' U R U' R U' R2 D", None,
        "Headlights with a 1x2 block on the adjacent side"),
    pll("pll-gc", "Gc Perm", Adjacent, 3,
        "R2 U' R U' R U R' U R2 D' U R U' R' D", None,
        "Headlights with a 1x2 block beside them on the left"),
    pll("pll-gd", "Gd Perm", Adjacent, 3,
        "R U R' U' D R2 U' R U' R' U R' U R2 D'", None,
        "Headlights with a 1x2 block on the adjacent side, mirrored"),
    // Diagonal corner swap
    pll("pll-y", "Y Perm", Diagonal, 3,
        "F R U' R' U' R U R' F' R U R' U' R' F R F'", None,
        "No headlights; two edges swap next to the diagonal corners"),
    pll("pll-v", "V Perm", Diagonal, 3,
        "R' U R' U' y R' F' R2 U' R' U R' F R F", Some("R' U R' U' B' R' B2 U' B' U B' R B R"),
        "One headlight pair; two edges swap along the diagonal"),
    pll("pll-na", "Na Perm", Diagonal, 3,
        "R U R' U R U R' F' R U R' U' R' F R2 U' R' U2 R U' R'", None,
        "Every side shows two blocks; left pair of corners swaps"),
    pll("pll-nb", "Nb Perm", Diagonal, 3,
        "R' U R U' R' F' U' F R U R' F R' F' R U' R", None,
        "Every side shows two blocks; right pair of corners swaps"),
];

impl Algorithm {
    /// Face-turn-only notation: `demo` if present, otherwise `notation`
    pub fn demo_notation(&self) -> &'static str {
        self.demo.unwrap_or(self.notation)
    }

    pub fn demo_moves(&self) -> Result<Vec<Move>> {
        parse_sequence(self.demo_notation())
    }

    /// Moves that take a solved cube into this case
    pub fn setup_moves(&self) -> Result<Vec<Move>> {
        Ok(invert_sequence(&self.demo_moves()?))
    }

    pub fn setup_notation(&self) -> Result<String> {
        Ok(format_sequence(&self.setup_moves()?))
    }

    /// Solved cube with the setup applied: the state the algorithm solves
    pub fn setup_state(&self) -> Result<FaceletState> {
        let mut state = FaceletState::solved();
        apply_sequence(&mut state, &self.setup_moves()?);
        Ok(state)
    }
}

/// Every catalog entry, in catalog order
pub fn all() -> &'static [Algorithm] {
    &PLL_ALGORITHMS
}

/// Look up by id (e.g. `pll-t`)
pub fn find(id: &str) -> Option<&'static Algorithm> {
    PLL_ALGORITHMS.iter().find(|a| a.id == id)
}

pub fn by_category(category: AlgorithmCategory) -> Vec<&'static Algorithm> {
    PLL_ALGORITHMS.iter().filter(|a| a.category == category).collect()
}

// =============================================================================
// TESTS
// =============================================================================
