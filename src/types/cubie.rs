//! Piece-centric view of the cube (derived, never stored)

use serde::{Deserialize, Serialize};
use crate::{CORNER_COUNT, EDGE_COUNT, FACE_COUNT};
use crate::types::Face;

/// Corner slot / corner piece identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Corner {
    Urf,
    Ufl,
    Ulb,
    Ubr,
    Dfr,
    Dlf,
    Dbl,
    Drb,
}

impl Corner {
    pub const ALL: [Corner; CORNER_COUNT] = [
        Corner::Urf,
        Corner::Ufl,
        Corner::Ulb,
        Corner::Ubr,
        Corner::Dfr,
        Corner::Dlf,
        Corner::Dbl,
        Corner::Drb,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Faces of the piece, Up/Down first, then clockwise around the corner
    pub fn faces(self) -> [Face; 3] {
        use Face::*;
        match self {
            Corner::Urf => [Up, Right, Front],
            Corner::Ufl => [Up, Front, Left],
            Corner::Ulb => [Up, Left, Back],
            Corner::Ubr => [Up, Back, Right],
            Corner::Dfr => [Down, Front, Right],
            Corner::Dlf => [Down, Left, Front],
            Corner::Dbl => [Down, Back, Left],
            Corner::Drb => [Down, Right, Back],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Corner::Urf => "URF",
            Corner::Ufl => "UFL",
            Corner::Ulb => "ULB",
            Corner::Ubr => "UBR",
            Corner::Dfr => "DFR",
            Corner::Dlf => "DLF",
            Corner::Dbl => "DBL",
            Corner::Drb => "DRB",
        }
    }

    /// Slot center in cube coordinates (x = right, y = up, z = front)
    pub fn position(self) -> [i8; 3] {
        position_of(&self.faces())
    }
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Edge slot / edge piece identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Edge {
    Ur,
    Uf,
    Ul,
    Ub,
    Dr,
    Df,
    Dl,
    Db,
    Fr,
    Fl,
    Bl,
    Br,
}

impl Edge {
    pub const ALL: [Edge; EDGE_COUNT] = [
        Edge::Ur,
        Edge::Uf,
        Edge::Ul,
        Edge::Ub,
        Edge::Dr,
        Edge::Df,
        Edge::Dl,
        Edge::Db,
        Edge::Fr,
        Edge::Fl,
        Edge::Bl,
        Edge::Br,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Faces of the piece, primary face first (Up/Down, else Front/Back)
    pub fn faces(self) -> [Face; 2] {
        use Face::*;
        match self {
            Edge::Ur => [Up, Right],
            Edge::Uf => [Up, Front],
            Edge::Ul => [Up, Left],
            Edge::Ub => [Up, Back],
            Edge::Dr => [Down, Right],
            Edge::Df => [Down, Front],
            Edge::Dl => [Down, Left],
            Edge::Db => [Down, Back],
            Edge::Fr => [Front, Right],
            Edge::Fl => [Front, Left],
            Edge::Bl => [Back, Left],
            Edge::Br => [Back, Right],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Edge::Ur => "UR",
            Edge::Uf => "UF",
            Edge::Ul => "UL",
            Edge::Ub => "UB",
            Edge::Dr => "DR",
            Edge::Df => "DF",
            Edge::Dl => "DL",
            Edge::Db => "DB",
            Edge::Fr => "FR",
            Edge::Fl => "FL",
            Edge::Bl => "BL",
            Edge::Br => "BR",
        }
    }

    pub fn position(self) -> [i8; 3] {
        position_of(&self.faces())
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn position_of(faces: &[Face]) -> [i8; 3] {
    let mut pos = [0i8; 3];
    for face in faces {
        for (axis, v) in face.normal().iter().enumerate() {
            pos[axis] += v;
        }
    }
    pos
}

/// Corner piece sitting in a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerCubie {
    pub slot: Corner,
    pub piece: Corner,
    /// 0..=2: index of the Up/Down sticker within the slot's facelet ordering
    pub orientation: u8,
    pub position: [i8; 3],
}

/// Edge piece sitting in a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCubie {
    pub slot: Edge,
    pub piece: Edge,
    /// 0 or 1: index of the primary sticker within the slot's facelet ordering
    pub orientation: u8,
    pub position: [i8; 3],
}

/// Centers never move; listed so renderers get all 26 visible cubies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterCubie {
    pub slot: Face,
    pub position: [i8; 3],
}

/// Output of the cubie resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubieState {
    pub corners: [CornerCubie; CORNER_COUNT],
    pub edges: [EdgeCubie; EDGE_COUNT],
    pub centers: [CenterCubie; FACE_COUNT],
}

impl CubieState {
    /// Every piece home and untwisted
    pub fn is_solved(&self) -> bool {
        self.corners.iter().all(|c| c.piece == c.slot && c.orientation == 0)
            && self.edges.iter().all(|e| e.piece == e.slot && e.orientation == 0)
    }

    pub fn corner_at(&self, slot: Corner) -> &CornerCubie {
        &self.corners[slot.index()]
    }

    pub fn edge_at(&self, slot: Edge) -> &EdgeCubie {
        &self.edges[slot.index()]
    }

    /// Physical-solvability report (twist, flip and permutation parity)
    pub fn legality(&self) -> Legality {
        let corner_perm: Vec<usize> = self.corners.iter().map(|c| c.piece.index()).collect();
        let edge_perm: Vec<usize> = self.edges.iter().map(|e| e.piece.index()).collect();

        let twist: u32 = self.corners.iter().map(|c| c.orientation as u32).sum();
        let flip: u32 = self.edges.iter().map(|e| e.orientation as u32).sum();

        Legality {
            corner_twist: (twist % 3) as u8,
            edge_flip: (flip % 2) as u8,
            corner_parity_odd: is_odd_permutation(&corner_perm),
            edge_parity_odd: is_odd_permutation(&edge_perm),
        }
    }
}

/// Invariants every state reachable by face turns satisfies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legality {
    /// Sum of corner orientations mod 3 (0 when legal)
    pub corner_twist: u8,
    /// Sum of edge orientations mod 2 (0 when legal)
    pub edge_flip: u8,
    pub corner_parity_odd: bool,
    pub edge_parity_odd: bool,
}

impl Legality {
    pub fn is_solvable(&self) -> bool {
        self.corner_twist == 0
            && self.edge_flip == 0
            && self.corner_parity_odd == self.edge_parity_odd
    }
}

/// Parity via cycle decomposition: odd iff (n - cycles) is odd
fn is_odd_permutation(perm: &[usize]) -> bool {
    let mut seen = vec![false; perm.len()];
    let mut cycles = 0;
    for start in 0..perm.len() {
        if seen[start] {
            continue;
        }
        cycles += 1;
        let mut i = start;
        while !seen[i] {
            seen[i] = true;
            i = perm[i];
        }
    }
    (perm.len() - cycles) % 2 == 1
}
