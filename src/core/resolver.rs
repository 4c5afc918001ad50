//! Cubie Resolver: facelet state -> piece identity and orientation
//!
//! Pure read-only projection. For each slot:
//! 1. read the slot's stickers (fixed geometry tables below)
//! 2. map each color to the face whose solved center carries it
//! 3. match the face set against the canonical piece definitions
//! 4. orientation = where the piece's primary face sits in the slot ordering
//!
//! Structural problems raise `UnresolvablePiece`: a face set no piece
//! carries, a corner whose colors run the wrong way round (mirror image),
//! or a piece found in two slots. Physical legality (twist, flip, parity)
//! is reported by `CubieState::legality`, never raised here.

use tracing::{debug, warn};
use crate::types::Face::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};
use crate::types::{
    CenterCubie, Corner, CornerCubie, CubeError, CubieState, Edge, EdgeCubie, Face, FaceletState,
    Result,
};
use crate::{CORNER_COUNT, EDGE_COUNT};

// =============================================================================
// SLOT GEOMETRY [C]
// =============================================================================

/// Stickers of each corner slot, indexed by `Corner::index`
///
/// U/D sticker first, then clockwise seen from outside the corner, so the
/// ordering lines up with `Corner::faces`.
pub static CORNER_FACELETS: [[(Face, usize); 3]; CORNER_COUNT] = [
    [(U, 8), (R, 0), (F, 2)], // URF
    [(U, 6), (F, 0), (L, 2)], // UFL
    [(U, 0), (L, 0), (B, 2)], // ULB
    [(U, 2), (B, 0), (R, 2)], // UBR
    [(D, 2), (F, 8), (R, 6)], // DFR
    [(D, 0), (L, 8), (F, 6)], // DLF
    [(D, 6), (B, 8), (L, 6)], // DBL
    [(D, 8), (R, 8), (B, 6)], // DRB
];

/// Stickers of each edge slot, indexed by `Edge::index`, primary first
pub static EDGE_FACELETS: [[(Face, usize); 2]; EDGE_COUNT] = [
    [(U, 5), (R, 1)], // UR
    [(U, 7), (F, 1)], // UF
    [(U, 3), (L, 1)], // UL
    [(U, 1), (B, 1)], // UB
    [(D, 5), (R, 7)], // DR
    [(D, 1), (F, 7)], // DF
    [(D, 3), (L, 7)], // DL
    [(D, 7), (B, 7)], // DB
    [(F, 5), (R, 3)], // FR
    [(F, 3), (L, 5)], // FL
    [(B, 5), (L, 3)], // BL
    [(B, 3), (R, 5)], // BR
];

/// Project a facelet state onto pieces
pub fn resolve(state: &FaceletState) -> Result<CubieState> {
    let mut corners = Corner::ALL.map(|c| CornerCubie {
        slot: c,
        piece: c,
        orientation: 0,
        position: c.position(),
    });
    let mut seen_corners = [false; CORNER_COUNT];
    for slot in Corner::ALL {
        let cubie = resolve_corner(state, slot)?;
        claim(&mut seen_corners, cubie.piece.index(), slot.name(), cubie.piece.name())?;
        corners[slot.index()] = cubie;
    }

    let mut edges = Edge::ALL.map(|e| EdgeCubie {
        slot: e,
        piece: e,
        orientation: 0,
        position: e.position(),
    });
    let mut seen_edges = [false; EDGE_COUNT];
    for slot in Edge::ALL {
        let cubie = resolve_edge(state, slot)?;
        claim(&mut seen_edges, cubie.piece.index(), slot.name(), cubie.piece.name())?;
        edges[slot.index()] = cubie;
    }

    let centers = Face::ALL.map(|f| CenterCubie {
        slot: f,
        position: f.normal(),
    });

    debug!("resolved 8 corners, 12 edges");
    Ok(CubieState { corners, edges, centers })
}

/// Full structural check: color counts, centers, resolvable pieces
pub fn validate(state: &FaceletState) -> Result<CubieState> {
    let checked = state
        .check_color_counts()
        .and_then(|_| state.check_centers())
        .and_then(|_| resolve(state));

    if let Err(e) = &checked {
        warn!(code = e.code(), "state rejected: {}", e);
    }
    checked
}

fn observed_faces<const N: usize>(state: &FaceletState, facelets: [(Face, usize); N]) -> [Face; N] {
    facelets.map(|(face, i)| state.sticker(face, i).home_face())
}

fn resolve_corner(state: &FaceletState, slot: Corner) -> Result<CornerCubie> {
    let seen = observed_faces(state, CORNER_FACELETS[slot.index()]);

    let mut sorted = seen;
    sorted.sort();
    let piece = Corner::ALL
        .into_iter()
        .find(|c| {
            let mut faces = c.faces();
            faces.sort();
            faces == sorted
        })
        .ok_or_else(|| {
            CubeError::unresolvable(slot.name(), format!("no corner carries {}", face_list(&seen)))
        })?;

    let twist = corner_twist(&seen, piece, slot)?;

    // Same colors in the wrong cyclic order is a mirror-image corner
    let mut rotated = seen;
    rotated.rotate_left(twist);
    if rotated != piece.faces() {
        return Err(CubeError::unresolvable(
            slot.name(),
            format!("{} is a mirror image of {}", face_list(&seen), piece.name()),
        ));
    }

    Ok(CornerCubie {
        slot,
        piece,
        orientation: twist as u8,
        position: slot.position(),
    })
}

/// Index of the piece's U/D face among the stickers seen in the slot
fn corner_twist(seen: &[Face; 3], piece: Corner, slot: Corner) -> Result<usize> {
    let primary = piece.faces()[0];
    seen.iter().position(|&f| f == primary).ok_or_else(|| {
        CubeError::unresolvable(
            slot.name(),
            format!("{} lacks the {} sticker of {}", face_list(seen), primary, piece.name()),
        )
    })
}

fn resolve_edge(state: &FaceletState, slot: Edge) -> Result<EdgeCubie> {
    let seen = observed_faces(state, EDGE_FACELETS[slot.index()]);

    let piece = Edge::ALL
        .into_iter()
        .find(|e| {
            let [a, b] = e.faces();
            (seen[0] == a && seen[1] == b) || (seen[0] == b && seen[1] == a)
        })
        .ok_or_else(|| {
            CubeError::unresolvable(slot.name(), format!("no edge carries {}", face_list(&seen)))
        })?;

    let flip = if seen[0] == piece.faces()[0] { 0 } else { 1 };

    Ok(EdgeCubie {
        slot,
        piece,
        orientation: flip,
        position: slot.position(),
    })
}

fn claim(seen: &mut [bool], piece: usize, slot: &str, piece_name: &str) -> Result<()> {
    if seen[piece] {
        return Err(CubeError::unresolvable(
            slot,
            format!("piece {} already found in another slot", piece_name),
        ));
    }
    seen[piece] = true;
    Ok(())
}

fn face_list(faces: &[Face]) -> String {
    faces.iter().map(|f| f.letter()).collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::move_engine::state_after;
    use crate::types::Color;

    #[test]
    fn test_facelet_tables_match_piece_faces() {
        for corner in Corner::ALL {
            let faces: Vec<Face> = CORNER_FACELETS[corner.index()].iter().map(|(f, _)| *f).collect();
            assert_eq!(faces, corner.faces().to_vec(), "{}", corner);
        }
        for edge in Edge::ALL {
            let faces: Vec<Face> = EDGE_FACELETS[edge.index()].iter().map(|(f, _)| *f).collect();
            assert_eq!(faces, edge.faces().to_vec(), "{}", edge);
        }
    }

    #[test]
    fn test_tables_cover_every_non_center_sticker_once() {
        let mut used = [[0u8; 9]; 6];
        for slot in CORNER_FACELETS.iter() {
            for (face, i) in slot {
                used[face.index()][*i] += 1;
            }
        }
        for slot in EDGE_FACELETS.iter() {
            for (face, i) in slot {
                used[face.index()][*i] += 1;
            }
        }
        for face in Face::ALL {
            for i in 0..9 {
                let expected = if i == 4 { 0 } else { 1 };
                assert_eq!(used[face.index()][i], expected, "{}{}", face, i);
            }
        }
    }

    #[test]
    fn test_solved_resolves_to_identity() {
        let cubies = resolve(&FaceletState::solved()).unwrap();
        assert!(cubies.is_solved());
        assert!(cubies.legality().is_solvable());
    }

    #[test]
    fn test_r_move_resolution() {
        let cubies = resolve(&state_after("R").unwrap()).unwrap();

        let urf = cubies.corner_at(Corner::Urf);
        assert_eq!((urf.piece, urf.orientation), (Corner::Dfr, 2));
        let ubr = cubies.corner_at(Corner::Ubr);
        assert_eq!((ubr.piece, ubr.orientation), (Corner::Urf, 1));
        let dfr = cubies.corner_at(Corner::Dfr);
        assert_eq!((dfr.piece, dfr.orientation), (Corner::Drb, 1));
        let drb = cubies.corner_at(Corner::Drb);
        assert_eq!((drb.piece, drb.orientation), (Corner::Ubr, 2));

        assert_eq!(cubies.edge_at(Edge::Ur).piece, Edge::Fr);
        assert_eq!(cubies.edge_at(Edge::Fr).piece, Edge::Dr);
        assert_eq!(cubies.edge_at(Edge::Dr).piece, Edge::Br);
        assert_eq!(cubies.edge_at(Edge::Br).piece, Edge::Ur);
        assert!(cubies.edges.iter().all(|e| e.orientation == 0));

        // Left-hand pieces untouched
        assert_eq!(cubies.corner_at(Corner::Ufl).piece, Corner::Ufl);
        assert_eq!(cubies.edge_at(Edge::Ul).piece, Edge::Ul);
    }

    #[test]
    fn test_f_move_flips_edges() {
        let cubies = resolve(&state_after("F").unwrap()).unwrap();
        let flipped = cubies.edges.iter().filter(|e| e.orientation == 1).count();
        assert_eq!(flipped, 4);
        assert!(cubies.legality().is_solvable());
    }

    #[test]
    fn test_nonexistent_face_set_is_unresolvable() {
        let mut state = FaceletState::solved();
        // URF slot now reads orange/red/green: no corner has both L and R
        state.set_sticker(Face::Up, 8, Color::Orange);
        match resolve(&state) {
            Err(CubeError::UnresolvablePiece { slot, .. }) => assert_eq!(slot, "URF"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_corner_twist() {
        assert_eq!(corner_twist(&[U, R, F], Corner::Urf, Corner::Urf).unwrap(), 0);
        assert_eq!(corner_twist(&[F, U, R], Corner::Urf, Corner::Urf).unwrap(), 1);
        assert_eq!(corner_twist(&[R, F, U], Corner::Urf, Corner::Urf).unwrap(), 2);
    }

    #[test]
    fn test_corner_twist_without_primary_sticker() {
        let err = corner_twist(&[L, R, F], Corner::Urf, Corner::Urf).unwrap_err();
        match err {
            CubeError::UnresolvablePiece { slot, .. } => assert_eq!(slot, "URF"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_mirror_corner_is_unresolvable() {
        let mut state = FaceletState::solved();
        let r0 = state.sticker(Face::Right, 0);
        let f2 = state.sticker(Face::Front, 2);
        state.set_sticker(Face::Right, 0, f2);
        state.set_sticker(Face::Front, 2, r0);
        let err = resolve(&state).unwrap_err();
        assert!(matches!(err, CubeError::UnresolvablePiece { .. }));
        assert!(err.to_string().contains("mirror"));
    }

    #[test]
    fn test_duplicate_piece_is_unresolvable() {
        let mut state = FaceletState::solved();
        // UFL slot painted as a second URF piece
        state.set_sticker(Face::Up, 6, Color::White);
        state.set_sticker(Face::Front, 0, Color::Red);
        state.set_sticker(Face::Left, 2, Color::Green);
        let err = resolve(&state).unwrap_err();
        assert!(err.to_string().contains("already found"));
    }

    #[test]
    fn test_twisted_corner_resolves_but_is_illegal() {
        let mut state = FaceletState::solved();
        state.set_sticker(Face::Up, 8, Color::Green);
        state.set_sticker(Face::Right, 0, Color::White);
        state.set_sticker(Face::Front, 2, Color::Red);

        let cubies = resolve(&state).unwrap();
        assert_eq!(cubies.corner_at(Corner::Urf).orientation, 1);
        let legality = cubies.legality();
        assert_eq!(legality.corner_twist, 1);
        assert!(!legality.is_solvable());
    }

    #[test]
    fn test_flipped_edge_resolves_but_is_illegal() {
        let mut state = FaceletState::solved();
        state.set_sticker(Face::Up, 5, Color::Red);
        state.set_sticker(Face::Right, 1, Color::White);

        let legality = resolve(&state).unwrap().legality();
        assert_eq!(legality.edge_flip, 1);
        assert!(!legality.is_solvable());
    }

    #[test]
    fn test_swapped_edges_have_odd_parity() {
        let mut state = FaceletState::solved();
        state.set_sticker(Face::Right, 1, Color::Green);
        state.set_sticker(Face::Front, 1, Color::Red);

        let legality = resolve(&state).unwrap().legality();
        assert!(legality.edge_parity_odd);
        assert!(!legality.corner_parity_odd);
        assert!(!legality.is_solvable());
    }

    #[test]
    fn test_validate_checks_counts_first() {
        let mut state = FaceletState::solved();
        state.set_sticker(Face::Up, 0, Color::Yellow);
        assert!(matches!(validate(&state), Err(CubeError::MalformedInput { .. })));
    }

    #[test]
    fn test_validate_checks_centers() {
        let mut state = FaceletState::solved();
        state.set_sticker(Face::Up, 4, Color::Yellow);
        state.set_sticker(Face::Down, 4, Color::White);
        assert!(matches!(validate(&state), Err(CubeError::MalformedInput { .. })));
    }
}
