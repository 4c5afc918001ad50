//! Facelet string: the 54-letter solver representation
//!
//! Faces in U, R, F, D, L, B order, 9 letters each. A letter names the face
//! whose solved center carries the sticker's color, so the solved cube reads
//! `UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB`.

use sha2::{Digest, Sha256};
use crate::types::{Color, CubeError, Face, FaceletState, Result};
use crate::{FACELET_COUNT, FACE_COUNT, STICKERS_PER_FACE};

pub fn to_facelet_string(state: &FaceletState) -> String {
    let mut out = String::with_capacity(FACELET_COUNT);
    for face in Face::ALL {
        for color in state.face(face) {
            out.push(color.home_face().letter());
        }
    }
    out
}

/// Parse a 54-letter facelet string
pub fn from_facelet_string(facelets: &str) -> Result<FaceletState> {
    let letters: Vec<char> = facelets.trim().chars().collect();
    if letters.len() != FACELET_COUNT {
        return Err(CubeError::malformed(format!(
            "facelet string has {} letters, expected {}",
            letters.len(),
            FACELET_COUNT
        )));
    }

    let mut faces = [[Color::White; STICKERS_PER_FACE]; FACE_COUNT];
    for (n, &letter) in letters.iter().enumerate() {
        let face = Face::from_letter(letter).ok_or_else(|| {
            CubeError::malformed(format!("facelet {}: unrecognized letter {:?}", n, letter))
        })?;
        faces[n / STICKERS_PER_FACE][n % STICKERS_PER_FACE] = face.home_color();
    }

    Ok(FaceletState::from_faces(faces))
}

/// SHA-256 of the facelet string, lowercase hex
pub fn fingerprint(state: &FaceletState) -> String {
    let mut hasher = Sha256::new();
    hasher.update(to_facelet_string(state).as_bytes());
    hasher.finalize().iter().map(|b| format!("{:02x}", b)).collect()
}

// =============================================================================
// TESTS
// =============================================================================
