//! Facelet state: the 54 sticker colors
//!
//! Face order is U, R, F, D, L, B. Within a face, index 0..8 reads
//! left-to-right, top-to-bottom when looking straight at that face:
//! - U seen from above, B edge on top
//! - D seen from below, F edge on top
//! - F, R, B, L seen from outside, U edge on top

use serde::{Deserialize, Serialize};
use crate::{CENTER_INDEX, FACE_COUNT, STICKERS_PER_FACE};
use crate::types::{Color, CubeError, Face, Result};

/// Rows (and stickers per row) of a face given as a grid
const GRID_SIZE: usize = 3;

/// The ground-truth cube state
///
/// Owns its 54 colors by value, so `clone()` never aliases.
/// Serializes as `FaceColors` and deserializes through `from_face_colors`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FaceColors", into = "FaceColors")]
pub struct FaceletState {
    faces: [[Color; STICKERS_PER_FACE]; FACE_COUNT],
}

impl Default for FaceletState {
    fn default() -> Self {
        Self::solved()
    }
}

impl FaceletState {
    /// Canonical solved state: every face monochrome in its home color
    pub fn solved() -> Self {
        let mut faces = [[Color::White; STICKERS_PER_FACE]; FACE_COUNT];
        for face in Face::ALL {
            faces[face.index()] = [face.home_color(); STICKERS_PER_FACE];
        }
        Self { faces }
    }

    /// Build from typed per-face colors (indexed by `Face::index`)
    pub fn from_faces(faces: [[Color; STICKERS_PER_FACE]; FACE_COUNT]) -> Self {
        Self { faces }
    }

    /// Build from external per-face color names
    ///
    /// Each face must flatten to exactly 9 recognized color names.
    /// No further legality checks happen here; see `core::validate`.
    pub fn from_face_colors(input: &FaceColors) -> Result<Self> {
        let mut faces = [[Color::White; STICKERS_PER_FACE]; FACE_COUNT];

        for face in Face::ALL {
            let stickers = input.face(face).flatten(face)?;
            if stickers.len() != STICKERS_PER_FACE {
                return Err(CubeError::malformed(format!(
                    "face {} has {} stickers, expected {}",
                    face,
                    stickers.len(),
                    STICKERS_PER_FACE
                )));
            }

            for (i, name) in stickers.iter().enumerate() {
                faces[face.index()][i] = name.parse().map_err(|_| {
                    CubeError::malformed(format!(
                        "face {} sticker {}: unrecognized color {:?}",
                        face, i, name
                    ))
                })?;
            }
        }

        Ok(Self { faces })
    }

    /// Export as color names, one flat array per face
    pub fn to_face_colors(&self) -> FaceColors {
        let names = |face: Face| {
            FaceInput::Flat(self.face(face).iter().map(|c| c.name().to_string()).collect())
        };
        FaceColors {
            up: names(Face::Up),
            right: names(Face::Right),
            front: names(Face::Front),
            down: names(Face::Down),
            left: names(Face::Left),
            back: names(Face::Back),
        }
    }

    pub fn face(&self, face: Face) -> &[Color; STICKERS_PER_FACE] {
        &self.faces[face.index()]
    }

    pub(crate) fn face_mut(&mut self, face: Face) -> &mut [Color; STICKERS_PER_FACE] {
        &mut self.faces[face.index()]
    }

    pub fn sticker(&self, face: Face, index: usize) -> Color {
        self.faces[face.index()][index]
    }

    /// Overwrite one sticker (manual correction of recognized input)
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    pub fn set_sticker(&mut self, face: Face, index: usize, color: Color) {
        self.faces[face.index()][index] = color;
    }

    pub fn center(&self, face: Face) -> Color {
        self.sticker(face, CENTER_INDEX)
    }

    /// Every face monochrome in its home color
    pub fn is_solved(&self) -> bool {
        Face::ALL
            .iter()
            .all(|&face| self.face(face).iter().all(|&c| c == face.home_color()))
    }

    /// Sticker count per color, indexed by `Color::index`
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0usize; 6];
        for face in &self.faces {
            for color in face {
                counts[color.index()] += 1;
            }
        }
        counts
    }

    /// Exactly 9 stickers of every color
    pub fn check_color_counts(&self) -> Result<()> {
        let counts = self.color_counts();
        for color in Color::ALL {
            let count = counts[color.index()];
            if count != STICKERS_PER_FACE {
                return Err(CubeError::malformed(format!(
                    "{} appears {} times, expected {}",
                    color, count, STICKERS_PER_FACE
                )));
            }
        }
        Ok(())
    }

    /// Every center carries its face's home color
    pub fn check_centers(&self) -> Result<()> {
        for face in Face::ALL {
            let center = self.center(face);
            if center != face.home_color() {
                return Err(CubeError::malformed(format!(
                    "center of {} is {}, expected {}",
                    face,
                    center,
                    face.home_color()
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<FaceColors> for FaceletState {
    type Error = CubeError;

    fn try_from(value: FaceColors) -> Result<Self> {
        Self::from_face_colors(&value)
    }
}

impl From<FaceletState> for FaceColors {
    fn from(value: FaceletState) -> Self {
        value.to_face_colors()
    }
}

// =============================================================================
// EXTERNAL REPRESENTATION
// =============================================================================

/// Per-face color names, as produced by recognition or consumed by renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceColors {
    #[serde(rename = "U")]
    pub up: FaceInput,
    #[serde(rename = "R")]
    pub right: FaceInput,
    #[serde(rename = "F")]
    pub front: FaceInput,
    #[serde(rename = "D")]
    pub down: FaceInput,
    #[serde(rename = "L")]
    pub left: FaceInput,
    #[serde(rename = "B")]
    pub back: FaceInput,
}

impl FaceColors {
    pub fn face(&self, face: Face) -> &FaceInput {
        match face {
            Face::Up => &self.up,
            Face::Right => &self.right,
            Face::Front => &self.front,
            Face::Down => &self.down,
            Face::Left => &self.left,
            Face::Back => &self.back,
        }
    }

    pub fn face_mut(&mut self, face: Face) -> &mut FaceInput {
        match face {
            Face::Up => &mut self.up,
            Face::Right => &mut self.right,
            Face::Front => &mut self.front,
            Face::Down => &mut self.down,
            Face::Left => &mut self.left,
            Face::Back => &mut self.back,
        }
    }
}

/// One face's colors, either flat or as rows (flattened row-major)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FaceInput {
    Flat(Vec<String>),
    Grid(Vec<Vec<String>>),
}

impl FaceInput {
    /// Sticker names in row-major order; a grid must be 3 rows of 3
    pub fn flatten(&self, face: Face) -> Result<Vec<&str>> {
        match self {
            FaceInput::Flat(stickers) => Ok(stickers.iter().map(String::as_str).collect()),
            FaceInput::Grid(rows) => {
                let square = rows.len() == GRID_SIZE && rows.iter().all(|r| r.len() == GRID_SIZE);
                if !square {
                    let lengths: Vec<usize> = rows.iter().map(Vec::len).collect();
                    return Err(CubeError::malformed(format!(
                        "face {} rows have lengths {:?}, expected 3 rows of 3",
                        face, lengths
                    )));
                }
                Ok(rows.iter().flatten().map(String::as_str).collect())
            }
        }
    }
}
