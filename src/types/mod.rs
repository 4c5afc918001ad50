//! Core types for CubeMaster

mod error;
mod color;
mod face;
mod facelet;
mod moves;
mod cubie;
mod algorithm;
mod output;

pub use error::{CubeError, Result};
pub use color::Color;
pub use face::Face;
pub use facelet::{FaceletState, FaceColors, FaceInput};
pub use moves::{Move, Turn};
pub use cubie::{Corner, Edge, CornerCubie, EdgeCubie, CenterCubie, CubieState, Legality};
pub use algorithm::{Algorithm, AlgorithmCategory};
pub use output::{CubeOutput, render_net};
