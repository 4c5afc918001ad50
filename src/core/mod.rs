//! Core modules for CubeMaster

pub mod move_parser;
pub mod move_engine;
pub mod resolver;
pub mod notation;
pub mod catalog;
pub mod store;
pub mod api;

pub use move_parser::{parse_move, parse_sequence, parse_tokens, format_sequence, parse_solver_output};
pub use move_engine::{
    apply_move, apply_token, apply_sequence, apply_tokens, apply_notation, state_after,
    invert_move, invert_sequence, band, BandSegment, FACE_ROTATION,
};
pub use resolver::{resolve, validate, CORNER_FACELETS, EDGE_FACELETS};
pub use notation::{to_facelet_string, from_facelet_string, fingerprint};
pub use catalog::PLL_ALGORITHMS;
pub use store::{save_state, load_state, StoredState};
pub use api::{create_router, run_server};
