//! State store: save/load facelet states as JSON documents
//!
//! A stored document carries its own fingerprint. Loading recomputes it and
//! rejects documents edited by hand into something that no longer matches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::core::notation::{fingerprint, from_facelet_string, to_facelet_string};
use crate::types::{CubeError, FaceColors, FaceletState, Result};

/// On-disk document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredState {
    /// SHA-256 of `facelets`
    pub fingerprint: String,
    pub saved_at: DateTime<Utc>,
    /// 54-letter solver string
    pub facelets: String,
    /// Same state as color names, for humans and renderers
    pub faces: FaceColors,
}

impl StoredState {
    pub fn new(state: &FaceletState) -> Self {
        Self {
            fingerprint: fingerprint(state),
            saved_at: Utc::now(),
            facelets: to_facelet_string(state),
            faces: state.to_face_colors(),
        }
    }

    /// Rebuild the state, checking both representations agree with the fingerprint
    pub fn to_state(&self) -> Result<FaceletState> {
        let state = FaceletState::from_face_colors(&self.faces)?;
        let from_letters = from_facelet_string(&self.facelets)?;
        if state != from_letters {
            return Err(CubeError::Storage(
                "faces and facelets describe different states".to_string(),
            ));
        }

        let actual = fingerprint(&state);
        if actual != self.fingerprint {
            return Err(CubeError::Storage(format!(
                "fingerprint mismatch: stored {}, computed {}",
                self.fingerprint, actual
            )));
        }
        Ok(state)
    }
}

/// Save state to `<dir>/cube_<fingerprint prefix>.json`, returning the path
pub fn save_state(state: &FaceletState, dir: &str) -> Result<String> {
    let doc = StoredState::new(state);
    let filename = format!("{}/cube_{}.json", dir, &doc.fingerprint[..16]);

    let json = serde_json::to_string_pretty(&doc)?;
    std::fs::create_dir_all(dir)?;
    std::fs::write(&filename, json)?;

    info!(path = %filename, "saved cube state");
    Ok(filename)
}

/// Load state from a JSON file written by `save_state`
pub fn load_state(path: &str) -> Result<FaceletState> {
    let json = std::fs::read_to_string(path)?;
    let doc: StoredState = serde_json::from_str(&json)?;
    let state = doc.to_state()?;

    debug!(path, fingerprint = %doc.fingerprint, "loaded cube state");
    Ok(state)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::move_engine::state_after;

    fn temp_dir(name: &str) -> String {
        let dir = std::env::temp_dir().join(format!("cubemaster_store_{}_{}", name, std::process::id()));
        dir.to_string_lossy().into_owned()
    }

    #[test]
    fn test_save_then_load() {
        let dir = temp_dir("roundtrip");
        let state = state_after("R U R' U'").unwrap();

        let path = save_state(&state, &dir).unwrap();
        assert!(path.contains("cube_"));
        assert_eq!(load_state(&path).unwrap(), state);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_tampered_document_is_rejected() {
        let mut doc = StoredState::new(&state_after("F").unwrap());
        doc.fingerprint = "0".repeat(64);
        assert!(matches!(doc.to_state(), Err(CubeError::Storage(_))));
    }

    #[test]
    fn test_disagreeing_representations_are_rejected() {
        let mut doc = StoredState::new(&FaceletState::solved());
        doc.facelets = to_facelet_string(&state_after("U").unwrap());
        assert!(matches!(doc.to_state(), Err(CubeError::Storage(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(load_state("/nonexistent/cube.json"), Err(CubeError::Io(_))));
    }
}
