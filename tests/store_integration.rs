//! Integration tests for the state store
//!
//! Tests save → JSON on disk → load, and rejection of edited documents

use cubemaster::core::{fingerprint, load_state, save_state, state_after, StoredState};
use cubemaster::CubeError;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn test_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cubemaster_it_{}_{}", name, std::process::id()))
}

#[test]
fn test_save_and_load() {
    let dir = test_dir("save_load");
    let state = state_after("R U R' U' F2").unwrap();

    let path = save_state(&state, dir.to_str().unwrap()).unwrap();
    assert!(path.ends_with(&format!("cube_{}.json", &fingerprint(&state)[..16])));

    let loaded = load_state(&path).unwrap();
    assert_eq!(loaded, state);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_document_layout() {
    let dir = test_dir("layout");
    let state = state_after("F").unwrap();
    let path = save_state(&state, dir.to_str().unwrap()).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["fingerprint"], fingerprint(&state));
    assert_eq!(json["facelets"].as_str().unwrap().len(), 54);
    assert_eq!(json["faces"]["U"].as_array().unwrap().len(), 9);
    assert!(json["saved_at"].is_string());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_edited_document_is_rejected() {
    let dir = test_dir("edited");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("edited.json");

    // Faces edited to a different state, fingerprint left alone
    let mut doc = StoredState::new(&state_after("U").unwrap());
    doc.faces = state_after("D").unwrap().to_face_colors();
    std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();

    let err = load_state(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, CubeError::Storage(_)));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_invalid_json_is_a_serialization_error() {
    let dir = test_dir("invalid");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_state(path.to_str().unwrap()).unwrap_err();
    assert_eq!(err.code(), "R202_SERIALIZE_ERROR");

    std::fs::remove_dir_all(&dir).ok();
}
