//! HTTP API for the cube core
//!
//! Endpoints:
//! - GET /health - Health check
//! - GET /algorithms - Full PLL catalog
//! - GET /algorithms/:id - One case with its setup
//! - POST /cube/apply - Apply moves to a state (solved if omitted)
//! - POST /cube/resolve - Validate a state and project it onto cubies
//! - POST /cube/save - Store a state on disk
//! - POST /moves/invert - Invert a move sequence
//!
//! Stateless apart from the save directory: every request carries its state.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::{
    apply_sequence, catalog, format_sequence, invert_sequence, parse_sequence, resolve,
    save_state, to_facelet_string, validate, fingerprint,
};
use crate::types::{Algorithm, CubeError, CubeOutput, CubieState, FaceletState, Legality};

/// App state
pub struct AppState {
    pub state_dir: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub algorithms: usize,
}

/// Catalog entry with its derived setup
#[derive(Debug, Serialize)]
pub struct AlgorithmDetail {
    #[serde(flatten)]
    pub algorithm: Algorithm,
    pub setup: String,
    /// Facelet string of the state this algorithm solves
    pub setup_facelets: String,
}

/// Apply moves request
#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    /// Starting state; solved when absent
    pub state: Option<FaceletState>,
    pub moves: String,
}

/// Resolve request (also used by save)
#[derive(Debug, Deserialize)]
pub struct StateRequest {
    pub state: FaceletState,
}

/// Resolve response
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub facelets: String,
    pub cubies: CubieState,
    pub legality: Legality,
    pub solvable: bool,
}

/// Save response
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub path: String,
    pub fingerprint: String,
}

/// Invert request
#[derive(Debug, Deserialize)]
pub struct InvertRequest {
    pub moves: String,
}

/// Invert response
#[derive(Debug, Serialize)]
pub struct InvertResponse {
    pub moves: String,
    pub inverse: String,
}

/// Error body: `{ "code": "R102_UNKNOWN_MOVE", "message": "..." }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl IntoResponse for CubeError {
    fn into_response(self) -> Response {
        let status = if self.is_input_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Create the API router
pub fn create_router(state_dir: String) -> Router {
    let state = Arc::new(AppState { state_dir });

    Router::new()
        .route("/health", get(health))
        .route("/algorithms", get(list_algorithms))
        .route("/algorithms/:id", get(get_algorithm))
        .route("/cube/apply", post(apply_moves))
        .route("/cube/resolve", post(resolve_state))
        .route("/cube/save", post(save))
        .route("/moves/invert", post(invert_moves))
        .with_state(state)
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        algorithms: catalog::all().len(),
    })
}

async fn list_algorithms() -> Json<&'static [Algorithm]> {
    Json(catalog::all())
}

async fn get_algorithm(Path(id): Path<String>) -> Result<Json<AlgorithmDetail>, Response> {
    let algorithm = catalog::find(&id).ok_or_else(|| StatusCode::NOT_FOUND.into_response())?;
    let setup = algorithm.setup_notation().map_err(IntoResponse::into_response)?;
    let setup_state = algorithm.setup_state().map_err(IntoResponse::into_response)?;

    Ok(Json(AlgorithmDetail {
        algorithm: *algorithm,
        setup,
        setup_facelets: to_facelet_string(&setup_state),
    }))
}

/// Apply moves and attach the cubie view
///
/// A state that does not resolve is a 400, never a silent partial answer.
async fn apply_moves(Json(req): Json<ApplyRequest>) -> Result<Json<CubeOutput>, CubeError> {
    let moves = parse_sequence(&req.moves)?;
    let mut state = req.state.unwrap_or_default();
    apply_sequence(&mut state, &moves);
    debug!(moves = %req.moves, "applied moves");

    let cubies = resolve(&state)?;
    Ok(Json(CubeOutput::new(state, moves).with_cubies(cubies)))
}

async fn resolve_state(Json(req): Json<StateRequest>) -> Result<Json<ResolveResponse>, CubeError> {
    let cubies = validate(&req.state)?;
    let legality = cubies.legality();

    Ok(Json(ResolveResponse {
        facelets: to_facelet_string(&req.state),
        solvable: legality.is_solvable(),
        cubies,
        legality,
    }))
}

async fn save(
    State(app): State<Arc<AppState>>,
    Json(req): Json<StateRequest>,
) -> Result<Json<SaveResponse>, CubeError> {
    let path = save_state(&req.state, &app.state_dir)?;
    Ok(Json(SaveResponse {
        path,
        fingerprint: fingerprint(&req.state),
    }))
}

async fn invert_moves(Json(req): Json<InvertRequest>) -> Result<Json<InvertResponse>, CubeError> {
    let moves = parse_sequence(&req.moves)?;
    Ok(Json(InvertResponse {
        moves: format_sequence(&moves),
        inverse: format_sequence(&invert_sequence(&moves)),
    }))
}

/// Run the API server
pub async fn run_server(addr: &str, state_dir: String) -> crate::Result<()> {
    let router = create_router(state_dir);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "cubemaster API listening");
    axum::serve(listener, router).await?;
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
