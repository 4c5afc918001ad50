//! Error type with reason codes
//!
//! Every failure carries a stable code (for parseable output and the API)
//! plus a human-readable description, the same R-code taxonomy used for
//! state reasons elsewhere.

use thiserror::Error;

/// Result type for cube operations.
pub type Result<T> = std::result::Result<T, CubeError>;

/// Errors surfaced by the cube core.
///
/// All of them are local and recoverable. A state that produced an error
/// part-way through construction is never returned to the caller.
#[derive(Debug, Error)]
pub enum CubeError {
    /// Face/color data does not fit 9 stickers per face from the 6-color alphabet
    #[error("malformed input: {detail}")]
    MalformedInput { detail: String },

    /// Token is not `<face>` followed by nothing, `'` or `2`
    #[error("unknown move: {token:?}")]
    UnknownMove { token: String },

    /// A slot's stickers match no physical piece
    #[error("unresolvable piece in slot {slot}: {detail}")]
    UnresolvablePiece { slot: String, detail: String },

    /// Stored state is unreadable or fails its fingerprint check
    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CubeError {
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedInput { detail: detail.into() }
    }

    pub fn unknown_move(token: impl Into<String>) -> Self {
        Self::UnknownMove { token: token.into() }
    }

    pub fn unresolvable(slot: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::UnresolvablePiece {
            slot: slot.into(),
            detail: detail.into(),
        }
    }

    /// Get the code string (for logging and parseable output)
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedInput { .. } => "R101_MALFORMED_INPUT",
            Self::UnknownMove { .. } => "R102_UNKNOWN_MOVE",
            Self::UnresolvablePiece { .. } => "R103_UNRESOLVABLE_PIECE",
            Self::Storage(_) => "R201_STORAGE_ERROR",
            Self::Serialization(_) => "R202_SERIALIZE_ERROR",
            Self::Io(_) => "R203_IO_ERROR",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::MalformedInput { .. } => "Face data is not 6 x 9 recognized colors",
            Self::UnknownMove { .. } => "Move token not recognized",
            Self::UnresolvablePiece { .. } => "Stickers do not form a physical piece",
            Self::Storage(_) => "Stored state rejected",
            Self::Serialization(_) => "Failed to (de)serialize state",
            Self::Io(_) => "File system error",
        }
    }

    /// Input errors are the caller's fault; the rest are environmental
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedInput { .. } | Self::UnknownMove { .. } | Self::UnresolvablePiece { .. }
        )
    }
}
