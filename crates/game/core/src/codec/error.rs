//! Error types for reading saved games.

use crate::error::{ErrorSeverity, GameError};

/// Kind of identifier a saved game refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IdentifierKind {
    #[strum(serialize = "game mode")]
    GameMode,
    #[strum(serialize = "goal table")]
    GoalTable,
    #[strum(serialize = "team")]
    Team,
}

/// Problems found while reading a tag tree.
///
/// `read` never fails as a whole; each of these is logged and the affected
/// field or entry falls back to its default.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("missing field '{key}'")]
    MissingField { key: String },

    #[error("field '{key}' should be a {expected} tag, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unknown {kind} '{id}'")]
    UnknownIdentifier { kind: IdentifierKind, id: String },

    #[error("cell ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },
}

impl GameError for CodecError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "CODEC_MISSING_FIELD",
            Self::TypeMismatch { .. } => "CODEC_TYPE_MISMATCH",
            Self::UnknownIdentifier { .. } => "CODEC_UNKNOWN_IDENTIFIER",
            Self::OutOfBounds { .. } => "CODEC_OUT_OF_BOUNDS",
        }
    }
}
