//! Error types for engine operations.

use crate::engine::EffectError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::GamePhase;

/// Engine operation named in [`EngineError::InvalidTransition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    Start,
    End,
}

/// Errors surfaced by [`crate::engine::GameEngine`] and [`crate::engine::GameSession`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("cannot {operation} a game that is {phase}")]
    InvalidTransition {
        operation: Operation,
        phase: GamePhase,
    },

    #[error(
        "goal table '{table}' yielded only {accepted} distinct goals after {draws} draws"
    )]
    InsufficientGoalPool {
        table: String,
        accepted: usize,
        draws: u32,
    },

    #[error("team '{team}' in corner {corner} is not registered")]
    UnregisteredTeam { team: String, corner: usize },

    #[error("game mode '{mode}' has no goal tables")]
    NoGoalTables { mode: String },

    #[error(transparent)]
    Effect(#[from] EffectError),

    #[error("game session lock was poisoned")]
    LockPoisoned,
}

impl EngineError {
    pub(crate) fn invalid_transition(operation: Operation, phase: GamePhase) -> Self {
        Self::InvalidTransition { operation, phase }
    }
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        use EngineError::*;
        match self {
            InvalidTransition { .. } | UnregisteredTeam { .. } => ErrorSeverity::Validation,
            InsufficientGoalPool { .. } | NoGoalTables { .. } => ErrorSeverity::Internal,
            Effect(error) => error.severity(),
            LockPoisoned => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use EngineError::*;
        match self {
            InvalidTransition { .. } => "ENGINE_INVALID_TRANSITION",
            UnregisteredTeam { .. } => "ENGINE_UNREGISTERED_TEAM",
            InsufficientGoalPool { .. } => "ENGINE_INSUFFICIENT_GOAL_POOL",
            NoGoalTables { .. } => "ENGINE_NO_GOAL_TABLES",
            Effect(error) => error.error_code(),
            LockPoisoned => "ENGINE_LOCK_POISONED",
        }
    }
}
