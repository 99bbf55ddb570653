//! Common error infrastructure for bingo-core.
//!
//! Domain-specific errors (`EngineError`, `CodecError`, `EffectError`) live
//! next to the modules that raise them. This module provides the shared
//! classification used by all of them.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: the request was invalid for the current state or input
/// - **Internal**: configuration or collaborator failure that needs attention
/// - **Fatal**: the engine cannot continue safely
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: `start` on an inactive game, unknown team key in saved data
    Validation,

    /// Internal error - misconfigured content or a failing collaborator.
    ///
    /// Examples: goal pool too small, effect hook failure
    Internal,

    /// Fatal error - state can no longer be trusted.
    ///
    /// Examples: session lock poisoned by a panicking hook
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a configuration or internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all bingo-core errors.
///
/// Provides a uniform interface for error classification across the crate.
/// Implementors use `#[derive(thiserror::Error)]` for `Display`/`Error`.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable identifier for this error variant.
    ///
    /// Useful for metrics, log filtering and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_validation_is_not_internal() {
        assert!(!ErrorSeverity::Validation.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
