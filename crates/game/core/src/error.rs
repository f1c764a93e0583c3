//! Common error infrastructure for tactics-core.
//!
//! This module provides the shared severity classification used across all
//! error types in the workspace, plus [`ValidationError`] for out-of-range
//! numeric input. Domain-specific errors (e.g., [`QueueError`]) are defined
//! in their respective modules alongside the operations they guard.
//!
//! All errors here are ordinary, expected outcomes returned as values —
//! game-rule rejections, never panics. Only a genuine internal invariant
//! violation (a corrupted scheduling structure) is treated as unexpected,
//! and those are `debug_assert!`ed at the site of the invariant.
//!
//! [`QueueError`]: crate::queue::QueueError

use crate::config::GameConfig;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    ///
    /// Examples: target already dead, destination momentarily blocked
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: actor not found, agility out of range
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: empty schedule while the player should be present.
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common interface implemented by every error enum in the workspace.
pub trait GameError: std::error::Error {
    /// Severity classification for recovery strategies.
    fn severity(&self) -> ErrorSeverity;

    /// Stable machine-readable code for logs and telemetry.
    fn error_code(&self) -> &'static str;
}

/// Out-of-range or malformed numeric input.
///
/// Raised when constructing time values, action descriptors, or when the
/// cost calculator receives stats outside their legal ranges.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    /// Time values are points on the turn clock and cannot be negative.
    #[error("time value cannot be negative (got {value})")]
    NegativeTimeValue { value: i64 },

    /// Agility outside `[AGILITY_MIN, AGILITY_MAX]`.
    #[error(
        "agility must be within [{min}, {max}] (got {value})",
        min = GameConfig::AGILITY_MIN,
        max = GameConfig::AGILITY_MAX,
    )]
    AgilityOutOfRange { value: i32 },

    /// Encumbrance outside `[ENCUMBRANCE_MIN, ENCUMBRANCE_MAX]`.
    #[error(
        "encumbrance must be within [{min}, {max}] (got {value})",
        min = GameConfig::ENCUMBRANCE_MIN,
        max = GameConfig::ENCUMBRANCE_MAX,
    )]
    EncumbranceOutOfRange { value: i32 },

    /// Action descriptors require a non-empty name.
    #[error("action name cannot be empty")]
    EmptyActionName,

    /// Accuracy bonus outside `[-100, 100]`.
    #[error("accuracy bonus must be within [-100, 100] (got {value})")]
    AccuracyBonusOutOfRange { value: i32 },
}

impl GameError for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeTimeValue { .. } => "VALIDATION_NEGATIVE_TIME_VALUE",
            Self::AgilityOutOfRange { .. } => "VALIDATION_AGILITY_OUT_OF_RANGE",
            Self::EncumbranceOutOfRange { .. } => "VALIDATION_ENCUMBRANCE_OUT_OF_RANGE",
            Self::EmptyActionName => "VALIDATION_EMPTY_ACTION_NAME",
            Self::AccuracyBonusOutOfRange { .. } => "VALIDATION_ACCURACY_BONUS_OUT_OF_RANGE",
        }
    }
}
