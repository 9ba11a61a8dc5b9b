//! Character-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationErrors};

/// An illegal game action, rejected rather than clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("No available spell slots at level {level}")]
    NoSpellSlotsAvailable { level: i32 },
}

impl RuleViolation {
    pub fn code(&self) -> ErrorCode {
        match self {
            RuleViolation::NoSpellSlotsAvailable { .. } => ErrorCode::NoSpellSlotsAvailable,
        }
    }
}

/// Failures surfaced by character operations.
///
/// A missing character is not an error; operations return `Ok(None)`.
#[derive(Debug, Clone, Error)]
pub enum CharacterError {
    /// Input failed its schema; nothing was written.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Input was well-formed but the action is not allowed by the rules.
    #[error(transparent)]
    Rule(#[from] RuleViolation),

    /// Storage or serialization failure, propagated unmodified.
    #[error(transparent)]
    Infrastructure(#[from] DomainError),
}

impl CharacterError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CharacterError::Validation(_) => ErrorCode::ValidationFailed,
            CharacterError::Rule(violation) => violation.code(),
            CharacterError::Infrastructure(err) => err.code,
        }
    }
}
