//! Domain-level error type used by the roster, round cycle and scoring sessions.
//!
//! This error type knows nothing about terminals or exit codes. The binary
//! converts it into `crate::error::AppError` via `From<DomainError>`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Bad or missing input
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Player name empty or whitespace-only
    EmptyName,
    /// Roster already at its maximum size
    RosterFull,
    /// Roster size outside the configured bounds
    RosterSize,
    /// Bid or tricks missing / not a non-negative integer
    InvalidEntry,
    /// Sum of tricks exceeds the round number
    TrickSum,
    /// Every simple-game entry was blank or zero
    NoScoreEntered,
    /// Round limit of zero
    InvalidRoundLimit,
    Other(String),
}

/// Operation not allowed in the current session state
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateKind {
    /// Final round already scored; reset before submitting again
    GameComplete,
    /// Player id not on the roster
    UnknownPlayer,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or business rule violation
    Validation(ValidationKind, String),
    /// Request does not fit the session's current state
    State(StateKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(_, d) => write!(f, "validation error: {d}"),
            DomainError::State(_, d) => write!(f, "state error: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn state(kind: StateKind, detail: impl Into<String>) -> Self {
        Self::State(kind, detail.into())
    }

    /// Human-readable detail without the category prefix.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d) | DomainError::State(_, d) => d,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(..))
    }

    pub fn is_state(&self) -> bool {
        matches!(self, DomainError::State(..))
    }
}
