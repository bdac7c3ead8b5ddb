use thiserror::Error;

use crate::errors::domain::{DomainError, StateKind, ValidationKind};
use crate::errors::ErrorCode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("State error: {detail}")]
    State { code: ErrorCode, detail: String },
    #[error("Bad command: {detail}")]
    Usage { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::State { code, .. } => *code,
            AppError::Usage { .. } => ErrorCode::BadCommand,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Serialize(_) => ErrorCode::SerializeError,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::State { detail, .. } => detail.clone(),
            AppError::Usage { detail } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
            AppError::Io(e) => e.to_string(),
            AppError::Serialize(e) => e.to_string(),
        }
    }

    /// Errors a user can fix by retyping the command; the REPL keeps running.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Validation { .. } | AppError::State { .. } | AppError::Usage { .. }
        )
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn usage(detail: impl Into<String>) -> Self {
        Self::Usage {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::EmptyName => ErrorCode::EmptyName,
                    ValidationKind::RosterFull => ErrorCode::RosterFull,
                    ValidationKind::RosterSize => ErrorCode::RosterSize,
                    ValidationKind::InvalidEntry => ErrorCode::InvalidEntry,
                    ValidationKind::TrickSum => ErrorCode::TrickSumExceeded,
                    ValidationKind::NoScoreEntered => ErrorCode::NoScoreEntered,
                    ValidationKind::InvalidRoundLimit => ErrorCode::InvalidRoundLimit,
                    ValidationKind::Other(_) => ErrorCode::ValidationError,
                };
                AppError::Validation { code, detail }
            }
            DomainError::State(kind, detail) => {
                let code = match kind {
                    StateKind::GameComplete => ErrorCode::GameComplete,
                    StateKind::UnknownPlayer => ErrorCode::PlayerNotFound,
                    StateKind::Other(_) => ErrorCode::StateError,
                };
                AppError::State { code, detail }
            }
        }
    }
}
