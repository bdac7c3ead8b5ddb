// Unit tests for error mapping - pure domain errors into CLI-facing codes
use crate::errors::domain::{DomainError, StateKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_kinds() {
    let cases = [
        (ValidationKind::EmptyName, ErrorCode::EmptyName),
        (ValidationKind::RosterFull, ErrorCode::RosterFull),
        (ValidationKind::RosterSize, ErrorCode::RosterSize),
        (ValidationKind::InvalidEntry, ErrorCode::InvalidEntry),
        (ValidationKind::TrickSum, ErrorCode::TrickSumExceeded),
        (ValidationKind::NoScoreEntered, ErrorCode::NoScoreEntered),
        (ValidationKind::InvalidRoundLimit, ErrorCode::InvalidRoundLimit),
        (
            ValidationKind::Other("x".into()),
            ErrorCode::ValidationError,
        ),
    ];
    for (kind, code) in cases {
        let app: AppError = DomainError::validation(kind, "bad input").into();
        assert_eq!(app.code(), code);
        assert_eq!(app.detail(), "bad input");
        assert!(app.is_recoverable());
    }
}

#[test]
fn maps_state_kinds() {
    let done: AppError = DomainError::state(StateKind::GameComplete, "over").into();
    assert_eq!(done.code().as_str(), "GAME_COMPLETE");

    let missing: AppError = DomainError::state(StateKind::UnknownPlayer, "who").into();
    assert_eq!(missing.code().as_str(), "PLAYER_NOT_FOUND");

    let other: AppError = DomainError::state(StateKind::Other("x".into()), "odd").into();
    assert_eq!(other.code(), ErrorCode::StateError);
}

#[test]
fn config_and_io_are_not_recoverable() {
    assert!(!AppError::config("bad env").is_recoverable());
    let io = AppError::from(std::io::Error::other("closed"));
    assert_eq!(io.code(), ErrorCode::IoError);
    assert!(!io.is_recoverable());
}

#[test]
fn domain_error_display_keeps_category_prefix() {
    let err = DomainError::validation(ValidationKind::EmptyName, "name cannot be empty");
    assert_eq!(err.to_string(), "validation error: name cannot be empty");
    assert_eq!(err.detail(), "name cannot be empty");
    assert!(err.is_validation());
    assert!(!err.is_state());
}
