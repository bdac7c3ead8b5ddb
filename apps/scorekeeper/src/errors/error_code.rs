//! Error codes surfaced by the scorekeeper CLI.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are printed verbatim next to the
//! error detail.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input Validation
    /// Player name empty or whitespace-only
    EmptyName,
    /// Roster at maximum size
    RosterFull,
    /// Roster size out of bounds
    RosterSize,
    /// Bid or tricks missing or non-numeric
    InvalidEntry,
    /// Total tricks exceed the round number
    TrickSumExceeded,
    /// No non-zero score entered in a simple round
    NoScoreEntered,
    /// Round limit must be at least 1
    InvalidRoundLimit,
    /// General validation error
    ValidationError,

    // Session State
    /// Game already complete
    GameComplete,
    /// Unknown player id
    PlayerNotFound,
    /// General state error
    StateError,

    // CLI / System
    /// Unrecognized or malformed command
    BadCommand,
    /// Configuration error
    ConfigError,
    /// I/O failure on stdin/stdout
    IoError,
    /// Serialization failure
    SerializeError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Input Validation
            Self::EmptyName => "EMPTY_NAME",
            Self::RosterFull => "ROSTER_FULL",
            Self::RosterSize => "ROSTER_SIZE",
            Self::InvalidEntry => "INVALID_ENTRY",
            Self::TrickSumExceeded => "TRICK_SUM_EXCEEDED",
            Self::NoScoreEntered => "NO_SCORE_ENTERED",
            Self::InvalidRoundLimit => "INVALID_ROUND_LIMIT",
            Self::ValidationError => "VALIDATION_ERROR",

            // Session State
            Self::GameComplete => "GAME_COMPLETE",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::StateError => "STATE_ERROR",

            // CLI / System
            Self::BadCommand => "BAD_COMMAND",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::SerializeError => "SERIALIZE_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
