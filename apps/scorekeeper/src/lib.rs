#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::{
    BidEntry, GameKind, GameSnapshot, Player, PlayerId, PointsEntry, RoundLimit, RoundOutcome,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use services::{BidGame, ScoreSheet, SimpleGame};
