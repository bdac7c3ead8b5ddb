use std::env;

use crate::domain::roster::RosterLimits;
use crate::domain::rules::{DEFAULT_BID_ROUNDS, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::AppError;

/// Session-wide settings. Defaults match the table game; environment
/// variables can override them for house rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub min_players: usize,
    pub max_players: usize,
    pub default_rounds: u32,
    /// Cap for the simple scorer; `None` means unbounded.
    pub simple_max_players: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            default_rounds: DEFAULT_BID_ROUNDS,
            simple_max_players: None,
        }
    }
}

impl GameConfig {
    /// Reads `SCOREKEEPER_*` variables, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            min_players: parse_var("SCOREKEEPER_MIN_PLAYERS")?.unwrap_or(defaults.min_players),
            max_players: parse_var("SCOREKEEPER_MAX_PLAYERS")?.unwrap_or(defaults.max_players),
            default_rounds: parse_var("SCOREKEEPER_DEFAULT_ROUNDS")?
                .unwrap_or(defaults.default_rounds),
            simple_max_players: parse_var("SCOREKEEPER_SIMPLE_MAX_PLAYERS")?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_players == 0 {
            return Err(AppError::config("max players must be at least 1"));
        }
        if self.min_players > self.max_players {
            return Err(AppError::config(format!(
                "min players ({}) exceeds max players ({})",
                self.min_players, self.max_players
            )));
        }
        if self.default_rounds == 0 {
            return Err(AppError::config("default rounds must be at least 1"));
        }
        Ok(())
    }

    pub fn bid_limits(&self) -> RosterLimits {
        RosterLimits {
            min: self.min_players,
            max: Some(self.max_players),
        }
    }

    pub fn simple_limits(&self) -> RosterLimits {
        RosterLimits {
            min: 0,
            max: self.simple_max_players,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Result<Option<T>, AppError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{key} must be a number, got '{raw}'"))),
        Err(_) => Ok(None),
    }
}
