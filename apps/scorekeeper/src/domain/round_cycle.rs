use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, StateKind, ValidationKind};

/// How many rounds a session runs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundLimit {
    Fixed(NonZeroU32),
    /// No limit; the game continues until players stop.
    Indefinite,
}

impl RoundLimit {
    pub fn fixed(rounds: u32) -> Result<Self, DomainError> {
        NonZeroU32::new(rounds).map(Self::Fixed).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidRoundLimit,
                "Round limit must be at least 1",
            )
        })
    }

    pub fn rounds(&self) -> Option<u32> {
        match self {
            RoundLimit::Fixed(n) => Some(n.get()),
            RoundLimit::Indefinite => None,
        }
    }
}

/// Result of closing out a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Play continues; `round` is the new current round.
    Advanced { round: u32 },
    /// The final round was just scored. The counter stays at `final_round`.
    Completed { final_round: u32 },
}

/// Round progression and completion tracking.
///
/// `current_round` is 1-based and never exceeds a fixed limit: once the last
/// round is scored the cycle is marked complete and the counter freezes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundCycle {
    current_round: u32,
    limit: RoundLimit,
    complete: bool,
}

impl RoundCycle {
    pub fn new(limit: RoundLimit) -> Self {
        Self {
            current_round: 1,
            limit,
            complete: false,
        }
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn limit(&self) -> RoundLimit {
        self.limit
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Rejects further submissions once the final round has been scored.
    pub fn ensure_open(&self) -> Result<(), DomainError> {
        if self.complete {
            return Err(DomainError::state(
                StateKind::GameComplete,
                format!(
                    "Game is over after round {}; reset to play again",
                    self.current_round
                ),
            ));
        }
        Ok(())
    }

    pub fn advance_or_complete(&mut self) -> RoundOutcome {
        match self.limit {
            RoundLimit::Fixed(n) if self.current_round >= n.get() => {
                self.complete = true;
                RoundOutcome::Completed {
                    final_round: self.current_round,
                }
            }
            _ => {
                self.current_round += 1;
                RoundOutcome::Advanced {
                    round: self.current_round,
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.current_round = 1;
        self.complete = false;
    }
}

impl fmt::Display for RoundCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limit {
            RoundLimit::Fixed(n) => write!(f, "Round {} of {}", self.current_round, n),
            RoundLimit::Indefinite => write!(f, "Round {}", self.current_round),
        }
    }
}
