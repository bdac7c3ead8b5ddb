//! Scoring sessions - own the roster and round cycle for one game and apply
//! the pure domain rules to them.
//!
//! There is no process-wide game: callers construct a session with `start`
//! and drop it (or call `finish`) to leave.

use std::collections::HashMap;

use crate::domain::player::{Player, PlayerId};
use crate::domain::round_cycle::RoundCycle;
use crate::domain::snapshot::GameSnapshot;
use crate::domain::standings::standings;
use crate::errors::domain::DomainError;

pub mod bid_game;
mod session;
pub mod simple_game;

pub use bid_game::BidGame;
pub use simple_game::SimpleGame;

/// Operations both sessions support, so front ends can share roster and
/// edit-mode handling.
pub trait ScoreSheet {
    fn players(&self) -> &[Player];

    fn cycle(&self) -> &RoundCycle;

    /// Add a player. `Ok(None)` means the roster ignored the request.
    fn join(&mut self, name: &str) -> Result<Option<PlayerId>, DomainError>;

    fn remove_player(&mut self, id: PlayerId) -> Result<Player, DomainError>;

    fn rename_player(&mut self, id: PlayerId, name: &str) -> Result<(), DomainError>;

    fn set_score(&mut self, id: PlayerId, value: i64) -> Result<(), DomainError>;

    fn apply_score_edits(&mut self, edits: &HashMap<PlayerId, String>)
        -> Result<usize, DomainError>;

    fn reset_game(&mut self);

    fn snapshot(&self) -> GameSnapshot;

    fn current_round(&self) -> u32 {
        self.cycle().current_round()
    }

    fn is_complete(&self) -> bool {
        self.cycle().is_complete()
    }

    fn standings(&self) -> Vec<&Player> {
        standings(self.players())
    }

    /// Id of the player at a 1-based roster position.
    fn player_at(&self, position: usize) -> Option<PlayerId> {
        position
            .checked_sub(1)
            .and_then(|i| self.players().get(i))
            .map(|p| p.id)
    }
}
