//! Read-only, serializable view of a session for rendering or export.

use serde::Serialize;

use crate::domain::player::Player;
use crate::domain::roster::PlayerRoster;
use crate::domain::round_cycle::{RoundCycle, RoundLimit};
use crate::domain::standings::standings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    Bid,
    Simple,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub kind: GameKind,
    pub round_label: String,
    pub current_round: u32,
    pub round_limit: RoundLimit,
    pub complete: bool,
    /// Roster order.
    pub players: Vec<Player>,
    /// Descending by total, ties in roster order.
    pub standings: Vec<Player>,
}

impl GameSnapshot {
    pub fn capture(kind: GameKind, roster: &PlayerRoster, cycle: &RoundCycle) -> Self {
        Self {
            kind,
            round_label: cycle.to_string(),
            current_round: cycle.current_round(),
            round_limit: cycle.limit(),
            complete: cycle.is_complete(),
            players: roster.players().to_vec(),
            standings: standings(roster.players()).into_iter().cloned().collect(),
        }
    }

    /// Leader by total, first in roster order on a tie.
    pub fn leader(&self) -> Option<&Player> {
        self.standings.first()
    }
}
