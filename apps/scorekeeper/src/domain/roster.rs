use crate::domain::player::{Player, PlayerId};
use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::domain::{DomainError, StateKind, ValidationKind};

/// Size bounds for a roster. `max == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterLimits {
    pub min: usize,
    pub max: Option<usize>,
}

impl RosterLimits {
    /// Bounds for the bid game (2..=8).
    pub const fn bid_game() -> Self {
        Self {
            min: MIN_PLAYERS,
            max: Some(MAX_PLAYERS),
        }
    }

    /// The simple scorer takes any number of players.
    pub const fn unbounded() -> Self {
        Self { min: 0, max: None }
    }

    pub fn admits(&self, count: usize) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }

    fn describe(&self) -> String {
        match self.max {
            Some(max) => format!("{}..={}", self.min, max),
            None => format!("at least {}", self.min),
        }
    }
}

/// Ordered set of players in entry order, each carrying a running total.
#[derive(Debug, Clone)]
pub struct PlayerRoster {
    players: Vec<Player>,
    limits: RosterLimits,
}

/// Trim a candidate name, rejecting empty or whitespace-only input.
pub fn validate_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::EmptyName,
            "Player names cannot be empty",
        ));
    }
    Ok(trimmed.to_string())
}

impl PlayerRoster {
    pub fn new(limits: RosterLimits) -> Self {
        Self {
            players: Vec::new(),
            limits,
        }
    }

    /// Build a roster for a new session. Fails if the count is out of bounds
    /// or any name is empty; nothing is created on failure.
    pub fn from_names<S: AsRef<str>>(
        names: &[S],
        limits: RosterLimits,
    ) -> Result<Self, DomainError> {
        if !limits.admits(names.len()) {
            return Err(DomainError::validation(
                ValidationKind::RosterSize,
                format!(
                    "A game needs {} players, got {}",
                    limits.describe(),
                    names.len()
                ),
            ));
        }
        let players = names
            .iter()
            .map(|n| validate_name(n.as_ref()).map(Player::new))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { players, limits })
    }

    pub fn limits(&self) -> RosterLimits {
        self.limits
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().map(|p| p.id)
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.get(id).is_some()
    }

    pub fn require(&self, id: PlayerId) -> Result<&Player, DomainError> {
        self.get(id).ok_or_else(|| unknown_player(id))
    }

    fn require_mut(&mut self, id: PlayerId) -> Result<&mut Player, DomainError> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| unknown_player(id))
    }

    /// Append a player with a zero total.
    pub fn add(&mut self, name: &str) -> Result<PlayerId, DomainError> {
        let name = validate_name(name)?;
        if let Some(max) = self.limits.max {
            if self.players.len() >= max {
                return Err(DomainError::validation(
                    ValidationKind::RosterFull,
                    format!("Roster is full ({max} players)"),
                ));
            }
        }
        let player = Player::new(name);
        let id = player.id;
        self.players.push(player);
        Ok(id)
    }

    /// Remove a player, returning it. Refuses to go below the minimum size.
    pub fn remove(&mut self, id: PlayerId) -> Result<Player, DomainError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| unknown_player(id))?;
        if self.players.len() <= self.limits.min {
            return Err(DomainError::validation(
                ValidationKind::RosterSize,
                format!("A game needs at least {} players", self.limits.min),
            ));
        }
        Ok(self.players.remove(idx))
    }

    pub fn rename(&mut self, id: PlayerId, new_name: &str) -> Result<(), DomainError> {
        let name = validate_name(new_name)?;
        self.require_mut(id)?.name = name;
        Ok(())
    }

    /// Manual override; replaces the total outright.
    pub fn set_score(&mut self, id: PlayerId, value: i64) -> Result<(), DomainError> {
        self.require_mut(id)?.total_score = value;
        Ok(())
    }

    /// Additive update. Callers validate every id before applying any delta.
    pub(crate) fn apply_deltas(&mut self, deltas: &[(PlayerId, i64)]) {
        for (id, delta) in deltas {
            if let Some(p) = self.players.iter_mut().find(|p| p.id == *id) {
                p.total_score = p.total_score.saturating_add(*delta);
            }
        }
    }

    pub fn reset_scores(&mut self) {
        for p in &mut self.players {
            p.total_score = 0;
        }
    }
}

pub(crate) fn unknown_player(id: PlayerId) -> DomainError {
    DomainError::state(StateKind::UnknownPlayer, format!("No player with id {id}"))
}
