use std::collections::HashMap;

use crate::domain::entries::PendingEntries;
use crate::domain::player::{Player, PlayerId};
use crate::domain::roster::{unknown_player, PlayerRoster, RosterLimits};
use crate::domain::round_cycle::{RoundCycle, RoundLimit, RoundOutcome};
use crate::domain::snapshot::{GameKind, GameSnapshot};
use crate::errors::domain::DomainError;

/// State shared by both scoring sessions: roster, round cycle, and the
/// transient entries for the round in progress.
#[derive(Debug, Clone)]
pub(crate) struct Session<E> {
    kind: GameKind,
    roster: PlayerRoster,
    cycle: RoundCycle,
    pending: PendingEntries<E>,
}

impl<E: Clone + Default> Session<E> {
    pub(crate) fn start<S: AsRef<str>>(
        kind: GameKind,
        names: &[S],
        limits: RosterLimits,
        limit: RoundLimit,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            kind,
            roster: PlayerRoster::from_names(names, limits)?,
            cycle: RoundCycle::new(limit),
            pending: PendingEntries::new(),
        })
    }

    pub(crate) fn roster(&self) -> &PlayerRoster {
        &self.roster
    }

    pub(crate) fn cycle(&self) -> &RoundCycle {
        &self.cycle
    }

    pub(crate) fn pending(&self) -> &PendingEntries<E> {
        &self.pending
    }

    pub(crate) fn add(&mut self, name: &str) -> Result<PlayerId, DomainError> {
        self.roster.add(name)
    }

    /// Drops the player together with any entry staged for them.
    pub(crate) fn remove(&mut self, id: PlayerId) -> Result<Player, DomainError> {
        let player = self.roster.remove(id)?;
        self.pending.remove(id);
        Ok(player)
    }

    pub(crate) fn rename(&mut self, id: PlayerId, name: &str) -> Result<(), DomainError> {
        self.roster.rename(id, name)
    }

    pub(crate) fn set_score(&mut self, id: PlayerId, value: i64) -> Result<(), DomainError> {
        self.roster.set_score(id, value)
    }

    /// Batch edit: parseable text replaces a total, anything else keeps it.
    /// Unknown ids reject the whole batch before any total changes.
    pub(crate) fn apply_score_edits(
        &mut self,
        edits: &HashMap<PlayerId, String>,
    ) -> Result<usize, DomainError> {
        if let Some(id) = edits.keys().find(|id| !self.roster.contains(**id)) {
            return Err(unknown_player(*id));
        }
        let mut changed = 0;
        for (id, text) in edits {
            if let Ok(value) = text.trim().parse::<i64>() {
                self.roster.set_score(*id, value)?;
                changed += 1;
            }
        }
        Ok(changed)
    }

    pub(crate) fn stage(&mut self, id: PlayerId, entry: E) -> Result<(), DomainError> {
        self.roster.require(id)?;
        self.pending.stage(id, entry);
        Ok(())
    }

    pub(crate) fn entry_mut(&mut self, id: PlayerId) -> Result<&mut E, DomainError> {
        self.roster.require(id)?;
        Ok(self.pending.entry_mut(id))
    }

    /// Entries as they would be after merging `entries` over the staged ones.
    /// Leaves the session untouched.
    pub(crate) fn merged_with(
        &self,
        entries: HashMap<PlayerId, E>,
    ) -> Result<PendingEntries<E>, DomainError> {
        if let Some(id) = entries.keys().find(|id| !self.roster.contains(**id)) {
            return Err(unknown_player(*id));
        }
        let mut merged = self.pending.clone();
        for (id, entry) in entries {
            merged.stage(id, entry);
        }
        Ok(merged)
    }

    pub(crate) fn replace_pending(&mut self, pending: PendingEntries<E>) {
        self.pending = pending;
    }

    /// The only mutating step of a submission. Callers have already
    /// validated every delta.
    pub(crate) fn commit(&mut self, deltas: &[(PlayerId, i64)]) -> RoundOutcome {
        self.roster.apply_deltas(deltas);
        self.pending.clear();
        self.cycle.advance_or_complete()
    }

    pub(crate) fn reset(&mut self) {
        self.roster.reset_scores();
        self.cycle.reset();
        self.pending.clear();
    }

    pub(crate) fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self.kind, &self.roster, &self.cycle)
    }
}
