//! Bid-based scoring session: fixed roster bounds, bid/tricks/bonus entries,
//! fixed round count.

use std::collections::HashMap;

use tracing::{debug, info};

use super::session::Session;
use super::ScoreSheet;
use crate::config::GameConfig;
use crate::domain::bid_scoring::score_round;
use crate::domain::entries::{BidEntry, PendingEntries};
use crate::domain::player::{Player, PlayerId};
use crate::domain::round_cycle::{RoundCycle, RoundLimit, RoundOutcome};
use crate::domain::snapshot::{GameKind, GameSnapshot};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone)]
pub struct BidGame {
    session: Session<BidEntry>,
}

impl BidGame {
    /// Start a session. Fails if the roster size is outside the configured
    /// bounds, any name is blank, or the limit is not a fixed round count.
    pub fn start<S: AsRef<str>>(
        names: &[S],
        limit: RoundLimit,
        config: &GameConfig,
    ) -> Result<Self, DomainError> {
        if limit == RoundLimit::Indefinite {
            return Err(DomainError::validation(
                ValidationKind::InvalidRoundLimit,
                "The bid game needs a fixed number of rounds",
            ));
        }
        let session = Session::start(GameKind::Bid, names, config.bid_limits(), limit)?;
        info!(
            players = session.roster().len(),
            rounds = ?limit.rounds(),
            "Bid game started"
        );
        Ok(Self { session })
    }

    /// Start with the configured default round count.
    pub fn start_default<S: AsRef<str>>(
        names: &[S],
        config: &GameConfig,
    ) -> Result<Self, DomainError> {
        Self::start(names, RoundLimit::fixed(config.default_rounds)?, config)
    }

    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, DomainError> {
        let id = self.session.add(name)?;
        debug!(%id, "Player added");
        Ok(id)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, DomainError> {
        let player = self.session.remove(id)?;
        debug!(%id, "Player removed");
        Ok(player)
    }

    pub fn rename_player(&mut self, id: PlayerId, name: &str) -> Result<(), DomainError> {
        self.session.rename(id, name)
    }

    pub fn set_score(&mut self, id: PlayerId, value: i64) -> Result<(), DomainError> {
        self.session.set_score(id, value)
    }

    /// Edit-mode commit; returns how many totals changed.
    pub fn apply_score_edits(
        &mut self,
        edits: &HashMap<PlayerId, String>,
    ) -> Result<usize, DomainError> {
        self.session.apply_score_edits(edits)
    }

    pub fn stage_entry(&mut self, id: PlayerId, entry: BidEntry) -> Result<(), DomainError> {
        self.session.stage(id, entry)
    }

    /// Field-by-field editing of a player's staged entry.
    pub fn entry_mut(&mut self, id: PlayerId) -> Result<&mut BidEntry, DomainError> {
        self.session.entry_mut(id)
    }

    pub fn pending(&self) -> &PendingEntries<BidEntry> {
        self.session.pending()
    }

    /// Score the staged entries. All-or-nothing: on error neither totals,
    /// round, nor staged entries change.
    pub fn submit_round(&mut self) -> Result<RoundOutcome, DomainError> {
        self.session.cycle().ensure_open()?;
        let round = self.current_round();
        let scores = score_round(self.session.roster(), self.session.pending(), round)?;
        let deltas: Vec<(PlayerId, i64)> = scores
            .iter()
            .map(|s| {
                debug!(
                    player = %s.player_id,
                    bid = s.entry.bid,
                    tricks = s.entry.tricks,
                    bonus = s.entry.bonus,
                    delta = s.delta,
                    "Round delta"
                );
                (s.player_id, s.delta)
            })
            .collect();
        let outcome = self.session.commit(&deltas);
        log_outcome(round, outcome);
        Ok(outcome)
    }

    /// Stage `entries` over any existing ones and submit in one step.
    /// On error the staged entries are left as they were.
    pub fn submit_entries(
        &mut self,
        entries: HashMap<PlayerId, BidEntry>,
    ) -> Result<RoundOutcome, DomainError> {
        self.session.cycle().ensure_open()?;
        let merged = self.session.merged_with(entries)?;
        score_round(self.session.roster(), &merged, self.current_round())?;
        self.session.replace_pending(merged);
        self.submit_round()
    }

    pub fn current_round(&self) -> u32 {
        self.session.cycle().current_round()
    }

    pub fn is_complete(&self) -> bool {
        self.session.cycle().is_complete()
    }

    pub fn cycle(&self) -> &RoundCycle {
        self.session.cycle()
    }

    pub fn players(&self) -> &[Player] {
        self.session.roster().players()
    }

    /// Zero every total and return to round 1, keeping the roster.
    pub fn reset_game(&mut self) {
        self.session.reset();
        info!("Bid game reset");
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    /// Leave the session, handing back the final board.
    pub fn finish(self) -> GameSnapshot {
        let snapshot = self.session.snapshot();
        info!(
            rounds = snapshot.current_round,
            complete = snapshot.complete,
            "Bid game finished"
        );
        snapshot
    }
}

pub(super) fn log_outcome(round: u32, outcome: RoundOutcome) {
    match outcome {
        RoundOutcome::Advanced { round: next } => debug!(round, next, "Round scored"),
        RoundOutcome::Completed { final_round } => info!(final_round, "Final round scored"),
    }
}

impl ScoreSheet for BidGame {
    fn players(&self) -> &[Player] {
        BidGame::players(self)
    }

    fn cycle(&self) -> &RoundCycle {
        BidGame::cycle(self)
    }

    fn join(&mut self, name: &str) -> Result<Option<PlayerId>, DomainError> {
        self.add_player(name).map(Some)
    }

    fn remove_player(&mut self, id: PlayerId) -> Result<Player, DomainError> {
        BidGame::remove_player(self, id)
    }

    fn rename_player(&mut self, id: PlayerId, name: &str) -> Result<(), DomainError> {
        BidGame::rename_player(self, id, name)
    }

    fn set_score(&mut self, id: PlayerId, value: i64) -> Result<(), DomainError> {
        BidGame::set_score(self, id, value)
    }

    fn apply_score_edits(
        &mut self,
        edits: &HashMap<PlayerId, String>,
    ) -> Result<usize, DomainError> {
        BidGame::apply_score_edits(self, edits)
    }

    fn reset_game(&mut self) {
        BidGame::reset_game(self)
    }

    fn snapshot(&self) -> GameSnapshot {
        BidGame::snapshot(self)
    }
}
