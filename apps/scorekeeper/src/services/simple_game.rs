//! Free-form scoring session: any number of players, points typed per round,
//! fixed or indefinite round count.

use std::collections::HashMap;

use tracing::info;

use super::bid_game::log_outcome;
use super::session::Session;
use super::ScoreSheet;
use crate::config::GameConfig;
use crate::domain::entries::{PendingEntries, PointsEntry};
use crate::domain::player::{Player, PlayerId};
use crate::domain::round_cycle::{RoundCycle, RoundLimit, RoundOutcome};
use crate::domain::simple_scoring::score_simple_round;
use crate::domain::snapshot::{GameKind, GameSnapshot};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone)]
pub struct SimpleGame {
    session: Session<PointsEntry>,
}

impl SimpleGame {
    pub fn start<S: AsRef<str>>(
        names: &[S],
        limit: RoundLimit,
        config: &GameConfig,
    ) -> Result<Self, DomainError> {
        let session = Session::start(GameKind::Simple, names, config.simple_limits(), limit)?;
        info!(
            players = session.roster().len(),
            rounds = ?limit.rounds(),
            "Simple game started"
        );
        Ok(Self { session })
    }

    /// Add a player. A full roster is not an error here: the request is
    /// ignored and `Ok(None)` returned.
    pub fn add_player(&mut self, name: &str) -> Result<Option<PlayerId>, DomainError> {
        match self.session.add(name) {
            Ok(id) => Ok(Some(id)),
            Err(DomainError::Validation(ValidationKind::RosterFull, _)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, DomainError> {
        self.session.remove(id)
    }

    pub fn rename_player(&mut self, id: PlayerId, name: &str) -> Result<(), DomainError> {
        self.session.rename(id, name)
    }

    pub fn set_score(&mut self, id: PlayerId, value: i64) -> Result<(), DomainError> {
        self.session.set_score(id, value)
    }

    pub fn apply_score_edits(
        &mut self,
        edits: &HashMap<PlayerId, String>,
    ) -> Result<usize, DomainError> {
        self.session.apply_score_edits(edits)
    }

    pub fn stage_points(&mut self, id: PlayerId, points: impl Into<String>) -> Result<(), DomainError> {
        self.session.stage(id, PointsEntry::new(points))
    }

    pub fn pending(&self) -> &PendingEntries<PointsEntry> {
        self.session.pending()
    }

    pub fn submit_round(&mut self) -> Result<RoundOutcome, DomainError> {
        self.session.cycle().ensure_open()?;
        let round = self.current_round();
        let deltas = score_simple_round(self.session.roster(), self.session.pending())?;
        let outcome = self.session.commit(&deltas);
        log_outcome(round, outcome);
        Ok(outcome)
    }

    /// Stage `entries` over any existing ones and submit in one step.
    pub fn submit_entries(
        &mut self,
        entries: HashMap<PlayerId, PointsEntry>,
    ) -> Result<RoundOutcome, DomainError> {
        self.session.cycle().ensure_open()?;
        let merged = self.session.merged_with(entries)?;
        score_simple_round(self.session.roster(), &merged)?;
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

    /// "Start over": zero totals, back to round 1, same players.
    pub fn reset_game(&mut self) {
        self.session.reset();
        info!("Simple game reset");
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    pub fn finish(self) -> GameSnapshot {
        let snapshot = self.session.snapshot();
        info!(rounds = snapshot.current_round, "Simple game finished");
        snapshot
    }
}

impl ScoreSheet for SimpleGame {
    fn players(&self) -> &[Player] {
        SimpleGame::players(self)
    }

    fn cycle(&self) -> &RoundCycle {
        SimpleGame::cycle(self)
    }

    fn join(&mut self, name: &str) -> Result<Option<PlayerId>, DomainError> {
        self.add_player(name)
    }

    fn remove_player(&mut self, id: PlayerId) -> Result<Player, DomainError> {
        SimpleGame::remove_player(self, id)
    }

    fn rename_player(&mut self, id: PlayerId, name: &str) -> Result<(), DomainError> {
        SimpleGame::rename_player(self, id, name)
    }

    fn set_score(&mut self, id: PlayerId, value: i64) -> Result<(), DomainError> {
        SimpleGame::set_score(self, id, value)
    }

    fn apply_score_edits(
        &mut self,
        edits: &HashMap<PlayerId, String>,
    ) -> Result<usize, DomainError> {
        SimpleGame::apply_score_edits(self, edits)
    }

    fn reset_game(&mut self) {
        SimpleGame::reset_game(self)
    }

    fn snapshot(&self) -> GameSnapshot {
        SimpleGame::snapshot(self)
    }
}
