use crate::domain::entries::{parse_or_zero, PendingEntries, PointsEntry};
use crate::domain::player::PlayerId;
use crate::domain::roster::PlayerRoster;
use crate::errors::domain::{DomainError, ValidationKind};

/// Parse every roster player's points, treating blank or malformed text as 0.
///
/// At least one player must have a non-zero value, otherwise the round is
/// rejected so an accidental empty submit does not burn a round.
pub fn score_simple_round(
    roster: &PlayerRoster,
    pending: &PendingEntries<PointsEntry>,
) -> Result<Vec<(PlayerId, i64)>, DomainError> {
    let deltas: Vec<(PlayerId, i64)> = roster
        .ids()
        .map(|id| {
            let points = pending.get(id).map_or(0, |e| parse_or_zero(&e.points));
            (id, points)
        })
        .collect();

    if deltas.iter().all(|(_, points)| *points == 0) {
        return Err(DomainError::validation(
            ValidationKind::NoScoreEntered,
            "No valid score entered",
        ));
    }
    Ok(deltas)
}
