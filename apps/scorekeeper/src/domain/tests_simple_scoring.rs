use crate::domain::entries::{PendingEntries, PointsEntry};
use crate::domain::roster::{PlayerRoster, RosterLimits};
use crate::domain::simple_scoring::score_simple_round;
use crate::errors::domain::{DomainError, ValidationKind};

fn roster() -> PlayerRoster {
    PlayerRoster::from_names(&["Ada", "Bo", "Cy"], RosterLimits::unbounded()).unwrap()
}

#[test]
fn blank_round_is_rejected() {
    let r = roster();
    let err = score_simple_round(&r, &PendingEntries::new()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::NoScoreEntered, _)
    ));
}

#[test]
fn all_zero_or_junk_is_rejected() {
    let r = roster();
    let ids: Vec<_> = r.ids().collect();
    let mut pending = PendingEntries::new();
    pending.stage(ids[0], PointsEntry::new("0"));
    pending.stage(ids[1], PointsEntry::new("lots"));
    pending.stage(ids[2], PointsEntry::new(""));
    assert!(score_simple_round(&r, &pending).is_err());
}

#[test]
fn junk_counts_as_zero_when_someone_scored() {
    let r = roster();
    let ids: Vec<_> = r.ids().collect();
    let mut pending = PendingEntries::new();
    pending.stage(ids[0], PointsEntry::new("12"));
    pending.stage(ids[1], PointsEntry::new("twelve"));
    pending.stage(ids[2], PointsEntry::new("-4"));

    let deltas = score_simple_round(&r, &pending).unwrap();
    assert_eq!(deltas, [(ids[0], 12), (ids[1], 0), (ids[2], -4)]);
}

#[test]
fn negative_only_round_counts_as_entered() {
    let r = roster();
    let mut pending = PendingEntries::new();
    pending.stage(r.players()[2].id, PointsEntry::new("-5"));
    assert!(score_simple_round(&r, &pending).is_ok());
}
