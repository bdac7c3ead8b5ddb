use crate::domain::roster::{PlayerRoster, RosterLimits};
use crate::errors::domain::{DomainError, StateKind, ValidationKind};

fn bid_roster(n: usize) -> PlayerRoster {
    let names: Vec<String> = (1..=n).map(|i| format!("Player {i}")).collect();
    PlayerRoster::from_names(&names, RosterLimits::bid_game()).expect("valid roster")
}

#[test]
fn from_names_enforces_bounds() {
    let err = PlayerRoster::from_names(&["Solo"], RosterLimits::bid_game()).unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::RosterSize, _)));

    let nine: Vec<String> = (0..9).map(|i| format!("p{i}")).collect();
    let err = PlayerRoster::from_names(&nine, RosterLimits::bid_game()).unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::RosterSize, _)));

    assert_eq!(bid_roster(8).len(), 8);
}

#[test]
fn from_names_rejects_blank_name() {
    let err = PlayerRoster::from_names(&["Anne", "   "], RosterLimits::bid_game()).unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::EmptyName, _)));
}

#[test]
fn from_names_trims_and_keeps_order() {
    let r = PlayerRoster::from_names(&[" Anne ", "Bonny"], RosterLimits::bid_game()).unwrap();
    let names: Vec<&str> = r.players().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Anne", "Bonny"]);
}

#[test]
fn add_appends_with_zero_total_until_full() {
    let mut r = bid_roster(7);
    let id = r.add("Eighth").expect("room for one more");
    assert_eq!(r.players().last().map(|p| p.id), Some(id));
    assert_eq!(r.require(id).unwrap().total_score, 0);

    let err = r.add("Ninth").unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::RosterFull, _)));
    assert_eq!(r.len(), 8);
}

#[test]
fn unbounded_roster_never_fills() {
    let mut r = PlayerRoster::new(RosterLimits::unbounded());
    for i in 0..50 {
        r.add(&format!("p{i}")).unwrap();
    }
    assert_eq!(r.len(), 50);
}

#[test]
fn remove_takes_exactly_one_player() {
    let mut r = bid_roster(4);
    let ids: Vec<_> = r.ids().collect();
    let removed = r.remove(ids[1]).unwrap();
    assert_eq!(removed.id, ids[1]);
    let remaining: Vec<_> = r.ids().collect();
    assert_eq!(remaining, [ids[0], ids[2], ids[3]]);
}

#[test]
fn remove_refuses_to_drop_below_minimum() {
    let mut r = bid_roster(2);
    let id = r.players()[0].id;
    let err = r.remove(id).unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::RosterSize, _)));
    assert_eq!(r.len(), 2);
}

#[test]
fn rename_preserves_identity_and_score() {
    let mut r = bid_roster(2);
    let id = r.players()[0].id;
    r.set_score(id, 120).unwrap();
    r.rename(id, "Mary Read").unwrap();

    let p = r.require(id).unwrap();
    assert_eq!(p.name, "Mary Read");
    assert_eq!(p.total_score, 120);
    assert_eq!(r.len(), 2);
}

#[test]
fn rename_rejects_whitespace_name() {
    let mut r = bid_roster(2);
    let id = r.players()[0].id;
    let err = r.rename(id, " \t").unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::EmptyName, _)));
    assert_eq!(r.require(id).unwrap().name, "Player 1");
}

#[test]
fn unknown_ids_are_state_errors() {
    let mut r = bid_roster(3);
    let stranger = bid_roster(2).players()[0].id;
    for err in [
        r.rename(stranger, "x").unwrap_err(),
        r.set_score(stranger, 5).unwrap_err(),
        r.remove(stranger).map(|_| ()).unwrap_err(),
    ] {
        assert!(matches!(err, DomainError::State(StateKind::UnknownPlayer, _)));
    }
}

#[test]
fn set_score_replaces_and_reset_zeroes() {
    let mut r = bid_roster(3);
    let ids: Vec<_> = r.ids().collect();
    r.set_score(ids[0], -40).unwrap();
    r.apply_deltas(&[(ids[0], 15), (ids[2], 7)]);
    assert_eq!(r.require(ids[0]).unwrap().total_score, -25);
    assert_eq!(r.require(ids[2]).unwrap().total_score, 7);

    r.reset_scores();
    assert!(r.players().iter().all(|p| p.total_score == 0));
    assert_eq!(r.len(), 3);
}
