use crate::domain::bid_scoring::{parse_bid_entry, round_delta, score_round};
use crate::domain::entries::{BidEntry, PendingEntries};
use crate::domain::roster::{PlayerRoster, RosterLimits};
use crate::errors::domain::{DomainError, ValidationKind};

fn roster(names: &[&str]) -> PlayerRoster {
    PlayerRoster::from_names(names, RosterLimits::bid_game()).expect("valid roster")
}

fn stage_all(roster: &PlayerRoster, entries: &[BidEntry]) -> PendingEntries<BidEntry> {
    let mut pending = PendingEntries::new();
    for (id, entry) in roster.ids().zip(entries.iter().cloned()) {
        pending.stage(id, entry);
    }
    pending
}

#[test]
fn zero_bid_made_scores_ten_per_round_plus_bonus() {
    assert_eq!(round_delta(3, 0, 0, 2), 32);
    assert_eq!(round_delta(1, 0, 0, 0), 10);
}

#[test]
fn exact_bid_scores_twenty_per_trick() {
    assert_eq!(round_delta(7, 4, 4, 0), 80);
    assert_eq!(round_delta(7, 1, 1, 30), 50);
}

#[test]
fn zero_bid_missed_loses_ten_per_round() {
    assert_eq!(round_delta(5, 0, 3, 0), -50);
    assert_eq!(round_delta(5, 0, 1, 10), -40);
}

#[test]
fn missed_bid_loses_ten_per_trick_of_difference() {
    assert_eq!(round_delta(4, 3, 1, 5), -15);
    assert_eq!(round_delta(4, 1, 3, 0), -20);
}

#[test]
fn zero_zero_is_not_treated_as_exact_bid() {
    // 0 == 0 would give 0 * 20 under the exact-bid branch
    assert_eq!(round_delta(6, 0, 0, 0), 60);
}

#[test]
fn parse_bid_entry_defaults_bonus() {
    let r = roster(&["Anne", "Bonny"]);
    let p = &r.players()[0];
    let parsed = parse_bid_entry(p, Some(&BidEntry::new("2", "1", "lots"))).expect("valid");
    assert_eq!((parsed.bid, parsed.tricks, parsed.bonus), (2, 1, 0));
}

#[test]
fn parse_bid_entry_names_offending_player() {
    let r = roster(&["Anne", "Bonny"]);
    let p = &r.players()[1];
    let err = parse_bid_entry(p, Some(&BidEntry::new("x", "1", ""))).unwrap_err();
    match err {
        DomainError::Validation(ValidationKind::InvalidEntry, detail) => {
            assert!(detail.contains("Bonny"), "detail was: {detail}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn parse_bid_entry_rejects_missing_entry_and_negative_tricks() {
    let r = roster(&["Anne", "Bonny"]);
    let p = &r.players()[0];
    assert!(parse_bid_entry(p, None).is_err());
    assert!(parse_bid_entry(p, Some(&BidEntry::new("1", "-1", ""))).is_err());
    assert!(parse_bid_entry(p, Some(&BidEntry::new("", "0", ""))).is_err());
}

#[test]
fn score_round_computes_every_player() {
    let r = roster(&["Anne", "Bonny", "Calico"]);
    let pending = stage_all(
        &r,
        &[
            BidEntry::new("1", "1", ""),
            BidEntry::new("0", "0", "10"),
            BidEntry::new("2", "1", ""),
        ],
    );
    let scores = score_round(&r, &pending, 2).expect("valid round");
    let deltas: Vec<i64> = scores.iter().map(|s| s.delta).collect();
    assert_eq!(deltas, [20, 30, -10]);
    assert_eq!(scores[0].player_id, r.players()[0].id);
}

#[test]
fn score_round_rejects_trick_sum_above_round() {
    let r = roster(&["Anne", "Bonny"]);
    let pending = stage_all(&r, &[BidEntry::new("2", "2", ""), BidEntry::new("1", "2", "")]);
    let err = score_round(&r, &pending, 3).unwrap_err();
    match err {
        DomainError::Validation(ValidationKind::TrickSum, detail) => {
            assert!(detail.contains("(4)"), "detail was: {detail}");
            assert!(detail.contains("(3)"), "detail was: {detail}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn score_round_allows_fewer_tricks_than_round() {
    let r = roster(&["Anne", "Bonny"]);
    let pending = stage_all(&r, &[BidEntry::new("0", "0", ""), BidEntry::new("1", "0", "")]);
    assert!(score_round(&r, &pending, 3).is_ok());
}

#[test]
fn score_round_requires_entry_for_every_player() {
    let r = roster(&["Anne", "Bonny"]);
    let mut pending = PendingEntries::new();
    pending.stage(r.players()[0].id, BidEntry::new("1", "1", ""));
    let err = score_round(&r, &pending, 1).unwrap_err();
    assert!(err.detail().contains("Bonny"));
}
