use crate::domain::entries::{parse_count, parse_or_zero, BidEntry, PendingEntries};
use crate::domain::player::{Player, PlayerId};
use crate::domain::roster::PlayerRoster;
use crate::domain::rules::{EXACT_BID_POINTS, MISS_PENALTY, ZERO_BID_POINTS};
use crate::errors::domain::{DomainError, ValidationKind};

/// Round score for one player.
///
/// Branch order matters: a made zero bid (`0 == 0`) must be caught before the
/// general exact-bid case.
pub fn round_delta(round: u32, bid: u32, tricks: u32, bonus: i64) -> i64 {
    let r = i64::from(round);
    let bid = i64::from(bid);
    let tricks = i64::from(tricks);

    let base = if bid == 0 && tricks == 0 {
        r * ZERO_BID_POINTS
    } else if bid == tricks {
        bid * EXACT_BID_POINTS
    } else if bid == 0 {
        -r * ZERO_BID_POINTS
    } else {
        -(bid - tricks).abs() * MISS_PENALTY
    };
    base.saturating_add(bonus)
}

/// A validated bid-game entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedBid {
    pub bid: u32,
    pub tricks: u32,
    pub bonus: i64,
}

/// Bid and tricks must be non-negative integers; bonus falls back to 0.
pub fn parse_bid_entry(player: &Player, entry: Option<&BidEntry>) -> Result<ParsedBid, DomainError> {
    let invalid = || {
        DomainError::validation(
            ValidationKind::InvalidEntry,
            format!("Invalid input for {}.", player.name),
        )
    };
    let entry = entry.ok_or_else(invalid)?;
    let bid = parse_count(&entry.bid).ok_or_else(invalid)?;
    let tricks = parse_count(&entry.tricks).ok_or_else(invalid)?;
    Ok(ParsedBid {
        bid,
        tricks,
        bonus: parse_or_zero(&entry.bonus),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundScore {
    pub player_id: PlayerId,
    pub entry: ParsedBid,
    pub delta: i64,
}

/// Validate a full round and compute every player's delta without touching
/// the roster. Entries for players no longer on the roster are ignored.
pub fn score_round(
    roster: &PlayerRoster,
    pending: &PendingEntries<BidEntry>,
    round: u32,
) -> Result<Vec<RoundScore>, DomainError> {
    let parsed = roster
        .players()
        .iter()
        .map(|p| parse_bid_entry(p, pending.get(p.id)).map(|e| (p.id, e)))
        .collect::<Result<Vec<_>, _>>()?;

    let total_tricks: u64 = parsed.iter().map(|(_, e)| u64::from(e.tricks)).sum();
    if total_tricks > u64::from(round) {
        return Err(DomainError::validation(
            ValidationKind::TrickSum,
            format!("Total tricks ({total_tricks}) cannot exceed the round number ({round})."),
        ));
    }

    Ok(parsed
        .into_iter()
        .map(|(player_id, entry)| RoundScore {
            player_id,
            entry,
            delta: round_delta(round, entry.bid, entry.tricks, entry.bonus),
        })
        .collect())
}
