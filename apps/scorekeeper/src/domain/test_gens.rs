// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};

/// Round numbers as they occur in a real game.
pub fn round() -> impl Strategy<Value = u32> {
    1u32..=20
}

pub fn bonus() -> impl Strategy<Value = i64> {
    -100i64..=100
}

/// (bid, tricks) pairs where the bid was made and is non-zero.
pub fn made_bid() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=13).prop_map(|b| (b, b))
}

/// (bid, tricks) pairs where a non-zero bid was missed.
pub fn missed_bid() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=13, 0u32..=13).prop_filter("bid must miss", |(b, t)| b != t)
}

/// A bid-game crew size.
pub fn crew_size() -> impl Strategy<Value = usize> {
    MIN_PLAYERS..=MAX_PLAYERS
}

/// Per-player trick counts for `players` players that fit inside `round`.
pub fn tricks_within(players: usize, round: u32) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..=round, players).prop_map(move |mut tricks| {
        // Trim from the back until the sum fits.
        let mut total: u32 = tricks.iter().sum();
        for t in tricks.iter_mut().rev() {
            if total <= round {
                break;
            }
            let cut = (*t).min(total - round);
            *t -= cut;
            total -= cut;
        }
        tricks
    })
}

/// Simple-game points text: mostly numbers, some junk that must count as 0.
pub fn points_text() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (-50i64..=50).prop_map(|n| n.to_string()),
        1 => Just(String::new()),
        1 => "[a-z]{1,4}",
    ]
}
