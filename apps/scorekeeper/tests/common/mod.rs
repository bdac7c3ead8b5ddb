#![allow(dead_code)]

use std::collections::HashMap;

use scorekeeper::{BidEntry, BidGame, GameConfig, PlayerId, RoundLimit, ScoreSheet, SimpleGame};

/// Install test logging; safe to call from every test.
pub fn init() {
    test_support::logging::init();
}

/// Bid game with `count` uniquely named players and a fixed round limit.
pub fn bid_game(count: usize, rounds: u32) -> BidGame {
    init();
    let names = test_support::unique_names("crew", count);
    BidGame::start(
        &names,
        RoundLimit::fixed(rounds).expect("non-zero rounds"),
        &GameConfig::default(),
    )
    .expect("start bid game")
}

pub fn simple_game(names: &[&str], limit: RoundLimit) -> SimpleGame {
    init();
    SimpleGame::start(names, limit, &GameConfig::default()).expect("start simple game")
}

pub fn ids(sheet: &impl ScoreSheet) -> Vec<PlayerId> {
    sheet.players().iter().map(|p| p.id).collect()
}

pub fn totals(sheet: &impl ScoreSheet) -> Vec<i64> {
    sheet.players().iter().map(|p| p.total_score).collect()
}

/// One `(bid, tricks, bonus)` entry per player, in roster order.
pub fn bid_round(game: &BidGame, rows: &[(u32, u32, i64)]) -> HashMap<PlayerId, BidEntry> {
    ids(game)
        .into_iter()
        .zip(rows)
        .map(|(id, &(bid, tricks, bonus))| (id, BidEntry::from_values(bid, tricks, bonus)))
        .collect()
}
