//! Domain layer: pure scoring types and helpers. No I/O, no logging.

pub mod bid_scoring;
pub mod entries;
pub mod player;
pub mod roster;
pub mod round_cycle;
pub mod rules;
pub mod simple_scoring;
pub mod snapshot;
pub mod standings;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_bid_scoring;
#[cfg(test)]
mod tests_roster;
#[cfg(test)]
mod tests_simple_scoring;

// Re-exports for ergonomics
pub use bid_scoring::{round_delta, score_round, ParsedBid, RoundScore};
pub use entries::{BidEntry, PendingEntries, PointsEntry};
pub use player::{Player, PlayerId};
pub use roster::{PlayerRoster, RosterLimits};
pub use round_cycle::{RoundCycle, RoundLimit, RoundOutcome};
pub use simple_scoring::score_simple_round;
pub use snapshot::{GameKind, GameSnapshot};
pub use standings::standings;
