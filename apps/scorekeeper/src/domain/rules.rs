/// Smallest crew the bid game can be played with.
pub const MIN_PLAYERS: usize = 2;
/// Largest crew the bid game supports.
pub const MAX_PLAYERS: usize = 8;
/// Round count used when a bid game is started without an explicit limit.
pub const DEFAULT_BID_ROUNDS: u32 = 10;
/// Shorter preset offered alongside the default.
pub const SHORT_BID_ROUNDS: u32 = 5;

/// Points per trick when a bid is made exactly.
pub const EXACT_BID_POINTS: i64 = 20;
/// Points per round number for a made (or missed) zero bid.
pub const ZERO_BID_POINTS: i64 = 10;
/// Penalty per trick of difference on a missed non-zero bid.
pub const MISS_PENALTY: i64 = 10;
