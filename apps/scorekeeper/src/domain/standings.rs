use crate::domain::player::Player;

/// Leaderboard view: players by descending total. Ties keep roster order.
pub fn standings(players: &[Player]) -> Vec<&Player> {
    let mut sorted: Vec<&Player> = players.iter().collect();
    // sort_by is stable
    sorted.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    sorted
}
