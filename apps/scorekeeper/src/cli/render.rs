use std::fmt::Write;

use crate::domain::player::Player;
use crate::domain::snapshot::GameSnapshot;

/// Round label followed by every player in roster order, numbered by the
/// position commands use to address them.
pub fn board(snapshot: &GameSnapshot) -> String {
    let mut out = snapshot.round_label.clone();
    if snapshot.complete {
        out.push_str(" (complete)");
    }
    out.push('\n');
    push_rows(&mut out, snapshot.players.iter().enumerate().map(|(i, p)| (i + 1, p)));
    out
}

/// Players ranked by total, highest first.
pub fn standings(snapshot: &GameSnapshot) -> String {
    let mut out = String::from(if snapshot.complete {
        "Final standings\n"
    } else {
        "Standings\n"
    });
    push_rows(&mut out, snapshot.standings.iter().enumerate().map(|(i, p)| (i + 1, p)));
    out
}

fn push_rows<'a>(out: &mut String, rows: impl Iterator<Item = (usize, &'a Player)> + Clone) {
    let width = rows.clone().map(|(_, p)| p.name.chars().count()).max().unwrap_or(0);
    for (n, player) in rows {
        let _ = writeln!(out, "{n:>3}. {:<width$}  {:>6}", player.name, player.total_score);
    }
}
