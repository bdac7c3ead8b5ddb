//! Transient per-round input, held as raw text until a round is submitted.
//!
//! Entries are keyed by `PlayerId` so renames never orphan or duplicate them.

use std::collections::HashMap;

use crate::domain::player::PlayerId;

/// One player's bid-game input for the current round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BidEntry {
    pub bid: String,
    pub tricks: String,
    pub bonus: String,
}

impl BidEntry {
    pub fn new(bid: impl Into<String>, tricks: impl Into<String>, bonus: impl Into<String>) -> Self {
        Self {
            bid: bid.into(),
            tricks: tricks.into(),
            bonus: bonus.into(),
        }
    }

    /// Convenience for callers that already hold numbers.
    pub fn from_values(bid: u32, tricks: u32, bonus: i64) -> Self {
        Self::new(bid.to_string(), tricks.to_string(), bonus.to_string())
    }
}

/// One player's simple-game input for the current round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointsEntry {
    pub points: String,
}

impl PointsEntry {
    pub fn new(points: impl Into<String>) -> Self {
        Self {
            points: points.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PendingEntries<E> {
    entries: HashMap<PlayerId, E>,
}

impl<E> Default for PendingEntries<E> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<E> PendingEntries<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a player's entry.
    pub fn stage(&mut self, id: PlayerId, entry: E) {
        self.entries.insert(id, entry);
    }

    pub fn get(&self, id: PlayerId) -> Option<&E> {
        self.entries.get(&id)
    }

    pub fn remove(&mut self, id: PlayerId) -> Option<E> {
        self.entries.remove(&id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.entries.contains_key(&id)
    }
}

impl<E: Default> PendingEntries<E> {
    /// Mutable access for field-by-field editing, creating a blank entry if needed.
    pub fn entry_mut(&mut self, id: PlayerId) -> &mut E {
        self.entries.entry(id).or_default()
    }
}

/// Lenient integer parse: blank or malformed text counts as 0.
pub fn parse_or_zero(text: &str) -> i64 {
    text.trim().parse::<i64>().unwrap_or(0)
}

/// Strict parse for counts that must be present and non-negative.
pub fn parse_count(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}
