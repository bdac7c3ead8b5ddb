use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Opaque, stable player identity. Survives renames; never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Ulid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub total_score: i64,
}

impl Player {
    pub(crate) fn new(name: String) -> Self {
        Self {
            id: PlayerId::new(),
            name,
            total_score: 0,
        }
    }
}
