//! Player registry and name lookup
//!
//! The built-in registry is embedded at compile time from
//! `data/players.json`, an array of `{"id", "full_name", "is_active"}`
//! records in the same shape as the stats site's static player dump (extra
//! fields are ignored). It is parsed once on first use.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Embedded player registry JSON
pub const PLAYERS_JSON: &str = include_str!("../data/players.json");

static PLAYERS: OnceLock<Vec<Player>> = OnceLock::new();

/// Player identifier used by the stats API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub full_name: &'static str,
    pub is_active: bool,
}

#[cfg(test)]
const fn player(id: u32, full_name: &'static str, is_active: bool) -> Player {
    Player {
        id: PlayerId(id),
        full_name,
        is_active,
    }
}

fn load_builtin() -> Vec<Player> {
    match serde_json::from_str(PLAYERS_JSON) {
        Ok(players) => players,
        Err(e) => {
            tracing::error!("Embedded player registry is corrupted: {}", e);
            Vec::new()
        }
    }
}

/// Read-only name → id lookup
#[derive(Debug, Clone, Copy)]
pub struct PlayerRegistry {
    players: &'static [Player],
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PlayerRegistry {
    /// Registry compiled into the binary
    pub fn builtin() -> Self {
        Self {
            players: PLAYERS.get_or_init(load_builtin).as_slice(),
        }
    }

    pub fn new(players: &'static [Player]) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &'static [Player] {
        self.players
    }

    /// Resolve a full name to at most one player
    ///
    /// A case-insensitive exact match wins; otherwise the first player whose
    /// name contains the query. Blank names never match.
    pub fn find_by_full_name(&self, name: &str) -> Option<&'static Player> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let players: &'static [Player] = self.players;
        players
            .iter()
            .find(|p| p.full_name.eq_ignore_ascii_case(name))
            .or_else(|| self.search(name).into_iter().next())
    }

    /// All players whose full name contains `pattern`, in registry order
    pub fn search(&self, pattern: &str) -> Vec<&'static Player> {
        let pattern = pattern.trim();
        let players: &'static [Player] = self.players;

        let matcher = match RegexBuilder::new(&regex::escape(pattern))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => re,
            Err(e) => {
                tracing::warn!("Failed to build name matcher for {:?}: {}", pattern, e);
                return Vec::new();
            }
        };

        players
            .iter()
            .filter(|p| matcher.is_match(p.full_name))
            .collect()
    }
}
