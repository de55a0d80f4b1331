//! The cast of a simulation: players and geese to seat before play starts.
//!
//! A roster is either loaded from JSON or generated with the same defaults
//! the interactive setup used: balances in 10..=100, honk volumes in
//! 1..=10, and a coin flip for each goose's role.

use std::path::Path;

use serde::{Deserialize, Serialize};

use honk_core::{Casino, Goose, GooseRole, Player, RandomSource};

use crate::error::{SimError, SimResult};

/// Lowest generated starting balance.
pub const MIN_BALANCE: i64 = 10;
/// Highest generated starting balance.
pub const MAX_BALANCE: i64 = 100;
/// Lowest generated honk volume.
pub const MIN_VOLUME: i64 = 1;
/// Highest generated honk volume.
pub const MAX_VOLUME: i64 = 10;

/// Players and geese to seat in a fresh casino.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Players, in seating order.
    #[serde(default)]
    pub players: Vec<Player>,
    /// Geese, in seating order.
    #[serde(default)]
    pub geese: Vec<Goose>,
}

impl Roster {
    /// Parse a roster from JSON.
    ///
    /// ```json
    /// { "players": [{ "name": "Alice", "balance": 80 }],
    ///   "geese":   [{ "name": "Gus", "role": "war", "honk_volume": 5 }] }
    /// ```
    pub fn from_json(source: &str) -> SimResult<Self> {
        serde_json::from_str(source).map_err(|e| SimError::Roster(e.to_string()))
    }

    /// Read and parse a roster file.
    pub fn load(path: &Path) -> SimResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    /// Serialize the roster as pretty JSON.
    pub fn to_json(&self) -> SimResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SimError::Roster(e.to_string()))
    }

    /// Generate `players` players and `geese` geese named `Player1..` and `Goose1..`.
    pub fn generate<R: RandomSource + ?Sized>(players: usize, geese: usize, rng: &mut R) -> Self {
        let players = (1..=players)
            .map(|i| Player::new(format!("Player{i}"), rng.roll(MIN_BALANCE, MAX_BALANCE)))
            .collect();
        let geese = (1..=geese)
            .map(|i| random_goose(format!("Goose{i}"), rng))
            .collect();
        Self { players, geese }
    }

    /// Reject rosters that cannot start a game.
    pub fn validate(&self) -> SimResult<()> {
        if self.players.is_empty() {
            return Err(SimError::Roster("at least one player is required".into()));
        }
        if let Some(p) = self.players.iter().find(|p| p.balance <= 0) {
            return Err(SimError::Roster(format!(
                "player '{}' must start with a positive balance",
                p.name
            )));
        }
        if let Some(g) = self.geese.iter().find(|g| g.honk_volume < 0) {
            return Err(SimError::Roster(format!(
                "goose '{}' has a negative honk volume",
                g.name
            )));
        }
        Ok(())
    }

    /// Validate the roster and seat everyone in a new casino.
    pub fn into_casino(self) -> SimResult<Casino> {
        self.validate()?;
        let mut casino = Casino::new();
        for player in self.players {
            casino.add_player(player)?;
        }
        for goose in self.geese {
            casino.add_goose(goose)?;
        }
        Ok(casino)
    }
}

/// A goose with a random role and volume.
pub fn random_goose<R: RandomSource + ?Sized>(name: String, rng: &mut R) -> Goose {
    let role = if rng.roll(0, 1) == 0 {
        GooseRole::Aggressive
    } else {
        GooseRole::Vocal
    };
    Goose::new(name, role, rng.roll(MIN_VOLUME, MAX_VOLUME))
}
