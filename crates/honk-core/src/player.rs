use std::fmt;

use serde::{Deserialize, Serialize};

/// A casino guest with a spendable balance.
///
/// The balance is signed: goose actions do not floor it at zero, and a
/// player at or below zero is considered bankrupt by the driving loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique name, the player's key in the index.
    pub name: String,
    /// Current balance.
    pub balance: i64,
}

impl Player {
    /// Create a player with an initial balance.
    pub fn new(name: impl Into<String>, balance: i64) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }

    /// True once the balance has dropped to zero or below.
    pub fn is_bankrupt(&self) -> bool {
        self.balance <= 0
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (balance: {})", self.name, self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bankrupt_at_zero_and_below() {
        assert!(!Player::new("Alice", 1).is_bankrupt());
        assert!(Player::new("Alice", 0).is_bankrupt());
        assert!(Player::new("Alice", -25).is_bankrupt());
    }

    #[test]
    fn display() {
        assert_eq!(Player::new("Bob", 40).to_string(), "Bob (balance: 40)");
    }
}
