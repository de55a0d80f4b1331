use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CasinoError, CasinoResult};
use crate::random::RandomSource;

/// Rolls above this (1d50 + honk volume) let a war goose steal.
const THEFT_THRESHOLD: i64 = 30;
/// Rolls above this (1d100) let a honk goose scare its target.
const HONK_THRESHOLD: i64 = 20;

/// What a goose is able to do to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GooseRole {
    /// Steals the value of a random chip ("WarGoose").
    #[serde(alias = "war")]
    Aggressive,
    /// Scares players out of money equal to its honk volume ("HonkGoose").
    #[serde(alias = "honk")]
    Vocal,
}

impl GooseRole {
    /// Both roles, in a fixed order.
    pub const ALL: [GooseRole; 2] = [GooseRole::Aggressive, GooseRole::Vocal];
}

impl fmt::Display for GooseRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aggressive => write!(f, "WarGoose"),
            Self::Vocal => write!(f, "HonkGoose"),
        }
    }
}

impl FromStr for GooseRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aggressive" | "war" | "wargoose" => Ok(Self::Aggressive),
            "vocal" | "honk" | "honkgoose" => Ok(Self::Vocal),
            other => Err(format!("unknown goose role '{other}' (expected war or honk)")),
        }
    }
}

/// An adversarial goose. Its balance holds everything it has taken from players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goose {
    /// Unique name across both roles.
    pub name: String,
    /// Loudness; boosts theft rolls and is the amount taken by a scare.
    pub honk_volume: i64,
    /// Stolen earnings, starting at zero.
    #[serde(default)]
    pub balance: i64,
    /// What this goose can do.
    pub role: GooseRole,
}

impl Goose {
    /// Create a goose with an empty balance.
    pub fn new(name: impl Into<String>, role: GooseRole, honk_volume: i64) -> Self {
        Self {
            name: name.into(),
            honk_volume,
            balance: 0,
            role,
        }
    }

    /// Shorthand for an aggressive goose.
    pub fn war(name: impl Into<String>, honk_volume: i64) -> Self {
        Self::new(name, GooseRole::Aggressive, honk_volume)
    }

    /// Shorthand for a vocal goose.
    pub fn honk(name: impl Into<String>, honk_volume: i64) -> Self {
        Self::new(name, GooseRole::Vocal, honk_volume)
    }

    /// Roll this goose's capability. Zero means the attempt failed.
    ///
    /// An aggressive goose succeeds when `1d50 + honk_volume > 30` and then
    /// yields a magnitude in `1..=100`. A vocal goose succeeds when
    /// `1d100 > 20` and yields its honk volume.
    pub fn attempt<R: RandomSource + ?Sized>(&self, rng: &mut R) -> i64 {
        match self.role {
            GooseRole::Aggressive => {
                if rng.roll(1, 50).saturating_add(self.honk_volume) > THEFT_THRESHOLD {
                    rng.roll(1, 100)
                } else {
                    0
                }
            }
            GooseRole::Vocal => {
                if rng.roll(1, 100) > HONK_THRESHOLD {
                    self.honk_volume
                } else {
                    0
                }
            }
        }
    }

    /// Roll the theft capability, rejecting vocal geese.
    pub fn attempt_theft<R: RandomSource + ?Sized>(&self, rng: &mut R) -> CasinoResult<i64> {
        self.require(GooseRole::Aggressive)?;
        Ok(self.attempt(rng))
    }

    /// Roll the honk capability, rejecting aggressive geese.
    pub fn attempt_honk<R: RandomSource + ?Sized>(&self, rng: &mut R) -> CasinoResult<i64> {
        self.require(GooseRole::Vocal)?;
        Ok(self.attempt(rng))
    }

    pub(crate) fn require(&self, role: GooseRole) -> CasinoResult<()> {
        if self.role == role {
            Ok(())
        } else {
            Err(CasinoError::WrongActor {
                name: self.name.clone(),
                expected: role,
            })
        }
    }
}

impl fmt::Display for Goose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (balance: {}, volume: {})",
            self.role, self.name, self.balance, self.honk_volume
        )
    }
}
