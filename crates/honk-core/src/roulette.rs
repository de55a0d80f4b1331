//! Roulette wagers and their resolution.

use std::fmt;
use std::str::FromStr;

use crate::error::{CasinoError, CasinoResult};

/// Lowest pocket on the wheel.
pub const MIN_POCKET: i64 = 0;
/// Highest pocket on the wheel.
pub const MAX_POCKET: i64 = 36;
/// Amount credited per unit staked when a straight number hits.
pub const STRAIGHT_PAYOUT: i64 = 35;
/// Amount credited per unit staked when an outside bet hits.
pub const OUTSIDE_PAYOUT: i64 = 2;

/// Every token accepted for an outside bet, lowercase.
pub const OUTSIDE_TOKENS: [&str; 11] = [
    "red",
    "black",
    "even",
    "odd",
    "красное",
    "чёрное",
    "черное",
    "чётное",
    "четное",
    "нечётное",
    "нечетное",
];

/// What a player puts their stake on, as supplied by the caller.
///
/// A wager is only checked after the stake has been taken, so it may
/// hold values the wheel does not accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wager {
    /// A single number; valid in `0..=36`.
    Straight(i64),
    /// A colour or parity token; valid if listed in [`OUTSIDE_TOKENS`].
    Outside(String),
}

impl Wager {
    /// Validate the wager against the wheel.
    pub fn resolve(&self) -> CasinoResult<Bet> {
        match self {
            Self::Straight(n) if (MIN_POCKET..=MAX_POCKET).contains(n) => Ok(Bet::Straight(*n)),
            Self::Straight(_) => Err(CasinoError::InvalidWager(format!(
                "must choose a number between {MIN_POCKET} and {MAX_POCKET}"
            ))),
            Self::Outside(token) => OutsideBet::parse(token)
                .map(Bet::Outside)
                .ok_or_else(|| CasinoError::InvalidWager("make a valid bet".into())),
        }
    }
}

impl From<i64> for Wager {
    fn from(n: i64) -> Self {
        Self::Straight(n)
    }
}

impl From<&str> for Wager {
    fn from(token: &str) -> Self {
        Self::Outside(token.to_string())
    }
}

impl From<String> for Wager {
    fn from(token: String) -> Self {
        Self::Outside(token)
    }
}

/// Integers become straight wagers, anything else an outside token.
impl FromStr for Wager {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<i64>() {
            Ok(n) => Self::Straight(n),
            Err(_) => Self::Outside(s.to_string()),
        })
    }
}

impl fmt::Display for Wager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Straight(n) => write!(f, "{n}"),
            Self::Outside(token) => write!(f, "{token}"),
        }
    }
}

/// A recognized colour or parity call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutsideBet {
    /// Red pockets.
    Red,
    /// Black pockets.
    Black,
    /// Even pockets.
    Even,
    /// Odd pockets.
    Odd,
}

impl OutsideBet {
    /// All calls, in a fixed order.
    pub const ALL: [OutsideBet; 4] = [Self::Red, Self::Black, Self::Even, Self::Odd];

    /// Recognize a token (trimmed, case-insensitive).
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "red" | "красное" => Some(Self::Red),
            "black" | "чёрное" | "черное" => Some(Self::Black),
            "even" | "чётное" | "четное" => Some(Self::Even),
            "odd" | "нечётное" | "нечетное" => Some(Self::Odd),
            _ => None,
        }
    }
}

impl fmt::Display for OutsideBet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Black => write!(f, "black"),
            Self::Even => write!(f, "even"),
            Self::Odd => write!(f, "odd"),
        }
    }
}

/// A wager the wheel accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bet {
    /// A single pocket.
    Straight(i64),
    /// A colour or parity call.
    Outside(OutsideBet),
}

impl Bet {
    /// Whether the bet wins when the ball lands in `pocket`.
    ///
    /// Every outside call wins on an odd pocket, whatever colour or parity
    /// it names.
    pub fn wins(&self, pocket: i64) -> bool {
        match self {
            Self::Straight(n) => *n == pocket,
            Self::Outside(_) => pocket % 2 == 1,
        }
    }

    /// Credit per unit staked on a win.
    pub fn payout_multiplier(&self) -> i64 {
        match self {
            Self::Straight(_) => STRAIGHT_PAYOUT,
            Self::Outside(_) => OUTSIDE_PAYOUT,
        }
    }
}

/// The result of one spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spin {
    /// Where the ball landed.
    pub pocket: i64,
    /// Whether the bet won.
    pub won: bool,
    /// Amount credited back to the player; zero on a loss.
    pub payout: i64,
}
