use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// The five denominations every chip set starts with, in ascending value.
pub const STANDARD_CHIPS: [(&str, i64); 5] = [
    ("white", 1),
    ("green", 5),
    ("blue", 10),
    ("red", 25),
    ("black", 50),
];

/// A betting chip keyed by colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
    /// Unique colour, the chip's key in the index.
    pub colour: String,
    /// Denomination.
    pub value: i64,
}

impl Chip {
    /// Create a chip of the given colour and denomination.
    pub fn new(colour: impl Into<String>, value: i64) -> Self {
        Self {
            colour: colour.into(),
            value,
        }
    }

    /// The canonical chip set, ordered by ascending value.
    pub fn standard_set() -> Vec<Chip> {
        STANDARD_CHIPS
            .iter()
            .map(|(colour, value)| Chip::new(*colour, *value))
            .collect()
    }
}

/// Adding an amount to a chip raises its value; the colour is kept.
impl Add<i64> for Chip {
    type Output = Chip;

    fn add(mut self, amount: i64) -> Chip {
        self.value += amount;
        self
    }
}

impl AddAssign<i64> for Chip {
    fn add_assign(&mut self, amount: i64) {
        self.value += amount;
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.colour, self.value)
    }
}
