//! Sources of uniformly distributed integers.
//!
//! Every stochastic decision in the casino draws from a [`RandomSource`]
//! passed in by the caller, so one seeded generator can drive a whole run
//! and tests can script exact outcomes with [`ScriptedRolls`].

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;

/// A source of uniformly distributed integers in an inclusive range.
pub trait RandomSource {
    /// Draw a value uniformly from `low..=high`. Requires `low <= high`.
    fn roll(&mut self, low: i64, high: i64) -> i64;
}

impl RandomSource for StdRng {
    fn roll(&mut self, low: i64, high: i64) -> i64 {
        self.random_range(low..=high)
    }
}

/// Replays a fixed sequence of values.
///
/// Values are returned as queued, without checking them against the
/// requested range. Once the queue is exhausted every roll returns `low`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    values: VecDeque<i64>,
}

impl ScriptedRolls {
    /// Create a source that will return `values` in order.
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRolls {
    fn roll(&mut self, low: i64, _high: i64) -> i64 {
        self.values.pop_front().unwrap_or(low)
    }
}
