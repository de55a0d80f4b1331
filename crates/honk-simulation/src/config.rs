use crate::error::{SimError, SimResult};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for deterministic simulation.
    pub seed: u64,
    /// Rounds to play before giving up without a verdict.
    pub max_rounds: u64,
    /// A player at or above this balance wins the game.
    pub victory_threshold: i64,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_rounds: 100,
            victory_threshold: 5000,
            max_events: 0,
        }
    }
}

impl SimConfig {
    /// Set the RNG seed for deterministic simulation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of rounds after which the run stops undecided.
    pub fn with_max_rounds(mut self, rounds: u64) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set the balance a player needs to win.
    pub fn with_victory_threshold(mut self, threshold: i64) -> Self {
        self.victory_threshold = threshold;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Reject thresholds every seated player would already meet.
    pub fn validate(&self) -> SimResult<()> {
        if self.victory_threshold <= 0 {
            return Err(SimError::InvalidConfig(format!(
                "victory threshold must be positive, got {}",
                self.victory_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = SimConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_rounds, 100);
        assert_eq!(config.victory_threshold, 5000);
        assert_eq!(config.max_events, 0);
    }

    #[test]
    fn config_builder_chain() {
        let config = SimConfig::default()
            .with_seed(123)
            .with_max_rounds(10)
            .with_victory_threshold(300)
            .with_max_events(50);
        assert_eq!(config.seed, 123);
        assert_eq!(config.max_rounds, 10);
        assert_eq!(config.victory_threshold, 300);
        assert_eq!(config.max_events, 50);
    }

    #[test]
    fn config_rejects_non_positive_threshold() {
        assert!(SimConfig::default().validate().is_ok());
        let err = SimConfig::default()
            .with_victory_threshold(0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("victory threshold"));
    }
}
