use std::path::PathBuf;

use honk_core::CasinoError;

/// Result alias for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while setting up or configuring a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The casino rejected a setup step.
    #[error(transparent)]
    Casino(#[from] CasinoError),

    /// The roster is malformed or cannot start a game.
    #[error("invalid roster: {0}")]
    Roster(String),

    /// A roster file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
