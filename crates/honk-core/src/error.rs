use std::fmt;

use crate::goose::GooseRole;

/// Alias for `Result<T, CasinoError>`.
pub type CasinoResult<T> = Result<T, CasinoError>;

/// The kind of entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A human player with a balance.
    Player,
    /// A goose of either role.
    Goose,
    /// A betting chip.
    Chip,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Goose => write!(f, "goose"),
            Self::Chip => write!(f, "chip"),
        }
    }
}

/// Errors raised by collections, indices, and the casino engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CasinoError {
    /// Insertion would violate key uniqueness (name, chip colour or chip value).
    #[error("{kind} already exists: \"{key}\"")]
    DuplicateKey {
        /// Which index rejected the insertion.
        kind: EntityKind,
        /// The colliding key.
        key: String,
    },

    /// A lookup or removal by key found no match.
    #[error("{kind} not found: \"{key}\"")]
    KeyNotFound {
        /// Which index was searched.
        kind: EntityKind,
        /// The missing key.
        key: String,
    },

    /// Removal was attempted on a collection with no items.
    #[error("no {0}s left in the collection")]
    EmptyCollection(EntityKind),

    /// A position past the end of a non-empty collection.
    #[error("{kind} position {position} is out of range (collection holds {len})")]
    PositionOutOfRange {
        /// Which collection was addressed.
        kind: EntityKind,
        /// The requested position, as the caller supplied it.
        position: usize,
        /// Current collection size.
        len: usize,
    },

    /// An action was invoked on a goose of the other role.
    #[error("goose \"{name}\" is not a {expected}")]
    WrongActor {
        /// The goose that was asked to act.
        name: String,
        /// The role the action requires.
        expected: GooseRole,
    },

    /// The randomized capability rolled a failure; nothing changed.
    #[error("{0}")]
    ActionFailed(String),

    /// The stake exceeds the player's balance.
    #[error("stake {stake} exceeds balance {balance}")]
    InsufficientBalance {
        /// Requested stake.
        stake: i64,
        /// Balance at the time of the bet.
        balance: i64,
    },

    /// A negative stake.
    #[error("stake must not be negative, got {0}")]
    InvalidStake(i64),

    /// A transfer or payout would push a balance past the `i64` range.
    /// Nothing was changed.
    #[error("balance of \"{name}\" would overflow")]
    BalanceOverflow {
        /// The player or goose whose balance would overflow.
        name: String,
    },

    /// The wager is not a number in 0..=36 or a recognized token.
    #[error("{0}")]
    InvalidWager(String),
}

impl CasinoError {
    pub(crate) fn duplicate(kind: EntityKind, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            kind,
            key: key.into(),
        }
    }

    pub(crate) fn not_found(kind: EntityKind, key: impl Into<String>) -> Self {
        Self::KeyNotFound {
            kind,
            key: key.into(),
        }
    }
}
