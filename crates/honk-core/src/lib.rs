//! Core types for Honk: players, geese, chips, and the casino engine.
//!
//! Each entity kind is stored in an insertion-ordered [`Collection`] with a
//! parallel name-keyed index. The [`Casino`] owns all of them, keeps them
//! in step, and is the only thing that moves money between players and
//! geese. Randomness is always supplied by the caller through a
//! [`RandomSource`], so one seeded generator can replay a whole session.

/// The casino engine: structural operations and lookups.
pub mod casino;
/// Betting chips and the standard denominations.
pub mod chip;
/// Insertion-ordered entity storage.
pub mod collection;
/// Error types used throughout the crate.
pub mod error;
/// Chip theft, scare-honks, and roulette bets.
pub mod game;
/// Geese and their roles.
pub mod goose;
/// Name- and colour-keyed lookup structures.
pub mod index;
/// Casino guests.
pub mod player;
/// Uniform integer sources.
pub mod random;
/// Roulette wagers and spins.
pub mod roulette;

/// Re-export the engine.
pub use casino::Casino;
/// Re-export entity types.
pub use chip::Chip;
pub use goose::{Goose, GooseRole};
pub use player::Player;
/// Re-export storage types.
pub use collection::{ChipCollection, Collection};
pub use index::{ChipIndex, GooseIndex, PlayerIndex};
/// Re-export error types.
pub use error::{CasinoError, CasinoResult, EntityKind};
/// Re-export randomness.
pub use random::{RandomSource, ScriptedRolls};
/// Re-export roulette types.
pub use roulette::{Bet, OutsideBet, Spin, Wager};
