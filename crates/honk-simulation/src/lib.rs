//! Round-based casino simulation for Honk.
//!
//! Seats a [`Roster`] in a [`honk_core::Casino`] and plays rounds until every
//! player is bankrupt, one reaches the victory threshold, or the round limit
//! runs out. Each round draws one [`Action`] from a single seeded RNG, so a
//! seed fully determines a run.

/// Configuration types for simulation runs.
pub mod config;
/// Error types for the simulation crate.
pub mod error;
/// Simulation event types and the event log.
pub mod event;
/// Loading and generating the players and geese to seat.
pub mod roster;
/// The round driver.
pub mod simulation;

/// Re-export of [`config::SimConfig`].
pub use config::SimConfig;
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of [`event::Action`], [`event::EventLog`], [`event::SimEvent`], and [`event::SimEventKind`].
pub use event::{Action, EventLog, SimEvent, SimEventKind};
/// Re-export of [`roster::Roster`].
pub use roster::Roster;
/// Re-exports of [`simulation::Simulation`] and [`simulation::Verdict`].
pub use simulation::{Simulation, Verdict};
