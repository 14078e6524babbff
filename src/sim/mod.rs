//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per delivered frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod actions;
pub mod clock;
pub mod collision;
pub mod geometry;
pub mod input;
pub mod movement;
pub mod pursuit;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use actions::Action;
pub use clock::Simulation;
pub use collision::{CombatOutcome, PelletHit, find_pellet_hits, resolve_pellet_hits};
pub use input::StickInput;
pub use snapshot::Snapshot;
pub use state::{CooldownState, GameEvent, GameState, Pellet, Player, Zombie};
pub use tick::{TickInput, tick};
