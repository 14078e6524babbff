//! Per-frame simulation tick
//!
//! One tick runs to completion in a fixed order:
//! 1. player movement from the latest stick vector
//! 2. pellet movement and expiry
//! 3. zombie pursuit
//! 4. pellet/zombie combat, dead removal and scoring
//! 5. zombie/player contact damage
//! 6. spawning
//! 7. shoot cooldown countdown
//!
//! Combat sees this tick's post-movement positions, and contact damage sees
//! the zombies that survived step 4.

use glam::Vec2;

use super::collision::{resolve_pellet_hits, resolve_player_contact};
use super::movement::{integrate_pellets, integrate_player};
use super::pursuit::pursue;
use super::spawner::maybe_spawn;
use super::state::{GameEvent, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Normalized stick vector, magnitude 0..=1
    pub stick: Vec2,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    integrate_player(&mut state.player, input.stick);

    integrate_pellets(&mut state.pellets);

    let target = state.player.pos;
    pursue(&mut state.zombies, target);

    resolve_pellet_hits(state);

    if resolve_player_contact(&mut state.player, &state.zombies) {
        state.events.push(GameEvent::PlayerHurt {
            health: state.player.health,
        });
    }

    maybe_spawn(state);

    state.shoot_cooldown = state.shoot_cooldown.saturating_sub(1);
}
