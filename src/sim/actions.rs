//! Player-triggered actions: fire, toggle run, heal
//!
//! These run between ticks, straight against the game state.

use serde::{Deserialize, Serialize};

use super::state::{CooldownState, GameEvent, GameState, Pellet};
use crate::consts::*;
use crate::normalize_angle;

/// Discrete action triggers from the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Fire,
    ToggleRun,
    Heal,
}

/// Apply an action to the state
pub fn apply(state: &mut GameState, action: Action) {
    match action {
        Action::Fire => {
            fire(state);
        }
        Action::ToggleRun => toggle_run(state),
        Action::Heal => heal(state),
    }
}

/// Headings for a shotgun blast, evenly spread across the arc around `facing`
pub fn spread_angles(facing: f32) -> impl Iterator<Item = f32> {
    let step = SHOTGUN_SPREAD / (SHOTGUN_PELLETS - 1) as f32;
    let center = (SHOTGUN_PELLETS - 1) as f32 / 2.0;
    (0..SHOTGUN_PELLETS).map(move |i| facing + (i as f32 - center) * step)
}

/// Fire the shotgun if it is ready
///
/// Returns the number of pellets fired (0 when the cooldown rejected it).
pub fn fire(state: &mut GameState) -> usize {
    if state.cooldown_state() == CooldownState::Cooling {
        state.events.push(GameEvent::FireRejected {
            cooldown: state.shoot_cooldown,
        });
        return 0;
    }

    let origin = state.player.weapon_tip();
    state
        .pellets
        .extend(spread_angles(state.player.angle).map(|a| Pellet::new(origin, normalize_angle(a))));
    state.shoot_cooldown = SHOOT_COOLDOWN;
    state.events.push(GameEvent::Fired {
        pellets: SHOTGUN_PELLETS,
    });
    SHOTGUN_PELLETS
}

/// Flip between walking and running
pub fn toggle_run(state: &mut GameState) {
    state.player.running = !state.player.running;
    state.events.push(GameEvent::RunToggled {
        running: state.player.running,
    });
}

/// Restore health up to the maximum; no cooldown
pub fn heal(state: &mut GameState) {
    state.player.heal(HEAL_AMOUNT);
    state.events.push(GameEvent::Healed {
        health: state.player.health,
    });
}
