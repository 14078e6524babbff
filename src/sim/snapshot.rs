//! Read-only view of the world published after each tick

use serde::Serialize;

use super::state::{CooldownState, GameEvent, GameState, Pellet, Player, Zombie};

/// Everything a presentation layer needs to draw the scene and HUD
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub player: Player,
    pub pellets: Vec<Pellet>,
    pub zombies: Vec<Zombie>,
    pub score: u64,
    pub shoot_cooldown: u32,
    pub cooldown_state: CooldownState,
    /// Events since the previous snapshot
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    /// Capture the state, draining its pending events
    pub fn capture(state: &mut GameState) -> Self {
        Self {
            tick: state.time_ticks,
            player: state.player.clone(),
            pellets: state.pellets.clone(),
            zombies: state.zombies.clone(),
            score: state.score,
            shoot_cooldown: state.shoot_cooldown,
            cooldown_state: state.cooldown_state(),
            events: std::mem::take(&mut state.events),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
