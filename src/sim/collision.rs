//! Collision detection and combat resolution
//!
//! Pellet hits are resolved in two phases: `find_pellet_hits` works out which
//! pellet strikes which zombie as plain data, then `apply_pellet_hits` applies
//! the damage and removals. Zombies and pellets are scanned in insertion
//! order, so for a given state the outcome is always the same.

use std::collections::HashSet;

use glam::Vec2;

use super::geometry::distance;
use super::state::{GameEvent, GameState, Pellet, Player, Zombie};
use crate::consts::*;

/// A pellet striking a zombie (indices into the active lists)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PelletHit {
    pub zombie: usize,
    pub pellet: usize,
}

/// Result of resolving pellet hits for one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombatOutcome {
    /// Zombies that took a hit
    pub hits: usize,
    /// Ids of zombies removed this tick
    pub killed: Vec<u32>,
}

/// True if a pellet at `pellet` is close enough to strike a zombie at `zombie`
#[inline]
pub fn pellet_hits_zombie(pellet: Vec2, zombie: Vec2) -> bool {
    distance(pellet, zombie) < ZOMBIE_RADIUS + PELLET_HIT_RADIUS
}

/// True if a zombie at `zombie` is touching a player at `player`
#[inline]
pub fn zombie_touches_player(zombie: Vec2, player: Vec2) -> bool {
    distance(zombie, player) < PLAYER_RADIUS + ZOMBIE_RADIUS
}

/// Phase one: pair each zombie with the first unclaimed pellet in range
///
/// A zombie takes at most one hit per tick and a pellet is spent on the first
/// zombie it strikes. Pellets left over stay in flight for later ticks.
pub fn find_pellet_hits(pellets: &[Pellet], zombies: &[Zombie]) -> Vec<PelletHit> {
    let mut spent = vec![false; pellets.len()];
    let mut hits = Vec::new();

    for (zombie_idx, zombie) in zombies.iter().enumerate() {
        let found = pellets
            .iter()
            .enumerate()
            .find(|(i, p)| !spent[*i] && pellet_hits_zombie(p.pos, zombie.pos));
        if let Some((pellet_idx, _)) = found {
            spent[pellet_idx] = true;
            hits.push(PelletHit {
                zombie: zombie_idx,
                pellet: pellet_idx,
            });
        }
    }

    hits
}

/// Phase two: apply damage, consume pellets, remove the dead and score them
pub fn apply_pellet_hits(state: &mut GameState, hits: &[PelletHit]) -> CombatOutcome {
    let mut outcome = CombatOutcome::default();

    for hit in hits {
        let zombie = &mut state.zombies[hit.zombie];
        zombie.health = zombie.health.saturating_sub(1);
        outcome.hits += 1;
        log::trace!("Zombie {} hit, health {}", zombie.id, zombie.health);
        state.events.push(GameEvent::ZombieHit {
            id: zombie.id,
            health: zombie.health,
        });
    }

    if !hits.is_empty() {
        let spent: HashSet<usize> = hits.iter().map(|h| h.pellet).collect();
        let mut idx = 0;
        state.pellets.retain(|_| {
            let keep = !spent.contains(&idx);
            idx += 1;
            keep
        });
    }

    for zombie in state.zombies.iter().filter(|z| z.is_dead()) {
        log::debug!("Zombie {} killed", zombie.id);
        outcome.killed.push(zombie.id);
        state.events.push(GameEvent::ZombieKilled { id: zombie.id });
    }
    state.zombies.retain(|z| !z.is_dead());
    state.score += outcome.killed.len() as u64;

    outcome
}

/// Resolve pellet/zombie combat for the current positions
pub fn resolve_pellet_hits(state: &mut GameState) -> CombatOutcome {
    let hits = find_pellet_hits(&state.pellets, &state.zombies);
    apply_pellet_hits(state, &hits)
}

/// Apply contact damage if any zombie touches the player
///
/// Several zombies touching at once still cost a single point. Returns true
/// when the player was hurt.
pub fn resolve_player_contact(player: &mut Player, zombies: &[Zombie]) -> bool {
    let touching = zombies
        .iter()
        .any(|z| zombie_touches_player(z.pos, player.pos));
    if touching {
        player.take_damage(CONTACT_DAMAGE);
    }
    touching
}
