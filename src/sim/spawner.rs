//! Zombie spawning at the map edges

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GameState};
use crate::consts::{MAP_SIZE, SPAWN_CHANCE, ZOMBIE_CAP};

/// Map edge a zombie walks in from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Point on this edge at `t` along the perpendicular axis
    pub fn point(self, t: f32) -> Vec2 {
        match self {
            Edge::Left => Vec2::new(0.0, t),
            Edge::Right => Vec2::new(MAP_SIZE, t),
            Edge::Top => Vec2::new(t, 0.0),
            Edge::Bottom => Vec2::new(t, MAP_SIZE),
        }
    }
}

/// Uniform random point on a uniformly chosen edge
pub fn random_edge_point<R: Rng>(rng: &mut R) -> Vec2 {
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    edge.point(rng.random_range(0.0..MAP_SIZE))
}

/// Roll for a spawn this tick; returns the new zombie's id if one appeared
///
/// The roll is drawn every tick, even at the cap, so the random stream does
/// not depend on how many zombies are alive.
pub fn maybe_spawn(state: &mut GameState) -> Option<u32> {
    let roll = state.rng.random_bool(SPAWN_CHANCE);
    if !roll || state.zombies.len() >= ZOMBIE_CAP {
        return None;
    }

    let pos = random_edge_point(&mut state.rng);
    let id = state.spawn_zombie(pos);
    log::debug!("Zombie {} spawned at {}", id, pos);
    state.events.push(GameEvent::ZombieSpawned { id });
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_edge_points_lie_on_edges() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            let p = random_edge_point(&mut rng);
            let on_vertical = p.x == 0.0 || p.x == MAP_SIZE;
            let on_horizontal = p.y == 0.0 || p.y == MAP_SIZE;
            assert!(on_vertical || on_horizontal, "{p} is not on an edge");
            assert!((0.0..=MAP_SIZE).contains(&p.x));
            assert!((0.0..=MAP_SIZE).contains(&p.y));
        }
    }

    #[test]
    fn test_spawns_eventually_with_fresh_ids() {
        let mut state = GameState::new(42);
        let mut spawned = Vec::new();
        for _ in 0..2000 {
            if let Some(id) = maybe_spawn(&mut state) {
                spawned.push(id);
            }
        }
        assert!(!spawned.is_empty());
        assert_eq!(spawned[0], 3);
        assert!(spawned.windows(2).all(|w| w[1] > w[0]));
        assert!(state.zombies.len() <= ZOMBIE_CAP);
    }

    #[test]
    fn test_never_exceeds_cap() {
        let mut state = GameState::empty(9);
        for i in 0..ZOMBIE_CAP {
            state.spawn_zombie(Vec2::new(10.0 * i as f32, 0.0));
        }
        for _ in 0..5000 {
            assert_eq!(maybe_spawn(&mut state), None);
        }
        assert_eq!(state.zombies.len(), ZOMBIE_CAP);
    }

    #[test]
    fn test_new_zombie_has_full_health() {
        let mut state = GameState::empty(11);
        while maybe_spawn(&mut state).is_none() {}
        assert_eq!(state.zombies.len(), 1);
        assert_eq!(state.zombies[0].health, crate::consts::ZOMBIE_START_HEALTH);
        assert_eq!(
            state.events,
            vec![GameEvent::ZombieSpawned {
                id: state.zombies[0].id
            }]
        );
    }
}
