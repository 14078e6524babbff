//! Zombie pursuit: every zombie shuffles straight at the player

use glam::Vec2;

use super::geometry::sanitize_point;
use super::state::Zombie;
use crate::consts::{PURSUIT_MIN_DISTANCE, ZOMBIE_SPEED};

/// Step every zombie toward `target`
///
/// `target` is copied out of the state before the loop, so every zombie chases
/// the same player position regardless of iteration order.
pub fn pursue(zombies: &mut [Zombie], target: Vec2) {
    for zombie in zombies.iter_mut() {
        zombie.pos = step_toward(zombie.pos, target);
    }
}

/// One pursuit step from `from` toward `target`
///
/// Within `PURSUIT_MIN_DISTANCE` the zombie holds still; that also keeps the
/// normalization away from a zero-length vector.
pub fn step_toward(from: Vec2, target: Vec2) -> Vec2 {
    let delta = target - from;
    let dist = delta.length();
    if dist > PURSUIT_MIN_DISTANCE {
        sanitize_point(from + delta / dist * ZOMBIE_SPEED)
    } else {
        from
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_toward_moves_fixed_speed() {
        let next = step_toward(Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0));
        assert_eq!(next, Vec2::new(101.5, 100.0));
    }

    #[test]
    fn test_holds_position_when_close() {
        let from = Vec2::new(100.0, 100.0);
        assert_eq!(step_toward(from, from), from);
        assert_eq!(step_toward(from, Vec2::new(100.5, 100.0)), from);
    }

    #[test]
    fn test_pursuit_is_order_independent() {
        let target = Vec2::new(400.0, 400.0);
        let mut forward = vec![
            Zombie::new(1, Vec2::new(100.0, 100.0)),
            Zombie::new(2, Vec2::new(700.0, 50.0)),
        ];
        let mut reversed: Vec<Zombie> = forward.iter().rev().cloned().collect();

        pursue(&mut forward, target);
        pursue(&mut reversed, target);
        reversed.reverse();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_zombie_closes_distance() {
        let target = Vec2::new(400.0, 400.0);
        let mut zombies = vec![Zombie::new(1, Vec2::new(100.0, 100.0))];
        let before = zombies[0].pos.distance(target);
        pursue(&mut zombies, target);
        let after = zombies[0].pos.distance(target);
        assert!((before - after - ZOMBIE_SPEED).abs() < 1e-3);
    }
}
