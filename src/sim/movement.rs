//! Movement integration for the player and pellets

use glam::Vec2;

use super::geometry::{clamp_point, inside_map};
use super::state::{Pellet, Player};
use crate::consts::*;

/// Advance the player by one tick of stick input
///
/// `stick` is the normalized input vector (magnitude 0..=1). Facing only
/// follows the stick above the deadzone so a resting thumb does not jitter it.
pub fn integrate_player(player: &mut Player, stick: Vec2) {
    let next = player.pos + stick * player.speed();
    player.pos = clamp_point(next, PLAYER_RADIUS, MAP_SIZE - PLAYER_RADIUS);
    face_stick(player, stick);
}

/// Turn the player toward the stick if it is past the deadzone
pub fn face_stick(player: &mut Player, stick: Vec2) {
    if stick.length() > STICK_DEADZONE {
        let angle = stick.y.atan2(stick.x);
        if angle.is_finite() {
            player.angle = angle;
        }
    }
}

/// Advance every pellet along its heading and drop the expired ones
///
/// Returns the number of pellets dropped.
pub fn integrate_pellets(pellets: &mut Vec<Pellet>) -> usize {
    for pellet in pellets.iter_mut() {
        pellet.pos += pellet.velocity();
        pellet.lifetime = pellet.lifetime.saturating_sub(1);
    }

    let before = pellets.len();
    // Non-finite positions fail the bounds check too
    pellets.retain(|p| p.lifetime > 0 && inside_map(p.pos));
    before - pellets.len()
}
