//! Zombie Crab - a top-down arcade survival game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, pursuit, combat, spawning)
//! - `platform`: Input normalization and frame scheduling (browser/native)
//! - `settings`: Session configuration
//! - `error`: Error types for the outer surfaces

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Map is a square of this side length
    pub const MAP_SIZE: f32 = 800.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    /// Base movement per tick at full stick throw
    pub const PLAYER_SPEED: f32 = 3.0;
    pub const RUN_MULTIPLIER: f32 = 2.0;
    pub const MAX_HEALTH: u32 = 100;
    pub const HEAL_AMOUNT: u32 = 20;
    /// Health lost per tick while any zombie touches the player
    pub const CONTACT_DAMAGE: u32 = 1;

    /// Zombie defaults
    pub const ZOMBIE_RADIUS: f32 = 18.0;
    pub const ZOMBIE_SPEED: f32 = 1.5;
    pub const ZOMBIE_START_HEALTH: u32 = 3;
    pub const ZOMBIE_CAP: usize = 10;
    /// Per-tick probability of a spawn attempt succeeding
    pub const SPAWN_CHANCE: f64 = 0.02;
    /// Zombies closer than this to the player hold position
    pub const PURSUIT_MIN_DISTANCE: f32 = 1.0;

    /// Pellet defaults
    pub const PELLET_SPEED: f32 = 10.0;
    /// Lifetime in ticks
    pub const PELLET_LIFETIME: u32 = 30;
    /// Added to the zombie radius for hit tests
    pub const PELLET_HIT_RADIUS: f32 = 6.0;

    /// Shotgun
    pub const SHOTGUN_PELLETS: usize = 5;
    pub const SHOTGUN_SPREAD: f32 = std::f32::consts::PI / 6.0; // 30 degrees
    pub const SHOOT_COOLDOWN: u32 = 10;

    /// Stick magnitude below which the facing angle is left alone
    pub const STICK_DEADZONE: f32 = 0.2;
    /// Device distance reported at full throw
    pub const STICK_MAX_DISTANCE: f32 = 100.0;
}

/// Center of the map, used as the fallback for degenerate coordinates
#[inline]
pub fn map_center() -> Vec2 {
    Vec2::splat(consts::MAP_SIZE / 2.0)
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
