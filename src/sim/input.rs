//! Stick input normalization
//!
//! The joystick reports an angle in degrees and a throw distance in percent.
//! Only the latest value matters; a new reading replaces the old one.

use glam::Vec2;

use crate::consts::STICK_MAX_DISTANCE;
use crate::polar_to_cartesian;

/// Latest stick reading, already normalized for the simulation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StickInput {
    vector: Vec2,
}

impl StickInput {
    /// Normalize a device reading (`angle_deg` 0..360, `distance` 0..100)
    ///
    /// Non-finite readings produce a zero vector.
    pub fn from_device(angle_deg: f32, distance: f32) -> Self {
        if !angle_deg.is_finite() || !distance.is_finite() {
            log::warn!("Dropping non-finite stick reading ({angle_deg}, {distance})");
            return Self::default();
        }
        let magnitude = (distance / STICK_MAX_DISTANCE).clamp(0.0, 1.0);
        Self {
            vector: polar_to_cartesian(magnitude, angle_deg.to_radians()),
        }
    }

    /// Vector with magnitude 0..=1
    pub fn vector(&self) -> Vec2 {
        self.vector
    }

    pub fn magnitude(&self) -> f32 {
        self.vector.length()
    }
}
