//! Data-driven game balance
//!
//! The stock numbers live in [`crate::consts`]; this struct makes them
//! overridable from JSON without touching the sim. Collision radii and
//! playfield geometry stay fixed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance values carried inside the game state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Applied to the raw slider value before the velocity computation
    pub power_multiplier: f32,
    /// Scales multiplied power down to world units per tick
    pub velocity_scale: f32,
    /// Launch angle in radians
    pub launch_angle: f32,
    /// Points per confirmed hit
    pub score_per_hit: u32,
    /// Hit flash duration, wall-clock milliseconds
    pub hit_flash_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            power_multiplier: POWER_MULTIPLIER,
            velocity_scale: VELOCITY_SCALE,
            launch_angle: LAUNCH_ANGLE,
            score_per_hit: SCORE_PER_HIT,
            hit_flash_ms: HIT_FLASH_MS,
        }
    }
}

impl Tuning {
    /// Parse a tuning override from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Initial velocity for a shot at the given slider power
    pub fn launch_velocity(&self, power: u32) -> Vec2 {
        let speed = power as f32 * self.power_multiplier;
        let (sin, cos) = self.launch_angle.sin_cos();
        Vec2::new(
            speed * cos * self.velocity_scale,
            -speed * sin * self.velocity_scale,
        )
    }
}
