//! Cannonade - a one-shot artillery range
//!
//! Core modules:
//! - `sim`: Deterministic simulation (projectile physics, collision, scoring)
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences
//! - `highscores`: Local leaderboard
//! - `platform`: Browser/native clock and logging
//! - `web`: wasm-bindgen surface for the canvas layer (wasm32 only)

pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Gravitational acceleration, world units per tick squared
    pub const GRAVITY: f32 = 0.5;

    /// Projectile collision radius
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    /// Target collision radius
    pub const TARGET_RADIUS: f32 = 20.0;

    /// Points awarded per confirmed hit
    pub const SCORE_PER_HIT: u32 = 100;

    /// Fixed launch angle (45 degrees)
    pub const LAUNCH_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
    /// Slider power is doubled before the velocity computation
    pub const POWER_MULTIPLIER: f32 = 2.0;
    /// Scales doubled power down to world units per tick
    pub const VELOCITY_SCALE: f32 = 0.1;

    /// Cannon inset from the left and bottom playfield edges
    pub const CANNON_MARGIN: f32 = 50.0;
    /// Barrel length; the projectile spawns this far right of the cannon
    pub const MUZZLE_LENGTH: f32 = 30.0;

    /// Target keep-out margin from the playfield edges when re-randomizing
    pub const TARGET_MARGIN: f32 = 100.0;

    /// How long the target stays red after a hit (wall-clock milliseconds)
    pub const HIT_FLASH_MS: f64 = 1000.0;

    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 400.0;
}
