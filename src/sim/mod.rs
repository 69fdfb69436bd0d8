//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Advances only through explicit tick/fire/reset calls
//! - Seeded RNG only
//! - Wall clock supplied by the driver, never read directly
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{left_playfield, projectile_hits_target};
pub use state::{
    FlashTimer, GameState, Particle, Playfield, Projectile, RngState, Target, MAX_PARTICLES,
};
pub use tick::{fire, reset, tick, ShotOutcome};
