//! Game state and core simulation types
//!
//! Everything the renderer reads and the save path serializes lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Playfield dimensions in world units (canvas pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

/// The cannonball in flight (at most one exists at a time)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Projectile {
    /// Spawn at the muzzle with the launch velocity for the given power
    pub fn launch(muzzle: Vec2, power: u32, tuning: &Tuning) -> Self {
        Self {
            pos: muzzle,
            vel: tuning.launch_velocity(power),
            radius: PROJECTILE_RADIUS,
        }
    }

    /// One symplectic Euler step: position first, then gravity on velocity.
    /// Single step per tick, no sub-stepping; a fast enough shot can cross
    /// the target between ticks without registering.
    pub fn integrate(&mut self, gravity: f32) {
        self.pos += self.vel;
        self.vel.y += gravity;
    }
}

/// The target circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    pub radius: f32,
    /// true = just hit (rendered red), false = armed (rendered green)
    pub hit: bool,
}

impl Target {
    /// Target for a fresh game. Starts flagged as hit (red); the first
    /// reset arms it.
    pub fn new(field: &Playfield) -> Self {
        Self {
            pos: Vec2::new(field.width - TARGET_MARGIN, field.height - CANNON_MARGIN),
            radius: TARGET_RADIUS,
            hit: true,
        }
    }

    /// Re-randomize the x position, keeping a margin from both edges
    pub fn rerandomize_x(&mut self, rng: &mut Pcg32, field: &Playfield) {
        self.pos.x = rng.random::<f32>() * (field.width - 2.0 * TARGET_MARGIN) + TARGET_MARGIN;
    }
}

/// Pending one-shot revert of the target hit flash
///
/// Scheduled on every hit, never cancelled: a reset or a second hit in the
/// flash window does not stop an earlier timer from re-arming the target
/// when its deadline passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlashTimer {
    /// Wall-clock deadline in milliseconds
    pub expires_at_ms: f64,
}

/// A particle of the decorative explosion burst
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32, // 0-1, decreases over time
    pub size: f32,
}

/// Maximum particles
pub const MAX_PARTICLES: usize = 256;

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Draws taken so far; replaying the same count reproduces the stream
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    /// Derive a fresh generator and advance the stream
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::seed_from_u64(self.seed ^ self.draws.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.draws += 1;
        rng
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Balance values, overridable via [`Tuning::from_json`]
    #[serde(default)]
    pub tuning: Tuning,
    /// Playfield bounds
    pub field: Playfield,
    /// Cannon position (fixed near the bottom-left corner)
    pub cannon: Vec2,
    /// The target circle
    pub target: Target,
    /// The in-flight cannonball, if any
    pub projectile: Option<Projectile>,
    /// Guard preventing a second shot while one is in flight
    pub firing: bool,
    /// Score, +100 per hit, reset to 0 externally
    pub score: u32,
    /// Feedback line shown under the canvas
    pub feedback: String,
    /// Pending hit-flash reverts (see [`FlashTimer`])
    pub flash_timers: Vec<FlashTimer>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Shots fired since the last reset
    pub shots_fired: u32,
    /// Hits landed since the last reset
    pub hits: u32,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: Vec<Particle>,
}

impl GameState {
    /// Create a new game state with the given seed and playfield
    pub fn new(seed: u64, field: Playfield) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            tuning: Tuning::default(),
            field,
            cannon: Vec2::new(CANNON_MARGIN, field.height - CANNON_MARGIN),
            target: Target::new(&field),
            projectile: None,
            firing: false,
            score: 0,
            feedback: String::new(),
            flash_timers: Vec::new(),
            time_ticks: 0,
            shots_fired: 0,
            hits: 0,
            particles: Vec::new(),
        }
    }

    /// Muzzle tip, where projectiles spawn
    pub fn muzzle(&self) -> Vec2 {
        self.cannon + Vec2::new(MUZZLE_LENGTH, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(7, Playfield::default());
        assert_eq!(state.cannon, Vec2::new(50.0, 350.0));
        assert_eq!(state.muzzle(), Vec2::new(80.0, 350.0));
        assert_eq!(state.target.pos, Vec2::new(700.0, 350.0));
        // Fresh game shows the target red until the first reset
        assert!(state.target.hit);
        assert!(state.projectile.is_none());
        assert!(!state.firing);
    }

    #[test]
    fn test_rerandomize_x_stays_in_margins() {
        let field = Playfield::default();
        let mut state = GameState::new(42, field);
        for _ in 0..100 {
            let mut rng = state.rng_state.next_rng();
            state.target.rerandomize_x(&mut rng, &field);
            assert!(state.target.pos.x >= TARGET_MARGIN);
            assert!(state.target.pos.x < field.width - TARGET_MARGIN);
        }
    }

    #[test]
    fn test_rng_state_replays() {
        let mut a = RngState::new(123);
        let mut b = RngState::new(123);
        for _ in 0..10 {
            let x: f32 = a.next_rng().random();
            let y: f32 = b.next_rng().random();
            assert_eq!(x, y);
        }
    }
}
