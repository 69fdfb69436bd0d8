//! Browser bindings
//!
//! The JS/canvas layer owns drawing, the power slider, and the buttons; it
//! drives this wrapper from requestAnimationFrame and reads state back
//! through the accessors below.

use wasm_bindgen::prelude::*;

use crate::sim::{self, GameState, Playfield};
use crate::{HighScores, Settings};

/// One game instance, owned by the page
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game sized to the canvas, seeded from the clock
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        let seed = js_sys::Date::now() as u64;
        log::info!("New game {width}x{height}, seed {seed}");
        WebGame {
            state: GameState::new(seed, Playfield { width, height }),
        }
    }

    /// Advance one frame; `now_ms` is the requestAnimationFrame timestamp
    pub fn tick(&mut self, now_ms: f64) {
        sim::tick(&mut self.state, now_ms);
    }

    /// Fire button: launch at the given slider power (0-100)
    pub fn fire(&mut self, power: u32) {
        sim::fire(&mut self.state, power);
    }

    /// Reset button: clear the run and re-roll the target
    pub fn reset(&mut self) {
        sim::reset(&mut self.state);
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn feedback(&self) -> String {
        self.state.feedback.clone()
    }

    pub fn cannon_x(&self) -> f32 {
        self.state.cannon.x
    }

    pub fn cannon_y(&self) -> f32 {
        self.state.cannon.y
    }

    pub fn target_x(&self) -> f32 {
        self.state.target.pos.x
    }

    pub fn target_y(&self) -> f32 {
        self.state.target.pos.y
    }

    pub fn target_radius(&self) -> f32 {
        self.state.target.radius
    }

    pub fn target_hit(&self) -> bool {
        self.state.target.hit
    }

    pub fn has_projectile(&self) -> bool {
        self.state.projectile.is_some()
    }

    pub fn projectile_x(&self) -> f32 {
        self.state.projectile.map_or(0.0, |p| p.pos.x)
    }

    pub fn projectile_y(&self) -> f32 {
        self.state.projectile.map_or(0.0, |p| p.pos.y)
    }

    pub fn projectile_radius(&self) -> f32 {
        self.state.projectile.map_or(0.0, |p| p.radius)
    }

    /// Burst particles as flat [x, y, size, life] quads
    pub fn particles(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.state.particles.len() * 4);
        for p in &self.state.particles {
            out.extend_from_slice(&[p.pos.x, p.pos.y, p.size, p.life]);
        }
        out
    }

    /// JSON snapshot of the persistent state (particles excluded)
    pub fn snapshot(&self) -> String {
        serde_json::to_string(&self.state).unwrap_or_default()
    }

    /// Power slider position restored from saved preferences
    pub fn saved_power() -> u32 {
        Settings::load().clamped_power()
    }

    /// Record the current run on the local leaderboard.
    /// Returns the 1-indexed rank if it qualified.
    pub fn record_score(&self) -> Option<u32> {
        let mut scores = HighScores::load();
        let rank = scores.add_score(
            self.state.score,
            self.state.hits,
            self.state.shots_fired,
            js_sys::Date::now(),
        );
        if rank.is_some() {
            scores.save();
        }
        rank.map(|r| r as u32)
    }
}
