//! Per-frame simulation step
//!
//! One call per rendered frame. The driver supplies the wall clock so the
//! hit-flash revert stays testable without real timers.

use glam::Vec2;
use rand::Rng;

use super::collision::{left_playfield, projectile_hits_target};
use super::state::{FlashTimer, GameState, Particle, Projectile, MAX_PARTICLES};

/// How a shot ended, if it ended this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Hit { score: u32 },
    Miss { score: u32 },
}

/// Advance the game by one tick.
///
/// Expires pending flash timers, integrates the in-flight projectile (if
/// any), and resolves hit/miss. Returns the outcome when a shot ends.
pub fn tick(state: &mut GameState, now_ms: f64) -> Option<ShotOutcome> {
    // Flash timers run on wall clock, independent of shots and resets.
    // Each expiry unconditionally re-arms the target.
    let pending = state.flash_timers.len();
    state.flash_timers.retain(|t| now_ms < t.expires_at_ms);
    if state.flash_timers.len() < pending {
        state.target.hit = false;
    }

    state.time_ticks += 1;
    update_particles(state);

    let Some(mut projectile) = state.projectile.take() else {
        return None;
    };

    projectile.integrate(state.tuning.gravity);

    if projectile_hits_target(projectile.pos, projectile.radius, &state.target) {
        spawn_explosion(state, projectile.pos);
        state.target.hit = true;
        state.score += state.tuning.score_per_hit;
        state.hits += 1;
        state.feedback = format!("Hit! Score: {}", state.score);
        state.firing = false;
        state.flash_timers.push(FlashTimer {
            expires_at_ms: now_ms + state.tuning.hit_flash_ms,
        });
        return Some(ShotOutcome::Hit { score: state.score });
    }

    if left_playfield(projectile.pos, &state.field) {
        state.feedback = format!("Missed! Score: {}", state.score);
        state.firing = false;
        return Some(ShotOutcome::Miss { score: state.score });
    }

    state.projectile = Some(projectile);
    None
}

/// Fire the cannon at the given power level (0-100 from the slider).
///
/// No-op while a shot is already in flight.
pub fn fire(state: &mut GameState, power: u32) {
    if state.firing {
        return;
    }
    state.projectile = Some(Projectile::launch(state.muzzle(), power, &state.tuning));
    state.firing = true;
    state.shots_fired += 1;
}

/// Reset the range: clear the shot, zero the score, re-roll the target.
///
/// Pending flash timers are left to expire on their own; the target is
/// already re-armed here, so a late expiry is a no-op.
pub fn reset(state: &mut GameState) {
    state.projectile = None;
    state.firing = false;
    state.score = 0;
    state.shots_fired = 0;
    state.hits = 0;
    state.target.hit = false;
    state.feedback.clear();
    state.particles.clear();

    let field = state.field;
    let mut rng = state.rng_state.next_rng();
    state.target.rerandomize_x(&mut rng, &field);
}

/// Scatter a ring of burst particles around the impact point
fn spawn_explosion(state: &mut GameState, at: Vec2) {
    const BURST_COUNT: u32 = 20;

    let mut rng = state.rng_state.next_rng();
    for i in 0..BURST_COUNT {
        let angle = std::f32::consts::TAU * i as f32 / BURST_COUNT as f32;
        let dir = Vec2::new(angle.cos(), angle.sin());
        let radius = rng.random::<f32>() * 30.0 + 10.0;
        state.particles.push(Particle {
            pos: at + dir * radius,
            vel: dir * (0.5 + rng.random::<f32>()),
            life: 0.5 + rng.random::<f32>() * 0.3,
            size: 2.0,
        });
    }
    if state.particles.len() > MAX_PARTICLES {
        let excess = state.particles.len() - MAX_PARTICLES;
        state.particles.drain(..excess);
    }
}

/// Drift and fade the burst particles
fn update_particles(state: &mut GameState) {
    for particle in state.particles.iter_mut() {
        particle.pos += particle.vel;
        particle.vel *= 0.95;
        particle.life -= 0.04;
        particle.size *= 0.99;
    }
    state.particles.retain(|p| p.life > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Playfield;

    fn new_state() -> GameState {
        GameState::new(12345, Playfield::default())
    }

    /// Park a zero-velocity projectile so the next tick resolves it at a
    /// known distance from the target (integration moves it by vel first,
    /// then collision is checked).
    fn park_projectile(state: &mut GameState, pos: Vec2) {
        state.projectile = Some(Projectile {
            pos,
            vel: Vec2::ZERO,
            radius: PROJECTILE_RADIUS,
        });
        state.firing = true;
    }

    #[test]
    fn test_idle_tick_changes_nothing() {
        let mut state = new_state();
        let before = state.clone();
        for i in 0..10 {
            assert_eq!(tick(&mut state, i as f64 * 16.0), None);
        }
        assert_eq!(state.projectile, before.projectile);
        assert_eq!(state.target, before.target);
        assert_eq!(state.score, before.score);
        assert_eq!(state.firing, before.firing);
        assert_eq!(state.feedback, before.feedback);
    }

    #[test]
    fn test_fire_is_guarded_while_in_flight() {
        let mut state = new_state();
        fire(&mut state, 50);
        let first = state.projectile.expect("projectile spawned");

        fire(&mut state, 100);
        assert_eq!(state.projectile, Some(first));
        assert_eq!(state.shots_fired, 1);
    }

    #[test]
    fn test_launch_velocity_power_50() {
        let mut state = new_state();
        fire(&mut state, 50);
        let vel = state.projectile.unwrap().vel;
        // 100 * cos(45°) * 0.1
        assert!((vel.x - 7.071).abs() < 1e-3);
        assert!((vel.y + 7.071).abs() < 1e-3);
        assert_eq!(state.projectile.unwrap().pos, state.muzzle());
    }

    #[test]
    fn test_hit_updates_score_and_feedback() {
        let mut state = new_state();
        state.target.hit = false;
        let pos = state.target.pos + Vec2::new(24.0, 0.0);
        park_projectile(&mut state, pos);

        let outcome = tick(&mut state, 1000.0);
        assert_eq!(outcome, Some(ShotOutcome::Hit { score: 100 }));
        assert_eq!(state.score, 100);
        assert_eq!(state.feedback, "Hit! Score: 100");
        assert!(state.target.hit);
        assert!(state.projectile.is_none());
        assert!(!state.firing);
        assert!(!state.particles.is_empty());
    }

    #[test]
    fn test_hit_at_combined_radius_is_a_miss() {
        let mut state = new_state();
        // Exactly 25 units away: strict inequality, no hit, shot stays live
        let pos = state.target.pos + Vec2::new(-25.0, 0.0);
        park_projectile(&mut state, pos);
        assert_eq!(tick(&mut state, 0.0), None);
        assert!(state.projectile.is_some());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_flash_reverts_after_one_second() {
        let mut state = new_state();
        state.target.hit = false;
        let bullseye = state.target.pos;
        park_projectile(&mut state, bullseye);
        tick(&mut state, 5000.0);
        assert!(state.target.hit);

        tick(&mut state, 5999.0);
        assert!(state.target.hit);

        tick(&mut state, 6000.0);
        assert!(!state.target.hit);
        assert!(state.flash_timers.is_empty());
    }

    #[test]
    fn test_flash_timer_survives_reset() {
        let mut state = new_state();
        state.target.hit = false;
        let bullseye = state.target.pos;
        park_projectile(&mut state, bullseye);
        tick(&mut state, 0.0);
        assert!(state.target.hit);

        reset(&mut state);
        assert!(!state.target.hit);
        assert_eq!(state.flash_timers.len(), 1);

        // The old timer still fires; by then the target is already armed
        tick(&mut state, 1000.0);
        assert!(!state.target.hit);
        assert!(state.flash_timers.is_empty());
    }

    #[test]
    fn test_overlapping_flashes_revert_at_first_deadline() {
        let mut state = new_state();
        state.target.hit = false;
        let bullseye = state.target.pos;

        park_projectile(&mut state, bullseye);
        tick(&mut state, 0.0);

        // Second hit 400 ms later schedules a second timer, but the first
        // one still cuts the flash short at its own deadline.
        park_projectile(&mut state, bullseye);
        tick(&mut state, 400.0);
        assert_eq!(state.flash_timers.len(), 2);

        tick(&mut state, 1000.0);
        assert!(!state.target.hit);
        assert_eq!(state.flash_timers.len(), 1);
    }

    #[test]
    fn test_miss_below_playfield() {
        let mut state = new_state();
        let below = Vec2::new(300.0, state.field.height + 1.0);
        park_projectile(&mut state, below);

        let outcome = tick(&mut state, 0.0);
        assert_eq!(outcome, Some(ShotOutcome::Miss { score: 0 }));
        assert_eq!(state.score, 0);
        assert_eq!(state.feedback, "Missed! Score: 0");
        assert!(state.projectile.is_none());
        assert!(!state.firing);
    }

    #[test]
    fn test_shot_arcs_above_the_top_and_returns() {
        let mut state = new_state();
        // Straight up, fast: leaves through the top, comes back down
        state.projectile = Some(Projectile {
            pos: Vec2::new(300.0, 10.0),
            vel: Vec2::new(0.0, -20.0),
            radius: PROJECTILE_RADIUS,
        });
        state.firing = true;

        let mut left_top = false;
        for i in 0..200 {
            if tick(&mut state, i as f64 * 16.0).is_some() {
                break;
            }
            if let Some(p) = state.projectile {
                if p.pos.y < 0.0 {
                    left_top = true;
                }
            }
        }
        assert!(left_top, "shot never rose above the playfield");
        // Only the bottom and right edges end a shot
        assert_eq!(state.feedback, "Missed! Score: 0");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = new_state();
        state.target.hit = false;
        let bullseye = state.target.pos;
        park_projectile(&mut state, bullseye);
        tick(&mut state, 0.0);
        assert_eq!(state.score, 100);

        reset(&mut state);
        assert_eq!(state.score, 0);
        assert!(state.projectile.is_none());
        assert!(!state.firing);
        assert!(!state.target.hit);
        assert_eq!(state.feedback, "");
        assert_eq!(state.shots_fired, 0);
        assert_eq!(state.hits, 0);
        assert!(state.target.pos.x >= TARGET_MARGIN);
        assert!(state.target.pos.x < state.field.width - TARGET_MARGIN);
    }

    #[test]
    fn test_full_volley_lands_a_hit() {
        // Drive a real shot end to end: aim the target at the landing spot
        // of a power-60 launch and let the arc find it.
        let mut state = new_state();
        state.target.hit = false;
        state.target.pos = Vec2::new(350.0, state.field.height - CANNON_MARGIN);

        fire(&mut state, 60);
        let mut outcome = None;
        for i in 0..500 {
            outcome = tick(&mut state, i as f64 * 16.0);
            if outcome.is_some() {
                break;
            }
        }
        // Power 60 at 45° from x=80 lands around x=368; well inside the
        // 25-unit combined radius of a target at x=350.
        assert_eq!(outcome, Some(ShotOutcome::Hit { score: 100 }));
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed stay identical through the same
        // command sequence, resets included.
        let mut a = GameState::new(99999, Playfield::default());
        let mut b = GameState::new(99999, Playfield::default());

        for round in 0..5 {
            fire(&mut a, 40 + round * 10);
            fire(&mut b, 40 + round * 10);
            for i in 0..300 {
                let now = (round * 300 + i) as f64 * 16.0;
                tick(&mut a, now);
                tick(&mut b, now);
            }
            reset(&mut a);
            reset(&mut b);
            assert_eq!(a.target.pos, b.target.pos);
        }
        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.rng_state, b.rng_state);
    }
}
