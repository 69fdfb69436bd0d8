//! Cannonade entry point
//!
//! The web build is driven from JS through `cannonade::web`; the native
//! binary runs a scripted volley headlessly and logs the outcomes.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use cannonade::platform;
    use cannonade::sim::{self, GameState, Playfield, ShotOutcome};
    use cannonade::{HighScores, Settings};

    platform::init_logging();
    log::info!("Cannonade (native) - headless demo volley");

    let settings = Settings::load();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;
    let mut state = GameState::new(seed, Playfield::default());

    // Arm the target and roll its position before the first shot
    sim::reset(&mut state);
    log::info!(
        "Seed {seed}, target at x={:.0}",
        state.target.pos.x
    );

    let powers = [settings.clamped_power(), 35, 80, 62, 55, 70];
    for power in powers {
        sim::fire(&mut state, power);
        log::info!("Firing at power {power}");

        // A shot always ends: gravity brings it below the playfield
        loop {
            match sim::tick(&mut state, platform::now_ms()) {
                Some(ShotOutcome::Hit { .. }) | Some(ShotOutcome::Miss { .. }) => {
                    log::info!("{}", state.feedback);
                    break;
                }
                None => std::thread::sleep(Duration::from_millis(16)),
            }
        }
    }

    log::info!(
        "Volley done: {} points, {}/{} shots on target",
        state.score,
        state.hits,
        state.shots_fired
    );

    let mut scores = HighScores::load();
    if let Some(rank) = scores.add_score(
        state.score,
        state.hits,
        state.shots_fired,
        seed as f64,
    ) {
        scores.save();
        log::info!("Run ranked #{rank} on the local leaderboard");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    cannonade::platform::init_logging();
    log::info!("Cannonade module loaded");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
