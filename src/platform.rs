//! Platform abstraction layer
//!
//! The two things the game needs from its host:
//! - a wall clock in milliseconds for the tick driver and flash timers
//! - a log sink (browser console on wasm, env_logger elsewhere)

/// Current time in milliseconds.
///
/// Browser epoch time on wasm; a monotonic clock counted from first use
/// elsewhere. Only differences matter to the simulation.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Initialize logging for the current target. Call once at startup.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    env_logger::init();
}
