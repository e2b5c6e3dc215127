//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - RNG seeding (wall clock)
//! - Storage (LocalStorage on web, memory on native)

#[cfg(target_arch = "wasm32")]
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;

/// Seed for the round RNG, taken from the wall clock
#[cfg(target_arch = "wasm32")]
pub fn seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Seed for the round RNG, taken from the wall clock
#[cfg(not(target_arch = "wasm32"))]
pub fn seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
