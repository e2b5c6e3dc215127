//! Number Challenge - a guess-the-number browser game
//!
//! Core modules:
//! - `game`: Headless round state and guess evaluation
//! - `controller`: Input validation and the three user actions
//! - `view`: Presentation trait plus DOM/terminal/recording views
//! - `persistence`: Best score storage with a startup capability probe
//! - `platform`: Browser/native platform abstraction
//! - `config`: Startup configuration

pub mod config;
pub mod controller;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod view;

pub use config::GameConfig;
pub use controller::GameController;

/// Game configuration constants
pub mod consts {
    /// Default inclusive number range
    pub const DEFAULT_MIN: u32 = 1;
    pub const DEFAULT_MAX: u32 = 100;

    /// LocalStorage key for the best score
    pub const STORAGE_KEY: &str = "number-challenge-best-score";
}
