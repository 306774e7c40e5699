//! Pixel Bloom - a weather-juggling arcade game
//!
//! Core modules:
//! - `sim`: the per-frame simulation (particles, flower resources, game state)
//! - `ui`: virtual-coordinate menu layout and button hit-testing
//! - `platform`: input-source boundary between the outer loop and the simulation
//! - `tuning`: data-driven game balance

pub mod platform;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Virtual render-target width. All simulation coordinates live in this
    /// space; the window-to-virtual transform is applied outside the core.
    pub const NATIVE_WIDTH: f32 = 160.0;
    /// Virtual render-target height
    pub const NATIVE_HEIGHT: f32 = 90.0;

    /// Particle pool capacities (spawns stall silently when full)
    pub const MAX_WIND_PARTICLES: usize = 200;
    pub const MAX_RAIN_DROPS: usize = 200;

    /// Health ceiling for the flower
    pub const MAX_HEALTH: f32 = 100.0;

    /// Sprite-sheet frame counts
    pub const FLOWER_FRAMES: usize = 7;
    pub const SUN_FRAMES: usize = 8;
    pub const CLOUD_FRAMES: usize = 8;
}
