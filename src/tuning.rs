//! Data-driven game balance
//!
//! Everything a designer might want to retune lives here rather than in
//! scattered constants. `Tuning` is plain serde data, so a balance table
//! can be loaded from JSON by an outer layer; the core only ever reads it.

use serde::{Deserialize, Serialize};

use crate::consts::{NATIVE_HEIGHT, NATIVE_WIDTH};

/// Balance values for one run. Held by `GameState` and treated as
/// immutable for the lifetime of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // === Flower resources ===
    /// Hydration ceiling; exceeding it drowns the flower a little
    pub max_hydration: f32,
    /// Hydration after a fresh start/restart
    pub start_hydration: f32,
    /// Passive hydration loss per second while the sun is up
    pub hydration_drain_rate: f32,
    /// Health loss per second once hydration sits at zero (sun up)
    pub dehydration_damage_rate: f32,
    /// Flat damage taken when a raindrop overfills the hydration tank
    pub drowning_penalty: f32,
    /// Health granted per absorbed raindrop (below the ceiling)
    pub water_health_bonus: f32,

    // === Wind particles (sun mode) ===
    /// Seconds between wind spawn attempts
    pub wind_spawn_interval: f32,
    /// Wind power range, inclusive; power is both speed and damage
    pub wind_power_min: f32,
    pub wind_power_max: f32,
    /// Vertical spawn band for wind, inclusive
    pub wind_band_min: f32,
    pub wind_band_max: f32,
    /// Wind crossing this x-line strikes the flower
    pub wind_boundary_x: f32,

    // === Rain drops (cloud mode) ===
    /// Seconds between rain spawn attempts (shorter than wind)
    pub rain_spawn_interval: f32,
    /// Fall-rate range, inclusive; the rate is also the hydration amount
    pub rain_amount_min: f32,
    pub rain_amount_max: f32,
    /// Horizontal spawn band under the cloud, inclusive
    pub rain_band_min: f32,
    pub rain_band_max: f32,
    /// Fall speed is `amount * rain_fall_scale`
    pub rain_fall_scale: f32,
    /// Drops crossing this y-line water the flower
    pub ground_y: f32,

    // === Shield ===
    /// Deflection radius around the pointer
    pub shield_radius: f32,

    // === Animation ===
    /// Seconds per flower sprite frame
    pub flower_frame_speed: f32,
    /// Seconds per sun shimmer frame
    pub sun_frame_speed: f32,
    /// Seconds per cloud drift frame
    pub cloud_frame_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_hydration: 200.0,
            start_hydration: 120.0,
            hydration_drain_rate: 0.2,
            dehydration_damage_rate: 5.0,
            drowning_penalty: 10.0,
            water_health_bonus: 1.0,

            wind_spawn_interval: 1.0,
            wind_power_min: 11.0,
            wind_power_max: 20.0,
            wind_band_min: NATIVE_HEIGHT - 29.0,
            wind_band_max: NATIVE_HEIGHT - 10.0,
            wind_boundary_x: NATIVE_WIDTH - 85.0,

            rain_spawn_interval: 0.5,
            rain_amount_min: 1.0,
            rain_amount_max: 10.0,
            rain_band_min: 61.0,
            rain_band_max: 80.0,
            rain_fall_scale: 10.0,
            ground_y: NATIVE_HEIGHT - 10.0,

            shield_radius: 6.0,

            flower_frame_speed: 0.3,
            sun_frame_speed: 0.3,
            cloud_frame_speed: 0.3,
        }
    }
}
