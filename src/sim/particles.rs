//! Wind and rain particle systems
//!
//! Two symmetric mode-gated subsystems. Each frame the active one advects
//! its pool, classifies every particle (kept, boundary impact, shield
//! deflection), compacts the pool, and reports the impacts so the caller
//! can apply damage or watering in a second pass. Classification and
//! mutation are kept separate so a swap-remove never skips the element
//! that moved into the current slot.
//!
//! Shield collision is an exact point-in-circle test; a particle whose
//! per-frame step exceeds the radius can tunnel straight through. That is
//! an accepted limit of the discrete step, not something this module
//! papers over.

use glam::Vec2;

use super::pool::ParticlePool;
use super::state::Shield;
use crate::tuning::Tuning;

/// A gust fragment. `power` is both its speed and the damage it deals.
#[derive(Debug, Clone, Copy)]
pub struct WindParticle {
    pub power: f32,
    pub pos: Vec2,
}

/// A raindrop. `amount` scales both its fall speed and the hydration it
/// delivers on landing.
#[derive(Debug, Clone, Copy)]
pub struct RainDrop {
    pub amount: f32,
    pub pos: Vec2,
}

fn shield_catches(shield: &Shield, pos: Vec2, radius: f32) -> bool {
    shield.active && pos.distance(shield.pos) <= radius
}

/// Advect the wind pool by one frame. Returns the power of every particle
/// that crossed the damage boundary; deflected particles vanish silently.
pub fn advect_wind(
    pool: &mut ParticlePool<WindParticle>,
    shield: &Shield,
    tuning: &Tuning,
    dt: f32,
) -> Vec<f32> {
    let mut impacts = Vec::new();
    let mut marked = Vec::new();

    for (i, particle) in pool.iter_mut().enumerate() {
        particle.pos.x += particle.power * dt;
        if particle.pos.x > tuning.wind_boundary_x {
            impacts.push(particle.power);
            marked.push(i);
        } else if shield_catches(shield, particle.pos, tuning.shield_radius) {
            marked.push(i);
        }
    }

    pool.remove_marked(&marked);
    impacts
}

/// Advect the rain pool by one frame. Returns the amount of every drop
/// that reached the ground; deflected drops vanish silently.
pub fn advect_rain(
    pool: &mut ParticlePool<RainDrop>,
    shield: &Shield,
    tuning: &Tuning,
    dt: f32,
) -> Vec<f32> {
    let mut landings = Vec::new();
    let mut marked = Vec::new();

    for (i, drop) in pool.iter_mut().enumerate() {
        drop.pos.y += drop.amount * tuning.rain_fall_scale * dt;
        if drop.pos.y > tuning.ground_y {
            landings.push(drop.amount);
            marked.push(i);
        } else if shield_catches(shield, drop.pos, tuning.shield_radius) {
            marked.push(i);
        }
    }

    pool.remove_marked(&marked);
    landings
}
