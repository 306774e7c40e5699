//! Per-frame simulation step
//!
//! One `tick` per rendered frame, single-threaded, driven entirely by the
//! externally supplied `dt`. The frame order is fixed: menu/pause
//! handling, pointer processing (shield and weather toggling), sky and
//! flower animation, hydration drain, the active particle system, then
//! score accrual. A paused or out-of-game frame only does menu
//! hit-testing.
//!
//! `dt` is deliberately not clamped: a stalled frame produces one large
//! step, which can let particles jump past the shield or the boundary.
//! That matches the per-second rate contract and is accepted behavior.

use glam::Vec2;

use super::particles::{advect_rain, advect_wind, RainDrop, WindParticle};
use super::state::{DeathCause, GamePhase, GameState};
use crate::consts::MAX_HEALTH;
use crate::ui::{self, MenuButton};

/// Input edges and pointer state for a single frame. Built by the
/// platform layer; press/release and key toggles are one-shot edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer position in virtual coordinates
    pub pointer: Vec2,
    /// Pointer button went down this frame
    pub pressed: bool,
    /// Pointer button came up this frame
    pub released: bool,
    /// Weather-toggle key edge
    pub toggle_weather: bool,
    /// Pause key edge
    pub toggle_pause: bool,
}

/// Advance the game by one frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::StartMenu => {
            match ui::released_button(state, input) {
                Some(MenuButton::Start) => {
                    log::info!("starting run (seed {})", state.seed);
                    state.reset_run();
                }
                Some(MenuButton::Exit) => state.exit_requested = true,
                _ => {}
            }
            return;
        }
        GamePhase::GameOver => {
            match ui::released_button(state, input) {
                Some(MenuButton::Restart) => {
                    log::info!("restarting run");
                    state.reset_run();
                }
                Some(MenuButton::Exit) => state.exit_requested = true,
                _ => {}
            }
            return;
        }
        GamePhase::InGame => {}
    }

    if input.toggle_pause {
        state.paused = !state.paused;
    }
    match ui::released_button(state, input) {
        Some(MenuButton::Pause) => state.paused = true,
        Some(MenuButton::Continue) => state.paused = false,
        Some(MenuButton::Restart) => {
            state.reset_run();
            return;
        }
        Some(MenuButton::Exit) => {
            state.exit_requested = true;
            return;
        }
        _ => {}
    }

    // While paused everything is frozen; only the menu above stays live.
    if state.paused {
        return;
    }

    process_pointer(state, input);
    if input.toggle_weather {
        state.toggle_weather();
    }
    if state.shield.active {
        state.shield.pos = input.pointer;
    }

    state.advance_animations(dt);

    if state.weather.sun_up {
        state.drain_hydration(dt);
        update_wind(state, dt);
    } else {
        update_rain(state, dt);
    }

    // Score grows only in growth mode, scaled by how healthy the flower is.
    if state.flower.alive && state.weather.sun_up {
        state.score.current += state.flower.health / MAX_HEALTH * dt;
    }
}

/// Shield and flower-tap handling. The suppression token armed by last
/// frame's weather toggle eats exactly one frame of pointer edges.
fn process_pointer(state: &mut GameState, input: &TickInput) {
    let suppressed = state.suppress_pointer;
    state.suppress_pointer = false;
    if suppressed {
        return;
    }

    if input.released {
        if ui::FLOWER_HITBOX.contains(input.pointer) {
            state.toggle_weather();
        }
        state.shield.deactivate();
    } else if input.pressed {
        state.shield.active = true;
    }
}

fn update_wind(state: &mut GameState, dt: f32) {
    state.weather.wind_cooldown -= dt;

    let impacts = advect_wind(&mut state.wind, &state.shield, &state.tuning, dt);
    for power in impacts {
        state.apply_damage(power, DeathCause::Wind);
    }

    if state.weather.wind_cooldown < 0.0 {
        state.weather.wind_cooldown = state.tuning.wind_spawn_interval;
        if !state.wind.is_full() {
            let power =
                state.random_range(state.tuning.wind_power_min, state.tuning.wind_power_max);
            let y = state.random_range(state.tuning.wind_band_min, state.tuning.wind_band_max);
            state.wind.push_if_room(WindParticle {
                power,
                pos: Vec2::new(1.0, y),
            });
        }
    }
}

fn update_rain(state: &mut GameState, dt: f32) {
    state.weather.rain_cooldown -= dt;

    let landings = advect_rain(&mut state.rain, &state.shield, &state.tuning, dt);
    for amount in landings {
        state.apply_water(amount);
    }

    if state.weather.rain_cooldown < 0.0 {
        state.weather.rain_cooldown = state.tuning.rain_spawn_interval;
        if !state.rain.is_full() {
            let amount =
                state.random_range(state.tuning.rain_amount_min, state.tuning.rain_amount_max);
            let x = state.random_range(state.tuning.rain_band_min, state.tuning.rain_band_max);
            state.rain.push_if_room(RainDrop {
                amount,
                pos: Vec2::new(x, 0.0),
            });
        }
    }
}
