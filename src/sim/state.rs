//! Game state and core simulation types
//!
//! One explicit state struct owns everything mutable: flower, weather,
//! shield, score, particle pools, and the RNG. No process-wide globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::particles::{RainDrop, WindParticle};
use super::pool::ParticlePool;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen with Start/Exit buttons
    StartMenu,
    /// Active run (may be paused, see `GameState::paused`)
    InGame,
    /// Run ended; shows the death cause and Restart/Exit
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeathCause {
    Dehydration,
    Wind,
    Drowning,
}

impl DeathCause {
    /// Human-readable cause for the game-over screen
    pub fn label(&self) -> &'static str {
        match self {
            DeathCause::Dehydration => "withered away",
            DeathCause::Wind => "blown apart",
            DeathCause::Drowning => "drowned",
        }
    }
}

/// The flower being kept alive
#[derive(Debug, Clone)]
pub struct Flower {
    /// Health in [0, MAX_HEALTH]
    pub health: f32,
    /// Hydration in [0, tuning.max_hydration]
    pub hydration: f32,
    /// Becomes false exactly once, when health reaches zero
    pub alive: bool,
    /// Current sprite frame
    pub frame: usize,
    pub frame_timer: f32,
}

impl Flower {
    fn new(start_hydration: f32) -> Self {
        Self {
            health: MAX_HEALTH,
            hydration: start_hydration,
            alive: true,
            frame: 0,
            frame_timer: 0.0,
        }
    }

    /// Advance the sway animation; frozen once the flower is dead.
    pub fn animate(&mut self, dt: f32, frame_speed: f32) {
        if !self.alive {
            return;
        }
        self.frame_timer += dt;
        if self.frame_timer >= frame_speed {
            self.frame_timer = 0.0;
            self.frame = (self.frame + 1) % FLOWER_FRAMES;
        }
    }
}

/// Sun/cloud mode plus the per-mode spawn cooldowns and animations
#[derive(Debug, Clone)]
pub struct Weather {
    /// true = sun up (wind mode), false = clouds up (rain mode)
    pub sun_up: bool,
    /// Countdown until the next wind spawn attempt
    pub wind_cooldown: f32,
    /// Countdown until the next rain spawn attempt
    pub rain_cooldown: f32,
    pub sun_frame: usize,
    pub sun_timer: f32,
    pub cloud_frame: usize,
    pub cloud_timer: f32,
}

impl Weather {
    fn new(tuning: &Tuning) -> Self {
        Self {
            sun_up: true,
            wind_cooldown: tuning.wind_spawn_interval,
            rain_cooldown: tuning.rain_spawn_interval,
            sun_frame: 0,
            sun_timer: 0.0,
            cloud_frame: 0,
            cloud_timer: 0.0,
        }
    }
}

/// Pointer-driven deflection circle. Transient: recomputed every unpaused
/// frame, nothing persists beyond "currently active".
#[derive(Debug, Clone, Copy, Default)]
pub struct Shield {
    pub pos: Vec2,
    pub active: bool,
}

impl Shield {
    pub fn deactivate(&mut self) {
        self.active = false;
        self.pos = Vec2::ZERO;
    }
}

/// Run score and the process-lifetime best
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub current: f32,
    /// Updated only at the moment of death, monotonically.
    pub highest: f32,
}

/// Complete game state, owned by the single update thread.
#[derive(Debug, Clone)]
pub struct GameState {
    pub seed: u64,
    pub phase: GamePhase,
    /// Only meaningful while InGame
    pub paused: bool,
    pub death_cause: Option<DeathCause>,
    pub flower: Flower,
    pub weather: Weather,
    pub shield: Shield,
    pub score: Score,
    pub wind: ParticlePool<WindParticle>,
    pub rain: ParticlePool<RainDrop>,
    /// One-frame edge-suppression token: armed by a mode toggle, consumed
    /// at the start of the next frame's input processing so the toggle
    /// click does not bleed into shield activation.
    pub suppress_pointer: bool,
    /// Orderly-shutdown flag; the outer loop checks it once per tick.
    pub exit_requested: bool,
    pub tuning: Tuning,
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh game sitting on the start menu.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: GamePhase::StartMenu,
            paused: false,
            death_cause: None,
            flower: Flower::new(tuning.start_hydration),
            weather: Weather::new(&tuning),
            shield: Shield::default(),
            score: Score::default(),
            wind: ParticlePool::new(MAX_WIND_PARTICLES),
            rain: ParticlePool::new(MAX_RAIN_DROPS),
            suppress_pointer: false,
            exit_requested: false,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    /// Uniform random in [min, max], inclusive both ends.
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.random_range(min..=max)
    }

    fn random_sun_frame(&mut self) -> usize {
        self.rng.random_range(0..SUN_FRAMES)
    }

    /// Full reset for a new run. Everything goes back to defaults except
    /// `highest`, which persists for the process lifetime.
    pub fn reset_run(&mut self) {
        self.phase = GamePhase::InGame;
        self.paused = false;
        self.death_cause = None;
        self.flower = Flower::new(self.tuning.start_hydration);
        self.weather = Weather::new(&self.tuning);
        self.shield.deactivate();
        self.score.current = 0.0;
        self.wind.clear();
        self.rain.clear();
        self.suppress_pointer = false;
    }

    /// Flip sun/cloud mode: empties both pools, resets both cooldowns and
    /// all animation frames, and arms the one-frame pointer suppression.
    pub fn toggle_weather(&mut self) {
        self.weather.sun_up = !self.weather.sun_up;
        self.wind.clear();
        self.rain.clear();
        self.weather.wind_cooldown = self.tuning.wind_spawn_interval;
        self.weather.rain_cooldown = self.tuning.rain_spawn_interval;
        self.weather.sun_frame = 0;
        self.weather.sun_timer = 0.0;
        self.weather.cloud_frame = 0;
        self.weather.cloud_timer = 0.0;
        self.flower.frame = 0;
        self.flower.frame_timer = 0.0;
        self.suppress_pointer = true;
        log::debug!(
            "weather toggled, sun_up={}",
            self.weather.sun_up
        );
    }

    /// Advance sky and flower animations. The sun shimmers by picking a
    /// random frame each fire; the cloud cycles sequentially.
    pub fn advance_animations(&mut self, dt: f32) {
        if self.weather.sun_up {
            self.weather.sun_timer += dt;
            if self.weather.sun_timer >= self.tuning.sun_frame_speed {
                self.weather.sun_timer = 0.0;
                self.weather.sun_frame = self.random_sun_frame();
            }
        } else {
            self.weather.cloud_timer += dt;
            if self.weather.cloud_timer >= self.tuning.cloud_frame_speed {
                self.weather.cloud_timer = 0.0;
                self.weather.cloud_frame = (self.weather.cloud_frame + 1) % CLOUD_FRAMES;
            }
        }
        let frame_speed = self.tuning.flower_frame_speed;
        self.flower.animate(dt, frame_speed);
    }

    /// Read-only per-frame handoff for the rendering layer.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            in_game: self.phase == GamePhase::InGame,
            game_over: self.phase == GamePhase::GameOver,
            paused: self.paused,
            death_cause: self.death_cause,
            sun_up: self.weather.sun_up,
            sun_frame: self.weather.sun_frame,
            cloud_frame: self.weather.cloud_frame,
            flower_frame: self.flower.frame,
            health: self.flower.health,
            hydration: self.flower.hydration,
            max_hydration: self.tuning.max_hydration,
            wind: self.wind.iter().map(|p| p.pos).collect(),
            rain: self.rain.iter().map(|d| d.pos).collect(),
            shield: self
                .shield
                .active
                .then_some((self.shield.pos, self.tuning.shield_radius)),
            score: self.score.current,
            high_score: self.score.highest,
        }
    }
}

/// Everything the renderer needs to draw one frame. An in-process
/// handoff, not a wire format; `Serialize` is for the headless demo dump.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub in_game: bool,
    pub game_over: bool,
    pub paused: bool,
    pub death_cause: Option<DeathCause>,
    pub sun_up: bool,
    pub sun_frame: usize,
    pub cloud_frame: usize,
    pub flower_frame: usize,
    pub health: f32,
    pub hydration: f32,
    pub max_hydration: f32,
    pub wind: Vec<Vec2>,
    pub rain: Vec<Vec2>,
    pub shield: Option<(Vec2, f32)>,
    pub score: f32,
    pub high_score: f32,
}
