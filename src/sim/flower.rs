//! Flower resource model
//!
//! Health and hydration rules. All mutations clamp to their ranges, death
//! happens exactly once, and every per-second rate is scaled by `dt` so
//! the outcome is frame-rate independent.

use super::state::{DeathCause, GamePhase, GameState};
use crate::consts::MAX_HEALTH;

impl GameState {
    /// Subtract health. No-op when already dead. Crossing zero (checked
    /// with `<= 0`, robust to overshoot) clamps, marks the flower dead,
    /// records the cause, folds the run score into the high score, and
    /// moves the state machine to GameOver.
    pub fn apply_damage(&mut self, amount: f32, cause: DeathCause) {
        if !self.flower.alive {
            return;
        }
        self.flower.health -= amount;
        if self.flower.health <= 0.0 {
            self.flower.health = 0.0;
            self.flower.alive = false;
            self.death_cause = Some(cause);
            if self.score.current > self.score.highest {
                self.score.highest = self.score.current;
            }
            self.phase = GamePhase::GameOver;
            log::info!(
                "flower died ({}), score {:.1}, best {:.1}",
                cause.label(),
                self.score.current,
                self.score.highest
            );
        }
    }

    /// Absorb a raindrop. No-op when dead. Overfilling the hydration tank
    /// clamps it and costs a flat drowning penalty; otherwise the flower
    /// gains a small health bonus, capped at the ceiling.
    pub fn apply_water(&mut self, amount: f32) {
        if !self.flower.alive {
            return;
        }
        self.flower.hydration += amount;
        if self.flower.hydration > self.tuning.max_hydration {
            self.flower.hydration = self.tuning.max_hydration;
            let penalty = self.tuning.drowning_penalty;
            self.apply_damage(penalty, DeathCause::Drowning);
        } else {
            self.flower.health =
                (self.flower.health + self.tuning.water_health_bonus).min(MAX_HEALTH);
        }
    }

    /// Passive sun-mode drain. Hydration decays at a fixed rate; once it
    /// sits at zero the same tick budget turns into dehydration damage,
    /// so the time-integral of harm is step-size independent.
    pub fn drain_hydration(&mut self, dt: f32) {
        if !self.flower.alive {
            return;
        }
        if self.flower.hydration > 0.0 {
            self.flower.hydration =
                (self.flower.hydration - self.tuning.hydration_drain_rate * dt).max(0.0);
        } else {
            let damage = self.tuning.dehydration_damage_rate * dt;
            self.apply_damage(damage, DeathCause::Dehydration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_game_state() -> GameState {
        let mut state = GameState::new(42);
        state.reset_run();
        state
    }

    #[test]
    fn test_damage_reduces_health() {
        let mut state = in_game_state();
        state.apply_damage(15.0, DeathCause::Wind);
        assert_eq!(state.flower.health, 85.0);
        assert!(state.flower.alive);
        assert_eq!(state.phase, GamePhase::InGame);
    }

    #[test]
    fn test_death_is_single_and_clamped() {
        let mut state = in_game_state();
        state.apply_damage(250.0, DeathCause::Wind);
        assert_eq!(state.flower.health, 0.0);
        assert!(!state.flower.alive);
        assert_eq!(state.death_cause, Some(DeathCause::Wind));
        assert_eq!(state.phase, GamePhase::GameOver);

        // Further calls are no-ops: cause and clamp are untouched
        state.apply_damage(10.0, DeathCause::Drowning);
        state.apply_water(50.0);
        assert_eq!(state.flower.health, 0.0);
        assert_eq!(state.death_cause, Some(DeathCause::Wind));
    }

    #[test]
    fn test_death_folds_score_into_highest() {
        let mut state = in_game_state();
        state.score.current = 42.5;
        state.score.highest = 40.0;
        state.apply_damage(100.0, DeathCause::Dehydration);
        assert_eq!(state.score.highest, 42.5);

        // A lower run never lowers the record
        state.reset_run();
        state.score.current = 5.0;
        state.apply_damage(100.0, DeathCause::Wind);
        assert_eq!(state.score.highest, 42.5);
    }

    #[test]
    fn test_overfill_clamps_and_drowns() {
        let mut state = in_game_state();
        state.flower.hydration = 195.0;
        state.apply_water(10.0);
        assert_eq!(state.flower.hydration, 200.0);
        assert_eq!(state.flower.health, 90.0);
        assert!(state.flower.alive);
        // Repeated overfills can drown the flower outright
        for _ in 0..9 {
            state.apply_water(10.0);
        }
        assert!(!state.flower.alive);
        assert_eq!(state.death_cause, Some(DeathCause::Drowning));
    }

    #[test]
    fn test_water_bonus_clamped_to_max_health() {
        let mut state = in_game_state();
        state.flower.hydration = 10.0;
        state.apply_water(5.0);
        assert_eq!(state.flower.hydration, 15.0);
        assert_eq!(state.flower.health, 100.0);
    }

    #[test]
    fn test_drain_clamps_at_zero_then_damages() {
        let mut state = in_game_state();
        state.flower.hydration = 0.05;
        state.drain_hydration(1.0);
        assert_eq!(state.flower.hydration, 0.0);
        assert_eq!(state.flower.health, 100.0);

        state.drain_hydration(0.5);
        let expected = 100.0 - state.tuning.dehydration_damage_rate * 0.5;
        assert!((state.flower.health - expected).abs() < 1e-5);
        assert!(state.flower.alive);
    }

    #[test]
    fn test_dehydration_damage_is_step_size_independent() {
        let mut fine = in_game_state();
        let mut coarse = in_game_state();
        fine.flower.hydration = 0.0;
        coarse.flower.hydration = 0.0;

        for _ in 0..50 {
            fine.drain_hydration(0.02);
        }
        for _ in 0..10 {
            coarse.drain_hydration(0.1);
        }
        assert!((fine.flower.health - coarse.flower.health).abs() < 1e-3);
    }
}
