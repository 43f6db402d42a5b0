//! Simulation tick
//!
//! Core game loop that advances the arena by one step, in a fixed order:
//! player, waves, enemies, combat, economy.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::combat::CombatResolver;
use super::state::{GamePhase, GameState};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Fire toward `aim` if the weapon is ready
    pub fire: bool,
    /// Aim point in arena coordinates
    pub aim: Vec2,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                log::debug!("Paused at tick {}", state.time_ticks);
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    // Don't tick if paused or game over
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::Playing => {}
    }

    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    state.time_ticks += 1;
    let first_event = state.events.len();

    // Player motion, firing and projectile flight
    state
        .player
        .update(dt, input, &state.tuning.arena, &state.tuning.projectile);

    // Spawning and wave progression
    let health_multiplier = state
        .tuning
        .difficulty
        .health_multiplier(state.progress.difficulty);
    if let Some(wave) = state.waves.update(
        dt,
        &state.tuning.enemy,
        health_multiplier,
        &mut state.events,
    ) {
        state.progress.next_wave(wave);
    }

    // Enemies chase the player's current position, centre to centre
    let target = state.player.center();
    for enemy in &mut state.waves.enemies {
        let origin_target = target - Vec2::splat(enemy.size * 0.5);
        enemy.update(dt, origin_target);
    }

    CombatResolver.resolve(&mut state.player, &mut state.waves.enemies, &mut state.events);

    state.apply_events(first_event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::entity::Enemy;
    use crate::sim::events::GameEvent;
    use crate::sim::progress::Difficulty;
    use crate::tuning::Tuning;

    fn new_state() -> GameState {
        GameState::new(Tuning::default(), Difficulty::Normal).expect("default tuning is valid")
    }

    #[test]
    fn test_tick_pause() {
        let mut state = new_state();
        state
            .waves
            .enemies
            .push(Enemy::new(50, Vec2::new(40.0, 40.0), 3, &state.tuning.enemy));
        let walk = TickInput {
            move_right: true,
            fire: true,
            aim: Vec2::new(800.0, 300.0),
            ..Default::default()
        };
        for _ in 0..3 {
            tick(&mut state, &walk, SIM_DT);
        }
        let pos = state.player.pos;
        assert!(!state.player.projectiles.is_empty());
        assert!(state.player.fire_cooldown > 0.0);

        let pause = TickInput { pause: true, ..walk.clone() };
        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(state.player.pos, pos);

        let frozen = state.snapshot();
        let spawn_timer = state.waves.spawn_timer;
        let fire_cooldown = state.player.fire_cooldown;
        for _ in 0..60 {
            tick(&mut state, &walk, SIM_DT);
        }
        assert_eq!(state.snapshot(), frozen);
        assert_eq!(state.waves.spawn_timer, spawn_timer);
        assert_eq!(state.waves.enemies_to_spawn, frozen.enemies_to_spawn);
        assert_eq!(state.waves.enemies[0].pos, frozen.enemies[0].pos);
        assert_eq!(state.player.fire_cooldown, fire_cooldown);
        assert_eq!(state.time_ticks, 3);

        // Unpause and keep moving in the same tick
        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.player.pos.x > pos.x);
        assert!(state.waves.spawn_timer > spawn_timer);
    }

    #[test]
    fn test_kill_pays_currency() {
        let mut state = new_state();
        let player_center = state.player.center();
        state.waves.enemies.push(Enemy::new(
            99,
            player_center + Vec2::new(60.0, -10.0),
            1,
            &state.tuning.enemy,
        ));

        let input = TickInput {
            fire: true,
            aim: player_center + Vec2::new(100.0, 0.0),
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &input, SIM_DT);
        }

        assert_eq!(state.progress.kill_count, 1);
        assert_eq!(state.progress.currency, 1);
        assert!(state.waves.enemies.iter().all(|e| e.id != 99));
        assert!(state
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::EnemyKilled { enemy_id: 99, .. })));
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = new_state();
        let mut state2 = new_state();

        let inputs = [
            TickInput { move_up: true, fire: true, aim: Vec2::new(0.0, 0.0), ..Default::default() },
            TickInput { move_left: true, ..Default::default() },
            TickInput { fire: true, aim: Vec2::new(800.0, 600.0), ..Default::default() },
            TickInput::default(),
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut state1, input, SIM_DT);
                tick(&mut state2, input, SIM_DT);
            }
        }

        assert_eq!(state1.snapshot(), state2.snapshot());
    }

    #[test]
    fn test_non_finite_dt_is_ignored() {
        let mut state = new_state();
        let pos = state.player.pos;
        let walk = TickInput { move_right: true, ..Default::default() };
        tick(&mut state, &walk, f32::NAN);
        tick(&mut state, &walk, -1.0);
        assert_eq!(state.player.pos, pos);
        assert!(state.player.pos.is_finite());
    }
}
