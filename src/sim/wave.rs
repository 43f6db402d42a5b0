//! Wave scheduling
//!
//! A small state machine that paces enemy spawns inside a wave and opens the
//! next wave once the current one is both fully spawned and fully defeated.
//!
//! ```text
//! Spawning --(last enemy spawned)--> Active --(last enemy killed)--> Cleared
//!    ^                                                                  |
//!    +-------------------------(next wave prepared)---------------------+
//! ```

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Enemy;
use super::events::GameEvent;
use super::progress::scaled_health;
use crate::tuning::{EnemyTuning, SpawnPolicy, WaveTuning};

/// Where a wave is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Enemies still waiting to spawn
    Spawning,
    /// Everything spawned, at least one enemy alive
    Active,
    /// Everything spawned and defeated. Seen in at most one post-tick
    /// snapshot: the next scheduler step opens the following wave.
    Cleared,
}

/// Owns the live enemies and the spawn timer for the current wave
#[derive(Debug, Clone)]
pub struct WaveScheduler {
    /// Wave currently being fought
    pub wave_number: u32,
    /// Enemies of this wave not yet spawned
    pub enemies_to_spawn: u32,
    /// Seconds accumulated toward the next spawn
    pub spawn_timer: f32,
    /// Live enemies, owned exclusively by the scheduler
    pub enemies: Vec<Enemy>,
    tuning: WaveTuning,
    spawn: SpawnPolicy,
    rng: Pcg32,
    next_id: u32,
}

impl WaveScheduler {
    /// Build a scheduler parked at `wave_before_first` and immediately
    /// prepare the wave after it
    pub fn new(
        tuning: WaveTuning,
        spawn: SpawnPolicy,
        seed: u64,
        wave_before_first: u32,
        events: &mut Vec<GameEvent>,
    ) -> Self {
        let mut scheduler = Self {
            wave_number: wave_before_first,
            enemies_to_spawn: 0,
            spawn_timer: 0.0,
            enemies: Vec::new(),
            tuning,
            spawn,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        scheduler.prepare_next_wave(events);
        scheduler
    }

    pub fn live_enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn phase(&self) -> WavePhase {
        if self.enemies_to_spawn > 0 {
            WavePhase::Spawning
        } else if !self.enemies.is_empty() {
            WavePhase::Active
        } else {
            WavePhase::Cleared
        }
    }

    /// Number of enemies in `wave`, saturating at `u32::MAX`
    pub fn wave_size(&self, wave: u32) -> u32 {
        let extra = wave.saturating_sub(1).saturating_mul(self.tuning.increment);
        self.tuning.base_count.saturating_add(extra)
    }

    /// Advance the spawn timer, spawn at most one enemy, then open the next
    /// wave if this one is spent. Returns the new wave number when one opens.
    pub fn update(
        &mut self,
        dt: f32,
        enemy: &EnemyTuning,
        health_multiplier: f32,
        events: &mut Vec<GameEvent>,
    ) -> Option<u32> {
        if self.enemies_to_spawn > 0 {
            self.spawn_timer += dt;
            if self.spawn_timer >= self.tuning.spawn_interval {
                self.spawn_enemy(enemy, health_multiplier);
                self.spawn_timer = 0.0;
                self.enemies_to_spawn -= 1;
            }
        }

        if self.phase() == WavePhase::Cleared {
            events.push(GameEvent::WaveCleared {
                wave: self.wave_number,
            });
            self.prepare_next_wave(events);
            return Some(self.wave_number);
        }
        None
    }

    fn prepare_next_wave(&mut self, events: &mut Vec<GameEvent>) {
        self.wave_number = self.wave_number.saturating_add(1);
        self.enemies_to_spawn = self.wave_size(self.wave_number);
        self.spawn_timer = 0.0;
        log::info!(
            "Wave {} started ({} enemies)",
            self.wave_number,
            self.enemies_to_spawn
        );
        events.push(GameEvent::WaveStarted {
            wave: self.wave_number,
            enemies: self.enemies_to_spawn,
        });
    }

    fn spawn_enemy(&mut self, tuning: &EnemyTuning, health_multiplier: f32) {
        let pos = self.pick_spawn_point();
        let health = scaled_health(tuning.base_health, health_multiplier);
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        log::debug!("Spawned enemy {} at {:?} with {} hp", id, pos, health);
        self.enemies.push(Enemy::new(id, pos, health, tuning));
    }

    fn pick_spawn_point(&mut self) -> Vec2 {
        match &self.spawn {
            SpawnPolicy::Points(points) => {
                let index = self.rng.random_range(0..points.len());
                points[index]
            }
            SpawnPolicy::Area(area) => {
                let max = area.max();
                Vec2::new(
                    self.rng.random_range(area.min.x..max.x),
                    self.rng.random_range(area.min.y..max.y),
                )
            }
        }
    }
}
