//! Game state and the command surface
//!
//! `GameState` owns every entity, the wave scheduler and the progress
//! counters. It is only mutated by `tick` and by the commands below, never
//! from the middle of a tick.

use serde::{Deserialize, Serialize};

use super::entity::{Combatant, Player};
use super::events::GameEvent;
use super::progress::{Difficulty, ProgressState};
use super::snapshot::Snapshot;
use super::tick::{TickInput, tick};
use super::wave::WaveScheduler;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Player died; only `reset_game` leaves this phase
    GameOver,
}

/// Purchasable upgrades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Upgrade {
    /// +1 damage on every projectile fired afterwards
    WeaponDamage,
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub player: Player,
    pub waves: WaveScheduler,
    pub progress: ProgressState,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the last `drain_events`
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Validate `tuning` and start a run at `difficulty`
    pub fn new(tuning: Tuning, difficulty: Difficulty) -> Result<Self, ConfigError> {
        tuning.validate()?;

        let mut progress = ProgressState::new(difficulty, tuning.economy.money_per_kill);
        progress.reset(&tuning.difficulty);

        let mut events = Vec::new();
        let waves = WaveScheduler::new(
            tuning.waves.clone(),
            tuning.spawn_policy(),
            tuning.seed,
            progress.wave_number,
            &mut events,
        );
        progress.next_wave(waves.wave_number);

        let player = Player::new(tuning.player_start(), &tuning.player);

        log::info!(
            "New run: difficulty {}, seed {}, starting at wave {}",
            difficulty.as_str(),
            tuning.seed,
            progress.wave_number
        );

        Ok(Self {
            tuning,
            player,
            waves,
            progress,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events,
        })
    }

    /// Advance one tick. Does nothing once the game is over.
    pub fn advance(&mut self, dt: f32, input: &TickInput) {
        tick(self, input, dt);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// Deduct currency if affordable; the caller must check the result
    pub fn spend_money(&mut self, amount: u32) -> bool {
        self.progress.spend_money(amount)
    }

    /// Applies to enemies spawned from now on and to the next reset
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        log::info!("Difficulty set to {}", difficulty.as_str());
        self.progress.set_difficulty(difficulty);
    }

    /// Buy `upgrade` with currency. Returns false and changes nothing if the
    /// player cannot afford it.
    pub fn purchase_upgrade(&mut self, upgrade: Upgrade) -> bool {
        let cost = self.upgrade_cost(upgrade);
        if !self.progress.spend_money(cost) {
            log::warn!(
                "Cannot afford {:?} ({} < {})",
                upgrade,
                self.progress.currency,
                cost
            );
            return false;
        }
        match upgrade {
            Upgrade::WeaponDamage => {
                self.player.weapon_damage = self.player.weapon_damage.saturating_add(1)
            }
        }
        log::debug!("Purchased {:?} for {}", upgrade, cost);
        self.events.push(GameEvent::UpgradePurchased { upgrade, cost });
        true
    }

    pub fn upgrade_cost(&self, upgrade: Upgrade) -> u32 {
        match upgrade {
            Upgrade::WeaponDamage => self.tuning.economy.damage_upgrade_cost,
        }
    }

    /// Start over at the current difficulty with the configured seed
    pub fn reset_game(&mut self) {
        self.progress.reset(&self.tuning.difficulty);
        self.events.clear();
        self.waves = WaveScheduler::new(
            self.tuning.waves.clone(),
            self.tuning.spawn_policy(),
            self.tuning.seed,
            self.progress.wave_number,
            &mut self.events,
        );
        self.progress.next_wave(self.waves.wave_number);
        self.player = Player::new(self.tuning.player_start(), &self.tuning.player);
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        log::info!(
            "Game reset: difficulty {}, wave {}",
            self.progress.difficulty.as_str(),
            self.progress.wave_number
        );
    }

    /// Take all events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for rendering and UI
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    pub(crate) fn apply_events(&mut self, from: usize) {
        for event in &self.events[from..] {
            match event {
                GameEvent::EnemyKilled { .. } => self.progress.register_kill(),
                GameEvent::PlayerKilled => {
                    log::info!(
                        "Game over at wave {} with {} kills",
                        self.progress.wave_number,
                        self.progress.kill_count
                    );
                    self.phase = GamePhase::GameOver;
                }
                _ => {}
            }
        }
        if !self.player.is_alive() {
            self.phase = GamePhase::GameOver;
        }
    }
}
