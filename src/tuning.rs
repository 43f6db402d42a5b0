//! Data-driven game balance
//!
//! Every number the simulation reads lives here. A `Tuning` is validated once
//! by `GameState::new`; after that the simulation trusts it.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::aabb::Aabb;
use crate::sim::progress::DifficultyTable;

/// Player movement and weapon balance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Edge length of the player's square box
    pub size: f32,
    /// Units per second
    pub move_speed: f32,
    pub max_health: i32,
    /// Shots per second
    pub fire_rate: f32,
    /// Damage of each projectile before upgrades
    pub weapon_damage: i32,
    /// Spawn origin; `None` places the player at the arena centre
    pub start: Option<Vec2>,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            size: PLAYER_SIZE,
            move_speed: PLAYER_SPEED,
            max_health: PLAYER_MAX_HEALTH,
            fire_rate: PLAYER_FIRE_RATE,
            weapon_damage: PLAYER_WEAPON_DAMAGE,
            start: None,
        }
    }
}

/// Enemy balance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub size: f32,
    pub move_speed: f32,
    /// Health before the difficulty multiplier
    pub base_health: i32,
    pub contact_damage: i32,
    /// Seconds between contact hits from one enemy (0 = every tick)
    pub contact_cooldown: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            size: ENEMY_SIZE,
            move_speed: ENEMY_SPEED,
            base_health: ENEMY_BASE_HEALTH,
            contact_damage: ENEMY_CONTACT_DAMAGE,
            contact_cooldown: 0.0,
        }
    }
}

/// Projectile balance
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub size: f32,
    pub speed: f32,
    /// Seconds before the projectile expires
    pub lifetime: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            size: PROJECTILE_SIZE,
            speed: PROJECTILE_SPEED,
            lifetime: PROJECTILE_LIFETIME,
        }
    }
}

/// Where new enemies appear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnPolicy {
    /// Uniformly random choice among fixed origins
    Points(Vec<Vec2>),
    /// Uniformly random origin inside a rectangle
    Area(Aabb),
}

/// Wave sizing and spawn pacing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveTuning {
    /// Enemies in wave 1
    pub base_count: u32,
    /// Extra enemies per subsequent wave
    pub increment: u32,
    /// Seconds between spawns within a wave
    pub spawn_interval: f32,
    /// `None` spawns anywhere in the arena
    pub spawn: Option<SpawnPolicy>,
}

impl Default for WaveTuning {
    fn default() -> Self {
        Self {
            base_count: WAVE_BASE_ENEMIES,
            increment: WAVE_ENEMY_INCREMENT,
            spawn_interval: WAVE_SPAWN_INTERVAL,
            spawn: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyTuning {
    pub money_per_kill: u32,
    pub damage_upgrade_cost: u32,
}

impl Default for EconomyTuning {
    fn default() -> Self {
        Self {
            money_per_kill: MONEY_PER_KILL,
            damage_upgrade_cost: DAMAGE_UPGRADE_COST,
        }
    }
}

/// Complete balance sheet for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Simulation bounds
    pub arena: Aabb,
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub projectile: ProjectileTuning,
    pub waves: WaveTuning,
    pub economy: EconomyTuning,
    pub difficulty: DifficultyTable,
    /// Run seed for reproducibility
    pub seed: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena: Aabb::new(Vec2::ZERO, Vec2::new(ARENA_WIDTH, ARENA_HEIGHT)),
            player: PlayerTuning::default(),
            enemy: EnemyTuning::default(),
            projectile: ProjectileTuning::default(),
            waves: WaveTuning::default(),
            economy: EconomyTuning::default(),
            difficulty: DifficultyTable::default(),
            seed: 0x5eed,
        }
    }
}

impl Tuning {
    /// Parse a tuning document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning = serde_json::from_str(json)?;
        Ok(tuning)
    }

    /// Load a tuning document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Spawn policy in effect (explicit policy, or the whole arena)
    pub fn spawn_policy(&self) -> SpawnPolicy {
        self.waves
            .spawn
            .clone()
            .unwrap_or(SpawnPolicy::Area(self.arena))
    }

    /// Player spawn origin
    pub fn player_start(&self) -> Vec2 {
        self.player
            .start
            .unwrap_or_else(|| self.arena.center() - Vec2::splat(self.player.size * 0.5))
    }

    /// Reject any balance sheet the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.arena.is_well_formed() {
            return Err(ConfigError::EmptyArena {
                min: self.arena.min,
                size: self.arena.size,
            });
        }
        if let Some(start) = self.player.start.filter(|start| !start.is_finite()) {
            return Err(ConfigError::BadPlayerStart(start));
        }

        positive("player.size", self.player.size)?;
        positive("player.move_speed", self.player.move_speed)?;
        positive("player.max_health", self.player.max_health as f32)?;
        positive("player.fire_rate", self.player.fire_rate)?;
        positive("player.weapon_damage", self.player.weapon_damage as f32)?;

        positive("enemy.size", self.enemy.size)?;
        positive("enemy.move_speed", self.enemy.move_speed)?;
        positive("enemy.base_health", self.enemy.base_health as f32)?;
        if !(self.enemy.contact_cooldown >= 0.0 && self.enemy.contact_cooldown.is_finite()) {
            return Err(ConfigError::Negative {
                field: "enemy.contact_cooldown",
                value: self.enemy.contact_cooldown,
            });
        }

        positive("projectile.size", self.projectile.size)?;
        positive("projectile.speed", self.projectile.speed)?;
        positive("projectile.lifetime", self.projectile.lifetime)?;

        if self.waves.base_count == 0 {
            return Err(ConfigError::EmptyWave);
        }
        positive("waves.spawn_interval", self.waves.spawn_interval)?;
        match self.spawn_policy() {
            SpawnPolicy::Points(points) => {
                if points.is_empty() {
                    return Err(ConfigError::NoSpawnPoints);
                }
                if let Some((index, &point)) =
                    points.iter().enumerate().find(|(_, p)| !p.is_finite())
                {
                    return Err(ConfigError::BadSpawnPoint { index, point });
                }
            }
            SpawnPolicy::Area(area) => {
                if !area.is_well_formed() {
                    return Err(ConfigError::EmptySpawnArea {
                        min: area.min,
                        size: area.size,
                    });
                }
            }
        }

        self.difficulty.validate()
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}
