//! Read-only view of the simulation, taken between ticks

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::entity::Combatant;
use super::progress::Difficulty;
use super::state::{GamePhase, GameState};
use super::wave::WavePhase;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub bounds: Aabb,
    /// Never negative
    pub health: i32,
    pub max_health: i32,
    pub weapon_damage: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub pos: Vec2,
    pub bounds: Aabb,
    pub health: i32,
    pub max_health: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub game_over: bool,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<Vec2>,
    pub wave: u32,
    pub wave_phase: WavePhase,
    pub enemies_to_spawn: u32,
    pub kill_count: u32,
    pub currency: u32,
    pub difficulty: Difficulty,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let player = &state.player;
        Self {
            tick: state.time_ticks,
            phase: state.phase,
            game_over: state.is_game_over(),
            player: PlayerView {
                pos: player.pos,
                bounds: player.bounds(),
                health: player.health.clamped(),
                max_health: player.health.max(),
                weapon_damage: player.weapon_damage,
            },
            enemies: state
                .waves
                .enemies
                .iter()
                .map(|e| EnemyView {
                    id: e.id,
                    pos: e.pos,
                    bounds: e.bounds(),
                    health: e.health.clamped(),
                    max_health: e.health.max(),
                })
                .collect(),
            projectiles: player.projectiles.iter().map(|p| p.pos).collect(),
            wave: state.progress.wave_number,
            wave_phase: state.waves.phase(),
            enemies_to_spawn: state.waves.enemies_to_spawn,
            kill_count: state.progress.kill_count,
            currency: state.progress.currency,
            difficulty: state.progress.difficulty,
        }
    }
}
