//! Events produced during a tick
//!
//! The tick appends to `GameState::events`; the economy stage reads them in the
//! same tick and the host drains them afterwards for sound, UI and logging.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Upgrade;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemyKilled { enemy_id: u32, pos: Vec2 },
    PlayerDamaged { damage: i32, remaining: i32 },
    PlayerKilled,
    WaveStarted { wave: u32, enemies: u32 },
    WaveCleared { wave: u32 },
    UpgradePurchased { upgrade: Upgrade, cost: u32 },
}
