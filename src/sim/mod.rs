//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, input polling or platform dependencies

pub mod aabb;
pub mod combat;
pub mod entity;
pub mod events;
pub mod progress;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod wave;

pub use aabb::Aabb;
pub use combat::CombatResolver;
pub use entity::{Combatant, Enemy, Health, Player, Projectile};
pub use events::GameEvent;
pub use progress::{Difficulty, DifficultyTable, ProgressState, scaled_health};
pub use snapshot::{EnemyView, PlayerView, Snapshot};
pub use state::{GamePhase, GameState, Upgrade};
pub use tick::{TickInput, tick};
pub use wave::{WavePhase, WaveScheduler};
