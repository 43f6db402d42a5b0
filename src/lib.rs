//! Zeta Arena - A wave-based arena shooter simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, combat, waves, economy)
//! - `tuning`: Data-driven game balance
//! - `error`: Startup validation errors

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const PLAYER_MAX_HEALTH: i32 = 5;
    /// Shots per second
    pub const PLAYER_FIRE_RATE: f32 = 4.0;
    pub const PLAYER_WEAPON_DAMAGE: i32 = 1;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 20.0;
    pub const ENEMY_SPEED: f32 = 100.0;
    pub const ENEMY_BASE_HEALTH: i32 = 3;
    pub const ENEMY_CONTACT_DAMAGE: i32 = 1;

    /// Projectile defaults
    pub const PROJECTILE_SIZE: f32 = 4.0;
    pub const PROJECTILE_SPEED: f32 = 400.0;
    /// Seconds before an unspent projectile expires
    pub const PROJECTILE_LIFETIME: f32 = 2.0;

    /// Wave defaults
    pub const WAVE_BASE_ENEMIES: u32 = 5;
    pub const WAVE_ENEMY_INCREMENT: u32 = 2;
    pub const WAVE_SPAWN_INTERVAL: f32 = 0.5;

    /// Economy defaults
    pub const MONEY_PER_KILL: u32 = 1;
    pub const DAMAGE_UPGRADE_COST: u32 = 10;
}

/// Unit vector from `from` toward `to`, or zero when the points coincide
#[inline]
pub fn seek_direction(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Collapse a pair of opposing buttons into -1, 0 or +1
#[inline]
pub fn axis(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_direction_is_unit() {
        let dir = seek_direction(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_seek_direction_coincident_points() {
        let p = Vec2::new(12.5, -7.0);
        assert_eq!(seek_direction(p, p), Vec2::ZERO);
    }

    #[test]
    fn test_axis() {
        assert_eq!(axis(true, false), -1.0);
        assert_eq!(axis(false, true), 1.0);
        assert_eq!(axis(true, true), 0.0);
        assert_eq!(axis(false, false), 0.0);
    }
}
