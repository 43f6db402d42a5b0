//! Startup validation errors
//!
//! The simulation itself never fails: numeric edge cases fall back to defined
//! policies. Only a bad `Tuning` is reported, and only before the first tick.

use std::path::PathBuf;

use glam::Vec2;
use thiserror::Error;

/// Reasons a `Tuning` is rejected before the simulation starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("arena must be finite with positive width and height (got {min} + {size})")]
    EmptyArena { min: Vec2, size: Vec2 },

    #[error("spawn policy lists no spawn points")]
    NoSpawnPoints,

    #[error("spawn point {index} is not finite (got {point})")]
    BadSpawnPoint { index: usize, point: Vec2 },

    #[error("spawn area must be finite with positive width and height (got {min} + {size})")]
    EmptySpawnArea { min: Vec2, size: Vec2 },

    #[error("player.start must be finite (got {0})")]
    BadPlayerStart(Vec2),

    #[error("{field} must be positive and finite (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be zero or positive and finite (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("waves.base_count must be at least 1")]
    EmptyWave,

    #[error("difficulty.health_multipliers[{index}] must be positive and finite (got {value})")]
    BadHealthMultiplier { index: usize, value: f32 },

    #[error("difficulty.starting_waves[{index}] must be at least 1")]
    BadStartingWave { index: usize },
}
