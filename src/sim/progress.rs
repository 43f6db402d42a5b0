//! Run progress: kills, currency, wave counter and difficulty scaling

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Difficulty setting, in ordinal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    VeryEasy,
    Easy,
    #[default]
    Normal,
    Hard,
    Chaotic,
    Insane,
}

impl Difficulty {
    pub const ALL: [Difficulty; 6] = [
        Difficulty::VeryEasy,
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Chaotic,
        Difficulty::Insane,
    ];

    /// Table index for this setting
    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::VeryEasy => "Very Easy",
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Chaotic => "Chaotic",
            Difficulty::Insane => "Insane",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "veryeasy" => Some(Difficulty::VeryEasy),
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            "chaotic" => Some(Difficulty::Chaotic),
            "insane" => Some(Difficulty::Insane),
            _ => None,
        }
    }
}

/// Per-difficulty lookup tables, indexed by `Difficulty::ordinal`.
///
/// Lookups past the end of a table fall back to a multiplier of 1.0 and a
/// starting wave of 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyTable {
    pub health_multipliers: Vec<f32>,
    pub starting_waves: Vec<u32>,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            health_multipliers: vec![0.8, 0.9, 1.0, 1.2, 1.4, 1.6],
            starting_waves: vec![1, 1, 1, 10, 20, 40],
        }
    }
}

impl DifficultyTable {
    pub fn health_multiplier(&self, difficulty: Difficulty) -> f32 {
        self.health_multiplier_at(difficulty.ordinal())
    }

    pub fn starting_wave(&self, difficulty: Difficulty) -> u32 {
        self.starting_wave_at(difficulty.ordinal())
    }

    pub fn health_multiplier_at(&self, index: usize) -> f32 {
        self.health_multipliers.get(index).copied().unwrap_or(1.0)
    }

    pub fn starting_wave_at(&self, index: usize) -> u32 {
        self.starting_waves.get(index).copied().unwrap_or(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, &value) in self.health_multipliers.iter().enumerate() {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::BadHealthMultiplier { index, value });
            }
        }
        if let Some(index) = self.starting_waves.iter().position(|&w| w == 0) {
            return Err(ConfigError::BadStartingWave { index });
        }
        Ok(())
    }
}

/// Enemy health at spawn: `base * multiplier`, rounded up, never below 1
pub fn scaled_health(base: i32, multiplier: f32) -> i32 {
    ((base as f32 * multiplier).ceil() as i32).max(1)
}

/// Kill counter, currency and wave counter for the current run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressState {
    pub kill_count: u32,
    pub currency: u32,
    /// Wave shown to the player
    pub wave_number: u32,
    pub difficulty: Difficulty,
    money_per_kill: u32,
}

impl ProgressState {
    pub fn new(difficulty: Difficulty, money_per_kill: u32) -> Self {
        Self {
            kill_count: 0,
            currency: 0,
            wave_number: 0,
            difficulty,
            money_per_kill,
        }
    }

    pub fn register_kill(&mut self) {
        self.kill_count = self.kill_count.saturating_add(1);
        self.add_money(self.money_per_kill);
    }

    pub fn add_money(&mut self, amount: u32) {
        self.currency = self.currency.saturating_add(amount);
    }

    /// Deduct `amount` if affordable. Returns false and changes nothing otherwise.
    pub fn spend_money(&mut self, amount: u32) -> bool {
        if self.currency < amount {
            return false;
        }
        self.currency -= amount;
        true
    }

    /// Takes effect at the next reset or wave preparation
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn next_wave(&mut self, wave: u32) {
        self.wave_number = wave;
    }

    /// Zero the counters and rewind the wave to one before the starting wave
    pub fn reset(&mut self, table: &DifficultyTable) {
        self.kill_count = 0;
        self.currency = 0;
        self.wave_number = table.starting_wave(self.difficulty).saturating_sub(1);
    }
}
