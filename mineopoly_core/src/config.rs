use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Fixed facts about a match, as announced by the host before the first turn.
///
/// Fields are signed because hosts (and config files) can hand over
/// nonsense; [`GameConfig::validate`] turns them into [`GameLimits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: i32,
    pub max_inventory: i32,
    pub max_energy: i32,
    pub winning_score: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: 10,
            max_inventory: 10,
            max_energy: 80,
            winning_score: 1000,
        }
    }
}

/// A [`GameConfig`] whose values are known to be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLimits {
    pub board_size: usize,
    pub max_inventory: usize,
    pub max_energy: u32,
    pub winning_score: u32,
}

impl GameConfig {
    pub fn validate(&self) -> Result<GameLimits, ConfigError> {
        if self.board_size <= 0 {
            return Err(ConfigError::NonPositiveBoardSize(self.board_size));
        }
        if self.max_inventory <= 0 {
            return Err(ConfigError::NonPositiveInventorySize(self.max_inventory));
        }
        if self.max_energy <= 0 {
            return Err(ConfigError::NonPositiveMaxEnergy(self.max_energy));
        }
        if self.winning_score <= 0 {
            return Err(ConfigError::NonPositiveWinningScore(self.winning_score));
        }
        Ok(GameLimits {
            board_size: self.board_size as usize,
            max_inventory: self.max_inventory as usize,
            max_energy: self.max_energy as u32,
            winning_score: self.winning_score as u32,
        })
    }
}

/// Tunables of the competition strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyParams {
    /// Weight of mining time against travel distance when valuing a resource.
    /// Each turn spent mining costs as much as this many tiles of travel.
    pub mine_time_deprecation: f64,
}

impl Default for StrategyParams {
    fn default() -> Self {
        StrategyParams {
            mine_time_deprecation: 4.0,
        }
    }
}

impl StrategyParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factor = self.mine_time_deprecation;
        if !factor.is_finite() || factor < 0.0 {
            return Err(ConfigError::InvalidDeprecationFactor(factor));
        }
        Ok(())
    }
}
