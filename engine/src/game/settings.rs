use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::Board;

pub const MAX_FOOD_REWARD: u32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub fn base_tick_interval(&self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(200),
            Difficulty::Normal => Duration::from_millis(150),
            Difficulty::Hard => Duration::from_millis(100),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub board_width: u32,
    pub board_height: u32,
    pub difficulty: Difficulty,
    pub game_mode: String,
    pub food_reward: u32,
    pub points_per_level: u32,
    pub level_speedup_ms: u32,
    pub min_tick_interval_ms: u32,
    pub food_placement_attempts: u32,
}

impl GameSettings {
    pub fn board(&self) -> Board {
        Board::new(self.board_width as i32, self.board_height as i32)
    }

    pub fn level_for_score(&self, score: u32) -> u32 {
        1 + score / self.points_per_level.max(1)
    }

    /// Non-increasing in `level`, never below `min_tick_interval_ms`.
    pub fn tick_interval_for_level(&self, level: u32) -> Duration {
        let base = self.difficulty.base_tick_interval();
        let min = Duration::from_millis(self.min_tick_interval_ms as u64);
        let speedup = Duration::from_millis(self.level_speedup_ms as u64)
            .saturating_mul(level.saturating_sub(1));
        base.saturating_sub(speedup).max(min)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_width: 20,
            board_height: 20,
            difficulty: Difficulty::Normal,
            game_mode: "classic".to_string(),
            food_reward: 10,
            points_per_level: 50,
            level_speedup_ms: 10,
            min_tick_interval_ms: 50,
            food_placement_attempts: 100,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if !(5..=100).contains(&self.board_width) || !(5..=100).contains(&self.board_height) {
            return Err(format!(
                "Board must be between 5x5 and 100x100, got {}x{}",
                self.board_width, self.board_height
            ));
        }
        if self.game_mode.trim().is_empty() {
            return Err("game_mode must not be empty".to_string());
        }
        if !(1..=MAX_FOOD_REWARD).contains(&self.food_reward) {
            return Err(format!(
                "food_reward must be between 1 and {}, got {}",
                MAX_FOOD_REWARD, self.food_reward
            ));
        }
        if self.points_per_level == 0 {
            return Err("points_per_level must be greater than 0".to_string());
        }
        if self.min_tick_interval_ms < 10 {
            return Err("min_tick_interval_ms must be at least 10".to_string());
        }
        if self.food_placement_attempts == 0 {
            return Err("food_placement_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = GameSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.tick_interval_for_level(1), Duration::from_millis(150));
    }

    #[test]
    fn test_level_for_score() {
        let settings = GameSettings::default();
        assert_eq!(settings.level_for_score(0), 1);
        assert_eq!(settings.level_for_score(40), 1);
        assert_eq!(settings.level_for_score(50), 2);
        assert_eq!(settings.level_for_score(120), 3);
    }

    #[test]
    fn test_tick_interval_is_monotone_with_floor() {
        let settings = GameSettings::default();
        let mut previous = settings.tick_interval_for_level(1);
        for level in 2..50 {
            let current = settings.tick_interval_for_level(level);
            assert!(current <= previous);
            assert!(current >= Duration::from_millis(settings.min_tick_interval_ms as u64));
            previous = current;
        }
        assert_eq!(settings.tick_interval_for_level(u32::MAX), Duration::from_millis(50));
    }

    #[test]
    fn test_difficulty_changes_base_interval() {
        let settings = GameSettings {
            difficulty: Difficulty::Hard,
            ..GameSettings::default()
        };
        assert_eq!(settings.tick_interval_for_level(1), Duration::from_millis(100));
        assert_eq!(settings.tick_interval_for_level(4), Duration::from_millis(70));
    }

    #[test]
    fn test_validate_rejects_tiny_board() {
        let settings = GameSettings {
            board_width: 4,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_reward() {
        let settings = GameSettings {
            food_reward: 0,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_reward() {
        let settings = GameSettings {
            food_reward: MAX_FOOD_REWARD + 1,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = GameSettings {
            food_reward: MAX_FOOD_REWARD,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_ok());
    }
}
