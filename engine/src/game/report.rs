use serde::{Deserialize, Serialize};

use super::settings::Difficulty;

/// End-of-game summary handed to whatever records scores. The engine never submits it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub game_mode: String,
    pub difficulty: Difficulty,
    pub duration_ms: u64,
    pub moves: u32,
    pub food_consumed: u32,
}

impl GameReport {
    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize report: {}", e))
    }
}
