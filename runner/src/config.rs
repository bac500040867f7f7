use std::time::Duration;

use serde::{Deserialize, Serialize};
use snake_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_engine::GameSettings;

pub const CONFIG_FILE: &str = "snake_runner_config.yaml";

pub fn get_config_manager(path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameSettings,
    /// Period of the host frame callback, the stand-in for a display refresh.
    pub frame_interval_ms: u32,
    pub autopilot: bool,
    pub render: bool,
}

impl Config {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms as u64)
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if !(1..=1000).contains(&self.frame_interval_ms) {
            return Err("frame_interval_ms must be between 1 and 1000".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            frame_interval_ms: 16,
            autopilot: false,
            render: true,
        }
    }
}
