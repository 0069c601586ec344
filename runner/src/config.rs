use serde::{Deserialize, Serialize};
use snake_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_engine::snake::{MAX_FIELD_DIMENSION, MIN_FIELD_DIMENSION};

pub const CONFIG_FILE: &str = "snake_runner_config.yaml";

pub fn get_config_manager(file_path: Option<&str>) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path.unwrap_or(CONFIG_FILE))
}

/// Command line values that take precedence over the config file.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub field_width: Option<u32>,
    pub field_height: Option<u32>,
    pub seed: Option<u64>,
    pub show_board: bool,
    pub save_replay: bool,
}

/// Reads the file, applies `overrides` and validates the merged result once.
pub fn load_config(file_path: Option<&str>, overrides: Overrides) -> Result<Config, String> {
    let mut config = get_config_manager(file_path).read_unvalidated_config()?;
    config.apply(overrides);
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    Ok(config)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub replay: ReplayConfig,
}

impl Config {
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(width) = overrides.field_width {
            self.simulation.field_width = width;
        }
        if let Some(height) = overrides.field_height {
            self.simulation.field_height = height;
        }
        if overrides.seed.is_some() {
            self.simulation.seed = overrides.seed;
        }
        self.simulation.show_board |= overrides.show_board;
        self.replay.save |= overrides.save_replay;
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.simulation.validate()?;
        self.replay.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SimulationConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub seed: Option<u64>,
    pub show_board: bool,
}

impl Validate for SimulationConfig {
    fn validate(&self) -> Result<(), String> {
        let min = MIN_FIELD_DIMENSION as u32;
        let max = MAX_FIELD_DIMENSION as u32;
        if self.field_width < min || self.field_height < min {
            return Err(format!("field dimensions must be at least {}x{}", min, min));
        }
        if self.field_width > max || self.field_height > max {
            return Err(format!(
                "field dimensions must not exceed {}x{}",
                MAX_FIELD_DIMENSION, MAX_FIELD_DIMENSION
            ));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ReplayConfig {
    pub save: bool,
    pub location: String,
}

impl Validate for ReplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.location.is_empty() {
            return Err("replay location must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                field_width: 10,
                field_height: 10,
                seed: None,
                show_board: true,
            },
            replay: ReplayConfig {
                save: false,
                location: "replays".to_string(),
            },
        }
    }
}
