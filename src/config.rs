use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::PetError;

pub const DATA_DIR_ENV: &str = "QUIZPET_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip)]
    pub data_dir: PathBuf,
    #[serde(default = "default_tick_interval_secs")]
    pub tick_interval_secs: u64,
    #[serde(default = "default_pet_file")]
    pub pet_file: String,
}

fn default_tick_interval_secs() -> u64 {
    60
}

fn default_pet_file() -> String {
    "pet.json".to_string()
}

impl Config {
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = data_dir
            .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| {
                dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("quizpet")
            });

        std::fs::create_dir_all(&data_dir)
            .context("Failed to create data directory")?;

        let config_path = data_dir.join("config.json");

        if config_path.exists() {
            let config_str = std::fs::read_to_string(&config_path)
                .context("Failed to read config.json")?;

            if config_str.trim().is_empty() {
                warn!("config.json is empty, recreating defaults");
            } else {
                match serde_json::from_str::<Config>(&config_str) {
                    Ok(mut config) => {
                        config.data_dir = data_dir;
                        config.validate()?;
                        return Ok(config);
                    }
                    Err(e) => {
                        warn!("Failed to parse config.json ({}), recreating defaults", e);
                    }
                }
            }
        }

        let config = Self::default_config(data_dir);
        config.save()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = self.data_dir.join("config.json");
        let json_str = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(&config_path, json_str)
            .context("Failed to write config.json")?;
        Ok(())
    }

    fn default_config(data_dir: PathBuf) -> Self {
        Config {
            data_dir,
            tick_interval_secs: default_tick_interval_secs(),
            pet_file: default_pet_file(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.tick_interval_secs == 0 {
            return Err(PetError::Config("tick_interval_secs must be at least 1".to_string()).into());
        }
        if self.pet_file.trim().is_empty() {
            return Err(PetError::Config("pet_file must not be empty".to_string()).into());
        }
        Ok(())
    }

    pub fn pet_file(&self) -> PathBuf {
        self.data_dir.join(&self.pet_file)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }
}
