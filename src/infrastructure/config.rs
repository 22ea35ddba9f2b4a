//! Application configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::domain::value_objects::{DayContext, GenerationSettings, Season, SkillLevels};

/// Prefix of environment variables that override configuration values
pub const ENV_PREFIX: &str = "SPAWNBLDR";

/// Application configuration loaded from defaults, `spawnbldr.toml` and environment
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Spawn configuration files, one per pack
    pub spawn_config_paths: Vec<PathBuf>,
    /// World description used for map resolution and tile queries
    pub world_path: PathBuf,
    /// Seed for the day's random draws; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    pub season: Season,
    #[serde(default)]
    pub skills: SkillLevels,

    #[serde(default)]
    pub generation: GenerationSettings,
}

impl AppConfig {
    /// Load configuration from `spawnbldr.toml` (optional) and `SPAWNBLDR_*` variables
    ///
    /// Nested keys use a double underscore, e.g. `SPAWNBLDR_SKILLS__MINING=6`.
    pub fn load() -> Result<Self> {
        Self::load_from("spawnbldr")
    }

    /// Load configuration using `file_stem` as the optional config file name
    pub fn load_from(file_stem: &str) -> Result<Self> {
        let config = Config::builder()
            .set_default("spawn_config_paths", vec!["spawns.json"])?
            .set_default("world_path", "world.json")?
            .set_default("season", "spring")?
            .add_source(File::with_name(file_stem).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("spawn_config_paths")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration sources")?;

        config
            .try_deserialize()
            .context("Configuration values are invalid")
    }

    /// The simulated day described by this configuration
    pub fn day_context(&self) -> DayContext {
        DayContext::new(self.season, self.skills)
    }
}
