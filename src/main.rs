//! SpawnBldr Engine - Runs one simulated day and prints the spawn plan
//!
//! Reads `spawnbldr.toml` / `SPAWNBLDR_*` configuration, every configured
//! spawn pack, and a world description, then writes the day's plan to stdout
//! as JSON. Updated save state is written back next to each pack.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spawnbldr_engine::application::ports::outbound::{PermissiveConditions, RandomSource};
use spawnbldr_engine::application::services::SpawnGenerationService;
use spawnbldr_engine::infrastructure::config::AppConfig;
use spawnbldr_engine::infrastructure::random::RngSource;
use spawnbldr_engine::infrastructure::spawn_config::{load_spawn_pack, store_save_state};
use spawnbldr_engine::infrastructure::static_world::StaticWorld;

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spawnbldr_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting SpawnBldr Engine");

    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  World: {}", config.world_path.display());
    tracing::info!("  Season: {}", config.season);

    let world = Arc::new(StaticWorld::load(&config.world_path)?);

    let mut packs = config
        .spawn_config_paths
        .iter()
        .map(|path| load_spawn_pack(path))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::info!("Loaded {} spawn pack(s)", packs.len());

    let service = SpawnGenerationService::new(
        world.clone(),
        Arc::new(PermissiveConditions),
        world,
        config.generation,
    );

    let mut rng: Box<dyn RandomSource> = match config.seed {
        Some(seed) => {
            tracing::info!("Using seed {}", seed);
            Box::new(RngSource::seeded(seed))
        }
        None => Box::new(RngSource::from_entropy()),
    };

    let plan = service.generate_day(&mut packs, &config.day_context(), rng.as_mut());

    for (path, pack) in config.spawn_config_paths.iter().zip(&packs) {
        store_save_state(path, &pack.save)?;
    }

    let json = serde_json::to_string_pretty(&plan).context("Failed to serialize spawn plan")?;
    println!("{}", json);

    Ok(())
}
