//! Spawn configuration files - Loading, normalization and save state
//!
//! A pack is one JSON spawn configuration plus an optional save file stored
//! next to it (`<name>.save.json`). Normalization runs on every load so the
//! generation passes can rely on unique area ids and ordered ranges.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::entities::{SaveState, SpawnConfig, SpawnPack};

/// Errors raised while reading or writing spawn configuration files
#[derive(Debug, Error)]
pub enum SpawnConfigError {
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a spawn configuration from JSON text and normalize it
pub fn parse_spawn_config(json: &str, source: &str) -> Result<SpawnConfig, serde_json::Error> {
    let mut config: SpawnConfig = serde_json::from_str(json)?;
    normalize(&mut config, source);
    Ok(config)
}

/// Load a pack from a spawn configuration file and its save file, if any
pub fn load_spawn_pack(path: &Path) -> Result<SpawnPack, SpawnConfigError> {
    let source = path.display().to_string();
    let text = read(path)?;
    let config = parse_spawn_config(&text, &source).map_err(|source| SpawnConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let save_path = save_state_path(path);
    let save = if save_path.exists() {
        let text = read(&save_path)?;
        serde_json::from_str(&text).map_err(|source| SpawnConfigError::Parse {
            path: save_path.clone(),
            source,
        })?
    } else {
        debug!(path = %save_path.display(), "No save file found; starting with empty save state");
        SaveState::default()
    };

    info!(pack = %source, "Loaded spawn configuration");
    Ok(SpawnPack::new(source, config).with_save(save))
}

/// Write a pack's save state next to its spawn configuration file
pub fn store_save_state(path: &Path, save: &SaveState) -> Result<(), SpawnConfigError> {
    let save_path = save_state_path(path);
    let text = serde_json::to_string_pretty(save).map_err(|source| SpawnConfigError::Parse {
        path: save_path.clone(),
        source,
    })?;
    fs::write(&save_path, text).map_err(|source| SpawnConfigError::Io {
        path: save_path,
        source,
    })
}

/// `spawns.json` -> `spawns.save.json`
pub fn save_state_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{}.save.json", stem))
}

fn read(path: &Path) -> Result<String, SpawnConfigError> {
    fs::read_to_string(path).map_err(|source| SpawnConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Fix up a freshly loaded configuration
///
/// Blank, `"null"` and duplicate area ids are replaced with
/// `"<map> <category> area <n>"`, inverted spawn-count ranges and timing
/// windows are swapped, and a simultaneous-spawn cap of 0 becomes 1.
pub fn normalize(config: &mut SpawnConfig, source: &str) {
    let mut areas = config.areas_mut();
    let mut ids: HashSet<String> = HashSet::new();

    for (_, area) in areas.iter_mut() {
        if is_placeholder_id(&area.unique_area_id) {
            continue;
        }
        if !ids.insert(area.unique_area_id.clone()) {
            debug!(
                area_id = %area.unique_area_id,
                pack = %source,
                "Duplicate UniqueAreaID found; it will be renamed"
            );
            area.unique_area_id.clear();
        }
    }

    for (category, area) in areas.iter_mut() {
        if is_placeholder_id(&area.unique_area_id) {
            let prefix = format!("{} {} area ", area.map_name, category);
            let mut number = 1u32;
            while ids.contains(&format!("{}{}", prefix, number)) {
                number += 1;
            }
            area.unique_area_id = format!("{}{}", prefix, number);
            debug!(area_id = %area.unique_area_id, "New UniqueAreaID assigned");
        }
        ids.insert(area.unique_area_id.clone());
    }

    for (_, area) in areas.iter_mut() {
        if area.minimum_spawns_per_day > area.maximum_spawns_per_day {
            std::mem::swap(&mut area.minimum_spawns_per_day, &mut area.maximum_spawns_per_day);
            debug!(area_id = %area.unique_area_id, "Swapped minimum and maximum spawns per day");
        }

        if let Some(timing) = area.spawn_timing.as_mut() {
            if timing.start_time > timing.end_time {
                std::mem::swap(&mut timing.start_time, &mut timing.end_time);
                debug!(area_id = %area.unique_area_id, "Swapped StartTime and EndTime");
            }
            if timing.maximum_simultaneous_spawns == Some(0) {
                timing.maximum_simultaneous_spawns = Some(1);
                debug!(area_id = %area.unique_area_id, "MaximumSimultaneousSpawns of 0 raised to 1");
            }
        }
    }
}

fn is_placeholder_id(id: &str) -> bool {
    let id = id.trim();
    id.is_empty() || id.eq_ignore_ascii_case("null")
}
