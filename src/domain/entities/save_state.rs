//! Per-pack persisted state that generation reads and extends

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::SpawnConfig;
use crate::domain::value_objects::TilePos;

/// State persisted alongside a spawn configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SaveState {
    /// Tiles of pre-existing large objects, keyed by area id
    ///
    /// Once an area has an entry (even an empty one) it is never rescanned.
    #[serde(default)]
    pub existing_object_locations: BTreeMap<String, Vec<TilePos>>,
}

impl SaveState {
    pub fn existing_objects(&self, area_id: &str) -> Option<&[TilePos]> {
        self.existing_object_locations.get(area_id).map(Vec::as_slice)
    }
}

/// A spawn configuration together with where it came from and its save state
#[derive(Debug, Clone)]
pub struct SpawnPack {
    /// Human-readable origin, e.g. a content pack name or a file path
    pub source: String,
    pub config: SpawnConfig,
    pub save: SaveState,
}

impl SpawnPack {
    pub fn new(source: impl Into<String>, config: SpawnConfig) -> Self {
        Self {
            source: source.into(),
            config,
            save: SaveState::default(),
        }
    }

    pub fn with_save(mut self, save: SaveState) -> Self {
        self.save = save;
        self
    }
}
