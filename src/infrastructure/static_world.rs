//! Static world - An in-memory world read from a JSON description
//!
//! Serves both map resolution and tile queries. Used by the binary to run a
//! day offline and by tests as a fixed world.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::{AreaResolverPort, WorldQueryPort};
use crate::domain::services::TileOccupancy;
use crate::domain::value_objects::TilePos;

/// A large object already standing in the world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub id: String,
    pub tile: TilePos,
}

/// Tile data of one location
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationTiles {
    pub objects: HashSet<TilePos>,
    /// Terrain features, buildings and anything else that is not an object
    pub occupied: HashSet<TilePos>,
    pub no_place: HashSet<TilePos>,
    pub no_spawn: HashSet<TilePos>,
    pub large_objects: Vec<PlacedObject>,
}

/// A complete world description
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticWorld {
    pub locations: BTreeMap<String, LocationTiles>,
    /// Map names that stand for a group of locations
    pub map_groups: BTreeMap<String, Vec<String>>,
    /// Locations whose name starts with one of these are regenerated daily
    pub transient_prefixes: Vec<String>,
}

impl StaticWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read world file '{}'", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse world file '{}'", path.display()))
    }

    pub fn with_location(mut self, name: impl Into<String>, tiles: LocationTiles) -> Self {
        self.locations.insert(name.into(), tiles);
        self
    }

    pub fn with_group(mut self, map_name: impl Into<String>, locations: Vec<String>) -> Self {
        self.map_groups.insert(map_name.into(), locations);
        self
    }

    pub fn with_transient_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.transient_prefixes.push(prefix.into());
        self
    }

    fn tiles(&self, location: &str) -> Option<&LocationTiles> {
        self.locations.get(location)
    }
}

impl LocationTiles {
    pub fn with_object(mut self, tile: TilePos) -> Self {
        self.objects.insert(tile);
        self
    }

    pub fn with_occupied(mut self, tile: TilePos) -> Self {
        self.occupied.insert(tile);
        self
    }

    pub fn with_no_place(mut self, tile: TilePos) -> Self {
        self.no_place.insert(tile);
        self
    }

    pub fn with_no_spawn(mut self, tile: TilePos) -> Self {
        self.no_spawn.insert(tile);
        self
    }

    pub fn with_large_object(mut self, id: impl Into<String>, tile: TilePos) -> Self {
        self.large_objects.push(PlacedObject {
            id: id.into(),
            tile,
        });
        self
    }
}

impl AreaResolverPort for StaticWorld {
    fn resolve(&self, map_name: &str) -> Result<Vec<String>> {
        if let Some(group) = self.map_groups.get(map_name) {
            return Ok(group.clone());
        }
        Ok(self
            .locations
            .contains_key(map_name)
            .then(|| vec![map_name.to_string()])
            .unwrap_or_default())
    }

    fn is_persistent(&self, location: &str) -> bool {
        !self
            .transient_prefixes
            .iter()
            .any(|prefix| location.starts_with(prefix.as_str()))
    }
}

impl TileOccupancy for StaticWorld {
    fn is_object_at(&self, location: &str, tile: TilePos) -> bool {
        self.tiles(location).is_some_and(|t| {
            t.objects.contains(&tile) || t.large_objects.iter().any(|o| o.tile == tile)
        })
    }

    fn is_occupied(&self, location: &str, tile: TilePos) -> bool {
        self.is_object_at(location, tile)
            || self.tiles(location).is_some_and(|t| t.occupied.contains(&tile))
    }

    fn can_place_item(&self, location: &str, tile: TilePos) -> bool {
        self.tiles(location).is_some_and(|t| !t.no_place.contains(&tile))
    }

    fn is_no_spawn(&self, location: &str, tile: TilePos) -> bool {
        self.tiles(location).is_some_and(|t| t.no_spawn.contains(&tile))
    }
}

impl WorldQueryPort for StaticWorld {
    fn large_object_tiles(&self, location: &str, object_ids: &[String]) -> Result<Vec<TilePos>> {
        let tiles = self
            .tiles(location)
            .with_context(|| format!("Unknown location '{}'", location))?;
        Ok(tiles
            .large_objects
            .iter()
            .filter(|o| object_ids.iter().any(|id| id == &o.id))
            .map(|o| o.tile)
            .collect())
    }
}
