//! World ports - Interfaces into the live game world
//!
//! These traits define the contracts that world adapters must implement.
//! Generation depends on these traits, not on any concrete world.

use anyhow::Result;
use serde_json::Value;

use crate::domain::entities::{SaveState, SpawnArea};
use crate::domain::services::TileOccupancy;
use crate::domain::value_objects::TilePos;

// =============================================================================
// Area Resolver Port
// =============================================================================

/// Resolves an area's logical map name to concrete locations
pub trait AreaResolverPort: Send + Sync {
    /// Concrete location identifiers for a map name, in a stable order
    ///
    /// An empty list means the area is skipped for the day.
    fn resolve(&self, map_name: &str) -> Result<Vec<String>>;

    /// Whether a location persists between days
    ///
    /// Dynamically generated levels are not persistent, so existing objects
    /// found there must not be recorded.
    fn is_persistent(&self, _location: &str) -> bool {
        true
    }
}

// =============================================================================
// Condition Checker Port
// =============================================================================

/// Evaluates an area's extra conditions for today
pub trait ConditionCheckerPort: Send + Sync {
    /// `false` means the area is skipped for the day
    fn evaluate(&self, area: &SpawnArea, save: &SaveState, pack_source: &str) -> Result<bool>;
}

/// Condition checker that only honors an explicit `false`
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveConditions;

impl ConditionCheckerPort for PermissiveConditions {
    fn evaluate(&self, area: &SpawnArea, _save: &SaveState, _pack_source: &str) -> Result<bool> {
        Ok(!matches!(area.extra_conditions, Value::Bool(false)))
    }
}

// =============================================================================
// World Query Port
// =============================================================================

/// Read-only world queries used by generation and placement
pub trait WorldQueryPort: TileOccupancy + Send + Sync {
    /// Tiles of large objects at a location whose ids are in `object_ids`
    fn large_object_tiles(&self, location: &str, object_ids: &[String]) -> Result<Vec<TilePos>>;
}
