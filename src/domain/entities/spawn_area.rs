//! Spawn area entities - Named configuration units for each category
//!
//! The field names follow the on-disk spawn configuration format, which is why
//! serde renames are PascalCase (plus a few legacy spellings).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Candidate, MonsterType};
use crate::domain::value_objects::{Season, Skill, TileStrictness, TimeSlot};

/// One of the four generation domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnCategory {
    Forage,
    LargeObject,
    Ore,
    Monster,
}

impl SpawnCategory {
    pub const ALL: [SpawnCategory; 4] = [
        SpawnCategory::Forage,
        SpawnCategory::LargeObject,
        SpawnCategory::Ore,
        SpawnCategory::Monster,
    ];

    /// Days until expiry applied when an area leaves it unset
    pub fn default_days_until_expire(&self) -> u32 {
        match self {
            Self::Monster => 1,
            _ => 0,
        }
    }
}

impl std::fmt::Display for SpawnCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpawnCategory::Forage => write!(f, "forage"),
            SpawnCategory::LargeObject => write!(f, "large object"),
            SpawnCategory::Ore => write!(f, "ore"),
            SpawnCategory::Monster => write!(f, "monster"),
        }
    }
}

/// Optional time window for an area's spawns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpawnTiming {
    pub start_time: TimeSlot,
    pub end_time: TimeSlot,
    #[serde(default)]
    pub maximum_simultaneous_spawns: Option<u32>,
    #[serde(default)]
    pub minimum_time_between_spawns: Option<u32>,
}

impl SpawnTiming {
    pub fn new(start_time: TimeSlot, end_time: TimeSlot) -> Self {
        Self {
            start_time,
            end_time,
            maximum_simultaneous_spawns: None,
            minimum_time_between_spawns: None,
        }
    }

    pub fn with_max_simultaneous(mut self, max: u32) -> Self {
        self.maximum_simultaneous_spawns = Some(max);
        self
    }

    pub fn with_min_gap(mut self, gap: u32) -> Self {
        self.minimum_time_between_spawns = Some(gap);
        self
    }
}

/// Settings shared by every category's areas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpawnArea {
    #[serde(rename = "UniqueAreaID", default, deserialize_with = "null_as_empty")]
    pub unique_area_id: String,
    /// Logical location-group name, resolved by the area resolver
    pub map_name: String,
    #[serde(default)]
    pub minimum_spawns_per_day: u32,
    #[serde(default)]
    pub maximum_spawns_per_day: u32,
    #[serde(default)]
    pub days_until_spawns_expire: Option<u32>,
    #[serde(default)]
    pub spawn_timing: Option<SpawnTiming>,
    #[serde(default)]
    pub strict_tile_checking: TileStrictness,
    /// Opaque to generation; handed to the condition checker
    #[serde(default)]
    pub extra_conditions: Value,
}

/// Area ids are often written as `null`; normalization replaces them later
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl SpawnArea {
    pub fn new(unique_area_id: impl Into<String>, map_name: impl Into<String>) -> Self {
        Self {
            unique_area_id: unique_area_id.into(),
            map_name: map_name.into(),
            minimum_spawns_per_day: 0,
            maximum_spawns_per_day: 0,
            days_until_spawns_expire: None,
            spawn_timing: None,
            strict_tile_checking: TileStrictness::default(),
            extra_conditions: Value::Null,
        }
    }

    pub fn with_spawns_per_day(mut self, min: u32, max: u32) -> Self {
        self.minimum_spawns_per_day = min;
        self.maximum_spawns_per_day = max;
        self
    }

    pub fn with_timing(mut self, timing: SpawnTiming) -> Self {
        self.spawn_timing = Some(timing);
        self
    }

    pub fn with_expiry(mut self, days: u32) -> Self {
        self.days_until_spawns_expire = Some(days);
        self
    }
}

/// Per-season candidate lists
///
/// At area level, `None` means "use the category-global list" while an empty
/// list disables the season for that area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SeasonalCandidates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spring_item_index: Option<Vec<Candidate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summer_item_index: Option<Vec<Candidate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fall_item_index: Option<Vec<Candidate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winter_item_index: Option<Vec<Candidate>>,
}

impl SeasonalCandidates {
    pub fn for_season(&self, season: Season) -> Option<&[Candidate]> {
        match season {
            Season::Spring => self.spring_item_index.as_deref(),
            Season::Summer => self.summer_item_index.as_deref(),
            Season::Fall => self.fall_item_index.as_deref(),
            Season::Winter => self.winter_item_index.as_deref(),
        }
    }

    pub fn with_season(mut self, season: Season, candidates: Vec<Candidate>) -> Self {
        let slot = match season {
            Season::Spring => &mut self.spring_item_index,
            Season::Summer => &mut self.summer_item_index,
            Season::Fall => &mut self.fall_item_index,
            Season::Winter => &mut self.winter_item_index,
        };
        *slot = Some(candidates);
        self
    }

    /// Resolve today's list: the area override if present (even when empty),
    /// otherwise the global list.
    pub fn resolve<'a>(&'a self, global: &'a SeasonalCandidates, season: Season) -> &'a [Candidate] {
        match self.for_season(season) {
            Some(list) => list,
            None => global.for_season(season).unwrap_or(&[]),
        }
    }
}

// =============================================================================
// Forage
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForageSpawnArea {
    #[serde(flatten)]
    pub area: SpawnArea,
    #[serde(flatten)]
    pub items: SeasonalCandidates,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForageSettings {
    #[serde(default)]
    pub areas: Vec<ForageSpawnArea>,
    #[serde(default)]
    pub percent_extra_spawns_per_foraging_level: f64,
    #[serde(flatten)]
    pub items: SeasonalCandidates,
}

// =============================================================================
// Large objects
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LargeObjectSpawnArea {
    #[serde(flatten)]
    pub area: SpawnArea,
    #[serde(default)]
    pub object_types: Vec<Candidate>,
    /// Record tiles of matching objects already in the world as spawn tiles
    #[serde(default)]
    pub find_existing_object_locations: bool,
    #[serde(default)]
    pub percent_extra_spawns_per_skill_level: f64,
    #[serde(default)]
    pub related_skill: Skill,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LargeObjectSettings {
    #[serde(default)]
    pub areas: Vec<LargeObjectSpawnArea>,
}

// =============================================================================
// Ore
// =============================================================================

/// Per-kind ore ramp maps; an absent or empty area map falls back to the global one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OreSpawnArea {
    #[serde(flatten)]
    pub area: SpawnArea,
    #[serde(default)]
    pub mining_level_required: Option<BTreeMap<String, u32>>,
    #[serde(default)]
    pub starting_spawn_chance: Option<BTreeMap<String, u32>>,
    #[serde(default)]
    pub level_ten_spawn_chance: Option<BTreeMap<String, u32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OreSettings {
    #[serde(default)]
    pub areas: Vec<OreSpawnArea>,
    #[serde(default)]
    pub percent_extra_spawns_per_mining_level: f64,
    #[serde(default)]
    pub mining_level_required: BTreeMap<String, u32>,
    #[serde(default)]
    pub starting_spawn_chance: BTreeMap<String, u32>,
    #[serde(default)]
    pub level_ten_spawn_chance: BTreeMap<String, u32>,
}

// =============================================================================
// Monsters
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonsterSpawnArea {
    #[serde(flatten)]
    pub area: SpawnArea,
    #[serde(default)]
    pub monster_types: Vec<MonsterType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonsterSettings {
    #[serde(default)]
    pub areas: Vec<MonsterSpawnArea>,
}

// =============================================================================
// Whole configuration
// =============================================================================

/// One spawn configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    #[serde(rename = "ForageSpawnEnabled", default)]
    pub forage_spawn_enabled: bool,
    #[serde(rename = "LargeObjectSpawnEnabled", default)]
    pub large_object_spawn_enabled: bool,
    #[serde(rename = "OreSpawnEnabled", default)]
    pub ore_spawn_enabled: bool,
    #[serde(rename = "MonsterSpawnEnabled", default)]
    pub monster_spawn_enabled: bool,

    #[serde(rename = "Forage_Spawn_Settings", default)]
    pub forage_spawn_settings: Option<ForageSettings>,
    #[serde(rename = "Large_Object_Spawn_Settings", default)]
    pub large_object_spawn_settings: Option<LargeObjectSettings>,
    #[serde(rename = "Ore_Spawn_Settings", default)]
    pub ore_spawn_settings: Option<OreSettings>,
    #[serde(rename = "Monster_Spawn_Settings", default)]
    pub monster_spawn_settings: Option<MonsterSettings>,
}

impl SpawnConfig {
    /// Every area of every category, for passes that treat them uniformly
    pub fn areas_mut(&mut self) -> Vec<(SpawnCategory, &mut SpawnArea)> {
        let mut areas = Vec::new();
        if let Some(settings) = self.forage_spawn_settings.as_mut() {
            areas.extend(settings.areas.iter_mut().map(|a| (SpawnCategory::Forage, &mut a.area)));
        }
        if let Some(settings) = self.large_object_spawn_settings.as_mut() {
            areas.extend(
                settings
                    .areas
                    .iter_mut()
                    .map(|a| (SpawnCategory::LargeObject, &mut a.area)),
            );
        }
        if let Some(settings) = self.ore_spawn_settings.as_mut() {
            areas.extend(settings.areas.iter_mut().map(|a| (SpawnCategory::Ore, &mut a.area)));
        }
        if let Some(settings) = self.monster_spawn_settings.as_mut() {
            areas.extend(settings.areas.iter_mut().map(|a| (SpawnCategory::Monster, &mut a.area)));
        }
        areas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seasonal_override_and_fallback() {
        let global = SeasonalCandidates::default()
            .with_season(Season::Spring, vec![Candidate::new("leek")])
            .with_season(Season::Summer, vec![Candidate::new("grape")]);
        let area = SeasonalCandidates::default()
            .with_season(Season::Spring, vec![Candidate::new("daffodil")])
            .with_season(Season::Summer, Vec::new());

        assert_eq!(area.resolve(&global, Season::Spring)[0].id, "daffodil");
        assert!(area.resolve(&global, Season::Summer).is_empty());
        assert!(area.resolve(&global, Season::Fall).is_empty());

        let no_override = SeasonalCandidates::default();
        assert_eq!(no_override.resolve(&global, Season::Summer)[0].id, "grape");
    }

    #[test]
    fn test_spawn_config_deserialization() {
        let config: SpawnConfig = serde_json::from_value(json!({
            "ForageSpawnEnabled": true,
            "Forage_Spawn_Settings": {
                "Areas": [{
                    "UniqueAreaID": "Farm forage 1",
                    "MapName": "Farm",
                    "MinimumSpawnsPerDay": 1,
                    "MaximumSpawnsPerDay": 4,
                    "SpawnTiming": { "StartTime": 600, "EndTime": 1200, "MaximumSimultaneousSpawns": 2 },
                    "StrictTileChecking": "high",
                    "SpringItemIndex": ["Leek", 16]
                }],
                "PercentExtraSpawnsPerForagingLevel": 5.0,
                "SummerItemIndex": ["Grape"]
            },
            "Ore_Spawn_Settings": {
                "Areas": [{ "MapName": "Quarry", "MiningLevelRequired": {} }],
                "MiningLevelRequired": { "copper": 0 }
            }
        }))
        .unwrap();

        assert!(config.forage_spawn_enabled);
        assert!(!config.ore_spawn_enabled);
        let forage = config.forage_spawn_settings.as_ref().unwrap();
        let area = &forage.areas[0];
        assert_eq!(area.area.unique_area_id, "Farm forage 1");
        assert_eq!(area.area.strict_tile_checking, TileStrictness::High);
        assert_eq!(
            area.area.spawn_timing.as_ref().unwrap().maximum_simultaneous_spawns,
            Some(2)
        );
        assert_eq!(area.items.for_season(Season::Spring).unwrap().len(), 2);
        assert!(area.items.for_season(Season::Summer).is_none());
        assert_eq!(forage.items.for_season(Season::Summer).unwrap()[0].id, "Grape");

        let ore = config.ore_spawn_settings.as_ref().unwrap();
        assert_eq!(ore.areas[0].area.unique_area_id, "");
        assert_eq!(ore.areas[0].mining_level_required.as_ref().map(|m| m.len()), Some(0));
    }

    #[test]
    fn test_default_expiry_per_category() {
        assert_eq!(SpawnCategory::Monster.default_days_until_expire(), 1);
        assert_eq!(SpawnCategory::LargeObject.default_days_until_expire(), 0);
    }
}
