//! Monster pass - Hostile creature spawns
//!
//! Monster types are immutable configuration; every scheduled monster gets
//! its own copy of the type's behavior settings as per-instance state.

use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;
use tracing::{debug, instrument, trace, warn};

use super::generation_service::{
    draw_spawns, weighted_table, GenerationError, SpawnGenerationService,
};
use crate::application::ports::outbound::RandomSource;
use crate::domain::entities::{
    Candidate, LocationBatch, MonsterSpawnArea, MonsterState, MonsterType, SpawnCategory,
    SpawnPack,
};
use crate::domain::services::daily_spawn_count;
use crate::domain::value_objects::DayContext;

const SPAWN_WEIGHT_SETTING: &str = "SpawnWeight";

impl SpawnGenerationService {
    /// Generate monsters for every pack with monsters enabled
    ///
    /// Monster counts are not scaled by any skill.
    #[instrument(skip_all)]
    pub(super) fn generate_monsters(
        &self,
        packs: &mut [SpawnPack],
        _context: &DayContext,
        rng: &mut dyn RandomSource,
        out: &mut Vec<LocationBatch>,
    ) -> Result<()> {
        for pack in packs.iter() {
            let settings = match pack.config.monster_spawn_settings.as_ref() {
                Some(settings) if pack.config.monster_spawn_enabled => settings,
                _ => {
                    trace!(pack = %pack.source, "Monster generation is disabled");
                    continue;
                }
            };
            debug!(pack = %pack.source, "Generating monsters");

            for area in &settings.areas {
                let Some(locations) =
                    self.prepare_area(SpawnCategory::Monster, &area.area, &pack.save, &pack.source)?
                else {
                    continue;
                };

                let monster_types = valid_monster_types(area);
                if monster_types.is_empty() {
                    debug!(
                        area_id = %area.area.unique_area_id,
                        "The monster list contains no valid types. Skipping this area."
                    );
                    continue;
                }

                let candidates: Arc<[Candidate]> = monster_types
                    .iter()
                    .map(|monster| monster_candidate(area, monster))
                    .collect::<Result<Vec<_>, _>>()?
                    .into();
                let table = weighted_table(&area.area, &candidates)?;

                for location in locations {
                    let count = daily_spawn_count(
                        area.area.minimum_spawns_per_day,
                        area.area.maximum_spawns_per_day,
                        0.0,
                        0,
                        rng,
                    );
                    debug!(location = %location, potential = count, "Potential monster spawns");

                    let mut drafts = draw_spawns(count, &candidates, &table, rng);
                    for draft in &mut drafts {
                        draft.monster = Some(MonsterState::from(monster_types[draft.candidate]));
                    }

                    self.schedule_location(
                        SpawnCategory::Monster,
                        &pack.source,
                        &area.area,
                        location,
                        Arc::clone(&candidates),
                        drafts,
                        rng,
                        out,
                    );
                }

                trace!(area_id = %area.area.unique_area_id, "Monster spawn process complete for this area");
            }
        }

        Ok(())
    }
}

/// Monster types with a usable name, in configuration order
fn valid_monster_types(area: &MonsterSpawnArea) -> Vec<&MonsterType> {
    area.monster_types
        .iter()
        .filter(|monster| {
            let valid = !monster.monster_name.trim().is_empty();
            if !valid {
                warn!(
                    area_id = %area.area.unique_area_id,
                    "A monster type with no name was found and will be ignored"
                );
            }
            valid
        })
        .collect()
}

/// Selection data for a monster type; `SpawnWeight` may be a number or a numeric string
fn monster_candidate(
    area: &MonsterSpawnArea,
    monster: &MonsterType,
) -> Result<Candidate, GenerationError> {
    let mut candidate = Candidate::new(monster.monster_name.clone());
    candidate.settings = monster.settings.clone();

    let weight = match monster.settings.get(SPAWN_WEIGHT_SETTING) {
        None => return Ok(candidate),
        Some(Value::Number(number)) => number.as_u64(),
        Some(Value::String(text)) => text.trim().parse::<u64>().ok(),
        Some(_) => None,
    };
    let weight = weight
        .and_then(|w| u32::try_from(w).ok())
        .ok_or_else(|| GenerationError::InvalidCandidate {
            area_id: area.area.unique_area_id.clone(),
            candidate: monster.monster_name.clone(),
            reason: format!("{} must be a non-negative integer", SPAWN_WEIGHT_SETTING),
        })?;

    candidate.spawn_weight = Some(weight);
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SpawnArea;
    use serde_json::json;

    fn area_with(monsters: Vec<MonsterType>) -> MonsterSpawnArea {
        MonsterSpawnArea {
            area: SpawnArea::new("cave", "Mine"),
            monster_types: monsters,
        }
    }

    #[test]
    fn test_monster_weight_parsing() {
        let area = area_with(Vec::new());
        let plain = monster_candidate(&area, &MonsterType::new("Slime")).unwrap();
        assert_eq!(plain.weight(), 1);

        let numeric = MonsterType::new("Bat").with_setting("SpawnWeight", json!(4));
        assert_eq!(monster_candidate(&area, &numeric).unwrap().weight(), 4);

        let text = MonsterType::new("Ghost").with_setting("SpawnWeight", json!(" 6 "));
        let candidate = monster_candidate(&area, &text).unwrap();
        assert_eq!(candidate.weight(), 6);
        assert_eq!(candidate.settings.get("SpawnWeight"), Some(&json!(" 6 ")));
    }

    #[test]
    fn test_invalid_monster_weight_is_an_error() {
        let area = area_with(Vec::new());
        let bad = MonsterType::new("Golem").with_setting("SpawnWeight", json!("heavy"));
        let err = monster_candidate(&area, &bad).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidCandidate { .. }));

        let negative = MonsterType::new("Golem").with_setting("SpawnWeight", json!(-2));
        assert!(monster_candidate(&area, &negative).is_err());
    }

    #[test]
    fn test_unnamed_monsters_are_ignored() {
        let area = area_with(vec![MonsterType::new(" "), MonsterType::new("Slime")]);
        let valid = valid_monster_types(&area);
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].monster_name, "Slime");
    }
}
