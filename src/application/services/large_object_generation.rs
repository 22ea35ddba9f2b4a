//! Large object pass - Stumps, logs, boulders and similar clumps
//!
//! Also records the tiles of matching objects already in the world when an
//! area asks for it, so placement can reuse them as spawn tiles.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, instrument, trace};

use super::generation_service::{draw_spawns, weighted_table, SpawnGenerationService};
use crate::application::ports::outbound::RandomSource;
use crate::domain::entities::{
    Candidate, LargeObjectSpawnArea, LocationBatch, SaveState, SpawnCategory, SpawnPack,
};
use crate::domain::services::daily_spawn_count;
use crate::domain::value_objects::DayContext;

impl SpawnGenerationService {
    /// Generate large objects for every pack with large objects enabled
    #[instrument(skip_all)]
    pub(super) fn generate_large_objects(
        &self,
        packs: &mut [SpawnPack],
        context: &DayContext,
        rng: &mut dyn RandomSource,
        out: &mut Vec<LocationBatch>,
    ) -> Result<()> {
        for pack in packs.iter_mut() {
            let SpawnPack {
                source,
                config,
                save,
            } = pack;
            let settings = match config.large_object_spawn_settings.as_ref() {
                Some(settings) if config.large_object_spawn_enabled => settings,
                _ => {
                    trace!(pack = %source, "Large object generation is disabled");
                    continue;
                }
            };
            debug!(pack = %source, "Generating large objects");

            for area in &settings.areas {
                let Some(locations) =
                    self.prepare_area(SpawnCategory::LargeObject, &area.area, save, source)?
                else {
                    continue;
                };

                if area.object_types.is_empty() {
                    debug!(
                        area_id = %area.area.unique_area_id,
                        "The large object list contains no valid IDs. Skipping this area."
                    );
                    continue;
                }

                self.find_existing_objects(area, &locations, save)?;

                let table = weighted_table(&area.area, &area.object_types)?;
                let candidates: Arc<[Candidate]> = Arc::from(area.object_types.as_slice());
                let level = context.skills.level(area.related_skill);

                for location in locations {
                    let count = daily_spawn_count(
                        area.area.minimum_spawns_per_day,
                        area.area.maximum_spawns_per_day,
                        area.percent_extra_spawns_per_skill_level,
                        level,
                        rng,
                    );
                    debug!(location = %location, potential = count, "Potential large object spawns");
                    let drafts = draw_spawns(count, &candidates, &table, rng);

                    self.schedule_location(
                        SpawnCategory::LargeObject,
                        source,
                        &area.area,
                        location,
                        Arc::clone(&candidates),
                        drafts,
                        rng,
                        out,
                    );
                }

                trace!(
                    area_id = %area.area.unique_area_id,
                    "Large object generation complete for this area"
                );
            }
        }

        Ok(())
    }

    /// Record tiles of existing objects of the area's types, once per area
    ///
    /// Only single, persistent locations are scanned. An area that already
    /// has a record (even an empty one) keeps it.
    pub(super) fn find_existing_objects(
        &self,
        area: &LargeObjectSpawnArea,
        locations: &[String],
        save: &mut SaveState,
    ) -> Result<()> {
        let area_id = &area.area.unique_area_id;
        if !area.find_existing_object_locations {
            trace!(area_id = %area_id, "\"Find existing objects\" disabled. Skipping.");
            return Ok(());
        }

        let location = match locations {
            [single] if self.resolver.is_persistent(single) => single,
            _ => {
                debug!(
                    area_id = %area_id,
                    map_name = %area.area.map_name,
                    "\"Find existing objects\" cannot be used with multiple locations or dynamically loaded maps. The setting will be ignored."
                );
                return Ok(());
            }
        };

        if save.existing_object_locations.contains_key(area_id) {
            trace!(area_id = %area_id, "Using saved tile data from a previous search");
            return Ok(());
        }

        let object_ids: Vec<String> = area.object_types.iter().map(|c| c.id.clone()).collect();
        let tiles = self
            .world
            .large_object_tiles(location, &object_ids)
            .with_context(|| format!("Failed to scan '{}' for existing large objects", location))?;

        debug!(
            area_id = %area_id,
            found = tiles.len(),
            "Recorded existing large objects' tiles as spawn locations for this area"
        );
        save.existing_object_locations.insert(area_id.clone(), tiles);
        Ok(())
    }
}
