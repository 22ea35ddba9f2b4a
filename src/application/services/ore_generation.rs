//! Ore pass - Skill-scaled ore node spawns

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, instrument, trace};

use super::generation_service::{draw_spawns, weighted_table, SpawnGenerationService};
use crate::application::ports::outbound::RandomSource;
use crate::domain::entities::{Candidate, LocationBatch, SpawnCategory, SpawnPack};
use crate::domain::services::{daily_spawn_count, SkillChanceTable};
use crate::domain::value_objects::DayContext;

impl SpawnGenerationService {
    /// Generate ore for every pack with ore enabled
    ///
    /// Each area map that is absent or empty falls back to the global map.
    #[instrument(skip_all, fields(mining = context.skills.mining))]
    pub(super) fn generate_ore(
        &self,
        packs: &mut [SpawnPack],
        context: &DayContext,
        rng: &mut dyn RandomSource,
        out: &mut Vec<LocationBatch>,
    ) -> Result<()> {
        for pack in packs.iter() {
            let settings = match pack.config.ore_spawn_settings.as_ref() {
                Some(settings) if pack.config.ore_spawn_enabled => settings,
                _ => {
                    trace!(pack = %pack.source, "Ore generation is disabled");
                    continue;
                }
            };
            debug!(pack = %pack.source, "Generating ore");

            for area in &settings.areas {
                let Some(locations) =
                    self.prepare_area(SpawnCategory::Ore, &area.area, &pack.save, &pack.source)?
                else {
                    continue;
                };

                let level_required = area
                    .mining_level_required
                    .as_ref()
                    .filter(|map| !map.is_empty())
                    .unwrap_or(&settings.mining_level_required);
                let start_chance = area
                    .starting_spawn_chance
                    .as_ref()
                    .filter(|map| !map.is_empty())
                    .unwrap_or(&settings.starting_spawn_chance);
                let max_level_chance = area
                    .level_ten_spawn_chance
                    .as_ref()
                    .filter(|map| !map.is_empty())
                    .unwrap_or(&settings.level_ten_spawn_chance);

                let chances = SkillChanceTable::build(
                    level_required,
                    start_chance,
                    max_level_chance,
                    context.skills.mining,
                    self.settings.reference_level,
                );
                if chances.is_empty() {
                    debug!(
                        area_id = %area.area.unique_area_id,
                        "No chance of spawning any ore. Skipping this area."
                    );
                    continue;
                }

                let candidates: Arc<[Candidate]> = chances.to_candidates().into();
                let table = weighted_table(&area.area, &candidates)?;
                trace!(types = candidates.len(), "Possible ore types. Generating today's spawns...");

                for location in locations {
                    let count = daily_spawn_count(
                        area.area.minimum_spawns_per_day,
                        area.area.maximum_spawns_per_day,
                        settings.percent_extra_spawns_per_mining_level,
                        context.skills.mining,
                        rng,
                    );
                    debug!(location = %location, potential = count, "Potential ore spawns");
                    let drafts = draw_spawns(count, &candidates, &table, rng);

                    self.schedule_location(
                        SpawnCategory::Ore,
                        &pack.source,
                        &area.area,
                        location,
                        Arc::clone(&candidates),
                        drafts,
                        rng,
                        out,
                    );
                }

                trace!(area_id = %area.area.unique_area_id, "Ore generation complete for this area");
            }
        }

        Ok(())
    }
}
