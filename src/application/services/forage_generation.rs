//! Forage pass - Seasonal item spawns

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, instrument, trace};

use super::generation_service::{draw_spawns, weighted_table, SpawnGenerationService};
use crate::application::ports::outbound::RandomSource;
use crate::domain::entities::{Candidate, LocationBatch, SpawnCategory, SpawnPack};
use crate::domain::services::daily_spawn_count;
use crate::domain::value_objects::DayContext;

impl SpawnGenerationService {
    /// Generate forage for every pack with forage enabled
    #[instrument(skip_all, fields(season = %context.season))]
    pub(super) fn generate_forage(
        &self,
        packs: &mut [SpawnPack],
        context: &DayContext,
        rng: &mut dyn RandomSource,
        out: &mut Vec<LocationBatch>,
    ) -> Result<()> {
        for pack in packs.iter() {
            let settings = match pack.config.forage_spawn_settings.as_ref() {
                Some(settings) if pack.config.forage_spawn_enabled => settings,
                _ => {
                    trace!(pack = %pack.source, "Forage generation is disabled");
                    continue;
                }
            };
            debug!(pack = %pack.source, "Generating forage");

            for area in &settings.areas {
                let Some(locations) =
                    self.prepare_area(SpawnCategory::Forage, &area.area, &pack.save, &pack.source)?
                else {
                    continue;
                };

                let candidates = area.items.resolve(&settings.items, context.season);
                if candidates.is_empty() {
                    debug!(
                        area_id = %area.area.unique_area_id,
                        "The item list for this season contains no valid items. Skipping this area."
                    );
                    continue;
                }
                let table = weighted_table(&area.area, candidates)?;
                let candidates: Arc<[Candidate]> = Arc::from(candidates);
                trace!(types = candidates.len(), "Valid spawn types. Generating today's spawns...");

                for location in locations {
                    let count = daily_spawn_count(
                        area.area.minimum_spawns_per_day,
                        area.area.maximum_spawns_per_day,
                        settings.percent_extra_spawns_per_foraging_level,
                        context.skills.foraging,
                        rng,
                    );
                    let drafts = draw_spawns(count, &candidates, &table, rng);
                    debug!(location = %location, potential = drafts.len(), "Potential forage spawns");

                    self.schedule_location(
                        SpawnCategory::Forage,
                        &pack.source,
                        &area.area,
                        location,
                        Arc::clone(&candidates),
                        drafts,
                        rng,
                        out,
                    );
                }

                trace!(area_id = %area.area.unique_area_id, "Forage generation complete for this area");
            }
        }

        Ok(())
    }
}
