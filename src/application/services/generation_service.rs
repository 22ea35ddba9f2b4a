//! Spawn Generation Service - Runs one simulated day's generation
//!
//! Each category (forage, large objects, ore, monsters) has its own pass over
//! every spawn pack. A pass resolves each area's locations, decides how many
//! spawns each location gets, resolves their kinds, and schedules them.
//!
//! # Failure boundary
//!
//! A category pass that fails part-way is abandoned: batches it already
//! produced are kept, the rest of that category is skipped for the day, and
//! the other categories run normally.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, error, info, instrument, trace};

use crate::application::ports::outbound::{
    AreaResolverPort, ConditionCheckerPort, RandomSource, WorldQueryPort,
};
use crate::domain::entities::{
    Candidate, DailySpawnPlan, LocationBatch, SaveState, ScheduledInstance, SpawnArea,
    SpawnCategory, SpawnDraft, SpawnPack,
};
use crate::domain::services::{
    passes_spawn_chance, roll_contents, SelectionError, TimeSlotScheduler, WeightedTable,
};
use crate::domain::value_objects::{DayContext, GenerationSettings};

/// Errors that abort a category pass
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Invalid candidate '{candidate}' in area '{area_id}': {reason}")]
    InvalidCandidate {
        area_id: String,
        candidate: String,
        reason: String,
    },

    #[error("Cannot select spawns for area '{area_id}': {source}")]
    Selection {
        area_id: String,
        #[source]
        source: SelectionError,
    },
}

/// Service that produces a day's spawn plan from spawn packs
pub struct SpawnGenerationService {
    pub(super) resolver: Arc<dyn AreaResolverPort>,
    pub(super) conditions: Arc<dyn ConditionCheckerPort>,
    pub(super) world: Arc<dyn WorldQueryPort>,
    pub(super) settings: GenerationSettings,
}

impl SpawnGenerationService {
    pub fn new(
        resolver: Arc<dyn AreaResolverPort>,
        conditions: Arc<dyn ConditionCheckerPort>,
        world: Arc<dyn WorldQueryPort>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            resolver,
            conditions,
            world,
            settings,
        }
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Generate every category for today
    ///
    /// Packs are mutable because generation may record existing object
    /// locations in their save state.
    #[instrument(skip(self, packs, rng), fields(season = %context.season, packs = packs.len()))]
    pub fn generate_day(
        &self,
        packs: &mut [SpawnPack],
        context: &DayContext,
        rng: &mut dyn RandomSource,
    ) -> DailySpawnPlan {
        let mut plan = DailySpawnPlan::new(context.season);

        for category in SpawnCategory::ALL {
            if let Err(e) = self.generate_category(category, packs, context, rng, &mut plan.batches)
            {
                error!(
                    category = %category,
                    "An error occurred while generating {} spawns. Some spawns might be missing: {:#}",
                    category,
                    e
                );
                plan.failed_categories.push(category);
            }
        }

        info!(
            plan_id = %plan.id,
            batches = plan.batches.len(),
            instances = plan.instance_count(),
            "Daily spawn generation complete"
        );
        plan
    }

    /// Run a single category pass, appending its batches to `out`
    ///
    /// On error, batches appended before the failure stay in `out`.
    pub fn generate_category(
        &self,
        category: SpawnCategory,
        packs: &mut [SpawnPack],
        context: &DayContext,
        rng: &mut dyn RandomSource,
        out: &mut Vec<LocationBatch>,
    ) -> Result<()> {
        match category {
            SpawnCategory::Forage => self.generate_forage(packs, context, rng, out),
            SpawnCategory::LargeObject => self.generate_large_objects(packs, context, rng, out),
            SpawnCategory::Ore => self.generate_ore(packs, context, rng, out),
            SpawnCategory::Monster => self.generate_monsters(packs, context, rng, out),
        }
    }

    /// Locations an area spawns into today, or `None` if it is skipped
    pub(super) fn prepare_area(
        &self,
        category: SpawnCategory,
        area: &SpawnArea,
        save: &SaveState,
        pack_source: &str,
    ) -> Result<Option<Vec<String>>> {
        trace!(
            area_id = %area.unique_area_id,
            map_name = %area.map_name,
            "Checking {} settings for area",
            category
        );

        let locations = self
            .resolver
            .resolve(&area.map_name)
            .with_context(|| format!("Failed to resolve map '{}'", area.map_name))?;
        if locations.is_empty() {
            debug!(
                area_id = %area.unique_area_id,
                "No map named '{}' could be found. Skipping this area.",
                area.map_name
            );
            return Ok(None);
        }

        let allowed = self
            .conditions
            .evaluate(area, save, pack_source)
            .with_context(|| {
                format!("Failed to check extra conditions for area '{}'", area.unique_area_id)
            })?;
        if !allowed {
            debug!(area_id = %area.unique_area_id, "Extra conditions prevent spawning. Skipping this area.");
            return Ok(None);
        }

        Ok(Some(locations))
    }

    /// Assign times to one location's drafts and record the batch
    #[allow(clippy::too_many_arguments)]
    pub(super) fn schedule_location(
        &self,
        category: SpawnCategory,
        pack_source: &str,
        area: &SpawnArea,
        location: String,
        candidates: Arc<[Candidate]>,
        drafts: Vec<SpawnDraft>,
        rng: &mut dyn RandomSource,
        out: &mut Vec<LocationBatch>,
    ) {
        let mut scheduler = TimeSlotScheduler::for_timing(area.spawn_timing.as_ref(), &self.settings);
        let days_until_expire = area
            .days_until_spawns_expire
            .unwrap_or_else(|| category.default_days_until_expire());

        let requested = drafts.len();
        let instances: Vec<ScheduledInstance> = scheduler
            .assign(drafts, rng)
            .into_iter()
            .map(|(draft, slot)| ScheduledInstance::from_draft(draft, slot, days_until_expire))
            .collect();

        if instances.len() < requested {
            debug!(
                area_id = %area.unique_area_id,
                location = %location,
                dropped = requested - instances.len(),
                "No spawn times left; remaining spawns dropped"
            );
        }

        out.push(LocationBatch {
            category,
            pack_source: pack_source.to_string(),
            area_id: area.unique_area_id.clone(),
            location,
            strict_tile_checking: area.strict_tile_checking,
            candidates,
            instances,
        });
    }
}

/// Build the selection table for an area's candidates
pub(super) fn weighted_table(area: &SpawnArea, candidates: &[Candidate]) -> Result<WeightedTable> {
    WeightedTable::from_candidates(candidates).map_err(|source| {
        GenerationError::Selection {
            area_id: area.unique_area_id.clone(),
            source,
        }
        .into()
    })
}

/// Draw `count` spawns, applying each candidate's chance and rolling its contents
///
/// Rejected draws still use up one of the `count` attempts.
pub(super) fn draw_spawns(
    count: u32,
    candidates: &[Candidate],
    table: &WeightedTable,
    rng: &mut dyn RandomSource,
) -> Vec<SpawnDraft> {
    let mut drafts = Vec::new();
    let mut skipped = 0u32;

    for _ in 0..count {
        let index = table.sample(rng);
        let candidate = &candidates[index];

        if !passes_spawn_chance(candidate.percent_chance_to_spawn, rng) {
            skipped += 1;
            continue;
        }

        let mut draft = SpawnDraft::new(index);
        draft.contents = roll_contents(candidate, rng);
        drafts.push(draft);
    }

    if skipped > 0 {
        trace!(skipped, "Spawns skipped due to spawn chance settings");
    }
    drafts
}
