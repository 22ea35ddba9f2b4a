//! Spawn plan entities - The output of a day's generation
//!
//! A plan groups scheduled instances by location. Each batch owns the
//! immutable candidate table its instances index into; per-instance data
//! (accepted contents, monster state, the tile chosen at placement time)
//! lives on the instance itself.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Candidate, MonsterType, SpawnCategory};
use crate::domain::value_objects::{
    InstanceId, PlanId, Season, TilePos, TileStrictness, TimeSlot,
};

/// Mutable per-instance copy of a monster type's behavior data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterState {
    pub monster_name: String,
    pub settings: Map<String, Value>,
}

impl From<&MonsterType> for MonsterState {
    fn from(monster: &MonsterType) -> Self {
        Self {
            monster_name: monster.monster_name.clone(),
            settings: monster.settings.clone(),
        }
    }
}

/// A kind-resolved spawn that has not been given a time yet
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnDraft {
    /// Index into the batch's candidate table
    pub candidate: usize,
    /// Indices into the candidate's `contents` that passed their chance
    pub contents: Vec<usize>,
    pub monster: Option<MonsterState>,
}

impl SpawnDraft {
    pub fn new(candidate: usize) -> Self {
        Self {
            candidate,
            contents: Vec::new(),
            monster: None,
        }
    }
}

/// One generated, scheduled, not-yet-placed spawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledInstance {
    pub id: InstanceId,
    pub candidate: usize,
    pub contents: Vec<usize>,
    pub slot: TimeSlot,
    /// Days before the placed entity is removed; 0 never expires
    pub days_until_expire: u32,
    /// Filled in by placement
    pub tile: Option<TilePos>,
    pub monster: Option<MonsterState>,
}

impl ScheduledInstance {
    pub fn from_draft(draft: SpawnDraft, slot: TimeSlot, days_until_expire: u32) -> Self {
        Self {
            id: InstanceId::new(),
            candidate: draft.candidate,
            contents: draft.contents,
            slot,
            days_until_expire,
            tile: None,
            monster: draft.monster,
        }
    }
}

/// All instances generated for one area at one location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationBatch {
    pub category: SpawnCategory,
    pub pack_source: String,
    pub area_id: String,
    pub location: String,
    pub strict_tile_checking: TileStrictness,
    pub candidates: Arc<[Candidate]>,
    pub instances: Vec<ScheduledInstance>,
}

impl LocationBatch {
    pub fn candidate_of(&self, instance: &ScheduledInstance) -> Option<&Candidate> {
        self.candidates.get(instance.candidate)
    }

    /// Accepted contents of an instance, resolved against the candidate table
    pub fn contents_of<'a>(&'a self, instance: &'a ScheduledInstance) -> Vec<&'a Candidate> {
        self.candidate_of(instance)
            .map(|candidate| {
                instance
                    .contents
                    .iter()
                    .filter_map(|index| candidate.contents.get(*index))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// The result of one simulated day's generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySpawnPlan {
    pub id: PlanId,
    pub generated_at: DateTime<Utc>,
    pub season: Season,
    pub batches: Vec<LocationBatch>,
    /// Categories whose pass aborted on an unexpected error
    pub failed_categories: Vec<SpawnCategory>,
}

impl DailySpawnPlan {
    pub fn new(season: Season) -> Self {
        Self {
            id: PlanId::new(),
            generated_at: Utc::now(),
            season,
            batches: Vec::new(),
            failed_categories: Vec::new(),
        }
    }

    pub fn instance_count(&self) -> usize {
        self.batches.iter().map(|b| b.instances.len()).sum()
    }

    pub fn batches_for(&self, category: SpawnCategory) -> impl Iterator<Item = &LocationBatch> {
        self.batches.iter().filter(move |b| b.category == category)
    }
}
