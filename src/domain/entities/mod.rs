//! Domain entities - Spawn configuration and generated spawn records

mod candidate;
mod save_state;
mod spawn_area;
mod spawn_plan;

pub use candidate::{Candidate, MonsterType};
pub use save_state::{SaveState, SpawnPack};
pub use spawn_area::{
    ForageSettings, ForageSpawnArea, LargeObjectSettings, LargeObjectSpawnArea, MonsterSettings,
    MonsterSpawnArea, OreSettings, OreSpawnArea, SeasonalCandidates, SpawnArea, SpawnCategory,
    SpawnConfig, SpawnTiming,
};
pub use spawn_plan::{DailySpawnPlan, LocationBatch, MonsterState, ScheduledInstance, SpawnDraft};
