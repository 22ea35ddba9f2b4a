//! Generation settings value object
//!
//! Tunables that are not part of any spawn area but shape every pass:
//! the level at which ore chances reach their "max level" value, the slot
//! used when an area has no timing window, and the time scale.

use serde::{Deserialize, Serialize};

use super::{TimeScale, TimeSlot};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationSettings {
    /// Progression level at which `LevelTenSpawnChance` applies in full
    pub reference_level: u32,
    /// Slot assigned to every spawn of an area without timing settings
    pub default_slot: TimeSlot,
    pub time_scale: TimeScale,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            reference_level: 10,
            default_slot: TimeSlot(600),
            time_scale: TimeScale::Clock,
        }
    }
}
