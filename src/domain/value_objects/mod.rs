//! Value objects - Immutable objects defined by their attributes

mod calendar;
mod ids;
mod settings;
mod tile;
mod time_slot;

pub use calendar::{DayContext, Season, Skill, SkillLevels};
pub use ids::*;
pub use settings::GenerationSettings;
pub use tile::{Footprint, TilePos, TileStrictness};
pub use time_slot::{TimeScale, TimeSlot};
