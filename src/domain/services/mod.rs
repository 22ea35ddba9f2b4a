//! Domain services - Pure generation and scheduling logic
//!
//! Nothing here touches the world or configuration files; every random
//! decision goes through an injected `RandomSource`.

mod random;
mod skill_chance_table;
mod slot_scheduler;
mod spawn_quantity;
mod tile_validity;
mod weighted_selection;

#[cfg(test)]
pub(crate) mod testing;

pub use random::RandomSource;
pub use skill_chance_table::{ChanceRamp, SkillChanceTable};
pub use slot_scheduler::TimeSlotScheduler;
pub use spawn_quantity::daily_spawn_count;
pub use tile_validity::{is_tile_valid, TileOccupancy};
pub use weighted_selection::{passes_spawn_chance, roll_contents, SelectionError, WeightedTable};
