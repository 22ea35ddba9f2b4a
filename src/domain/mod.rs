//! Domain layer - Spawn data and generation rules with no external dependencies
//!
//! This layer contains:
//! - Entities: spawn areas, candidates, save state, generated spawn plans
//! - Value Objects: seasons, skills, time slots, tiles, settings
//! - Domain Services: quantity, weighted selection, chance tables,
//!   time-slot scheduling and tile validity

pub mod entities;
pub mod services;
pub mod value_objects;
