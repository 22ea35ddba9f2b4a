//! SpawnBldr Engine - Daily spawn generation and scheduling
//!
//! Once per simulated day the engine decides, for every configured spawn area:
//! - how many forage items, large objects, ores and monsters appear
//! - which kind each one is
//! - at which time slot it becomes active
//!
//! and offers the tile validity check used when the instances are placed.
//!
//! The crate follows a ports-and-adapters layout: `domain` holds the pure
//! algorithms and data, `application` runs the daily passes against its ports,
//! and `infrastructure` provides file-backed adapters.

pub mod application;
pub mod domain;
pub mod infrastructure;
