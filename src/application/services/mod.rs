//! Application services - Daily generation use cases
//!
//! `SpawnGenerationService` owns the ports and runs the category passes; each
//! pass lives in its own module as an `impl` block on the service.

mod forage_generation;
mod generation_service;
mod large_object_generation;
mod monster_generation;
mod ore_generation;

pub use generation_service::{GenerationError, SpawnGenerationService};
