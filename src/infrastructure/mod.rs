//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Config: Application configuration
//! - Spawn config: Loading and normalizing spawn configuration files
//! - Random: `rand`-backed random source
//! - Static world: In-memory world description used by the binary and tests

pub mod config;
pub mod random;
pub mod spawn_config;
pub mod static_world;
