//! Outbound ports - Interfaces that generation requires from external systems

mod world_port;

pub use crate::domain::services::RandomSource;
pub use world_port::{AreaResolverPort, ConditionCheckerPort, PermissiveConditions, WorldQueryPort};
