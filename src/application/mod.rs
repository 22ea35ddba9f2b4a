//! Application layer - Daily generation use cases
//!
//! This layer contains:
//! - Ports: interfaces to the area resolver, condition checker and world
//! - Services: the spawn generation service and its category passes

pub mod ports;
pub mod services;
