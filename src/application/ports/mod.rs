//! Ports - Interfaces between generation and the outside world

pub mod outbound;
