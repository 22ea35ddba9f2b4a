//! Tile coordinates and placement strictness

use serde::{Deserialize, Serialize};

/// A tile position within a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl std::fmt::Display for TilePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Footprint of a placed entity, in tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    pub const SINGLE: Footprint = Footprint {
        width: 1,
        height: 1,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::SINGLE
    }
}

/// How strictly candidate tiles are checked before placement
///
/// Ordered from most permissive to strictest. Configuration values are read
/// case-insensitively; anything unrecognized means `Max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TileStrictness {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl Default for TileStrictness {
    fn default() -> Self {
        Self::Max
    }
}

impl std::fmt::Display for TileStrictness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileStrictness::None => write!(f, "none"),
            TileStrictness::Low => write!(f, "low"),
            TileStrictness::Medium => write!(f, "medium"),
            TileStrictness::High => write!(f, "high"),
            TileStrictness::Max => write!(f, "max"),
        }
    }
}

impl std::str::FromStr for TileStrictness {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(TileStrictness::None),
            "low" => Ok(TileStrictness::Low),
            "medium" => Ok(TileStrictness::Medium),
            "high" => Ok(TileStrictness::High),
            "max" | "maximum" | "" => Ok(TileStrictness::Max),
            _ => Err(anyhow::anyhow!("Invalid tile strictness: {}", s)),
        }
    }
}

impl From<String> for TileStrictness {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(TileStrictness::Max)
    }
}
