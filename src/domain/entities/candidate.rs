//! Candidate entity - One spawnable kind within a category
//!
//! Candidates are immutable value data. Selection never mutates a candidate;
//! a generated instance refers to it by index and carries its own state.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A spawnable kind with its selection attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CandidateRepr", rename_all = "PascalCase")]
pub struct Candidate {
    /// Stable identifier of the kind (item id, object id, ore name, monster name)
    pub id: String,
    /// Relative selection weight; absent means 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spawn_weight: Option<u32>,
    /// Independent chance (0-100) evaluated after selection; absent means always
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_chance_to_spawn: Option<f64>,
    /// Nested items, each with its own independent chance
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contents: Vec<Candidate>,
    /// Category-specific data, e.g. monster behavior parameters
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

impl Candidate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            spawn_weight: None,
            percent_chance_to_spawn: None,
            contents: Vec::new(),
            settings: Map::new(),
        }
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.spawn_weight = Some(weight);
        self
    }

    pub fn with_chance(mut self, percent: f64) -> Self {
        self.percent_chance_to_spawn = Some(percent);
        self
    }

    pub fn with_content(mut self, content: Candidate) -> Self {
        self.contents.push(content);
        self
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: Value) -> Self {
        self.settings.insert(key.into(), value);
        self
    }

    /// Effective selection weight, never below 1
    pub fn weight(&self) -> u32 {
        self.spawn_weight.unwrap_or(1).max(1)
    }
}

/// Accepted spellings of a candidate in spawn configuration files
///
/// Plain item lists may hold bare ids (`"Quartz"`, `16`); richer entries are
/// objects with optional weight, chance and contents.
#[derive(Deserialize)]
#[serde(untagged)]
enum CandidateRepr {
    Name(String),
    Number(i64),
    Detailed(DetailedCandidate),
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DetailedCandidate {
    #[serde(alias = "ID", alias = "Name")]
    id: Value,
    #[serde(default)]
    spawn_weight: Option<u32>,
    #[serde(default)]
    percent_chance_to_spawn: Option<f64>,
    #[serde(default)]
    contents: Vec<Candidate>,
    #[serde(flatten)]
    settings: Map<String, Value>,
}

impl From<CandidateRepr> for Candidate {
    fn from(repr: CandidateRepr) -> Self {
        match repr {
            CandidateRepr::Name(name) => Candidate::new(name),
            CandidateRepr::Number(number) => Candidate::new(number.to_string()),
            CandidateRepr::Detailed(detailed) => Candidate {
                id: match detailed.id {
                    Value::String(s) => s,
                    other => other.to_string(),
                },
                spawn_weight: detailed.spawn_weight,
                percent_chance_to_spawn: detailed.percent_chance_to_spawn,
                contents: detailed.contents,
                settings: detailed.settings,
            },
        }
    }
}

/// A monster type as written in spawn configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonsterType {
    pub monster_name: String,
    /// Behavior parameters; `SpawnWeight` here sets the selection weight
    #[serde(default)]
    pub settings: Map<String, Value>,
}

impl MonsterType {
    pub fn new(monster_name: impl Into<String>) -> Self {
        Self {
            monster_name: monster_name.into(),
            settings: Map::new(),
        }
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: Value) -> Self {
        self.settings.insert(key.into(), value);
        self
    }
}
