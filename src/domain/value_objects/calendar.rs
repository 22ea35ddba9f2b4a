//! Calendar and progression value objects
//!
//! A day's generation is keyed by the current season and by the player's
//! skill levels, which scale both quantities and ore chances.

use serde::{Deserialize, Serialize};

/// Season of the simulated year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
            Season::Fall => write!(f, "fall"),
            Season::Winter => write!(f, "winter"),
        }
    }
}

impl std::str::FromStr for Season {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            _ => Err(anyhow::anyhow!("Invalid season: {}", s)),
        }
    }
}

impl TryFrom<String> for Season {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Skill used as a progression metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Skill {
    Farming,
    Fishing,
    Foraging,
    Mining,
    Combat,
}

impl Default for Skill {
    fn default() -> Self {
        Self::Foraging
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Skill::Farming => write!(f, "Farming"),
            Skill::Fishing => write!(f, "Fishing"),
            Skill::Foraging => write!(f, "Foraging"),
            Skill::Mining => write!(f, "Mining"),
            Skill::Combat => write!(f, "Combat"),
        }
    }
}

impl std::str::FromStr for Skill {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "farming" => Ok(Skill::Farming),
            "fishing" => Ok(Skill::Fishing),
            "foraging" => Ok(Skill::Foraging),
            "mining" => Ok(Skill::Mining),
            "combat" => Ok(Skill::Combat),
            _ => Err(anyhow::anyhow!("Invalid skill: {}", s)),
        }
    }
}

impl TryFrom<String> for Skill {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Current level of every skill, as seen by the generation passes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevels {
    #[serde(default)]
    pub farming: u32,
    #[serde(default)]
    pub fishing: u32,
    #[serde(default)]
    pub foraging: u32,
    #[serde(default)]
    pub mining: u32,
    #[serde(default)]
    pub combat: u32,
}

impl SkillLevels {
    pub fn level(&self, skill: Skill) -> u32 {
        match skill {
            Skill::Farming => self.farming,
            Skill::Fishing => self.fishing,
            Skill::Foraging => self.foraging,
            Skill::Mining => self.mining,
            Skill::Combat => self.combat,
        }
    }
}

/// Everything about "today" that the generation passes read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayContext {
    pub season: Season,
    pub skills: SkillLevels,
}

impl DayContext {
    pub fn new(season: Season, skills: SkillLevels) -> Self {
        Self { season, skills }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parsing() {
        assert_eq!("Spring".parse::<Season>().unwrap(), Season::Spring);
        assert_eq!(" winter ".parse::<Season>().unwrap(), Season::Winter);
        assert_eq!("autumn".parse::<Season>().unwrap(), Season::Fall);
        assert!("monsoon".parse::<Season>().is_err());
    }

    #[test]
    fn test_skill_level_lookup() {
        let skills = SkillLevels {
            mining: 7,
            foraging: 3,
            ..SkillLevels::default()
        };
        assert_eq!(skills.level(Skill::Mining), 7);
        assert_eq!(skills.level(Skill::Foraging), 3);
        assert_eq!(skills.level(Skill::Combat), 0);
        assert_eq!("MINING".parse::<Skill>().unwrap(), Skill::Mining);
    }

    #[test]
    fn test_deserialize_ignores_case() {
        let season: Season = serde_json::from_str("\"Autumn\"").unwrap();
        assert_eq!(season, Season::Fall);
        let skill: Skill = serde_json::from_str("\"foraging\"").unwrap();
        assert_eq!(skill, Skill::Foraging);
        assert!(serde_json::from_str::<Skill>("\"cooking\"").is_err());

        // serialized names are unchanged
        assert_eq!(serde_json::to_string(&Season::Fall).unwrap(), "\"fall\"");
        assert_eq!(serde_json::to_string(&Skill::Mining).unwrap(), "\"Mining\"");
    }
}
