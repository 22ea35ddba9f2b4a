//! Skill-scaled chance tables
//!
//! Each kind ramps linearly from its starting chance at the level where it
//! unlocks to its "max level" chance at a reference level. The resulting
//! percentages double as selection weights.

use std::collections::BTreeMap;

use crate::domain::entities::Candidate;

/// Chance ramp for one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChanceRamp {
    pub level_required: u32,
    pub start_chance: u32,
    pub max_level_chance: u32,
}

impl ChanceRamp {
    /// Percent chance at `level`, clamped into `[0, 100]`
    pub fn chance_at(&self, level: u32, reference_level: u32) -> u32 {
        if level < self.level_required {
            return 0;
        }
        let chance = if level >= reference_level || self.level_required >= reference_level {
            f64::from(self.max_level_chance)
        } else {
            let progress = f64::from(level - self.level_required)
                / f64::from(reference_level - self.level_required);
            let start = f64::from(self.start_chance);
            start + (f64::from(self.max_level_chance) - start) * progress
        };
        chance.round().clamp(0.0, 100.0) as u32
    }
}

/// Kinds obtainable at the current level, with their percent chances
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillChanceTable {
    entries: Vec<(String, u32)>,
}

impl SkillChanceTable {
    /// Build the table from per-kind maps
    ///
    /// Kinds are taken from `level_required`. A kind missing from
    /// `start_chance` starts at 0; a kind missing from `max_level_chance`
    /// keeps its starting chance. Kinds at 0% are left out.
    pub fn build(
        level_required: &BTreeMap<String, u32>,
        start_chance: &BTreeMap<String, u32>,
        max_level_chance: &BTreeMap<String, u32>,
        level: u32,
        reference_level: u32,
    ) -> Self {
        let entries = level_required
            .iter()
            .filter_map(|(kind, required)| {
                let start = start_chance.get(kind).copied().unwrap_or(0);
                let ramp = ChanceRamp {
                    level_required: *required,
                    start_chance: start,
                    max_level_chance: max_level_chance.get(kind).copied().unwrap_or(start),
                };
                let chance = ramp.chance_at(level, reference_level);
                (chance > 0).then(|| (kind.clone(), chance))
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    pub fn chance_of(&self, kind: &str) -> u32 {
        self.entries
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, chance)| *chance)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Candidates weighted by their chance, in table order
    pub fn to_candidates(&self) -> Vec<Candidate> {
        self.entries
            .iter()
            .map(|(kind, chance)| Candidate::new(kind.clone()).with_weight(*chance))
            .collect()
    }
}
