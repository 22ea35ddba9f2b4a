//! Weighted selection and independent spawn chances
//!
//! Selection is a cumulative-weight walk: draw `r` in `[0, total)`, then walk
//! the list subtracting weights until `r` falls inside one. The chance gate is
//! evaluated afterwards and independently of weight.

use super::RandomSource;
use crate::domain::entities::Candidate;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Cannot select from an empty candidate list")]
    Empty,

    #[error("Total spawn weight of {0} candidates exceeds the supported range")]
    WeightOverflow(usize),
}

/// Precomputed weights for repeated sampling from one candidate list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedTable {
    weights: Vec<u32>,
    total: u32,
}

impl WeightedTable {
    pub fn new(weights: Vec<u32>) -> Result<Self, SelectionError> {
        if weights.is_empty() {
            return Err(SelectionError::Empty);
        }
        let total = weights
            .iter()
            .try_fold(0u32, |sum, weight| sum.checked_add(*weight))
            .ok_or(SelectionError::WeightOverflow(weights.len()))?;
        if total == 0 {
            return Err(SelectionError::Empty);
        }
        Ok(Self { weights, total })
    }

    pub fn from_candidates(candidates: &[Candidate]) -> Result<Self, SelectionError> {
        Self::new(candidates.iter().map(Candidate::weight).collect())
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Draw one index; consumes exactly one draw
    pub fn sample(&self, rng: &mut dyn RandomSource) -> usize {
        let mut remaining = rng.next_int(self.total);
        for (index, weight) in self.weights.iter().enumerate() {
            if remaining < *weight {
                return index;
            }
            remaining -= weight;
        }
        self.weights.len() - 1
    }
}

/// Whether a selected candidate passes its optional percent chance
///
/// Absent chance always passes without drawing. Otherwise draws once in
/// `[0, 100)` and passes when the draw is below the chance.
pub fn passes_spawn_chance(chance: Option<f64>, rng: &mut dyn RandomSource) -> bool {
    match chance {
        None => true,
        Some(chance) => f64::from(rng.next_int(100)) < chance,
    }
}

/// Indices of a candidate's contents that pass their own chances
///
/// Contents are rolled last-to-first; the result is in list order.
pub fn roll_contents(candidate: &Candidate, rng: &mut dyn RandomSource) -> Vec<usize> {
    let mut accepted: Vec<usize> = (0..candidate.contents.len())
        .rev()
        .filter(|index| {
            passes_spawn_chance(candidate.contents[*index].percent_chance_to_spawn, &mut *rng)
        })
        .collect();
    accepted.reverse();
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::testing::ScriptedRandom;

    #[test]
    fn test_cumulative_walk() {
        let table = WeightedTable::new(vec![2, 1, 3]).unwrap();
        assert_eq!(table.total(), 6);

        let mut rng = ScriptedRandom::new([0, 1, 2, 3, 5]);
        let picks: Vec<usize> = (0..5).map(|_| table.sample(&mut rng)).collect();
        assert_eq!(picks, vec![0, 0, 1, 2, 2]);
        assert!(rng.bounds().iter().all(|b| *b == 6));
    }

    #[test]
    fn test_missing_weight_counts_as_one() {
        let candidates = vec![Candidate::new("a"), Candidate::new("b").with_weight(4)];
        let table = WeightedTable::from_candidates(&candidates).unwrap();
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn test_empty_and_overflow_are_rejected() {
        assert_eq!(WeightedTable::new(Vec::new()), Err(SelectionError::Empty));
        assert_eq!(
            WeightedTable::new(vec![u32::MAX, 1]),
            Err(SelectionError::WeightOverflow(2))
        );
    }

    #[test]
    fn test_chance_gate_bounds() {
        let mut rng = ScriptedRandom::new([0, 99, 49, 50]);
        assert!(!passes_spawn_chance(Some(0.0), &mut rng));
        assert!(passes_spawn_chance(Some(100.0), &mut rng));
        assert!(passes_spawn_chance(Some(50.0), &mut rng));
        assert!(!passes_spawn_chance(Some(50.0), &mut rng));
    }

    #[test]
    fn test_absent_chance_does_not_draw() {
        let mut rng = ScriptedRandom::new([]);
        assert!(passes_spawn_chance(None, &mut rng));
        assert!(rng.bounds().is_empty());
    }

    #[test]
    fn test_contents_rolled_independently_in_reverse() {
        let chest = Candidate::new("chest")
            .with_content(Candidate::new("gem").with_chance(10.0))
            .with_content(Candidate::new("coal"))
            .with_content(Candidate::new("gold").with_chance(90.0));

        // gold rolls first (draw 5 passes), coal has no chance, gem rolls 50 and fails
        let mut rng = ScriptedRandom::new([5, 50]);
        assert_eq!(roll_contents(&chest, &mut rng), vec![1, 2]);
        assert_eq!(rng.remaining(), 0);
    }
}
