//! Daily spawn quantity
//!
//! A uniform base count in `[min, max]`, plus a bonus of
//! `percent_per_level * level` percent of that base.

use super::RandomSource;

/// How many spawns one location receives today
///
/// The bound pair is reordered if inverted. The result is never negative.
pub fn daily_spawn_count(
    min: u32,
    max: u32,
    percent_extra_per_level: f64,
    level: u32,
    rng: &mut dyn RandomSource,
) -> u32 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    let span = (high - low).saturating_add(1);
    let base = low + rng.next_int(span).min(high - low);

    let bonus = (f64::from(base) * percent_extra_per_level * f64::from(level) / 100.0).round();
    // float-to-int casts saturate, so this also floors at zero
    (f64::from(base) + bonus).max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::testing::ScriptedRandom;

    #[test]
    fn test_zero_range_is_zero() {
        let mut rng = ScriptedRandom::new([0]);
        assert_eq!(daily_spawn_count(0, 0, 50.0, 10, &mut rng), 0);
    }

    #[test]
    fn test_bonus_scales_base() {
        // base = 2 + 2 = 4, bonus = 4 * 10% * 5 = 2
        let mut rng = ScriptedRandom::new([2]);
        assert_eq!(daily_spawn_count(2, 6, 10.0, 5, &mut rng), 6);
    }

    #[test]
    fn test_bonus_rounds_half_away_from_zero() {
        // base = 5, bonus = 5 * 10% * 1 = 0.5 -> 1
        let mut rng = ScriptedRandom::new([0]);
        assert_eq!(daily_spawn_count(5, 5, 10.0, 1, &mut rng), 6);
        // base = 3, bonus = 0.3 -> 0
        let mut rng = ScriptedRandom::new([0]);
        assert_eq!(daily_spawn_count(3, 3, 10.0, 1, &mut rng), 3);
    }

    #[test]
    fn test_no_bonus_stays_in_range() {
        let mut rng = ScriptedRandom::new([0, 3, 1]);
        assert_eq!(daily_spawn_count(1, 4, 0.0, 10, &mut rng), 1);
        assert_eq!(daily_spawn_count(1, 4, 0.0, 10, &mut rng), 4);
        assert_eq!(daily_spawn_count(4, 1, 0.0, 10, &mut rng), 2);
    }

    #[test]
    fn test_draw_bound_covers_inclusive_range() {
        let mut rng = ScriptedRandom::new([0]);
        daily_spawn_count(3, 7, 0.0, 0, &mut rng);
        assert_eq!(rng.bounds(), &[5]);
    }
}
