use std::collections::BTreeMap;

use proptest::prelude::*;
use spawnbldr_engine::domain::entities::Candidate;
use spawnbldr_engine::domain::services::{
    daily_spawn_count, is_tile_valid, ChanceRamp, TimeSlotScheduler, WeightedTable,
};
use spawnbldr_engine::domain::value_objects::{
    Footprint, TilePos, TileStrictness, TimeScale, TimeSlot,
};
use spawnbldr_engine::infrastructure::random::RngSource;
use spawnbldr_engine::infrastructure::static_world::{LocationTiles, StaticWorld};

const STRICTNESS: [TileStrictness; 5] = [
    TileStrictness::None,
    TileStrictness::Low,
    TileStrictness::Medium,
    TileStrictness::High,
    TileStrictness::Max,
];

proptest! {
    #[test]
    fn property_quantity_stays_in_scaled_range(
        min in 0_u32..50,
        extra in 0_u32..50,
        percent in 0.0_f64..25.0,
        level in 0_u32..15,
        seed in any::<u64>(),
    ) {
        let max = min + extra;
        let mut rng = RngSource::seeded(seed);
        let count = daily_spawn_count(min, max, percent, level, &mut rng);

        let ceiling = max + (f64::from(max) * percent * f64::from(level) / 100.0).round() as u32;
        prop_assert!(count >= min);
        prop_assert!(count <= ceiling);

        // inverted bounds give the same distribution support
        let swapped = daily_spawn_count(max, min, 0.0, 0, &mut rng);
        prop_assert!((min..=max).contains(&swapped));
    }

    #[test]
    fn property_selection_frequency_tracks_weights(
        weights in prop::collection::vec(1_u32..6, 2..5),
        seed in any::<u64>(),
    ) {
        let candidates: Vec<Candidate> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| Candidate::new(format!("kind{i}")).with_weight(*w))
            .collect();
        let table = WeightedTable::from_candidates(&candidates).unwrap();
        let mut rng = RngSource::seeded(seed);

        let draws = 4000;
        let mut hits = vec![0_u32; weights.len()];
        for _ in 0..draws {
            hits[table.sample(&mut rng)] += 1;
        }

        let total: u32 = weights.iter().sum();
        for (weight, hit) in weights.iter().zip(&hits) {
            let expected = f64::from(*weight) / f64::from(total);
            let observed = f64::from(*hit) / f64::from(draws);
            prop_assert!((expected - observed).abs() < 0.05, "expected {expected}, observed {observed}");
        }
    }

    #[test]
    fn property_chance_ramp_is_monotone_between_start_and_max(
        required in 0_u32..12,
        start in 0_u32..=100,
        rise in 0_u32..=100,
        reference in 1_u32..15,
    ) {
        let ramp = ChanceRamp {
            level_required: required,
            start_chance: start,
            max_level_chance: (start + rise).min(100),
        };

        let mut previous = 0;
        for level in 0..20 {
            let chance = ramp.chance_at(level, reference);
            prop_assert!(chance >= previous, "chance fell at level {level}");
            prop_assert!(chance <= 100);
            if level < required {
                prop_assert_eq!(chance, 0);
            }
            previous = chance;
        }
        prop_assert_eq!(ramp.chance_at(required.max(reference), reference), ramp.max_level_chance);
    }

    #[test]
    fn property_scheduler_respects_capacity(
        slots in 1_u32..20,
        capacity in 1_u32..4,
        requested in 0_usize..80,
        seed in any::<u64>(),
    ) {
        let scale = TimeScale::Linear { step: 10 };
        let end = TimeSlot(100 + (slots - 1) * 10);
        let mut scheduler = TimeSlotScheduler::windowed(scale, TimeSlot(100), end, Some(capacity), None);
        let mut rng = RngSource::seeded(seed);

        let assigned = scheduler.assign((0..requested).collect(), &mut rng);
        let mut per_slot: BTreeMap<TimeSlot, u32> = BTreeMap::new();
        for (_, slot) in &assigned {
            *per_slot.entry(*slot).or_insert(0) += 1;
        }

        prop_assert!(per_slot.values().all(|count| *count <= capacity));
        prop_assert_eq!(assigned.len(), requested.min((slots * capacity) as usize));
        // items keep their order
        prop_assert!(assigned.iter().enumerate().all(|(i, (item, _))| i == *item));
    }

    #[test]
    fn property_scheduler_respects_min_gap(
        gap_steps in 2_u32..6,
        requested in 1_usize..40,
        seed in any::<u64>(),
    ) {
        let scale = TimeScale::Linear { step: 10 };
        let gap = gap_steps * 10;
        let mut scheduler =
            TimeSlotScheduler::windowed(scale, TimeSlot(0), TimeSlot(300), None, Some(gap));
        let mut rng = RngSource::seeded(seed);

        let assigned = scheduler.assign(vec![(); requested], &mut rng);
        prop_assert_eq!(assigned.len(), requested);

        let mut occupied: Vec<u32> = assigned.iter().map(|(_, slot)| slot.0).collect();
        occupied.sort_unstable();
        occupied.dedup();
        for pair in occupied.windows(2) {
            prop_assert!(pair[1] - pair[0] >= gap);
        }
    }

    #[test]
    fn property_stricter_checking_never_accepts_more(
        flags in prop::collection::vec((any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()), 16),
        x in 0_i32..3,
        y in 0_i32..3,
        width in 0_u32..3,
        height in 0_u32..3,
    ) {
        let mut tiles = LocationTiles::default();
        for (i, (object, occupied, no_place, no_spawn)) in flags.iter().enumerate() {
            let tile = TilePos::new(i as i32 % 4, i as i32 / 4);
            if *object { tiles = tiles.with_object(tile); }
            if *occupied { tiles = tiles.with_occupied(tile); }
            if *no_place { tiles = tiles.with_no_place(tile); }
            if *no_spawn { tiles = tiles.with_no_spawn(tile); }
        }
        let world = StaticWorld::new().with_location("Farm", tiles);
        let footprint = Footprint::new(width, height);

        let verdicts: Vec<bool> = STRICTNESS
            .iter()
            .map(|s| is_tile_valid(&world, "Farm", TilePos::new(x, y), footprint, *s))
            .collect();

        prop_assert!(verdicts[0]);
        for pair in verdicts.windows(2) {
            prop_assert!(pair[0] || !pair[1], "stricter level accepted a tile the looser one rejected");
        }
    }
}
