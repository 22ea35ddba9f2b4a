//! Time-slot assignment for a batch of spawns
//!
//! Slots are drawn uniformly from an eligible set that shrinks as spawns are
//! assigned. A slot that reaches `maximum_simultaneous_spawns` leaves the set.
//! Otherwise, when `minimum_time_between_spawns` exceeds one step, the other
//! slots closer than that gap leave the set while the drawn slot stays.
//!
//! The two constraints are checked in that order and only one applies per
//! draw: a slot that just reached capacity does not prune its neighbors.

use std::collections::BTreeMap;

use super::RandomSource;
use crate::domain::entities::SpawnTiming;
use crate::domain::value_objects::{GenerationSettings, TimeScale, TimeSlot};

#[derive(Debug, Clone)]
pub struct TimeSlotScheduler {
    scale: TimeScale,
    eligible: Vec<TimeSlot>,
    occupancy: BTreeMap<TimeSlot, u32>,
    max_simultaneous: Option<u32>,
    min_gap: Option<u32>,
}

impl TimeSlotScheduler {
    /// Every spawn lands on one fixed slot
    pub fn fixed(slot: TimeSlot) -> Self {
        Self {
            scale: TimeScale::default(),
            eligible: vec![slot],
            occupancy: BTreeMap::new(),
            max_simultaneous: None,
            min_gap: None,
        }
    }

    /// Spawns spread over `[start, end]`, both inclusive
    ///
    /// A capacity of 0 is treated as 1: every slot still takes one spawn.
    pub fn windowed(
        scale: TimeScale,
        start: TimeSlot,
        end: TimeSlot,
        max_simultaneous: Option<u32>,
        min_gap: Option<u32>,
    ) -> Self {
        Self {
            scale,
            eligible: scale.slots_between(start, end),
            occupancy: BTreeMap::new(),
            max_simultaneous: max_simultaneous.map(|max| max.max(1)),
            min_gap,
        }
    }

    /// Scheduler for an area's optional timing settings
    pub fn for_timing(timing: Option<&SpawnTiming>, settings: &GenerationSettings) -> Self {
        match timing {
            None => Self::fixed(settings.default_slot),
            Some(timing) => Self::windowed(
                settings.time_scale,
                timing.start_time,
                timing.end_time,
                timing.maximum_simultaneous_spawns,
                timing.minimum_time_between_spawns,
            ),
        }
    }

    pub fn eligible(&self) -> &[TimeSlot] {
        &self.eligible
    }

    pub fn occupancy(&self) -> &BTreeMap<TimeSlot, u32> {
        &self.occupancy
    }

    pub fn is_exhausted(&self) -> bool {
        self.eligible.is_empty()
    }

    /// Assign the next spawn a slot, or `None` once no slot is eligible
    pub fn next_slot(&mut self, rng: &mut dyn RandomSource) -> Option<TimeSlot> {
        if self.eligible.is_empty() {
            return None;
        }

        let len = u32::try_from(self.eligible.len()).unwrap_or(u32::MAX);
        let index = (rng.next_int(len) as usize).min(self.eligible.len() - 1);
        let slot = self.eligible[index];
        let count = self.occupancy.entry(slot).or_insert(0);
        *count += 1;

        if self.max_simultaneous.is_some_and(|max| *count >= max) {
            self.eligible.remove(index);
        } else if let Some(gap) = self.min_gap.filter(|gap| *gap > self.scale.step()) {
            let steps = self.scale.gap_steps(gap);
            let (mut earliest, mut latest) = (slot, slot);
            for _ in 0..steps {
                earliest = self.scale.previous(earliest);
                latest = self.scale.next(latest);
            }
            self.eligible
                .retain(|other| *other == slot || *other < earliest || *other > latest);
        }

        Some(slot)
    }

    /// Assign slots to items in order; items left once slots run out are dropped
    pub fn assign<T>(&mut self, items: Vec<T>, rng: &mut dyn RandomSource) -> Vec<(T, TimeSlot)> {
        let mut assigned = Vec::with_capacity(items.len());
        for item in items {
            match self.next_slot(rng) {
                Some(slot) => assigned.push((item, slot)),
                None => break,
            }
        }
        assigned
    }
}
