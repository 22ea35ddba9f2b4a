//! Discretized time-of-day values used to schedule spawns

use serde::{Deserialize, Serialize};

/// A point in the daily time window that can host spawns
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSlot(pub u32);

impl TimeSlot {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TimeSlot {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// How consecutive slots relate to each other
///
/// `Clock` is the 24-hour `HHMM` encoding with ten-minute steps, so the slot
/// after `650` is `700`. `Linear` is an evenly spaced scalar with a fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimeScale {
    Clock,
    Linear { step: u32 },
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::Clock
    }
}

impl TimeScale {
    const CLOCK_STEP_MINUTES: u32 = 10;

    /// Size of one step, in the unit used by `minimum_time_between_spawns`
    pub fn step(&self) -> u32 {
        match self {
            Self::Clock => Self::CLOCK_STEP_MINUTES,
            Self::Linear { step } => (*step).max(1),
        }
    }

    pub fn next(&self, slot: TimeSlot) -> TimeSlot {
        match self {
            Self::Clock => {
                let minutes = slot.0 % 100 + Self::CLOCK_STEP_MINUTES;
                if minutes >= 60 {
                    TimeSlot((slot.0 / 100 + 1) * 100 + (minutes - 60))
                } else {
                    TimeSlot(slot.0 + Self::CLOCK_STEP_MINUTES)
                }
            }
            Self::Linear { .. } => TimeSlot(slot.0.saturating_add(self.step())),
        }
    }

    pub fn previous(&self, slot: TimeSlot) -> TimeSlot {
        match self {
            Self::Clock => {
                let minutes = slot.0 % 100;
                if minutes >= Self::CLOCK_STEP_MINUTES {
                    TimeSlot(slot.0 - Self::CLOCK_STEP_MINUTES)
                } else if slot.0 >= 100 {
                    TimeSlot((slot.0 / 100 - 1) * 100 + minutes + 60 - Self::CLOCK_STEP_MINUTES)
                } else {
                    TimeSlot(0)
                }
            }
            Self::Linear { .. } => TimeSlot(slot.0.saturating_sub(self.step())),
        }
    }

    /// Every slot from `start` to `end`, both inclusive
    pub fn slots_between(&self, start: TimeSlot, end: TimeSlot) -> Vec<TimeSlot> {
        let mut slots = Vec::new();
        let mut current = start;
        while current <= end {
            slots.push(current);
            let next = self.next(current);
            if next == current {
                break;
            }
            current = next;
        }
        slots
    }

    /// Number of neighboring steps on each side that fall strictly inside `min_gap`
    pub fn gap_steps(&self, min_gap: u32) -> u32 {
        let step = self.step();
        if min_gap <= step {
            0
        } else {
            (min_gap - step) / step
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_rolls_over_the_hour() {
        let scale = TimeScale::Clock;
        assert_eq!(scale.next(TimeSlot(650)), TimeSlot(700));
        assert_eq!(scale.next(TimeSlot(600)), TimeSlot(610));
        assert_eq!(scale.previous(TimeSlot(700)), TimeSlot(650));
        assert_eq!(scale.previous(TimeSlot(610)), TimeSlot(600));
    }

    #[test]
    fn test_clock_window_enumeration() {
        let slots = TimeScale::Clock.slots_between(TimeSlot(600), TimeSlot(700));
        let values: Vec<u32> = slots.iter().map(TimeSlot::value).collect();
        assert_eq!(values, vec![600, 610, 620, 630, 640, 650, 700]);
    }

    #[test]
    fn test_linear_window_enumeration() {
        let scale = TimeScale::Linear { step: 10 };
        let slots = scale.slots_between(TimeSlot(100), TimeSlot(200));
        assert_eq!(slots.len(), 11);
        assert_eq!(slots.first(), Some(&TimeSlot(100)));
        assert_eq!(slots.last(), Some(&TimeSlot(200)));
    }

    #[test]
    fn test_gap_steps() {
        let scale = TimeScale::Linear { step: 10 };
        assert_eq!(scale.gap_steps(10), 0);
        assert_eq!(scale.gap_steps(20), 1);
        assert_eq!(scale.gap_steps(30), 2);
        assert_eq!(scale.gap_steps(25), 1);
        assert_eq!(TimeScale::Clock.gap_steps(60), 5);
    }
}
