//! Test doubles for the domain services

use std::collections::VecDeque;

use super::RandomSource;

/// Replays a fixed sequence of draws and records the bounds it was asked for
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<u32>,
    bounds: Vec<u32>,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            bounds: Vec::new(),
        }
    }

    pub fn bounds(&self) -> &[u32] {
        &self.bounds
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, bound_exclusive: u32) -> u32 {
        self.bounds.push(bound_exclusive);
        let draw = self
            .draws
            .pop_front()
            .expect("scripted random source exhausted");
        assert!(
            draw < bound_exclusive.max(1),
            "scripted draw {draw} out of bound {bound_exclusive}"
        );
        draw
    }
}
