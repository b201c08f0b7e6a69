//! Mock random sources for integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;

use depgraph_synth::domain::ports::RandomSource;

/// Returns the same unit draw every time and always the low (or high) end of integer ranges.
pub struct ConstantRandom {
    pub unit: f64,
    pub pick_high: bool,
}

impl ConstantRandom {
    /// Every branch fires, every range yields its minimum
    pub fn low() -> Self {
        Self {
            unit: 0.0,
            pick_high: false,
        }
    }

    /// No branch fires, every integer range yields its maximum
    pub fn high() -> Self {
        Self {
            unit: 0.99,
            pick_high: true,
        }
    }
}

impl RandomSource for ConstantRandom {
    fn next_unit(&mut self) -> f64 {
        self.unit
    }

    fn int_inclusive(&mut self, low: usize, high: usize) -> usize {
        if self.pick_high { high } else { low }
    }
}

/// Replays scripted unit draws (then falls back to `fallback_unit`);
/// integer draws always return the low end.
pub struct ScriptedRandom {
    units: VecDeque<f64>,
    fallback_unit: f64,
    pub unit_draws: usize,
}

impl ScriptedRandom {
    pub fn new(units: &[f64], fallback_unit: f64) -> Self {
        Self {
            units: units.iter().copied().collect(),
            fallback_unit,
            unit_draws: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.unit_draws += 1;
        self.units.pop_front().unwrap_or(self.fallback_unit)
    }

    fn int_inclusive(&mut self, low: usize, _high: usize) -> usize {
        low
    }
}
