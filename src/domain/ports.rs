use crate::domain::descriptor::Descriptor;
use crate::domain::graph::GraphDocument;
use anyhow::Result;
use std::ops::RangeInclusive;

/// Random source port (injected into the synthesizer; never ambient)
pub trait RandomSource {
    /// Uniform draw in [0.0, 1.0)
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in [low, high], both inclusive. Requires low <= high.
    fn int_inclusive(&mut self, low: usize, high: usize) -> usize;

    /// Uniform float inside `range`
    fn uniform(&mut self, range: RangeInclusive<f64>) -> f64 {
        let (low, high) = (*range.start(), *range.end());
        (low + (high - low) * self.next_unit()).min(high)
    }

    /// Uniform index into a non-empty collection of `len` items
    fn index(&mut self, len: usize) -> usize {
        self.int_inclusive(0, len.saturating_sub(1))
    }

    /// `amount` distinct indices out of `0..len` (capped at `len`), in draw order.
    /// Partial Fisher-Yates over the index pool.
    fn sample_distinct(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(len);
        let mut pool: Vec<usize> = (0..len).collect();
        for i in 0..amount {
            let j = self.int_inclusive(i, len - 1);
            pool.swap(i, j);
        }
        pool.truncate(amount);
        pool
    }
}

/// Descriptor catalog port (implemented by adapters)
pub trait DescriptorSource {
    fn load(&self) -> Result<Vec<Descriptor>>;
}

/// Graph output port
pub trait GraphSink {
    fn write(&self, document: &GraphDocument) -> Result<()>;
}
