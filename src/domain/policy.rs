use crate::domain::ports::RandomSource;

/// Probabilistic effect the synthesizer may apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchEffect {
    /// Link a form to one extra, different entity
    FormCrossReference,
    /// Link a dashboard to 1-3 documents
    DashboardDocuments,
}

/// One row of the policy table
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub probability: f64,
    pub effect: BranchEffect,
}

/// Branch policy: explicit (probability, effect) table plus the structural knobs
/// of the synthesis passes.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchPolicy {
    pub branches: Vec<Branch>,
    /// Form cross-references are only considered above this many entities.
    pub cross_reference_min_entities: usize,
    /// Entity-to-entity link count as a fraction of the entity count.
    pub entity_relationship_ratio: f64,
}

impl Default for BranchPolicy {
    fn default() -> Self {
        Self {
            branches: vec![
                Branch {
                    probability: 0.3,
                    effect: BranchEffect::FormCrossReference,
                },
                Branch {
                    probability: 0.4,
                    effect: BranchEffect::DashboardDocuments,
                },
            ],
            cross_reference_min_entities: 10,
            entity_relationship_ratio: 0.15,
        }
    }
}

impl BranchPolicy {
    pub fn probability(&self, effect: BranchEffect) -> f64 {
        self.branches
            .iter()
            .find(|b| b.effect == effect)
            .map(|b| b.probability)
            .unwrap_or(0.0)
    }

    /// Evaluate one row against the random source.
    /// Consumes exactly one draw: the branch fires when the draw is below its probability.
    pub fn fires(&self, effect: BranchEffect, rng: &mut dyn RandomSource) -> bool {
        rng.next_unit() < self.probability(effect)
    }

    /// Override (or add) the probability of one effect
    pub fn with_probability(mut self, effect: BranchEffect, probability: f64) -> Self {
        let probability = probability.clamp(0.0, 1.0);
        match self.branches.iter_mut().find(|b| b.effect == effect) {
            Some(branch) => branch.probability = probability,
            None => self.branches.push(Branch {
                probability,
                effect,
            }),
        }
        self
    }

    /// Number of entity-to-entity links for `entity_count` entities (floor)
    pub fn entity_relationship_count(&self, entity_count: usize) -> usize {
        (entity_count as f64 * self.entity_relationship_ratio).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedUnit(f64);

    impl RandomSource for FixedUnit {
        fn next_unit(&mut self) -> f64 {
            self.0
        }

        fn int_inclusive(&mut self, low: usize, _high: usize) -> usize {
            low
        }
    }

    #[test]
    fn test_default_table() {
        let policy = BranchPolicy::default();
        assert_eq!(policy.probability(BranchEffect::FormCrossReference), 0.3);
        assert_eq!(policy.probability(BranchEffect::DashboardDocuments), 0.4);
    }

    #[test]
    fn test_fires_below_probability_only() {
        let policy = BranchPolicy::default();
        assert!(policy.fires(BranchEffect::FormCrossReference, &mut FixedUnit(0.29)));
        assert!(!policy.fires(BranchEffect::FormCrossReference, &mut FixedUnit(0.3)));
        assert!(policy.fires(BranchEffect::DashboardDocuments, &mut FixedUnit(0.39)));
        assert!(!policy.fires(BranchEffect::DashboardDocuments, &mut FixedUnit(0.9)));
    }

    #[test]
    fn test_with_probability_overrides_row() {
        let policy = BranchPolicy::default().with_probability(BranchEffect::DashboardDocuments, 1.0);
        assert_eq!(policy.branches.len(), 2);
        assert!(policy.fires(BranchEffect::DashboardDocuments, &mut FixedUnit(0.999)));
    }

    #[test]
    fn test_entity_relationship_count_floors() {
        let policy = BranchPolicy::default();
        assert_eq!(policy.entity_relationship_count(24), 3);
        assert_eq!(policy.entity_relationship_count(6), 0);
        assert_eq!(policy.entity_relationship_count(400), 60);
    }
}
