use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Relationship label carried by a link.
/// Vocabulary depends on the kinds of the two endpoints, see [`LinkCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    // ============ Form → Entity ============
    Creates,
    Requires,
    References,
    Updates,

    // ============ Document → Entity ============
    Displays,
    Documents,
    Reports,
    Analyzes,

    // ============ Process → Entity ============
    Manages,
    Processes,
    Validates,
    Transforms,

    // ============ Dashboard → Entity / Document ============
    Queries,
    Monitors,
    Aggregates,
    Generates,

    // ============ Entity → Entity ============
    Contains,
    BelongsTo,
    RelatesTo,
    DependsOn,
    DerivesFrom,
}

/// Link category: which pass created the link.
/// Each category fixes the relationship vocabulary and the strength interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkCategory {
    /// Form → its own entity
    FormCreates,
    /// Form → some other entity (probabilistic)
    FormCrossReference,
    /// Derived document → its own entity
    DocumentDisplays,
    /// Padded document → random entities
    SupplementalDocument,
    ProcessEntity,
    DashboardEntity,
    DashboardDocument,
    EntityEntity,
}

impl LinkCategory {
    pub const ALL: [LinkCategory; 8] = [
        LinkCategory::FormCreates,
        LinkCategory::FormCrossReference,
        LinkCategory::DocumentDisplays,
        LinkCategory::SupplementalDocument,
        LinkCategory::ProcessEntity,
        LinkCategory::DashboardEntity,
        LinkCategory::DashboardDocument,
        LinkCategory::EntityEntity,
    ];

    /// Relationships a link of this category may carry (chosen uniformly)
    pub fn vocabulary(&self) -> &'static [Relationship] {
        use Relationship::*;
        match self {
            LinkCategory::FormCreates => &[Creates],
            LinkCategory::FormCrossReference => &[Requires, References, Updates],
            LinkCategory::DocumentDisplays => &[Displays],
            LinkCategory::SupplementalDocument => &[Documents, Reports, Analyzes],
            LinkCategory::ProcessEntity => &[Manages, Processes, Validates, Transforms],
            LinkCategory::DashboardEntity => &[Queries, Displays, Monitors, Aggregates],
            LinkCategory::DashboardDocument => &[Generates],
            LinkCategory::EntityEntity => &[
                Contains,
                BelongsTo,
                RelatesTo,
                DependsOn,
                Aggregates,
                DerivesFrom,
            ],
        }
    }

    /// Closed strength interval. Degenerate intervals are fixed strengths.
    pub fn strength(&self) -> RangeInclusive<f64> {
        match self {
            LinkCategory::FormCreates => 1.0..=1.0,
            LinkCategory::FormCrossReference => 0.5..=0.8,
            LinkCategory::DocumentDisplays => 0.9..=0.9,
            LinkCategory::SupplementalDocument => 0.7..=0.95,
            LinkCategory::ProcessEntity => 0.7..=0.95,
            LinkCategory::DashboardEntity => 0.85..=1.0,
            LinkCategory::DashboardDocument => 0.6..=0.85,
            LinkCategory::EntityEntity => 0.6..=0.95,
        }
    }
}

/// Directed, weighted link between two nodes (the petgraph edge weight)
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub relationship: Relationship,
    pub strength: f64, // [0.0, 1.0]
}
