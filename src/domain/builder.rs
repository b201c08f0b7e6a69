use crate::domain::catalog::{
    DASHBOARD_TEMPLATES, DOCUMENT_TEMPLATES, ENTITY_VARIATIONS, PROCESS_TEMPLATES,
};
use crate::domain::descriptor::{Descriptor, DescriptorKind, base_entities};
use crate::domain::edge::LinkCategory;
use crate::domain::graph::DependencyGraph;
use crate::domain::node::{Node, NodeKind};
use crate::domain::policy::{BranchEffect, BranchPolicy};
use crate::domain::ports::RandomSource;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Caller-supplied cardinalities.
/// `entities` is an upper bound; `processes` and `dashboards` are exact;
/// `documents` is a floor (derived documents are never dropped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisTargets {
    pub entities: usize,
    pub documents: usize,
    pub processes: usize,
    pub dashboards: usize,
}

/// Per-pass link fan-out, inclusive bounds
const DOCUMENT_ENTITY_LINKS: (usize, usize) = (1, 3);
const PROCESS_ENTITY_LINKS: (usize, usize) = (2, 5);
const DASHBOARD_ENTITY_LINKS: (usize, usize) = (3, 8);
const DASHBOARD_DOCUMENT_LINKS: (usize, usize) = (1, 3);

/// Graph synthesizer - Domain Service for constructing DependencyGraph
pub struct GraphSynthesizer {
    policy: BranchPolicy,
}

impl Default for GraphSynthesizer {
    fn default() -> Self {
        Self::new(BranchPolicy::default())
    }
}

/// Accumulating pools shared by the passes
struct SynthesisState {
    graph: DependencyGraph,
    /// Entity node indices in creation order (the sampling pool)
    entities: Vec<NodeIndex>,
    /// Entity name (base or full) → position in `entities`
    entity_by_name: HashMap<String, usize>,
    /// Derived and padded documents (the dashboard sampling pool)
    documents: Vec<NodeIndex>,
}

impl GraphSynthesizer {
    pub fn new(policy: BranchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &BranchPolicy {
        &self.policy
    }

    /// Six-pass build: entities, forms/documents, padding, processes, dashboards,
    /// entity relationships.
    pub fn synthesize(
        &self,
        descriptors: &[Descriptor],
        targets: &SynthesisTargets,
        rng: &mut dyn RandomSource,
    ) -> DependencyGraph {
        let mut state = SynthesisState {
            graph: DependencyGraph::new(),
            entities: Vec::new(),
            entity_by_name: HashMap::new(),
            documents: Vec::new(),
        };

        // Pass 1: Entity expansion
        let bases = base_entities(descriptors);
        for node in expand_entities(&bases, targets.entities) {
            let name = node.name.clone();
            let idx = state.graph.add_node(node);
            state.entity_by_name.insert(name, state.entities.len());
            state.entities.push(idx);
        }
        debug!(
            bases = bases.len(),
            entities = state.entities.len(),
            "entity expansion done"
        );

        // Pass 2: Forms and documents from descriptors
        self.derive_items(&mut state, descriptors, rng);

        // Pass 3: Document padding
        self.pad_documents(&mut state, targets.documents, rng);

        // Pass 4: Processes
        self.generate_processes(&mut state, targets.processes, rng);

        // Pass 5: Dashboards
        self.generate_dashboards(&mut state, targets.dashboards, rng);

        // Pass 6: Entity-to-entity relationships
        self.relate_entities(&mut state, rng);

        state.graph
    }

    /// Forms are added before documents so node order groups by kind; only forms
    /// draw from the random source, so descriptor order within each kind is what matters.
    fn derive_items(
        &self,
        state: &mut SynthesisState,
        descriptors: &[Descriptor],
        rng: &mut dyn RandomSource,
    ) {
        let mut form_count = 0;
        for descriptor in descriptors.iter().filter(|d| d.kind == DescriptorKind::Form) {
            form_count += 1;
            let form = Node::new(
                NodeKind::Form,
                form_count,
                descriptor.name.clone(),
                &descriptor.category,
            );
            let form_idx = state.graph.add_node(form);

            let Some(&position) = state.entity_by_name.get(&descriptor.entity_name) else {
                continue;
            };
            let entity_idx = state.entities[position];
            add_link(
                &mut state.graph,
                form_idx,
                entity_idx,
                LinkCategory::FormCreates,
                rng,
            );

            if state.entities.len() > self.policy.cross_reference_min_entities
                && self.policy.fires(BranchEffect::FormCrossReference, rng)
            {
                // Uniform over every entity except the form's own
                let mut other = rng.index(state.entities.len() - 1);
                if other >= position {
                    other += 1;
                }
                add_link(
                    &mut state.graph,
                    form_idx,
                    state.entities[other],
                    LinkCategory::FormCrossReference,
                    rng,
                );
            }
        }

        for descriptor in descriptors
            .iter()
            .filter(|d| d.kind == DescriptorKind::Document)
        {
            let document = Node::new(
                NodeKind::Document,
                state.documents.len() + 1,
                descriptor.name.clone(),
                &descriptor.category,
            );
            let doc_idx = state.graph.add_node(document);
            state.documents.push(doc_idx);

            if let Some(&position) = state.entity_by_name.get(&descriptor.entity_name) {
                add_link(
                    &mut state.graph,
                    doc_idx,
                    state.entities[position],
                    LinkCategory::DocumentDisplays,
                    rng,
                );
            }
        }

        debug!(
            forms = form_count,
            documents = state.documents.len(),
            "descriptor derivation done"
        );
    }

    fn pad_documents(
        &self,
        state: &mut SynthesisState,
        target_documents: usize,
        rng: &mut dyn RandomSource,
    ) {
        let deficit = target_documents.saturating_sub(state.documents.len());
        for i in 1..=deficit {
            let (template, category) = DOCUMENT_TEMPLATES[rng.index(DOCUMENT_TEMPLATES.len())];
            let document = Node::new(
                NodeKind::Document,
                state.documents.len() + 1,
                format!("{} #{}", template, i),
                category,
            );
            let doc_idx = state.graph.add_node(document);
            state.documents.push(doc_idx);

            let amount = rng.int_inclusive(DOCUMENT_ENTITY_LINKS.0, DOCUMENT_ENTITY_LINKS.1);
            link_to_sample(
                &mut state.graph,
                doc_idx,
                &state.entities,
                amount,
                LinkCategory::SupplementalDocument,
                rng,
            );
        }
        debug!(padded = deficit, "document padding done");
    }

    fn generate_processes(
        &self,
        state: &mut SynthesisState,
        target_processes: usize,
        rng: &mut dyn RandomSource,
    ) {
        for i in 1..=target_processes {
            let (template, category) = PROCESS_TEMPLATES[rng.index(PROCESS_TEMPLATES.len())];
            let process = Node::new(
                NodeKind::Process,
                i,
                format!("{} Process #{}", template, i),
                category,
            );
            let proc_idx = state.graph.add_node(process);

            let amount = rng.int_inclusive(PROCESS_ENTITY_LINKS.0, PROCESS_ENTITY_LINKS.1);
            link_to_sample(
                &mut state.graph,
                proc_idx,
                &state.entities,
                amount,
                LinkCategory::ProcessEntity,
                rng,
            );
        }
        debug!(processes = target_processes, "process generation done");
    }

    fn generate_dashboards(
        &self,
        state: &mut SynthesisState,
        target_dashboards: usize,
        rng: &mut dyn RandomSource,
    ) {
        for i in 1..=target_dashboards {
            let (template, category) = DASHBOARD_TEMPLATES[rng.index(DASHBOARD_TEMPLATES.len())];
            let dashboard = Node::new(
                NodeKind::Dashboard,
                i,
                format!("{} Dashboard #{}", template, i),
                category,
            );
            let dash_idx = state.graph.add_node(dashboard);

            let amount = rng.int_inclusive(DASHBOARD_ENTITY_LINKS.0, DASHBOARD_ENTITY_LINKS.1);
            link_to_sample(
                &mut state.graph,
                dash_idx,
                &state.entities,
                amount,
                LinkCategory::DashboardEntity,
                rng,
            );

            if !state.documents.is_empty()
                && self.policy.fires(BranchEffect::DashboardDocuments, rng)
            {
                let amount =
                    rng.int_inclusive(DASHBOARD_DOCUMENT_LINKS.0, DASHBOARD_DOCUMENT_LINKS.1);
                link_to_sample(
                    &mut state.graph,
                    dash_idx,
                    &state.documents,
                    amount,
                    LinkCategory::DashboardDocument,
                    rng,
                );
            }
        }
        debug!(dashboards = target_dashboards, "dashboard generation done");
    }

    fn relate_entities(&self, state: &mut SynthesisState, rng: &mut dyn RandomSource) {
        if state.entities.len() < 2 {
            return;
        }
        let count = self.policy.entity_relationship_count(state.entities.len());
        for _ in 0..count {
            let pair = rng.sample_distinct(state.entities.len(), 2);
            add_link(
                &mut state.graph,
                state.entities[pair[0]],
                state.entities[pair[1]],
                LinkCategory::EntityEntity,
                rng,
            );
        }
        debug!(relationships = count, "entity relationships done");
    }
}

/// `max(1, ceil(target / bases) + 1)`; zero bases count as one.
pub fn variations_needed(target_entities: usize, base_count: usize) -> usize {
    (target_entities.div_ceil(base_count.max(1)) + 1).max(1)
}

/// Deterministic entity expansion: bases in input order, suffixes in table order,
/// stopping both loops once `target_entities` nodes exist.
/// Suffixes beyond the table length are unavailable, so the result may fall short.
pub fn expand_entities(bases: &[(String, String)], target_entities: usize) -> Vec<Node> {
    let per_base = variations_needed(target_entities, bases.len());
    let mut nodes = Vec::new();

    'bases: for (base_name, category) in bases {
        for suffix in ENTITY_VARIATIONS.iter().take(per_base) {
            if nodes.len() >= target_entities {
                break 'bases;
            }
            let name = format!("{}{}", base_name, suffix);
            nodes.push(Node::new(NodeKind::Entity, nodes.len() + 1, name, category));
        }
    }
    nodes
}

/// Single link with a relationship and strength drawn for `category`.
/// Single-word vocabularies and fixed strengths consume no draws.
fn add_link(
    graph: &mut DependencyGraph,
    source: NodeIndex,
    target: NodeIndex,
    category: LinkCategory,
    rng: &mut dyn RandomSource,
) {
    let vocabulary = category.vocabulary();
    let relationship = if vocabulary.len() == 1 {
        vocabulary[0]
    } else {
        vocabulary[rng.index(vocabulary.len())]
    };

    let range = category.strength();
    let strength = if range.start() == range.end() {
        *range.start()
    } else {
        rng.uniform(range)
    };

    graph.add_link(source, target, relationship, strength);
}

/// Link `source` to `amount` distinct members of `pool` (capped at the pool size)
fn link_to_sample(
    graph: &mut DependencyGraph,
    source: NodeIndex,
    pool: &[NodeIndex],
    amount: usize,
    category: LinkCategory,
    rng: &mut dyn RandomSource,
) {
    for position in rng.sample_distinct(pool.len(), amount) {
        add_link(graph, source, pool[position], category, rng);
    }
}
