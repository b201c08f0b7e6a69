//! Descriptor fixtures and graph helpers for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;

use depgraph_synth::domain::builder::SynthesisTargets;
use depgraph_synth::domain::descriptor::{Descriptor, DescriptorKind};
use depgraph_synth::domain::graph::{GraphDocument, LinkRecord};
use depgraph_synth::domain::node::NodeKind;

pub fn descriptor(kind: DescriptorKind, name: &str, category: &str, entity: &str) -> Descriptor {
    Descriptor {
        id: format!("{}-form", name.to_lowercase().replace(' ', "-")),
        kind,
        name: name.to_string(),
        description: format!("{} description", name),
        category: category.to_string(),
        entity_name: entity.to_string(),
    }
}

/// Four base entities: two forms, two documents
pub fn four_base_descriptors() -> Vec<Descriptor> {
    vec![
        descriptor(DescriptorKind::Form, "Client Profile", "client", "Client"),
        descriptor(DescriptorKind::Form, "Trade Execution", "trading", "Trade"),
        descriptor(DescriptorKind::Document, "Consolidated Statements", "reporting", "Statement"),
        descriptor(DescriptorKind::Document, "Market Research", "research", "Research"),
    ]
}

pub fn targets(entities: usize, documents: usize, processes: usize, dashboards: usize) -> SynthesisTargets {
    SynthesisTargets {
        entities,
        documents,
        processes,
        dashboards,
    }
}

/// Node id → kind
pub fn kinds(document: &GraphDocument) -> HashMap<String, NodeKind> {
    document
        .nodes
        .iter()
        .map(|n| (n.id.clone(), n.kind))
        .collect()
}

pub fn count_kind(document: &GraphDocument, kind: NodeKind) -> usize {
    document.nodes.iter().filter(|n| n.kind == kind).count()
}

pub fn links_from<'a>(document: &'a GraphDocument, source: &str) -> Vec<&'a LinkRecord> {
    document
        .links
        .iter()
        .filter(|l| l.source == source)
        .collect()
}
