use crate::domain::graph::GraphDocument;
use crate::domain::node::NodeKind;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Structural summary of a serialized graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphReport {
    pub entities: usize,
    pub forms: usize,
    pub documents: usize,
    pub processes: usize,
    pub dashboards: usize,
    pub links: usize,
    /// Link endpoints that name no node, as "source->target"
    pub dangling: Vec<String>,
}

impl GraphReport {
    pub fn from_document(document: &GraphDocument) -> Self {
        let mut report = GraphReport {
            links: document.links.len(),
            ..Default::default()
        };
        for node in &document.nodes {
            *report.count_mut(node.kind) += 1;
        }

        let ids: HashSet<&str> = document.nodes.iter().map(|n| n.id.as_str()).collect();
        report.dangling = document
            .links
            .iter()
            .filter(|l| !ids.contains(l.source.as_str()) || !ids.contains(l.target.as_str()))
            .map(|l| format!("{}->{}", l.source, l.target))
            .collect();
        report
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        match kind {
            NodeKind::Entity => self.entities,
            NodeKind::Form => self.forms,
            NodeKind::Document => self.documents,
            NodeKind::Process => self.processes,
            NodeKind::Dashboard => self.dashboards,
        }
    }

    fn count_mut(&mut self, kind: NodeKind) -> &mut usize {
        match kind {
            NodeKind::Entity => &mut self.entities,
            NodeKind::Form => &mut self.forms,
            NodeKind::Document => &mut self.documents,
            NodeKind::Process => &mut self.processes,
            NodeKind::Dashboard => &mut self.dashboards,
        }
    }

    pub fn total_nodes(&self) -> usize {
        NodeKind::ALL.iter().map(|k| self.count(*k)).sum()
    }
}

/// Report for `document`, or an error naming the dangling links
pub fn validate(document: &GraphDocument) -> Result<GraphReport> {
    let report = GraphReport::from_document(document);
    if !report.dangling.is_empty() {
        bail!(
            "{} link(s) reference missing nodes: {}",
            report.dangling.len(),
            report.dangling.join(", ")
        );
    }
    Ok(report)
}
