use crate::domain::edge::{Link, Relationship};
use crate::domain::node::{Node, NodeId, NodeKind};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dependency Graph - the core data structure
pub struct DependencyGraph {
    /// Directed multigraph; parallel links between the same pair are allowed
    pub graph: DiGraph<Node, Link>,

    /// Mapping from node id to node index
    pub id_to_node: HashMap<NodeId, NodeIndex>,
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            id_to_node: HashMap::new(),
        }
    }

    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.id_to_node.insert(id, idx);
        idx
    }

    /// Endpoints are indices of existing nodes, so a link can never dangle.
    pub fn add_link(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        relationship: Relationship,
        strength: f64,
    ) {
        self.graph.add_edge(
            source,
            target,
            Link {
                relationship,
                strength,
            },
        );
    }

    pub fn get_node_by_id(&self, id: &str) -> Option<NodeIndex> {
        self.id_to_node.get(id).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &Node {
        &self.graph[idx]
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn count_kind(&self, kind: NodeKind) -> usize {
        self.graph.node_weights().filter(|n| n.kind == kind).count()
    }

    /// Outgoing links of a node as (target, link)
    pub fn outgoing(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, &Link)> {
        self.graph
            .edges_directed(idx, petgraph::Direction::Outgoing)
            .map(|e| (e.target(), e.weight()))
    }

    /// Flatten into the `{nodes, links}` wire shape.
    /// Nodes keep insertion order; links keep creation order.
    pub fn to_document(&self) -> GraphDocument {
        let nodes = self.graph.node_weights().cloned().collect();
        let links = self
            .graph
            .edge_references()
            .map(|e| LinkRecord {
                source: self.graph[e.source()].id.clone(),
                target: self.graph[e.target()].id.clone(),
                relationship: e.weight().relationship,
                strength: e.weight().strength,
            })
            .collect();
        GraphDocument { nodes, links }
    }
}

/// Serialized link: endpoints by node id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub source: NodeId,
    pub target: NodeId,
    pub relationship: Relationship,
    pub strength: f64,
}

/// `dependency-graph.json` contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    pub links: Vec<LinkRecord>,
}
