use serde::{Deserialize, Serialize};

/// Node identifier (type prefix + 1-based counter, e.g. `e12`, `dash2`)
pub type NodeId = String;

/// Node kind - one id namespace per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Entity,
    Form,
    Document,
    Process,
    Dashboard,
}

impl NodeKind {
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Entity,
        NodeKind::Form,
        NodeKind::Document,
        NodeKind::Process,
        NodeKind::Dashboard,
    ];

    /// Id prefix for this kind's namespace
    pub fn id_prefix(&self) -> &'static str {
        match self {
            NodeKind::Entity => "e",
            NodeKind::Form => "f",
            NodeKind::Document => "d",
            NodeKind::Process => "p",
            NodeKind::Dashboard => "dash",
        }
    }

    /// Build the id of the `ordinal`-th (1-based) node of this kind
    pub fn node_id(&self, ordinal: usize) -> NodeId {
        format!("{}{}", self.id_prefix(), ordinal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Entity => "entity",
            NodeKind::Form => "form",
            NodeKind::Document => "document",
            NodeKind::Process => "process",
            NodeKind::Dashboard => "dashboard",
        }
    }
}

/// Graph vertex. Created once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub category: String,
}

impl Node {
    pub fn new(kind: NodeKind, ordinal: usize, name: impl Into<String>, category: &str) -> Self {
        Self {
            id: kind.node_id(ordinal),
            name: name.into(),
            kind,
            category: capitalize(category),
        }
    }
}

/// Upper-case the first letter and lower-case the rest (`"compliance"` -> `"Compliance"`)
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_prefixes() {
        assert_eq!(NodeKind::Entity.node_id(12), "e12");
        assert_eq!(NodeKind::Form.node_id(3), "f3");
        assert_eq!(NodeKind::Document.node_id(7), "d7");
        assert_eq!(NodeKind::Process.node_id(5), "p5");
        assert_eq!(NodeKind::Dashboard.node_id(2), "dash2");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("compliance"), "Compliance");
        assert_eq!(capitalize("REPORTING"), "Reporting");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_node_serializes_kind_as_type() {
        let node = Node::new(NodeKind::Dashboard, 1, "Risk Dashboard #1", "compliance");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["id"], "dash1");
        assert_eq!(json["type"], "dashboard");
        assert_eq!(json["category"], "Compliance");
    }
}
