//! Form/document descriptors: the summary records the synthesizer derives entities,
//! forms and documents from. Serialized in the camelCase shape of `form-summaries.json`.

use serde::{Deserialize, Serialize};

/// Descriptor kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DescriptorKind {
    Form,
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DescriptorKind,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub entity_name: String,
}

/// Ordered base entities: entity name → category of its first descriptor.
/// Order is first appearance in the descriptor list.
pub fn base_entities(descriptors: &[Descriptor]) -> Vec<(String, String)> {
    let mut bases: Vec<(String, String)> = Vec::new();
    for descriptor in descriptors {
        if !bases.iter().any(|(name, _)| *name == descriptor.entity_name) {
            bases.push((descriptor.entity_name.clone(), descriptor.category.clone()));
        }
    }
    bases
}
