use crate::domain::descriptor::Descriptor;
use crate::domain::graph::GraphDocument;
use crate::domain::ports::DescriptorSource;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Descriptor source backed by a `form-summaries.json` array
pub struct JsonDescriptorSource {
    path: PathBuf,
}

impl JsonDescriptorSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DescriptorSource for JsonDescriptorSource {
    fn load(&self) -> Result<Vec<Descriptor>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read descriptor file: {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse descriptors: {}", self.path.display()))
    }
}

/// Load a previously written `dependency-graph.json`
pub fn read_graph(path: &Path) -> Result<GraphDocument> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse graph JSON: {}", path.display()))
}
