use crate::domain::graph::GraphDocument;
use crate::domain::ports::GraphSink;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Output file name consumed by the front-end
pub const GRAPH_FILE_NAME: &str = "dependency-graph.json";

/// Pretty-printed JSON writer.
/// Writes a sibling temp file and renames it, so the target is either the old file or the complete new one.
pub struct JsonGraphWriter {
    out_dir: PathBuf,
}

impl JsonGraphWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn target_path(&self) -> PathBuf {
        self.out_dir.join(GRAPH_FILE_NAME)
    }
}

impl GraphSink for JsonGraphWriter {
    fn write(&self, document: &GraphDocument) -> Result<()> {
        std::fs::create_dir_all(&self.out_dir).with_context(|| {
            format!("Failed to create output directory: {}", self.out_dir.display())
        })?;

        let json = serde_json::to_string_pretty(document).context("Failed to serialize graph")?;
        let target = self.target_path();
        let staging = staging_path(&target);
        std::fs::write(&staging, json)
            .with_context(|| format!("Failed to write graph file: {}", staging.display()))?;
        std::fs::rename(&staging, &target)
            .with_context(|| format!("Failed to move graph file into place: {}", target.display()))?;
        Ok(())
    }
}

fn staging_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    target.with_file_name(name)
}
