use crate::domain::builder::SynthesisTargets;
use crate::domain::report::GraphReport;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dataset size preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum Preset {
    /// 24 descriptors, small graph (CI builds)
    Light,
    /// Whole catalog (local development)
    #[default]
    Full,
    /// Large graph for performance testing
    Scale,
}

impl Preset {
    /// Maximum number of descriptors fed to the synthesizer
    pub fn descriptor_limit(&self) -> Option<usize> {
        match self {
            Preset::Light => Some(24),
            Preset::Full => None,
            Preset::Scale => Some(1300),
        }
    }

    /// Targets for this preset; `full` sizes entities to the distinct entity names.
    pub fn targets(&self, distinct_entities: usize) -> SynthesisTargets {
        match self {
            Preset::Light => SynthesisTargets {
                entities: 24,
                documents: 12,
                processes: 6,
                dashboards: 6,
            },
            Preset::Full => SynthesisTargets {
                entities: distinct_entities,
                documents: 100,
                processes: 20,
                dashboards: 15,
            },
            Preset::Scale => SynthesisTargets {
                entities: 800,
                documents: 100,
                processes: 50,
                dashboards: 20,
            },
        }
    }
}

/// Per-target overrides on top of a preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetOverrides {
    pub entities: Option<usize>,
    pub documents: Option<usize>,
    pub processes: Option<usize>,
    pub dashboards: Option<usize>,
}

impl TargetOverrides {
    pub fn apply(&self, mut targets: SynthesisTargets) -> SynthesisTargets {
        if let Some(n) = self.entities {
            targets.entities = n;
        }
        if let Some(n) = self.documents {
            targets.documents = n;
        }
        if let Some(n) = self.processes {
            targets.processes = n;
        }
        if let Some(n) = self.dashboards {
            targets.dashboards = n;
        }
        targets
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub preset: Preset,
    /// Fixed seed for a reproducible graph; entropy when absent
    pub seed: Option<u64>,
    #[serde(default)]
    pub overrides: TargetOverrides,
    /// Descriptor file replacing the built-in catalog
    pub descriptors: Option<PathBuf>,
    pub out_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub output_path: PathBuf,
    pub descriptor_count: usize,
    pub targets: SynthesisTargets,
    pub report: GraphReport,
}
