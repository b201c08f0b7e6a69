use crate::adapters::catalog::builtin::BuiltinCatalog;
use crate::adapters::fs::reader::JsonDescriptorSource;
use crate::adapters::fs::writer::JsonGraphWriter;
use crate::adapters::random::seeded::SeededRandom;
use crate::app::dto::*;
use crate::domain::builder::{GraphSynthesizer, SynthesisTargets};
use crate::domain::descriptor::{Descriptor, base_entities};
use crate::domain::graph::GraphDocument;
use crate::domain::policy::BranchPolicy;
use crate::domain::ports::{DescriptorSource, GraphSink, RandomSource};
use crate::domain::report::{GraphReport, validate};
use anyhow::{Context as _, Result};
use tracing::info;

/// Application service: descriptors in, validated graph out
pub struct GeneratorEngine {
    synthesizer: GraphSynthesizer,
}

impl Default for GeneratorEngine {
    fn default() -> Self {
        Self::new(BranchPolicy::default())
    }
}

/// Result of one synthesis run
pub struct Generation {
    pub descriptors: Vec<Descriptor>,
    pub targets: SynthesisTargets,
    pub document: GraphDocument,
    pub report: GraphReport,
}

impl GeneratorEngine {
    pub fn new(policy: BranchPolicy) -> Self {
        Self {
            synthesizer: GraphSynthesizer::new(policy),
        }
    }

    /// Full pipeline with the production adapters: built-in catalog or descriptor file,
    /// seeded random source, JSON writer.
    pub fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let source: Box<dyn DescriptorSource> = match &request.descriptors {
            Some(path) => Box::new(JsonDescriptorSource::new(path)),
            None => Box::new(BuiltinCatalog::new(request.preset.descriptor_limit())),
        };
        let mut rng = SeededRandom::new(request.seed);
        let writer = JsonGraphWriter::new(&request.out_dir);

        let generation = self.run(
            source.as_ref(),
            request.preset,
            &request.overrides,
            &mut rng,
        )?;
        writer.write(&generation.document)?;

        let output_path = writer.target_path();
        info!(path = %output_path.display(), "wrote dependency graph");

        Ok(GenerateResponse {
            output_path,
            descriptor_count: generation.descriptors.len(),
            targets: generation.targets,
            report: generation.report,
        })
    }

    /// Load, resolve targets, synthesize and validate; nothing is written.
    pub fn run(
        &self,
        source: &dyn DescriptorSource,
        preset: Preset,
        overrides: &TargetOverrides,
        rng: &mut dyn RandomSource,
    ) -> Result<Generation> {
        let mut descriptors = source.load().context("Failed to load descriptors")?;
        if let Some(limit) = preset.descriptor_limit() {
            descriptors.truncate(limit);
        }

        let distinct_entities = base_entities(&descriptors).len();
        let targets = overrides.apply(preset.targets(distinct_entities));

        let (document, report) = self.synthesize(&descriptors, &targets, rng)?;
        Ok(Generation {
            descriptors,
            targets,
            document,
            report,
        })
    }

    /// Synthesize one graph and check it for dangling references
    pub fn synthesize(
        &self,
        descriptors: &[Descriptor],
        targets: &SynthesisTargets,
        rng: &mut dyn RandomSource,
    ) -> Result<(GraphDocument, GraphReport)> {
        let graph = self.synthesizer.synthesize(descriptors, targets, rng);
        let document = graph.to_document();
        let report = validate(&document).context("Synthesized graph failed validation")?;

        info!(
            descriptors = descriptors.len(),
            nodes = report.total_nodes(),
            links = report.links,
            entities = report.entities,
            forms = report.forms,
            documents = report.documents,
            processes = report.processes,
            dashboards = report.dashboards,
            "synthesized dependency graph"
        );
        Ok((document, report))
    }

    /// Synthesize into an arbitrary sink
    pub fn synthesize_into(
        &self,
        descriptors: &[Descriptor],
        targets: &SynthesisTargets,
        rng: &mut dyn RandomSource,
        sink: &dyn GraphSink,
    ) -> Result<GraphReport> {
        let (document, report) = self.synthesize(descriptors, targets, rng)?;
        sink.write(&document)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fs::reader::read_graph;
    use crate::adapters::fs::writer::GRAPH_FILE_NAME;

    #[test]
    fn test_light_preset_shape() {
        let engine = GeneratorEngine::default();
        let mut rng = SeededRandom::from_seed(1);
        let generation = engine
            .run(
                &BuiltinCatalog::default(),
                Preset::Light,
                &TargetOverrides::default(),
                &mut rng,
            )
            .unwrap();

        assert_eq!(generation.descriptors.len(), 24);
        let report = &generation.report;
        assert_eq!(report.entities, 24);
        assert_eq!(report.forms, 24);
        assert_eq!(report.documents, 12);
        assert_eq!(report.processes, 6);
        assert_eq!(report.dashboards, 6);
        assert_eq!(generation.document.nodes.len(), 72);
    }

    #[test]
    fn test_full_preset_uses_distinct_entities() {
        let engine = GeneratorEngine::default();
        let mut rng = SeededRandom::from_seed(2);
        let generation = engine
            .run(
                &BuiltinCatalog::default(),
                Preset::Full,
                &TargetOverrides::default(),
                &mut rng,
            )
            .unwrap();

        assert_eq!(generation.targets.entities, 24);
        assert_eq!(generation.report.entities, 24);
        // 12 document bases × 17 variations exceed the target of 100
        assert_eq!(generation.report.documents, 204);
        assert_eq!(generation.report.forms, 204);
    }

    #[test]
    fn test_overrides_replace_preset_targets() {
        let engine = GeneratorEngine::default();
        let mut rng = SeededRandom::from_seed(3);
        let overrides = TargetOverrides {
            processes: Some(2),
            dashboards: Some(0),
            ..Default::default()
        };
        let generation = engine
            .run(&BuiltinCatalog::default(), Preset::Light, &overrides, &mut rng)
            .unwrap();
        assert_eq!(generation.report.processes, 2);
        assert_eq!(generation.report.dashboards, 0);
        assert_eq!(generation.targets.documents, 12);
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let request = GenerateRequest {
            preset: Preset::Light,
            seed: Some(9),
            overrides: TargetOverrides::default(),
            descriptors: None,
            out_dir: dir.path().to_path_buf(),
        };

        let response = GeneratorEngine::default().generate(&request).unwrap();
        assert_eq!(response.output_path, dir.path().join(GRAPH_FILE_NAME));

        let written = read_graph(&response.output_path).unwrap();
        assert_eq!(written.nodes.len(), response.report.total_nodes());
        assert_eq!(written.links.len(), response.report.links);
    }

    #[test]
    fn test_missing_descriptor_file_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let request = GenerateRequest {
            preset: Preset::Light,
            seed: Some(9),
            overrides: TargetOverrides::default(),
            descriptors: Some(dir.path().join("missing.json")),
            out_dir: dir.path().to_path_buf(),
        };

        assert!(GeneratorEngine::default().generate(&request).is_err());
        assert!(!dir.path().join(GRAPH_FILE_NAME).exists());
    }
}
