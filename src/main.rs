use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use depgraph_synth::app::dto::{GenerateRequest, Preset, TargetOverrides};
use depgraph_synth::app::engine::GeneratorEngine;
use depgraph_synth::cli;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "depsynth",
    version,
    about = "Synthesize dependency-graph fixtures (entities, forms, documents, processes, dashboards)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate dependency-graph.json
    Generate(GenerateArgs),
    /// Print the breakdown of an existing graph file and check its references
    Inspect {
        /// Path to a dependency-graph.json
        path: PathBuf,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Dataset size preset
    #[arg(long, value_enum, default_value_t = Preset::Full)]
    preset: Preset,

    /// Shortcut for --preset light
    #[arg(long, conflicts_with_all = ["preset", "scale"])]
    light: bool,

    /// Shortcut for --preset scale
    #[arg(long, conflicts_with = "preset")]
    scale: bool,

    /// Seed for a reproducible graph
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory
    #[arg(short, long, default_value = "magic-selector-data")]
    out_dir: PathBuf,

    /// form-summaries.json to use instead of the built-in catalog
    #[arg(long)]
    descriptors: Option<PathBuf>,

    /// Override the entity target (upper bound)
    #[arg(long)]
    entities: Option<usize>,

    /// Override the document target (minimum)
    #[arg(long)]
    documents: Option<usize>,

    /// Override the process count
    #[arg(long)]
    processes: Option<usize>,

    /// Override the dashboard count
    #[arg(long)]
    dashboards: Option<usize>,
}

impl GenerateArgs {
    fn into_request(self) -> GenerateRequest {
        let preset = if self.light {
            Preset::Light
        } else if self.scale {
            Preset::Scale
        } else {
            self.preset
        };
        GenerateRequest {
            preset,
            seed: self.seed,
            overrides: TargetOverrides {
                entities: self.entities,
                documents: self.documents,
                processes: self.processes,
                dashboards: self.dashboards,
            },
            descriptors: self.descriptors,
            out_dir: self.out_dir,
        }
    }
}

fn main() -> Result<()> {
    depgraph_synth::init_tracing();
    let args = Cli::parse();

    match args.command {
        Commands::Generate(generate) => {
            let engine = GeneratorEngine::default();
            cli::generate_graph(&engine, &generate.into_request())
        }
        Commands::Inspect { path } => cli::inspect_graph(&path),
    }
}
