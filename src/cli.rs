use crate::adapters::fs::reader::read_graph;
use crate::app::dto::GenerateRequest;
use crate::app::engine::GeneratorEngine;
use crate::domain::report::{GraphReport, validate};
use anyhow::{Context as _, Result};
use std::path::Path;

/// Generate the graph file and print a breakdown.
pub fn generate_graph(engine: &GeneratorEngine, request: &GenerateRequest) -> Result<()> {
    println!(
        "Generating dependency graph [{:?}]...",
        request.preset
    );
    if let Some(seed) = request.seed {
        println!("  Seed: {}", seed);
    }

    let response = engine.generate(request)?;

    println!("{}", "=".repeat(70));
    println!("[OK] Generated {}", response.output_path.display());
    println!("  Descriptors:         {}", response.descriptor_count);
    println!(
        "  Targets:             entities {}, documents {}, processes {}, dashboards {}",
        response.targets.entities,
        response.targets.documents,
        response.targets.processes,
        response.targets.dashboards
    );
    print_breakdown(&response.report);
    Ok(())
}

/// Load an existing graph file, print its breakdown and fail on dangling references.
pub fn inspect_graph(path: &Path) -> Result<()> {
    let document = read_graph(path)?;
    let report = GraphReport::from_document(&document);
    println!("Dependency graph: {}", path.display());
    print_breakdown(&report);

    validate(&document).with_context(|| format!("Invalid graph: {}", path.display()))?;
    println!("\n[OK] No dangling references");
    Ok(())
}

fn print_breakdown(report: &GraphReport) {
    println!("\n>> Dependency Graph Breakdown:");
    println!("  * Total Nodes:         {}", report.total_nodes());
    println!("    - Entities:          {}", report.entities);
    println!("    - Forms:             {}", report.forms);
    println!("    - Documents:         {}", report.documents);
    println!("    - Processes:         {}", report.processes);
    println!("    - Dashboards:        {}", report.dashboards);
    println!("  * Total Links:         {}", report.links);
    if !report.dangling.is_empty() {
        println!("  * Dangling Links:      {}", report.dangling.len());
    }
}
