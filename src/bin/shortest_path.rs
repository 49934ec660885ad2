use std::path::PathBuf;

use anyhow::Context;
use bidirectional_paths::{
    algorithm, graphs::graph_factory::GraphFactory, utility::init_logging, AlgorithmType,
};
use clap::Parser;
use tracing::info;

/// Computes a single shortest path.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cartesian graph file
    #[arg(short, long)]
    graph_file: PathBuf,
    /// Source vertex
    #[arg(short, long)]
    source: u32,
    /// Target vertex
    #[arg(short, long)]
    target: u32,
    /// Algorithm to be used
    #[arg(short, long, value_enum, default_value = "bidirectional")]
    algorithm: AlgorithmType,
    /// Print the path as JSON
    #[arg(short, long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let graph = GraphFactory::from_file(&args.graph_file)
        .with_context(|| format!("reading {}", args.graph_file.display()))?;

    let mut pathfinder = algorithm(&graph, args.algorithm);
    pathfinder.run(args.source, args.target)?;
    let path = pathfinder.shortest_path()?;
    info!(
        algorithm = pathfinder.name(),
        iterations = pathfinder.iterations(),
        "search finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&path)?);
    } else {
        println!("{}", path);
    }

    Ok(())
}
