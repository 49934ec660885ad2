use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{anyhow, Context};
use bidirectional_paths::{
    algorithm,
    benchmark::{Comparator, DEFAULT_SEED},
    graphs::graph_factory::GraphFactory,
    utility::init_logging,
    AlgorithmType,
};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, warn};

/// Compares Dijkstra and bidirectional Dijkstra on random source target pairs
/// and writes the measurements as CSV.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cartesian graph file
    #[arg(short, long)]
    graph_file: PathBuf,
    /// Number of pairs with a path to be measured
    #[arg(short, long, default_value_t = 1000)]
    number_of_runs: u32,
    /// Pairs without a path tolerated before giving up, 10 times the number
    /// of runs if not set
    #[arg(short, long)]
    max_misses: Option<u32>,
    /// Seed of the random pair generator
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// CSV output file, stdout if not set
    #[arg(short, long)]
    out_file: Option<PathBuf>,
    /// Column separator
    #[arg(long, default_value_t = ';')]
    separator: char,
    /// Omit the header row
    #[arg(long)]
    no_header: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let separator = u8::try_from(args.separator)
        .map_err(|_| anyhow!("separator '{}' is not an ascii character", args.separator))?;

    let graph = GraphFactory::from_file(&args.graph_file)
        .with_context(|| format!("reading {}", args.graph_file.display()))?;

    let mut comparator = Comparator::new(vec![
        algorithm(&graph, AlgorithmType::Dijkstra),
        algorithm(&graph, AlgorithmType::Bidirectional),
    ])?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let max_misses = args
        .max_misses
        .unwrap_or(args.number_of_runs.saturating_mul(10));
    comparator.analyse(args.number_of_runs, max_misses, &mut rng)?;

    for result in comparator.inconsistent_results() {
        warn!(
            source = result.source,
            target = result.target,
            "algorithms disagree on the path weight"
        );
    }

    match &args.out_file {
        Some(out_file) => {
            let writer = BufWriter::new(
                File::create(out_file)
                    .with_context(|| format!("creating {}", out_file.display()))?,
            );
            comparator.write_csv(writer, separator, !args.no_header)?;
            info!(path = %out_file.display(), "wrote results");
        }
        None => comparator.write_csv(std::io::stdout().lock(), separator, !args.no_header)?,
    }

    Ok(())
}
