use std::{
    io,
    time::{Duration, Instant},
};

use rand::Rng;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    graphs::{Distance, Graph, VertexId},
    search::{SearchError, ShortestPathAlgorithm},
    utility::get_progressbar_long_jobs,
};

pub const DEFAULT_SEED: u64 = 20220404;

#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("at least one algorithm must be provided")]
    NoAlgorithms,
    #[error("cannot draw vertices from an empty graph")]
    EmptyGraph,
    #[error("algorithm {index} does not use the same graph as the first algorithm")]
    GraphMismatch { index: usize },
    #[error("gave up after {misses} pairs without a path, {recorded} results recorded")]
    TooManyMisses { misses: u32, recorded: usize },
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("unable to write results")]
    Csv(#[from] csv::Error),
    #[error("unable to write results")]
    Io(#[from] io::Error),
}

/// Measurements of a single algorithm on one source target pair.
#[derive(Clone, Debug)]
pub struct AlgorithmResult {
    pub name: String,
    pub duration: Duration,
    pub iterations: u64,
    pub path_weight: Distance,
    /// Number of vertices on the path.
    pub path_length: usize,
}

#[derive(Clone, Debug)]
pub struct TestResult {
    pub source: VertexId,
    pub target: VertexId,
    pub results: Vec<AlgorithmResult>,
}

impl TestResult {
    /// Whether every algorithm found a path of the same weight.
    pub fn is_consistent(&self) -> bool {
        self.results
            .windows(2)
            .all(|pair| pair[0].path_weight == pair[1].path_weight)
    }
}

/// Runs several algorithms on the same random source target pairs.
pub struct Comparator<'a> {
    algorithms: Vec<Box<dyn ShortestPathAlgorithm + 'a>>,
    results: Vec<TestResult>,
}

impl<'a> Comparator<'a> {
    pub fn new(
        algorithms: Vec<Box<dyn ShortestPathAlgorithm + 'a>>,
    ) -> Result<Comparator<'a>, BenchmarkError> {
        let first = algorithms.first().ok_or(BenchmarkError::NoAlgorithms)?;
        let graph = first.graph() as *const dyn Graph as *const ();
        if let Some(index) = algorithms
            .iter()
            .position(|algorithm| algorithm.graph() as *const dyn Graph as *const () != graph)
        {
            return Err(BenchmarkError::GraphMismatch { index });
        }

        Ok(Comparator {
            algorithms,
            results: Vec::new(),
        })
    }

    pub fn graph(&self) -> &dyn Graph {
        self.algorithms[0].graph()
    }

    pub fn algorithm_names(&self) -> Vec<&str> {
        self.algorithms
            .iter()
            .map(|algorithm| algorithm.name())
            .collect()
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Records `runs` results for uniformly drawn pairs. Pairs without a path
    /// are skipped, after `max_misses` of them the analysis is aborted.
    pub fn analyse<R: Rng>(
        &mut self,
        runs: u32,
        max_misses: u32,
        rng: &mut R,
    ) -> Result<&[TestResult], BenchmarkError> {
        let number_of_vertices = self.graph().number_of_vertices();
        if number_of_vertices == 0 {
            return Err(BenchmarkError::EmptyGraph);
        }
        let bar = get_progressbar_long_jobs("Benchmarking", runs as u64);

        let mut recorded = 0;
        let mut misses = 0;
        while recorded < runs {
            let source = rng.gen_range(0..number_of_vertices);
            let target = rng.gen_range(0..number_of_vertices);

            match self.run(source, target) {
                Ok(result) => {
                    self.results.push(result);
                    recorded += 1;
                    bar.inc(1);
                }
                Err(SearchError::NoPathFound { .. }) => {
                    warn!(run = recorded, source, target, "no path found");
                    misses += 1;
                    if misses > max_misses {
                        bar.finish_and_clear();
                        return Err(BenchmarkError::TooManyMisses {
                            misses,
                            recorded: self.results.len(),
                        });
                    }
                }
                Err(error) => {
                    bar.finish_and_clear();
                    return Err(error.into());
                }
            }
        }
        bar.finish_and_clear();

        info!(runs, misses, "benchmark finished");
        Ok(&self.results)
    }

    /// Runs every algorithm once on the pair and measures the time taken to
    /// search and to assemble the path. Path assembly is inside the timed
    /// region, so times are slightly above those of the search alone.
    pub fn run(&mut self, source: VertexId, target: VertexId) -> Result<TestResult, SearchError> {
        let results = self
            .algorithms
            .iter_mut()
            .map(|algorithm| -> Result<AlgorithmResult, SearchError> {
                let start = Instant::now();
                algorithm.run(source, target)?;
                let path = algorithm.shortest_path()?;
                let duration = start.elapsed();

                Ok(AlgorithmResult {
                    name: algorithm.name().to_string(),
                    duration,
                    iterations: algorithm.iterations(),
                    path_weight: path.total_weight(),
                    path_length: path.node_count(),
                })
            })
            .collect::<Result<Vec<_>, SearchError>>()?;

        Ok(TestResult {
            source,
            target,
            results,
        })
    }

    /// Results where the algorithms disagree on the path weight.
    pub fn inconsistent_results(&self) -> Vec<&TestResult> {
        self.results
            .iter()
            .filter(|result| !result.is_consistent())
            .collect()
    }

    pub fn csv_header(&self) -> Vec<String> {
        let mut header = vec!["source".to_string(), "target".to_string()];
        for name in self.algorithm_names() {
            header.extend(
                ["time", "iteration", "path weight", "path length"]
                    .iter()
                    .map(|column| format!("{} {}", name, column)),
            );
        }
        header
    }

    /// Writes one row per result, times in milliseconds. Nothing is written
    /// if there are no results.
    pub fn write_csv<W: io::Write>(
        &self,
        writer: W,
        delimiter: u8,
        include_header: bool,
    ) -> Result<(), BenchmarkError> {
        if self.results.is_empty() {
            return Ok(());
        }

        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_writer(writer);

        if include_header {
            writer.write_record(self.csv_header())?;
        }
        for result in &self.results {
            let mut record = vec![result.source.to_string(), result.target.to_string()];
            for algorithm_result in &result.results {
                record.push((algorithm_result.duration.as_secs_f64() * 1000.0).to_string());
                record.push(algorithm_result.iterations.to_string());
                record.push(algorithm_result.path_weight.to_string());
                record.push(algorithm_result.path_length.to_string());
            }
            writer.write_record(&record)?;
        }
        writer.flush()?;

        Ok(())
    }

    pub fn to_csv(&self, delimiter: u8, include_header: bool) -> Result<String, BenchmarkError> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer, delimiter, include_header)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
