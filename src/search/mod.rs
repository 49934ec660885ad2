use thiserror::Error;

use crate::graphs::{
    path::{Path, PathError},
    Graph, VertexId,
};

pub mod bidirectional_dijkstra;
pub mod collections;
pub mod dijkstra;
pub mod search_state;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("vertex {vertex} is not part of a graph with {number_of_vertices} vertices")]
    InvalidVertex {
        vertex: VertexId,
        number_of_vertices: u32,
    },
    #[error("search has not been initialized")]
    NotInitialized,
    #[error("no path from {from} to {to}")]
    NoPathFound { from: VertexId, to: VertexId },
    #[error("path reconstruction produced a discontinuous path")]
    DiscontinuousPath(#[from] PathError),
}

/// Common interface of the algorithms compared by the benchmark.
pub trait ShortestPathAlgorithm {
    fn graph(&self) -> &dyn Graph;

    /// Searches a shortest path from `source` to `target`, replacing the
    /// result of any previous run.
    fn run(&mut self, source: VertexId, target: VertexId) -> Result<(), SearchError>;

    /// The path found by the last run.
    fn shortest_path(&self) -> Result<Path, SearchError>;

    /// Number of queue extractions performed by the last run.
    fn iterations(&self) -> u64;

    fn name(&self) -> &str;
}
