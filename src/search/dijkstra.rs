use tracing::debug;

use super::{
    search_state::{Direction, SearchState},
    SearchError, ShortestPathAlgorithm,
};
use crate::graphs::{path::Path, Graph, VertexId};

/// Unidirectional Dijkstra that stops as soon as the target is settled.
pub struct Dijkstra<'a> {
    state: SearchState<'a>,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Dijkstra<'a> {
        Dijkstra {
            state: SearchState::new(graph, Direction::Forward),
        }
    }

    /// Settles every vertex reachable from `source`.
    pub fn run_single_source(&mut self, source: VertexId) -> Result<(), SearchError> {
        self.state.initialize(source, None)?;
        self.state.run_to_completion()?;
        debug!(
            source,
            iterations = self.state.iterations(),
            settled = self.state.settled_count(),
            "single source dijkstra finished"
        );
        Ok(())
    }

    /// Path from the source of the last run to `destination`, which has to be
    /// settled by that run.
    pub fn shortest_path_to(&self, destination: VertexId) -> Result<Path, SearchError> {
        self.state.shortest_path(destination)
    }

    pub fn state(&self) -> &SearchState<'a> {
        &self.state
    }
}

impl<'a> ShortestPathAlgorithm for Dijkstra<'a> {
    fn graph(&self) -> &dyn Graph {
        self.state.graph()
    }

    fn run(&mut self, source: VertexId, target: VertexId) -> Result<(), SearchError> {
        self.state.initialize(source, Some(target))?;
        self.state.run_to_completion()?;
        debug!(
            source,
            target,
            iterations = self.state.iterations(),
            settled = self.state.settled_count(),
            "dijkstra finished"
        );
        Ok(())
    }

    fn shortest_path(&self) -> Result<Path, SearchError> {
        // a single source run has no target to report a path to
        let target = self.state.target().ok_or(SearchError::NotInitialized)?;
        self.state.shortest_path(target)
    }

    fn iterations(&self) -> u64 {
        self.state.iterations()
    }

    fn name(&self) -> &str {
        "Dijkstra"
    }
}
