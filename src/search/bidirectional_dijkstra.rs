use tracing::{debug, trace};

use super::{
    search_state::{Direction, MeetingCandidate, Mode, SearchState, Step},
    SearchError, ShortestPathAlgorithm,
};
use crate::graphs::{edge::WeightedEdge, path::Path, Distance, Graph, VertexId};

/// Best connection between the two searches seen so far.
#[derive(Clone, Debug, PartialEq, Eq)]
struct MeetingPoint {
    length: Distance,
    /// Oriented from source to target: the tail is settled by the forward
    /// search, the head by the backward search. `None` if source and target
    /// coincide.
    edge: Option<WeightedEdge>,
}

/// Runs a forward search from the source and a backward search from the
/// target in alternation and stops as soon as one of them extracts a vertex
/// the other one has already settled.
pub struct BidirectionalDijkstra<'a> {
    forward: SearchState<'a>,
    backward: SearchState<'a>,
    request: Option<(VertexId, VertexId)>,
    best: Option<MeetingPoint>,
}

impl<'a> BidirectionalDijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> BidirectionalDijkstra<'a> {
        BidirectionalDijkstra {
            forward: SearchState::new(graph, Direction::Forward),
            backward: SearchState::new(graph, Direction::Backward),
            request: None,
            best: None,
        }
    }

    pub fn forward(&self) -> &SearchState<'a> {
        &self.forward
    }

    pub fn backward(&self) -> &SearchState<'a> {
        &self.backward
    }

    /// Length of the shortest path found by the last run.
    pub fn shortest_path_length(&self) -> Option<Distance> {
        self.best.as_ref().map(|best| best.length)
    }

    pub fn settled_count(&self) -> usize {
        self.forward.settled_count() + self.backward.settled_count()
    }

    /// Advances the search that has done fewer steps, the forward search on a
    /// tie.
    fn step(&mut self) -> Result<Step, SearchError> {
        let best = &mut self.best;
        if self.forward.iterations() <= self.backward.iterations() {
            let mode = Mode::BidirectionalHalf {
                other: &self.backward,
            };
            self.forward
                .step_with(mode, |candidate| improve(best, candidate, Direction::Forward))
        } else {
            let mode = Mode::BidirectionalHalf {
                other: &self.forward,
            };
            self.backward
                .step_with(mode, |candidate| improve(best, candidate, Direction::Backward))
        }
    }
}

/// Records `candidate` if it is shorter than the best known connection. Only
/// the connecting edge is stored, the path is assembled once after the search.
fn improve(best: &mut Option<MeetingPoint>, candidate: MeetingCandidate, direction: Direction) {
    if best
        .as_ref()
        .is_some_and(|best| best.length <= candidate.length)
    {
        return;
    }

    let edge = match direction {
        Direction::Forward => candidate.edge,
        Direction::Backward => candidate.edge.reversed(),
    };
    trace!(
        length = candidate.length,
        tail = edge.tail(),
        head = edge.head(),
        "improved meeting point"
    );
    *best = Some(MeetingPoint {
        length: candidate.length,
        edge: Some(edge),
    });
}

impl<'a> ShortestPathAlgorithm for BidirectionalDijkstra<'a> {
    fn graph(&self) -> &dyn Graph {
        self.forward.graph()
    }

    fn run(&mut self, source: VertexId, target: VertexId) -> Result<(), SearchError> {
        self.request = None;
        self.best = None;
        self.forward.initialize(source, Some(target))?;
        self.backward.initialize(target, Some(source))?;
        self.request = Some((source, target));

        if source == target {
            self.best = Some(MeetingPoint {
                length: 0,
                edge: None,
            });
            return Ok(());
        }

        while self.step()? == Step::Continue {}

        debug!(
            source,
            target,
            length = self.shortest_path_length(),
            iterations = self.iterations(),
            settled = self.settled_count(),
            "bidirectional dijkstra finished"
        );
        Ok(())
    }

    /// Joins the forward path to the meeting edge, the edge itself and the
    /// reversed backward path behind it.
    fn shortest_path(&self) -> Result<Path, SearchError> {
        let (source, target) = self.request.ok_or(SearchError::NotInitialized)?;
        let best = self
            .best
            .as_ref()
            .ok_or(SearchError::NoPathFound {
                from: source,
                to: target,
            })?;

        let Some(edge) = &best.edge else {
            return Ok(Path::trivial(source));
        };

        let mut path = self.forward.shortest_path(edge.tail())?;
        path.push_back(edge.clone())?;
        path.push_back_path(self.backward.shortest_path(edge.head())?.reversed())?;
        debug_assert_eq!(path.total_weight(), best.length);

        Ok(path)
    }

    fn iterations(&self) -> u64 {
        self.forward.iterations() + self.backward.iterations()
    }

    fn name(&self) -> &str {
        "Bidirectional Dijkstra"
    }
}
