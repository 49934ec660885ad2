use super::{collections::frontier_queue::FrontierQueue, SearchError};
use crate::graphs::{
    edge::WeightedEdge,
    path::Path,
    Distance, Graph, VertexId,
};

/// Edges a search follows from a settled vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Outgoing edges, distances are measured from the root.
    Forward,
    /// Incoming edges, distances are measured to the root.
    Backward,
}

/// Selects the termination rule of a step.
#[derive(Clone, Copy)]
pub enum Mode<'s, 'a> {
    Plain,
    /// One half of a bidirectional search. The step additionally stops once
    /// it extracts a vertex settled by `other`, and reports every relaxed edge
    /// whose head is settled by `other`.
    BidirectionalHalf { other: &'s SearchState<'a> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Finished,
}

/// A connection between two searches found while relaxing an edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeetingCandidate {
    /// Length of the root to root path through `edge`.
    pub length: Distance,
    /// Oriented the way this search traverses it: the tail is settled here,
    /// the head is settled in the other search.
    pub edge: WeightedEdge,
}

/// Dijkstra's algorithm broken up into single queue extractions, so that a
/// caller can interleave two searches.
///
/// Edges stored as predecessors are oriented in traversal direction, for a
/// backward search the tail of an edge is the endpoint closer to the root.
pub struct SearchState<'a> {
    graph: &'a dyn Graph,
    direction: Direction,
    queue: FrontierQueue,
    root: Option<VertexId>,
    target: Option<VertexId>,
    iterations: u64,
    is_finished: bool,
}

impl<'a> SearchState<'a> {
    pub fn new(graph: &'a dyn Graph, direction: Direction) -> SearchState<'a> {
        SearchState {
            graph,
            direction,
            queue: FrontierQueue::new(graph.number_of_vertices()),
            root: None,
            target: None,
            iterations: 0,
            is_finished: false,
        }
    }

    pub fn graph(&self) -> &'a dyn Graph {
        self.graph
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Resets every record and puts all vertices in the queue. Without a
    /// target the search runs until every reachable vertex is settled. On an
    /// invalid vertex the state is cleared and left uninitialized.
    pub fn initialize(
        &mut self,
        root: VertexId,
        target: Option<VertexId>,
    ) -> Result<(), SearchError> {
        let validation = self
            .validate(root)
            .and_then(|()| target.map_or(Ok(()), |target| self.validate(target)));
        if let Err(error) = validation {
            self.clear();
            return Err(error);
        }

        self.queue.reset(root);
        self.root = Some(root);
        self.target = target;
        self.iterations = 0;
        self.is_finished = false;
        Ok(())
    }

    pub fn step(&mut self) -> Result<Step, SearchError> {
        self.step_with(Mode::Plain, |_| {})
    }

    /// Extracts one vertex and relaxes its edges unless the search terminates
    /// on it. Every call on an unfinished search counts as an iteration.
    pub fn step_with<F>(&mut self, mode: Mode<'_, 'a>, mut on_meeting: F) -> Result<Step, SearchError>
    where
        F: FnMut(MeetingCandidate),
    {
        if self.root.is_none() {
            return Err(SearchError::NotInitialized);
        }
        if self.is_finished {
            return Ok(Step::Finished);
        }
        self.iterations += 1;

        let Some(vertex) = self.queue.extract_min() else {
            return Ok(self.finish());
        };
        // an unreached minimum means everything left is unreachable
        let Some(distance) = self.distance(vertex) else {
            return Ok(self.finish());
        };
        if self.target == Some(vertex) {
            return Ok(self.finish());
        }
        if let Mode::BidirectionalHalf { other } = mode {
            if other.is_settled(vertex) {
                return Ok(self.finish());
            }
        }

        let graph = self.graph;
        let edges = match self.direction {
            Direction::Forward => graph.out_edges(vertex),
            Direction::Backward => graph.in_edges(vertex),
        };
        for edge in edges {
            let edge = match self.direction {
                Direction::Forward => edge,
                Direction::Backward => edge.reversed(),
            };
            let alternative_distance = distance + Distance::from(edge.weight());
            let head = edge.head();

            if let Mode::BidirectionalHalf { other } = mode {
                if let Some(other_distance) = other.settled_distance(head) {
                    on_meeting(MeetingCandidate {
                        length: alternative_distance + other_distance,
                        edge: edge.clone(),
                    });
                }
            }

            self.queue.relax(head, alternative_distance, edge);
        }

        Ok(Step::Continue)
    }

    /// Steps until the search terminates.
    pub fn run_to_completion(&mut self) -> Result<(), SearchError> {
        while self.step()? == Step::Continue {}
        Ok(())
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.root = None;
        self.target = None;
        self.iterations = 0;
        self.is_finished = false;
    }

    fn finish(&mut self) -> Step {
        self.is_finished = true;
        Step::Finished
    }

    fn validate(&self, vertex: VertexId) -> Result<(), SearchError> {
        if !self.graph.contains_vertex(vertex) {
            return Err(SearchError::InvalidVertex {
                vertex,
                number_of_vertices: self.graph.number_of_vertices(),
            });
        }
        Ok(())
    }

    pub fn root(&self) -> Option<VertexId> {
        self.root
    }

    pub fn target(&self) -> Option<VertexId> {
        self.target
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    /// Tentative distance of `vertex`, final once it is settled.
    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        self.queue.record(vertex)?.distance()
    }

    pub fn is_settled(&self, vertex: VertexId) -> bool {
        self.queue.is_settled(vertex)
    }

    /// Final distance of a settled and reachable vertex.
    pub fn settled_distance(&self, vertex: VertexId) -> Option<Distance> {
        if !self.is_settled(vertex) {
            return None;
        }
        self.distance(vertex)
    }

    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.queue.record(vertex)?.predecessor()
    }

    pub fn predecessor_edge(&self, vertex: VertexId) -> Option<&WeightedEdge> {
        self.queue.record(vertex)?.predecessor_edge()
    }

    pub fn settled_count(&self) -> usize {
        self.queue
            .records()
            .iter()
            .filter(|record| record.is_settled())
            .count()
    }

    /// Walks the predecessor edges from `destination` back to the root. The
    /// path runs from the root to `destination` in traversal direction.
    pub fn shortest_path(&self, destination: VertexId) -> Result<Path, SearchError> {
        let root = self.root.ok_or(SearchError::NotInitialized)?;
        self.validate(destination)?;
        if self.settled_distance(destination).is_none() {
            return Err(SearchError::NoPathFound {
                from: root,
                to: destination,
            });
        }

        let mut path = Path::trivial(destination);
        let mut current = destination;
        while let Some(edge) = self.predecessor_edge(current) {
            current = edge.tail();
            path.push_front(edge.clone())?;
        }
        debug_assert_eq!(current, root);

        Ok(path)
    }
}
