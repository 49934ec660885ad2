use std::slice::Iter;

use serde::{Deserialize, Serialize};

use super::{
    edge::{HeadlessEdge, TaillessEdge, WeightedEdge},
    vertex::Vertex,
    Graph, GraphError, VertexId,
};

/// Adjacency vectors for both edge directions so that a backward search can
/// walk incoming edges. Neighbours are kept sorted by vertex id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReversibleVecGraph {
    vertices: Vec<Vertex>,
    out_edges: Vec<Vec<TaillessEdge>>,
    in_edges: Vec<Vec<HeadlessEdge>>,
}

impl Graph for ReversibleVecGraph {
    fn number_of_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.out_edges.iter().map(Vec::len).sum::<usize>() as u32
    }

    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    fn out_edges(
        &self,
        source: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        struct OutEdgeIterator<'a> {
            source: VertexId,
            tailless_edge_iterator: Iter<'a, TaillessEdge>,
        }

        impl<'a> Iterator for OutEdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                let edge = self.tailless_edge_iterator.next()?;
                Some(edge.set_tail(self.source))
            }
        }

        impl<'a> ExactSizeIterator for OutEdgeIterator<'a> {
            fn len(&self) -> usize {
                self.tailless_edge_iterator.len()
            }
        }

        // unknown vertices have no edges
        let tailless_edge_iterator = match self.out_edges.get(source as usize) {
            Some(edges) => edges.iter(),
            None => [].iter(),
        };

        Box::new(OutEdgeIterator {
            source,
            tailless_edge_iterator,
        })
    }

    fn in_edges(
        &self,
        target: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        struct InEdgeIterator<'a> {
            target: VertexId,
            headless_edge_iterator: Iter<'a, HeadlessEdge>,
        }

        impl<'a> Iterator for InEdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                let edge = self.headless_edge_iterator.next()?;
                Some(edge.set_head(self.target))
            }
        }

        impl<'a> ExactSizeIterator for InEdgeIterator<'a> {
            fn len(&self) -> usize {
                self.headless_edge_iterator.len()
            }
        }

        let headless_edge_iterator = match self.in_edges.get(target as usize) {
            Some(edges) => edges.iter(),
            None => [].iter(),
        };

        Box::new(InEdgeIterator {
            target,
            headless_edge_iterator,
        })
    }
}

impl ReversibleVecGraph {
    /// Creates a graph without edges. The id of every vertex has to match its
    /// position in `vertices`.
    pub fn new(vertices: Vec<Vertex>) -> Result<ReversibleVecGraph, GraphError> {
        let number_of_vertices = vertices.len() as u32;
        if let Some(misplaced) = vertices
            .iter()
            .enumerate()
            .find(|(index, vertex)| vertex.id as usize != *index)
        {
            return Err(GraphError::UnknownVertex {
                vertex: misplaced.1.id,
                number_of_vertices,
            });
        }

        Ok(ReversibleVecGraph {
            out_edges: vec![Vec::new(); vertices.len()],
            in_edges: vec![Vec::new(); vertices.len()],
            vertices,
        })
    }

    /// Creates a graph of `number_of_vertices` vertices all placed at the
    /// origin, for graphs whose weights do not come from coordinates.
    pub fn with_number_of_vertices(number_of_vertices: u32) -> ReversibleVecGraph {
        let vertices = (0..number_of_vertices)
            .map(|id| Vertex::new(id, 0, 0))
            .collect::<Vec<_>>();

        ReversibleVecGraph {
            out_edges: vec![Vec::new(); vertices.len()],
            in_edges: vec![Vec::new(); vertices.len()],
            vertices,
        }
    }

    pub fn from_edges(
        number_of_vertices: u32,
        edges: &[WeightedEdge],
    ) -> Result<ReversibleVecGraph, GraphError> {
        let mut graph = ReversibleVecGraph::with_number_of_vertices(number_of_vertices);
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Adds a directed edge. If the edge already exists the smaller weight is
    /// kept.
    pub fn add_edge(&mut self, edge: &WeightedEdge) -> Result<(), GraphError> {
        for vertex in [edge.tail(), edge.head()] {
            if !self.contains_vertex(vertex) {
                return Err(GraphError::UnknownVertex {
                    vertex,
                    number_of_vertices: self.number_of_vertices(),
                });
            }
        }

        self.add_out_edge(edge);
        self.add_in_edge(edge);
        Ok(())
    }

    pub fn add_undirected_edge(&mut self, edge: &WeightedEdge) -> Result<(), GraphError> {
        self.add_edge(edge)?;
        self.add_edge(&edge.reversed())
    }

    fn add_out_edge(&mut self, edge: &WeightedEdge) {
        let out_edges = &mut self.out_edges[edge.tail() as usize];
        match out_edges.binary_search_by_key(&edge.head(), |out_edge| out_edge.head()) {
            Ok(idx) => {
                if edge.weight() < out_edges[idx].weight() {
                    out_edges[idx].set_weight(edge.weight());
                }
            }
            Err(idx) => out_edges.insert(idx, edge.tailless()),
        }
    }

    fn add_in_edge(&mut self, edge: &WeightedEdge) {
        let in_edges = &mut self.in_edges[edge.head() as usize];
        match in_edges.binary_search_by_key(&edge.tail(), |in_edge| in_edge.tail()) {
            Ok(idx) => {
                if edge.weight() < in_edges[idx].weight() {
                    in_edges[idx].set_weight(edge.weight());
                }
            }
            Err(idx) => in_edges.insert(idx, edge.headless()),
        }
    }
}
