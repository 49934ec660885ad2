use thiserror::Error;

use self::{edge::WeightedEdge, vertex::Vertex};

pub mod edge;
pub mod graph_factory;
pub mod path;
pub mod reversible_vec_graph;
pub mod vertex;

pub type VertexId = u32;
pub type Weight = u32;
pub type Distance = u64;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("unable to read graph")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("vertex {vertex} is not part of a graph with {number_of_vertices} vertices")]
    UnknownVertex {
        vertex: VertexId,
        number_of_vertices: u32,
    },
}

/// Read-only view of a static, positively weighted graph.
///
/// Vertex ids are dense, every id in `0..number_of_vertices()` is valid. Edges
/// returned by `out_edges` have the queried vertex as tail, edges returned by
/// `in_edges` have it as head.
pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        (0..self.number_of_vertices())
            .map(|vertex| self.out_edges(vertex).len() as u32)
            .sum::<u32>()
    }

    fn vertices(&self) -> &[Vertex];

    fn out_edges(
        &self,
        source: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    fn in_edges(
        &self,
        target: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.number_of_vertices()
    }
}
